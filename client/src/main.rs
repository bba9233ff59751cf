//! deadpandr command line entry point

use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Args, Parser, Subcommand};

use deadpandr::{
    config::{self, ClientSettings},
    core::{render_results, Configuration, MADNESS_LABELS},
    ClientResult, RealComedyApi, RealFileSink, Session,
};
use shared::{logging, Darkness, ExportFormat, OutputType, Tone, TransitionType};

#[derive(Parser, Debug)]
#[command(name = "deadpandr")]
#[command(about = "Dark comedy generator client")]
struct Cli {
    /// Base URL of the generation service
    #[arg(long, global = true, env = config::ENV_API_URL, default_value = config::DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = config::ENV_TIMEOUT_SECS, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Directory exported files are written to
    #[arg(long, global = true, env = config::ENV_OUTPUT_DIR, default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = config::ENV_LOG_LEVEL, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate jokes and optionally export them
    Generate(GenerateArgs),
    /// List every accepted parameter value
    Options,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// What shall we joke about?
    #[arg(long, default_value = "")]
    topic: String,

    #[arg(long, default_value_t = Tone::default())]
    tone: Tone,

    #[arg(long, default_value_t = OutputType::default())]
    output_type: OutputType,

    /// Only sent when the output type is Routines
    #[arg(long, default_value_t = TransitionType::default())]
    transition: TransitionType,

    /// 0.1 to 1.0 in steps of 0.1
    #[arg(long, default_value_t = 0.5)]
    madness: f64,

    #[arg(long, default_value_t = Darkness::default())]
    darkness: Darkness,

    /// 1 to 10
    #[arg(long, default_value_t = 5)]
    num_jokes: u8,

    /// Export format; repeat to save several
    #[arg(long = "save")]
    save: Vec<ExportFormat>,
}

impl GenerateArgs {
    fn configuration(&self) -> Configuration {
        Configuration::new()
            .with_topic(self.topic.clone())
            .with_tone(self.tone)
            .with_output_type(self.output_type)
            .with_transition_type(self.transition)
            .with_madness(self.madness)
            .with_darkness(self.darkness)
            .with_num_jokes(self.num_jokes)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging::init_tracing(Some(&cli.log_level));

    let outcome = match cli.command {
        Command::Options => {
            print_options();
            Ok(true)
        }
        Command::Generate(args) => match ClientSettings::new(&cli.api_url, cli.timeout_secs, cli.output_dir) {
            Ok(settings) => run_generate(settings, args).await,
            Err(e) => Err(e),
        },
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when generation failed; the session status has
/// already been printed in that case.
async fn run_generate(settings: ClientSettings, args: GenerateArgs) -> ClientResult<bool> {
    logging::log_startup(&format!("deadpandr v{} against {}", env!("CARGO_PKG_VERSION"), settings.api_url));

    let api = RealComedyApi::new(&settings)?;
    let sink = RealFileSink::new(settings.output_dir.clone());
    let mut session = Session::with_configuration(args.configuration(), api, sink);

    println!("Madness: {}", session.config().madness_label());

    let submitted = session.submit().await;
    print_status(&session);
    if let Err(e) = submitted {
        logging::log_error("Generation", &e);
        return Ok(false);
    }
    println!("{}", render_results(session.results()));

    for format in args.save {
        match session.save(format).await {
            Ok(saved) => logging::log_success(&format!("Saved {}", saved.path.display())),
            Err(e) => logging::log_error("Export", &e),
        }
        print_status(&session);
    }

    Ok(true)
}

fn print_status<A: deadpandr::ComedyApi, F: deadpandr::FileSink>(session: &Session<A, F>) {
    if let Some(message) = session.status().message() {
        if session.status().is_error() {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }
}

fn print_options() {
    println!("Tones:");
    Tone::ALL.iter().for_each(|tone| println!("  {tone}"));
    println!("Output types:");
    OutputType::ALL.iter().for_each(|output_type| println!("  {output_type}"));
    println!("Transitions (Routines only):");
    TransitionType::ALL.iter().for_each(|transition| println!("  {transition}"));
    println!("Darkness levels:");
    Darkness::ALL.iter().for_each(|level| println!("  {level}"));
    println!("Madness:");
    MADNESS_LABELS
        .iter()
        .for_each(|(value, label)| println!("  {value:.1}  {label}"));
    println!("Export formats:");
    ExportFormat::ALL.iter().for_each(|format| println!("  {format}"));
}
