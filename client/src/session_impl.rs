//! Generation session with dependency injection

use tokio::sync::watch;
use tracing::{info, warn};

use shared::ExportFormat;
use crate::core::{Configuration, SessionState, SessionStatus};
use crate::error::ClientResult;
use crate::export_pipeline::{export_results, SavedFile};
use crate::traits::{ComedyApi, FileSink};

/// One user's configuration, request status and latest results
///
/// Operations take `&mut self`, so a session never has two requests in flight.
pub struct Session<A, F>
where
    A: ComedyApi,
    F: FileSink,
{
    config: Configuration,
    state: SessionState,
    api: A,
    sink: F,
    status_tx: watch::Sender<SessionStatus>,
}

impl<A, F> Session<A, F>
where
    A: ComedyApi,
    F: FileSink,
{
    /// Create a session with default parameters
    pub fn new(api: A, sink: F) -> Self {
        Self::with_configuration(Configuration::default(), api, sink)
    }

    pub fn with_configuration(config: Configuration, api: A, sink: F) -> Self {
        let (status_tx, _) = watch::channel(SessionStatus::Idle);
        Self {
            config,
            state: SessionState::new(),
            api,
            sink,
            status_tx,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Edits take effect on the next `submit`
    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn status(&self) -> &SessionStatus {
        self.state.status()
    }

    pub fn results(&self) -> &[String] {
        self.state.results()
    }

    /// Receive every status transition, starting from the current one
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status_tx.subscribe()
    }

    /// Run one generate round trip.
    ///
    /// Failures are recorded in the status line and also returned.
    pub async fn submit(&mut self) -> ClientResult<usize> {
        self.state.begin_generation();
        self.publish();

        let request = self.config.to_request_payload();
        info!(
            topic = %request.topic,
            tone = %request.tone,
            output_type = %request.output_type,
            madness = request.madness,
            darkness = %request.darkness,
            num_jokes = request.num_jokes,
            "🎭 Submitting generation request"
        );

        let outcome = self.api.generate(&request).await;
        let result = self.state.finish_generation(outcome);
        self.publish();

        match &result {
            Ok(count) => info!("✅ Received {} jokes", count),
            Err(e) => warn!("❌ Generation failed: {}", e),
        }
        result
    }

    /// Export the current results and save them through the sink
    pub async fn save(&mut self, format: ExportFormat) -> ClientResult<SavedFile> {
        let outcome = export_results(&self.api, &self.sink, self.state.results(), format).await;
        self.state.record_export(format, &outcome);
        self.publish();

        match &outcome {
            Ok(saved) => info!("💾 Saved {} ({} bytes)", saved.path.display(), saved.size),
            Err(e) => warn!("❌ Export as {} failed: {}", format, e),
        }
        outcome
    }

    fn publish(&self) {
        self.status_tx.send_replace(self.state.status().clone());
    }
}
