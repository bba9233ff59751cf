//! Generation parameters and service outcome types
//!
//! Every enum serializes to the exact label the generation service expects
//! and parses back from either that label or its kebab-case slug.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Comedic tone of the generated material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Default,
    Absurdist,
    Cynical,
    Gallows,
    Nihilistic,
    Sarcastic,
    Surreal,
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Default,
        Tone::Absurdist,
        Tone::Cynical,
        Tone::Gallows,
        Tone::Nihilistic,
        Tone::Sarcastic,
        Tone::Surreal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Default => "Default",
            Tone::Absurdist => "Absurdist",
            Tone::Cynical => "Cynical",
            Tone::Gallows => "Gallows",
            Tone::Nihilistic => "Nihilistic",
            Tone::Sarcastic => "Sarcastic",
            Tone::Surreal => "Surreal",
        }
    }
}

/// Structural format of the generated material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputType {
    #[default]
    #[serde(rename = "One-liners")]
    OneLiners,
    Routines,
    Punchlines,
    #[serde(rename = "Random Jokes")]
    RandomJokes,
}

impl OutputType {
    pub const ALL: [OutputType; 4] = [
        OutputType::OneLiners,
        OutputType::Routines,
        OutputType::Punchlines,
        OutputType::RandomJokes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OutputType::OneLiners => "One-liners",
            OutputType::Routines => "Routines",
            OutputType::Punchlines => "Punchlines",
            OutputType::RandomJokes => "Random Jokes",
        }
    }
}

/// How consecutive bits of a routine are stitched together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransitionType {
    #[default]
    None,
    #[serde(rename = "False Segue")]
    FalseSegue,
    Thematic,
    #[serde(rename = "Absurd Thematic")]
    AbsurdThematic,
    #[serde(rename = "Self-aware")]
    SelfAware,
    Random,
}

impl TransitionType {
    pub const ALL: [TransitionType; 6] = [
        TransitionType::None,
        TransitionType::FalseSegue,
        TransitionType::Thematic,
        TransitionType::AbsurdThematic,
        TransitionType::SelfAware,
        TransitionType::Random,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransitionType::None => "None",
            TransitionType::FalseSegue => "False Segue",
            TransitionType::Thematic => "Thematic",
            TransitionType::AbsurdThematic => "Absurd Thematic",
            TransitionType::SelfAware => "Self-aware",
            TransitionType::Random => "Random",
        }
    }
}

/// Darkness level, ordered from tamest to bleakest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Darkness {
    #[serde(rename = "clean room")]
    CleanRoom,
    #[serde(rename = "child's birthday party")]
    ChildsBirthdayParty,
    #[default]
    #[serde(rename = "meh")]
    Meh,
    #[serde(rename = "PG-13 movies")]
    Pg13Movies,
    #[serde(rename = "the news")]
    TheNews,
    #[serde(rename = "Tom and Colin Hanks")]
    TomAndColinHanks,
    #[serde(rename = "Jeffrey Dahmer")]
    JeffreyDahmer,
    #[serde(rename = "Catholic Church")]
    CatholicChurch,
}

impl Darkness {
    /// Presentation order of the levels
    pub const ALL: [Darkness; 8] = [
        Darkness::CleanRoom,
        Darkness::ChildsBirthdayParty,
        Darkness::Meh,
        Darkness::Pg13Movies,
        Darkness::TheNews,
        Darkness::TomAndColinHanks,
        Darkness::JeffreyDahmer,
        Darkness::CatholicChurch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Darkness::CleanRoom => "clean room",
            Darkness::ChildsBirthdayParty => "child's birthday party",
            Darkness::Meh => "meh",
            Darkness::Pg13Movies => "PG-13 movies",
            Darkness::TheNews => "the news",
            Darkness::TomAndColinHanks => "Tom and Colin Hanks",
            Darkness::JeffreyDahmer => "Jeffrey Dahmer",
            Darkness::CatholicChurch => "Catholic Church",
        }
    }
}

/// File format requested from the export endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Txt,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Txt, ExportFormat::Pdf];

    pub fn label(&self) -> &'static str {
        self.extension()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Outcome classification for a failed call to the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    /// The request never reached the service or no response came back
    Transport(String),
    /// The service answered with a non-success status
    Service { status: u16, detail: Option<String> },
    /// A success response whose body could not be decoded
    MalformedResponse(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Transport(message) => write!(f, "transport failure: {message}"),
            ApiFailure::Service { status, detail: Some(detail) } => {
                write!(f, "service returned {status}: {detail}")
            }
            ApiFailure::Service { status, detail: None } => write!(f, "service returned {status}"),
            ApiFailure::MalformedResponse(message) => write!(f, "malformed response: {message}"),
        }
    }
}

fn slug(label: &str) -> String {
    label
        .chars()
        .filter(|c| *c != '\'')
        .map(|c| if c.is_whitespace() { '-' } else { c.to_ascii_lowercase() })
        .collect()
}

fn parse_label<T: Copy>(
    field: &str,
    input: &str,
    all: &[T],
    label: fn(&T) -> &'static str,
) -> Result<T, SharedError> {
    let wanted = input.trim();
    all.iter()
        .find(|candidate| {
            let candidate_label = label(*candidate);
            candidate_label.eq_ignore_ascii_case(wanted) || slug(candidate_label) == wanted.to_ascii_lowercase()
        })
        .copied()
        .ok_or_else(|| SharedError::InvalidParameter {
            field: field.to_string(),
            value: input.to_string(),
        })
}

macro_rules! label_traits {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = SharedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_label($field, s, &<$ty>::ALL, <$ty>::label)
            }
        }
    };
}

label_traits!(Tone, "tone");
label_traits!(OutputType, "output_type");
label_traits!(TransitionType, "transition_type");
label_traits!(Darkness, "darkness");
label_traits!(ExportFormat, "format");
