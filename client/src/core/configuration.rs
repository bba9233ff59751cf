//! User-settable generation parameters and payload construction

use shared::{Darkness, GenerateRequest, OutputType, Tone, TransitionType};

use super::labels::madness_label;

pub const MADNESS_MIN: f64 = 0.1;
pub const MADNESS_MAX: f64 = 1.0;
pub const MADNESS_DEFAULT: f64 = 0.5;
pub const NUM_JOKES_MIN: u8 = 1;
pub const NUM_JOKES_MAX: u8 = 10;
pub const NUM_JOKES_DEFAULT: u8 = 5;

/// Parameters describing one generation request
///
/// Range and step constraints are applied by the setters; payload
/// construction trusts whatever is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub topic: String,
    pub tone: Tone,
    pub output_type: OutputType,
    pub transition_type: TransitionType,
    madness: f64,
    pub darkness: Darkness,
    num_jokes: u8,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            topic: String::new(),
            tone: Tone::default(),
            output_type: OutputType::default(),
            transition_type: TransitionType::default(),
            madness: MADNESS_DEFAULT,
            darkness: Darkness::default(),
            num_jokes: NUM_JOKES_DEFAULT,
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    pub fn with_transition_type(mut self, transition_type: TransitionType) -> Self {
        self.transition_type = transition_type;
        self
    }

    pub fn with_madness(mut self, madness: f64) -> Self {
        self.set_madness(madness);
        self
    }

    pub fn with_darkness(mut self, darkness: Darkness) -> Self {
        self.darkness = darkness;
        self
    }

    pub fn with_num_jokes(mut self, num_jokes: u8) -> Self {
        self.set_num_jokes(num_jokes);
        self
    }

    pub fn madness(&self) -> f64 {
        self.madness
    }

    /// Clamp to the slider range and snap to its 0.1 step
    pub fn set_madness(&mut self, madness: f64) {
        let clamped = if madness.is_nan() {
            MADNESS_DEFAULT
        } else {
            madness.clamp(MADNESS_MIN, MADNESS_MAX)
        };
        self.madness = (clamped * 10.0).round() / 10.0;
    }

    pub fn num_jokes(&self) -> u8 {
        self.num_jokes
    }

    pub fn set_num_jokes(&mut self, num_jokes: u8) {
        self.num_jokes = num_jokes.clamp(NUM_JOKES_MIN, NUM_JOKES_MAX);
    }

    /// Display label for the current madness value
    pub fn madness_label(&self) -> &'static str {
        madness_label(self.madness)
    }

    /// Build the wire payload for the generate endpoint
    pub fn to_request_payload(&self) -> GenerateRequest {
        let transition_type = if self.output_type == OutputType::Routines {
            Some(self.transition_type)
        } else {
            None
        };

        GenerateRequest {
            topic: self.topic.clone(),
            tone: self.tone,
            output_type: self.output_type,
            transition_type,
            madness: self.madness,
            darkness: self.darkness,
            num_jokes: self.num_jokes,
        }
    }
}
