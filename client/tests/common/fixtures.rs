//! Test fixtures and data for client tests

use deadpandr::core::Configuration;
use shared::{Darkness, OutputType, Tone, TransitionType};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const TOPIC: &'static str = "self-checkout machines";
    pub const SERVICE_DETAIL: &'static str = "Topic violates content policy";
    pub const PDF_BYTES: &'static [u8] = b"%PDF-1.4\n%fake export\n";
    pub const TXT_BYTES: &'static [u8] = b"1. a\n2. b\n3. c\n";

    /// Jokes in the order the service produced them
    pub fn jokes() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    /// Out-of-order, duplicated jokes; must survive untouched
    pub fn unsorted_jokes() -> Vec<String> {
        vec![
            "zebra crossing".to_string(),
            "alarm clock".to_string(),
            "zebra crossing".to_string(),
            "".to_string(),
        ]
    }

    /// A routine configuration with a non-default transition
    pub fn routine_config() -> Configuration {
        Configuration::new()
            .with_topic(Self::TOPIC)
            .with_tone(Tone::Surreal)
            .with_output_type(OutputType::Routines)
            .with_transition_type(TransitionType::AbsurdThematic)
            .with_madness(0.7)
            .with_darkness(Darkness::TomAndColinHanks)
            .with_num_jokes(3)
    }

    /// Same as `routine_config` but for one-liners; the transition is stale
    pub fn one_liner_config() -> Configuration {
        Self::routine_config().with_output_type(OutputType::OneLiners)
    }
}
