//! Display identifiers for test cases (`TC_001`) and bugs (`BUG_001`).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Prefix of test case identifiers.
pub const TEST_CASE_PREFIX: &str = "TC";

/// Prefix of bug identifiers.
pub const BUG_PREFIX: &str = "BUG";

/// Format `prefix_NNN`, zero padded to three digits.
pub fn format_label(prefix: &str, ordinal: u32) -> String {
    format!("{prefix}_{ordinal:03}")
}

/// How new identifiers are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStrategy {
    /// `len + 1` at creation time. Removing an entry and adding another can
    /// hand out a label that is still in use.
    Positional,
    /// A counter that only moves forward, so labels are never reused within
    /// one report.
    #[default]
    Monotonic,
}

impl LabelStrategy {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            "positional" => Ok(Self::Positional),
            "monotonic" => Ok(Self::Monotonic),
            _ => Err(CoreError::Validation(format!(
                "Invalid label strategy '{s}'. Must be one of: positional, monotonic"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Monotonic => "monotonic",
        }
    }
}

/// Hands out identifiers for one list.
#[derive(Debug, Clone)]
pub struct LabelAllocator {
    prefix: &'static str,
    strategy: LabelStrategy,
    issued: u32,
}

impl LabelAllocator {
    pub fn new(prefix: &'static str, strategy: LabelStrategy) -> Self {
        Self {
            prefix,
            strategy,
            issued: 0,
        }
    }

    /// Next identifier for a list that currently holds `current_len` entries.
    pub fn next(&mut self, current_len: usize) -> String {
        let ordinal = match self.strategy {
            LabelStrategy::Positional => u32::try_from(current_len)
                .unwrap_or(u32::MAX - 1)
                .saturating_add(1),
            LabelStrategy::Monotonic => self.issued.saturating_add(1),
        };
        self.issued = self.issued.max(ordinal);
        format_label(self.prefix, ordinal)
    }

    pub fn strategy(&self) -> LabelStrategy {
        self.strategy
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
