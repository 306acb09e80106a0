//! Difference output types.

use crate::value::{classify, Inspect, Kind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a difference was recorded.
///
/// Every variant marks a leaf divergence point: once recorded, the engine
/// does not descend further into that subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The two values have different kinds
    KindMismatch,
    /// Two scalars of the same kind are unequal
    ValueMismatch,
    /// One side is absent (nil reference, nil sequence, nil mapping), the other present
    Presence,
    /// Sequences of different lengths or mappings of different sizes
    LengthMismatch,
    /// A mapping key or record field exists on one side only
    MissingKey,
    /// The subtree lies beyond the configured maximum depth and differs
    DepthExceeded,
}

impl Reason {
    /// Stable code for this reason
    pub fn code(&self) -> &'static str {
        match self {
            Reason::KindMismatch => "kind_mismatch",
            Reason::ValueMismatch => "value_mismatch",
            Reason::Presence => "presence",
            Reason::LengthMismatch => "length_mismatch",
            Reason::MissingKey => "missing_key",
            Reason::DepthExceeded => "depth_exceeded",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single point of divergence between two compared values.
///
/// `expected` and `actual` borrow the differing sub-values from the compared
/// inputs. `None` is the explicit absent marker used when a mapping key or
/// record field exists on one side only.
#[derive(Clone)]
pub struct Difference<'a> {
    pub path: String,
    pub expected: Option<&'a dyn Inspect>,
    pub actual: Option<&'a dyn Inspect>,
    pub reason: Reason,
}

impl<'a> Difference<'a> {
    pub fn new(
        path: impl Into<String>,
        expected: Option<&'a dyn Inspect>,
        actual: Option<&'a dyn Inspect>,
        reason: Reason,
    ) -> Self {
        Self {
            path: path.into(),
            expected,
            actual,
            reason,
        }
    }

    /// Kind of the expected side, `None` for the absent marker
    pub fn expected_kind(&self) -> Option<Kind> {
        self.expected.map(classify)
    }

    /// Kind of the actual side, `None` for the absent marker
    pub fn actual_kind(&self) -> Option<Kind> {
        self.actual.map(classify)
    }
}

impl fmt::Debug for Difference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Difference")
            .field("path", &self.path)
            .field("expected", &self.expected.map(|v| v.inspect()))
            .field("actual", &self.actual.map(|v| v.inspect()))
            .field("reason", &self.reason)
            .finish()
    }
}
