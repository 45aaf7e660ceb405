//! KPI scorecard contracts.

use serde::{Deserialize, Serialize};

/// Direction of movement for a metric relative to the prior period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Glyph rendered next to the value.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Stable => "→",
        }
    }
}

/// Caller-supplied presentation status for a scorecard.
///
/// Derived from business rules outside the engine (a favorable expense
/// variance may be "good" even when negative); it drives border and text
/// color only and is never recomputed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiStatus {
    Good,
    Warning,
    Danger,
}

/// Input contract for the KPI scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorecardSpec {
    pub value: f64,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub trend: Option<Trend>,
    /// Magnitude shown next to the trend glyph, e.g. the period-over-period
    /// change.
    #[serde(default)]
    pub trend_magnitude: Option<f64>,
    pub status: KpiStatus,
}

impl ScorecardSpec {
    pub fn new(value: f64, status: KpiStatus) -> Self {
        Self {
            value,
            target: None,
            trend: None,
            trend_magnitude: None,
            status,
        }
    }

    /// Variance against target in percent: `(value - target) / target * 100`.
    ///
    /// `None` when there is no usable target (absent, zero, or non-finite);
    /// a zero target must read as "no variance", never as infinity.
    pub fn variance(&self) -> Option<f64> {
        match self.target {
            Some(t) if t != 0.0 && t.is_finite() && self.value.is_finite() => {
                Some((self.value - t) / t * 100.0)
            }
            _ => None,
        }
    }

    /// Progress toward target as a fraction clamped to `[0, 1]`.
    pub fn progress(&self) -> Option<f64> {
        match self.target {
            Some(t) if t != 0.0 && t.is_finite() && self.value.is_finite() => {
                Some((self.value / t).clamp(0.0, 1.0))
            }
            _ => None,
        }
    }
}
