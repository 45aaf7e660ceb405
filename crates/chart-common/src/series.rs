//! Data contracts consumed by the renderers.
//!
//! Everything here is constructed fresh by the caller for each render
//! pass; the engine borrows the data for one synchronous call and keeps
//! no reference afterward.

use serde::{Deserialize, Serialize};

/// A single labeled observation, optionally paired with a target value
/// (budget, goal) to compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub target: Option<f64>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            target: None,
        }
    }

    pub fn with_target(label: impl Into<String>, value: f64, target: f64) -> Self {
        Self {
            label: label.into(),
            value,
            target: Some(target),
        }
    }
}

/// An ordered sequence of data points.
///
/// Ordering is significant for time-series rendering (x position = index
/// order) and purely cosmetic for categorical rendering (bars draw in
/// input order, no implied semantics). An empty series is valid input and
/// renders as nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Value domain across all finite values, and all finite targets when
    /// `include_targets` is set.
    ///
    /// Returns `None` for an empty series or one with no finite values at
    /// all; non-finite entries never contribute, so a single bad point
    /// cannot poison the domain.
    pub fn domain(&self, include_targets: bool) -> Option<Domain> {
        let mut domain: Option<Domain> = None;

        let mut extend = |v: f64| {
            if !v.is_finite() {
                return;
            }
            match domain.as_mut() {
                Some(d) => d.include(v),
                None => domain = Some(Domain { min: v, max: v }),
            }
        };

        for point in &self.points {
            extend(point.value);
            if include_targets {
                if let Some(target) = point.target {
                    extend(target);
                }
            }
        }

        domain
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<T: IntoIterator<Item = DataPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Numeric `[min, max]` extent of a series' real-world values.
///
/// A degenerate domain (`min == max`) is representable; the scale mapper
/// is responsible for never dividing by its zero span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Extend the domain to cover a value.
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

/// Input contract for the radial gauge.
///
/// Callers promise `min < max`. The live value may lie outside the bounds;
/// the gauge clamps the arc and needle for display while still labeling
/// the raw value. Violated bounds are tolerated (the fill reads as 0%)
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeSpec {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// One bar of a categorical chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub target: Option<f64>,
    /// Explicit bar color; positional palette color when absent.
    #[serde(default)]
    pub color: Option<String>,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            target: None,
            color: None,
        }
    }
}
