//! Common types shared across the chart engine crates.

pub mod color;
pub mod error;
pub mod format;
pub mod kpi;
pub mod series;
pub mod theme;

pub use color::{palette_color, Color, CATEGORICAL_PALETTE};
pub use error::{ChartError, ChartResult};
pub use format::NumberFormat;
pub use kpi::{KpiStatus, ScorecardSpec, Trend};
pub use series::{BarDatum, DataPoint, Domain, GaugeSpec, Series};
pub use theme::{SizeToken, Theme, ThemeColors};
