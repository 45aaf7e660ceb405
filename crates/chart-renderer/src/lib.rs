//! Deterministic chart geometry and SVG rendering for financial metrics.
//!
//! Four renderers share one pipeline: semantic input → domain
//! normalization → geometric mapping → annotated SVG output:
//! - Time-series line chart
//! - Categorical bar chart
//! - Radial gauge
//! - KPI scorecard
//!
//! Every renderer is a pure function of its inputs: no state survives a
//! call, and identical props always produce byte-identical markup.
//! Numeric degeneracy (empty series, zero-span domains, out-of-range or
//! non-finite values) is handled with local fallbacks, never panics.

pub mod bar;
pub mod dashboard;
pub mod gauge;
pub mod line;
pub mod png;
pub mod raster;
pub mod scale;
pub mod scorecard;
pub mod svg;

pub use bar::{render_bar_chart, BarChartConfig, BarChartGeometry, BarGeometry};
pub use dashboard::{render_dashboard, DashboardConfig, Widget};
pub use gauge::{render_gauge, GaugeConfig, GaugeGeometry};
pub use line::{render_line_chart, LineChartConfig, LineChartGeometry, PlottedPoint};
pub use raster::{export_png, rasterize, RasterImage};
pub use scorecard::{render_scorecard, ScorecardConfig, ScorecardGeometry};
