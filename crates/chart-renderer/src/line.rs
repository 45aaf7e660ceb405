//! Time-series line chart rendering.
//!
//! X positions are percentages of the container width (the view box is
//! 100 units wide with `preserveAspectRatio="none"`, so the caller's
//! container controls physical width); y positions are pixels from the
//! top of the plot area. The layout step is pure geometry and can be
//! consumed directly by non-SVG surfaces.

use chart_common::format::NumberFormat;
use chart_common::series::{Domain, Series};
use chart_common::theme::{SizeToken, Theme};

use crate::scale;
use crate::svg::{PathBuilder, SvgDocument};

/// Radius of the per-point marker, in view-box units.
const MARKER_RADIUS: f64 = 2.5;

/// Configuration for line chart rendering.
#[derive(Debug, Clone)]
pub struct LineChartConfig {
    /// Plot height in pixels.
    pub height: f64,
    /// Render the dashed target overlay.
    pub show_target: bool,
    /// Stroke for the value path: theme token or literal color.
    pub stroke: String,
    /// Formatter applied to every displayed value.
    pub format: NumberFormat,
    pub size: SizeToken,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            height: 200.0,
            show_target: false,
            stroke: "primary".to_string(),
            format: NumberFormat::Grouped,
            size: SizeToken::Md,
        }
    }
}

/// One plotted point of the series.
#[derive(Debug, Clone)]
pub struct PlottedPoint {
    pub label: String,
    /// Horizontal position as a percentage of the container width.
    pub x: f64,
    /// Vertical position in pixels from the top of the plot area.
    pub y: f64,
    pub value: f64,
    pub display_value: String,
    /// Mapped target height when the overlay was requested.
    pub target_y: Option<f64>,
}

/// Computed geometry for a line chart.
#[derive(Debug, Clone, Default)]
pub struct LineChartGeometry {
    pub points: Vec<PlottedPoint>,
    /// Polyline path over the values: one move command, then line commands
    /// in point order.
    pub value_path: String,
    /// Dashed overlay path over the targets (absent targets read as 0).
    pub target_path: Option<String>,
    pub domain: Option<Domain>,
    /// Max, midpoint and min labels for the y axis.
    pub y_labels: Option<[String; 3]>,
}

/// Compute line chart geometry from a series.
///
/// An empty series, or one with no finite values, produces an empty
/// geometry rather than an error.
pub fn layout(series: &Series, config: &LineChartConfig) -> LineChartGeometry {
    let mut geometry = LineChartGeometry::default();
    if series.is_empty() {
        return geometry;
    }

    let Some(domain) = series.domain(config.show_target) else {
        tracing::warn!("line chart input has no finite values, rendering nothing");
        return geometry;
    };

    let n = series.len();
    let mut value_path = PathBuilder::new();
    let mut target_path = PathBuilder::new();

    for (i, point) in series.points.iter().enumerate() {
        if !point.value.is_finite() {
            tracing::warn!(label = %point.label, "skipping non-finite series value");
            continue;
        }

        // Index order fixes the x position; a single point sits at 0%.
        let x = if n == 1 {
            0.0
        } else {
            i as f64 / (n - 1) as f64 * 100.0
        };
        let y = map_y(point.value, &domain, config.height);
        value_path.point(x, y);

        let target_y = if config.show_target {
            let target = point.target.filter(|t| t.is_finite()).unwrap_or(0.0);
            let ty = map_y(target, &domain, config.height);
            target_path.point(x, ty);
            Some(ty)
        } else {
            None
        };

        geometry.points.push(PlottedPoint {
            label: point.label.clone(),
            x,
            y,
            value: point.value,
            display_value: config.format.format(point.value),
            target_y,
        });
    }

    if geometry.points.is_empty() {
        return geometry;
    }

    geometry.value_path = value_path.finish();
    if config.show_target {
        geometry.target_path = Some(target_path.finish());
    }
    geometry.y_labels = Some([
        config.format.format(domain.max),
        config.format.format(domain.midpoint()),
        config.format.format(domain.min),
    ]);
    geometry.domain = Some(domain);
    geometry
}

/// Larger values sit closer to the top-left SVG origin.
fn map_y(value: f64, domain: &Domain, height: f64) -> f64 {
    scale::linear(value, domain.min, domain.max, height, 0.0)
}

pub(crate) fn document(
    series: &Series,
    config: &LineChartConfig,
    theme: &Theme,
) -> SvgDocument {
    let geometry = layout(series, config);
    let label_font = config.size.label_font();
    let axis_reserve = label_font + 6.0;
    let mut doc =
        SvgDocument::new(100.0, config.height + axis_reserve).preserve_aspect_ratio("none");

    if geometry.points.is_empty() {
        return doc;
    }

    let stroke = theme.resolve(&config.stroke);
    let target_stroke = theme.resolve("target");
    let text_fill = theme.resolve("text");

    if let Some(target_path) = &geometry.target_path {
        if !target_path.is_empty() {
            doc.path(
                target_path,
                &format!(
                    r#"fill="none" stroke="{}" stroke-width="1.5" stroke-dasharray="4 3" opacity="0.7""#,
                    target_stroke
                ),
            );
        }
    }

    doc.path(
        &geometry.value_path,
        &format!(r#"fill="none" stroke="{}" stroke-width="2""#, stroke),
    );

    for point in &geometry.points {
        doc.circle_titled(
            point.x,
            point.y,
            MARKER_RADIUS,
            &format!(r#"fill="{}""#, stroke),
            &format!("{}: {}", point.label, point.display_value),
        );
        doc.text(
            point.x,
            config.height + label_font + 2.0,
            &format!(
                r#"font-size="{}" text-anchor="middle" fill="{}""#,
                label_font, text_fill
            ),
            &point.label,
        );
    }

    if let Some([top, mid, bottom]) = &geometry.y_labels {
        let attrs = format!(r#"font-size="{}" fill="{}""#, label_font, text_fill);
        doc.text(1.0, label_font, &attrs, top);
        doc.text(1.0, config.height / 2.0, &attrs, mid);
        doc.text(1.0, config.height - 2.0, &attrs, bottom);
    }

    doc
}

/// Render a series as a standalone SVG line chart.
pub fn render_line_chart(series: &Series, config: &LineChartConfig, theme: &Theme) -> String {
    document(series, config, theme).finish()
}
