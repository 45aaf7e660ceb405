//! Radial gauge rendering.
//!
//! The visible track is a fixed semicircle; the filled portion is a
//! stroke-dasharray fraction of its precomputed length, and the needle is
//! a fixed-length line rotated about the arc center. The arc and needle
//! clamp to the visible range, but the numeric label always shows the raw
//! value, so an over-range reading is visible as a number even when the
//! arc is pinned at full.

use chart_common::format::NumberFormat;
use chart_common::series::GaugeSpec;
use chart_common::theme::{SizeToken, Theme};

use crate::scale;
use crate::svg::SvgDocument;

/// Radius of the semicircular track, in view-box units.
const ARC_RADIUS: f64 = 40.0;
/// Arc center.
const CENTER_X: f64 = 50.0;
const CENTER_Y: f64 = 55.0;
/// Total length of the fixed 180° track.
const ARC_LENGTH: f64 = std::f64::consts::PI * ARC_RADIUS;
/// Needle length from the pivot.
const NEEDLE_LENGTH: f64 = 30.0;
/// Track stroke width.
const TRACK_WIDTH: f64 = 9.0;
/// View-box dimensions.
const VIEW_WIDTH: f64 = 100.0;
const VIEW_HEIGHT: f64 = 82.0;
/// Fonts are fixed in view-box units; the size token scales the whole
/// widget, text included.
const LABEL_FONT: f64 = 7.0;
const VALUE_FONT: f64 = 14.0;

/// Configuration for gauge rendering.
#[derive(Debug, Clone)]
pub struct GaugeConfig {
    pub title: String,
    pub subtitle: String,
    /// Fill for the value arc: theme token or literal color.
    pub color: String,
    pub size: SizeToken,
    /// Formatter for the value label and the min/max bound labels.
    pub format: NumberFormat,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            color: "primary".to_string(),
            size: SizeToken::Md,
            format: NumberFormat::Grouped,
        }
    }
}

/// Computed geometry for a gauge.
#[derive(Debug, Clone)]
pub struct GaugeGeometry {
    /// Clamped position of the value within the bounds, 0-100.
    pub percentage: f64,
    /// Portion of the track length drawn as filled.
    pub filled_length: f64,
    /// Needle rotation in degrees about the arc center; -90° is the left
    /// end of the semicircle, +90° the right end.
    pub needle_rotation: f64,
    /// The raw value, formatted without clamping.
    pub display_value: String,
}

/// Compute gauge geometry from a spec.
///
/// Degenerate bounds (`min == max`, or worse) read as 0% rather than
/// dividing by zero; an out-of-range value clamps the arc and needle but
/// not the label.
pub fn layout(spec: &GaugeSpec, config: &GaugeConfig) -> GaugeGeometry {
    let percentage = scale::percentage(spec.value, spec.min, spec.max);

    GaugeGeometry {
        percentage,
        filled_length: percentage / 100.0 * ARC_LENGTH,
        needle_rotation: percentage / 100.0 * 180.0 - 90.0,
        display_value: config.format.format(spec.value),
    }
}

/// The fixed semicircular track path, left end to right end over the top.
fn track_path() -> String {
    use crate::svg::fmt_coord;
    format!(
        "M {},{} A {},{} 0 0 1 {},{}",
        fmt_coord(CENTER_X - ARC_RADIUS),
        fmt_coord(CENTER_Y),
        fmt_coord(ARC_RADIUS),
        fmt_coord(ARC_RADIUS),
        fmt_coord(CENTER_X + ARC_RADIUS),
        fmt_coord(CENTER_Y),
    )
}

pub(crate) fn document(spec: &GaugeSpec, config: &GaugeConfig, theme: &Theme) -> SvgDocument {
    let geometry = layout(spec, config);
    let width = config.size.widget_width();
    let mut doc = SvgDocument::new(VIEW_WIDTH, VIEW_HEIGHT)
        .with_size(width, width * VIEW_HEIGHT / VIEW_WIDTH);

    let fill = theme.resolve(&config.color);
    let track = theme.resolve("grid");
    let text_fill = theme.resolve("text");
    let needle_stroke = theme.resolve("muted");
    let path = track_path();

    if !config.title.is_empty() {
        doc.text(
            CENTER_X,
            8.0,
            &format!(
                r#"font-size="{}" text-anchor="middle" fill="{}""#,
                LABEL_FONT, text_fill
            ),
            &config.title,
        );
    }

    doc.path(
        &path,
        &format!(
            r#"fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round""#,
            track, TRACK_WIDTH
        ),
    );
    doc.path(
        &path,
        &format!(
            r#"fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-dasharray="{} {}""#,
            fill,
            TRACK_WIDTH,
            crate::svg::fmt_coord(geometry.filled_length),
            crate::svg::fmt_coord(ARC_LENGTH),
        ),
    );

    doc.line(
        CENTER_X,
        CENTER_Y,
        CENTER_X,
        CENTER_Y - NEEDLE_LENGTH,
        &format!(
            r#"stroke="{}" stroke-width="2" stroke-linecap="round" transform="rotate({} {} {})""#,
            needle_stroke,
            crate::svg::fmt_coord(geometry.needle_rotation),
            crate::svg::fmt_coord(CENTER_X),
            crate::svg::fmt_coord(CENTER_Y),
        ),
    );
    doc.circle(
        CENTER_X,
        CENTER_Y,
        2.5,
        &format!(r#"fill="{}""#, needle_stroke),
    );

    // Raw value label; intentionally not clamped like the arc.
    doc.text(
        CENTER_X,
        CENTER_Y + VALUE_FONT,
        &format!(
            r#"font-size="{}" text-anchor="middle" font-weight="bold" fill="{}""#,
            VALUE_FONT, fill
        ),
        &geometry.display_value,
    );

    if !config.subtitle.is_empty() {
        doc.text(
            CENTER_X,
            CENTER_Y + VALUE_FONT + LABEL_FONT + 2.0,
            &format!(
                r#"font-size="{}" text-anchor="middle" fill="{}""#,
                LABEL_FONT, text_fill
            ),
            &config.subtitle,
        );
    }

    // Bound labels at the track ends
    let bound_attrs = format!(
        r#"font-size="{}" text-anchor="middle" fill="{}""#,
        LABEL_FONT, text_fill
    );
    doc.text(
        CENTER_X - ARC_RADIUS,
        CENTER_Y + TRACK_WIDTH + 2.0,
        &bound_attrs,
        &config.format.format(spec.min),
    );
    doc.text(
        CENTER_X + ARC_RADIUS,
        CENTER_Y + TRACK_WIDTH + 2.0,
        &bound_attrs,
        &config.format.format(spec.max),
    );

    doc
}

/// Render a gauge as a standalone SVG document.
pub fn render_gauge(spec: &GaugeSpec, config: &GaugeConfig, theme: &Theme) -> String {
    document(spec, config, theme).finish()
}
