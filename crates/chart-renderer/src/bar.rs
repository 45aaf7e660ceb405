//! Categorical bar chart rendering.
//!
//! Bars are anchored at zero, so the domain minimum is implicitly 0 and
//! only the maximum is derived from the data (values and, when shown,
//! targets). Target ticks overlay the bar rather than stacking with it.

use chart_common::color::palette_color;
use chart_common::format::NumberFormat;
use chart_common::series::BarDatum;
use chart_common::theme::{SizeToken, Theme};

use crate::scale;
use crate::svg::SvgDocument;

/// Vertical space reserved under the plot for category labels, pixels.
const LABEL_RESERVE: f64 = 20.0;

/// Bars never collapse below this height, so a zero-value bar stays
/// visible instead of disappearing.
const MIN_BAR_HEIGHT: f64 = 2.0;

/// Fraction of each category slot occupied by the bar.
const BAR_FILL: f64 = 0.6;

/// Configuration for bar chart rendering.
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    /// Total chart height in pixels, including the label strip.
    pub height: f64,
    /// Render dashed tick marks at each target.
    pub show_targets: bool,
    /// Formatter applied to every displayed value.
    pub format: NumberFormat,
    pub size: SizeToken,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            height: 200.0,
            show_targets: false,
            format: NumberFormat::Grouped,
            size: SizeToken::Md,
        }
    }
}

/// One laid-out bar.
#[derive(Debug, Clone)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub display_value: String,
    /// Bar height in pixels within the plot area.
    pub height: f64,
    /// Resolved fill color.
    pub color: String,
    /// Height of the dashed target tick, when requested and present.
    pub target_height: Option<f64>,
}

/// Computed geometry for a bar chart.
#[derive(Debug, Clone, Default)]
pub struct BarChartGeometry {
    pub bars: Vec<BarGeometry>,
    /// Domain maximum over values and (when shown) targets.
    pub max_value: f64,
    /// Pixel height of the plot area above the label strip.
    pub plot_height: f64,
}

/// Compute bar chart geometry.
pub fn layout(data: &[BarDatum], config: &BarChartConfig, theme: &Theme) -> BarChartGeometry {
    let plot_height = (config.height - LABEL_RESERVE).max(0.0);

    // Zero-anchored domain: only the maximum comes from the data.
    let mut max_value = 0.0_f64;
    for datum in data {
        if datum.value.is_finite() {
            max_value = max_value.max(datum.value);
        }
        if config.show_targets {
            if let Some(target) = datum.target.filter(|t| t.is_finite()) {
                max_value = max_value.max(target);
            }
        }
    }

    let mut bars = Vec::with_capacity(data.len());
    for (i, datum) in data.iter().enumerate() {
        if !datum.value.is_finite() {
            tracing::warn!(label = %datum.label, "skipping non-finite bar value");
            continue;
        }

        // An all-zero domain reads as ratio 0, which the minimum-height
        // clamp turns into a visible sliver.
        let height = (scale::ratio(datum.value, 0.0, max_value) * plot_height).max(MIN_BAR_HEIGHT);

        // Explicit color wins; otherwise the palette is indexed by input
        // position so re-renders of the same ordered data stay stable.
        let color = match &datum.color {
            Some(c) => theme.resolve(c),
            None => palette_color(i).to_string(),
        };

        let target_height = if config.show_targets {
            datum
                .target
                .filter(|t| t.is_finite())
                .map(|t| scale::ratio(t, 0.0, max_value) * plot_height)
        } else {
            None
        };

        bars.push(BarGeometry {
            label: datum.label.clone(),
            value: datum.value,
            display_value: config.format.format(datum.value),
            height,
            color,
            target_height,
        });
    }

    BarChartGeometry {
        bars,
        max_value,
        plot_height,
    }
}

pub(crate) fn document(data: &[BarDatum], config: &BarChartConfig, theme: &Theme) -> SvgDocument {
    let geometry = layout(data, config, theme);
    let label_font = config.size.label_font();
    let mut doc = SvgDocument::new(100.0, config.height).preserve_aspect_ratio("none");

    if geometry.bars.is_empty() {
        return doc;
    }

    let target_stroke = theme.resolve("target");
    let text_fill = theme.resolve("text");

    let slot = 100.0 / geometry.bars.len() as f64;
    let bar_width = slot * BAR_FILL;
    let inset = (slot - bar_width) / 2.0;

    for (i, bar) in geometry.bars.iter().enumerate() {
        let x = i as f64 * slot + inset;
        let y = geometry.plot_height - bar.height;

        doc.rect_titled(
            x,
            y,
            bar_width,
            bar.height,
            &format!(r#"fill="{}""#, bar.color),
            &format!("{}: {}", bar.label, bar.display_value),
        );

        if let Some(target_height) = bar.target_height {
            let ty = geometry.plot_height - target_height;
            doc.line(
                x - inset / 2.0,
                ty,
                x + bar_width + inset / 2.0,
                ty,
                &format!(
                    r#"stroke="{}" stroke-width="1.5" stroke-dasharray="3 2""#,
                    target_stroke
                ),
            );
        }

        doc.text(
            x + bar_width / 2.0,
            geometry.plot_height + label_font + 4.0,
            &format!(
                r#"font-size="{}" text-anchor="middle" fill="{}""#,
                label_font, text_fill
            ),
            &bar.label,
        );
    }

    doc
}

/// Render bar data as a standalone SVG chart.
pub fn render_bar_chart(data: &[BarDatum], config: &BarChartConfig, theme: &Theme) -> String {
    document(data, config, theme).finish()
}
