//! KPI scorecard rendering.
//!
//! A scorecard combines a formatted current value, a trend glyph, a
//! variance against target and a progress bar into one card. Status is
//! caller-supplied and only drives color; the variance sign is rendered
//! literally (an expense metric where "down is good" is the caller's
//! inversion to make, before choosing the status).

use chart_common::format::NumberFormat;
use chart_common::kpi::{ScorecardSpec, Trend};
use chart_common::theme::{SizeToken, Theme};

use crate::svg::SvgDocument;

/// Progress-bar tiers, as fractions of target. Fixed constants of the
/// renderer, not configurable.
const PROGRESS_FULL: f64 = 1.0;
const PROGRESS_WARN: f64 = 0.8;

/// Card aspect ratio: height as a fraction of width.
const CARD_ASPECT: f64 = 0.6;
/// Inner padding.
const PADDING: f64 = 8.0;
/// Progress bar thickness.
const BAR_THICKNESS: f64 = 5.0;

/// Configuration for scorecard rendering.
#[derive(Debug, Clone)]
pub struct ScorecardConfig {
    pub title: String,
    /// Unit suffix appended to the displayed value, e.g. "%" or " EUR".
    pub unit: String,
    pub size: SizeToken,
    /// Formatter for the value and target; compact magnitude suffixing by
    /// default, overridable per card.
    pub format: NumberFormat,
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            unit: String::new(),
            size: SizeToken::Md,
            format: NumberFormat::Compact,
        }
    }
}

/// Computed presentation state for a scorecard.
#[derive(Debug, Clone)]
pub struct ScorecardGeometry {
    /// Formatted value with the unit suffix applied.
    pub display_value: String,
    /// Variance against target in percent, when a usable target exists.
    pub variance: Option<f64>,
    /// Signed variance label, e.g. "+12.5%".
    pub variance_label: Option<String>,
    pub trend_glyph: Option<&'static str>,
    /// Formatted trend magnitude, when supplied.
    pub trend_label: Option<String>,
    /// Progress toward target, clamped to [0, 1].
    pub progress: Option<f64>,
    /// Formatted target with unit suffix.
    pub display_target: Option<String>,
}

/// Compute scorecard presentation state from a spec.
///
/// A zero, absent or non-finite target yields a value-only card: no
/// variance annotation and no progress bar, never an infinity.
pub fn layout(spec: &ScorecardSpec, config: &ScorecardConfig) -> ScorecardGeometry {
    let variance = spec.variance();
    let variance_label = variance.map(|v| {
        let sign = if v >= 0.0 { "+" } else { "" };
        format!("{}{:.1}%", sign, v)
    });

    let trend_label = match (spec.trend, spec.trend_magnitude) {
        (Some(_), Some(magnitude)) if magnitude.is_finite() => {
            Some(config.format.format(magnitude))
        }
        _ => None,
    };

    ScorecardGeometry {
        display_value: format!("{}{}", config.format.format(spec.value), config.unit),
        variance,
        variance_label,
        trend_glyph: spec.trend.map(|t| t.glyph()),
        trend_label,
        progress: spec.progress(),
        display_target: spec
            .target
            .filter(|t| t.is_finite())
            .map(|t| format!("{}{}", config.format.format(t), config.unit)),
    }
}

/// Progress-bar color for the three-tier rule: status color at or above
/// target, amber from 80%, red below.
fn progress_color(progress: f64, theme: &Theme) -> String {
    if progress >= PROGRESS_FULL {
        theme.resolve("good")
    } else if progress >= PROGRESS_WARN {
        theme.resolve("warning")
    } else {
        theme.resolve("danger")
    }
}

pub(crate) fn document(
    spec: &ScorecardSpec,
    config: &ScorecardConfig,
    theme: &Theme,
) -> SvgDocument {
    let geometry = layout(spec, config);
    let width = config.size.widget_width();
    let height = width * CARD_ASPECT;
    let mut doc = SvgDocument::new(width, height);

    let status_color = theme.status_color(spec.status);
    let text_fill = theme.resolve("text");
    let track = theme.resolve("grid");
    let label_font = config.size.label_font();
    let value_font = config.size.value_font();

    // Card frame; the border carries the status color.
    doc.rect(
        0.5,
        0.5,
        width - 1.0,
        height - 1.0,
        &format!(
            r##"rx="4" fill="#ffffff" stroke="{}" stroke-width="1""##,
            status_color
        ),
    );

    if !config.title.is_empty() {
        doc.text(
            PADDING,
            PADDING + label_font,
            &format!(r#"font-size="{}" fill="{}""#, label_font, text_fill),
            &config.title,
        );
    }

    let value_y = PADDING + label_font + 4.0 + value_font;
    doc.text(
        PADDING,
        value_y,
        &format!(
            r#"font-size="{}" font-weight="bold" fill="{}""#,
            value_font, status_color
        ),
        &geometry.display_value,
    );

    // Trend glyph and magnitude, right-aligned with the value.
    if let Some(glyph) = geometry.trend_glyph {
        let trend_color = match spec.trend {
            Some(Trend::Up) => theme.resolve("good"),
            Some(Trend::Down) => theme.resolve("danger"),
            _ => theme.resolve("muted"),
        };
        let trend_text = match &geometry.trend_label {
            Some(magnitude) => format!("{} {}", glyph, magnitude),
            None => glyph.to_string(),
        };
        doc.text(
            width - PADDING,
            value_y,
            &format!(
                r#"font-size="{}" text-anchor="end" fill="{}""#,
                label_font, trend_color
            ),
            &trend_text,
        );
    }

    // Variance line; the sign is rendered literally.
    let mut detail_y = value_y + label_font + 3.0;
    if let (Some(variance), Some(label)) = (geometry.variance, &geometry.variance_label) {
        let variance_color = if variance >= 0.0 {
            theme.resolve("good")
        } else {
            theme.resolve("danger")
        };
        doc.text(
            PADDING,
            detail_y,
            &format!(r#"font-size="{}" fill="{}""#, label_font, variance_color),
            &format!("{} vs target", label),
        );
        detail_y += label_font + 2.0;
    }

    if let Some(target) = &geometry.display_target {
        doc.text(
            PADDING,
            detail_y,
            &format!(r#"font-size="{}" fill="{}""#, label_font, text_fill),
            &format!("Target: {}", target),
        );
    }

    // Progress bar along the card bottom.
    if let Some(progress) = geometry.progress {
        let bar_width = width - 2.0 * PADDING;
        let bar_y = height - PADDING - BAR_THICKNESS;
        doc.rect(
            PADDING,
            bar_y,
            bar_width,
            BAR_THICKNESS,
            &format!(r#"rx="2.5" fill="{}""#, track),
        );
        if progress > 0.0 {
            doc.rect(
                PADDING,
                bar_y,
                bar_width * progress,
                BAR_THICKNESS,
                &format!(r#"rx="2.5" fill="{}""#, progress_color(progress, theme)),
            );
        }
    }

    doc
}

/// Render a scorecard as a standalone SVG document.
pub fn render_scorecard(spec: &ScorecardSpec, config: &ScorecardConfig, theme: &Theme) -> String {
    document(spec, config, theme).finish()
}
