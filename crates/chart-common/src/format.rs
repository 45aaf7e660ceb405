//! Numeric display formatting.
//!
//! Every renderer takes a [`NumberFormat`] and routes all displayed values
//! through it, so callers can swap in currency or percentage formatting at
//! a single point.

/// Display format applied wherever a renderer shows a numeric value.
#[derive(Debug, Clone, Copy)]
pub enum NumberFormat {
    /// Thousands-grouped with one decimal place: `12,345.6`
    Grouped,
    /// Magnitude-suffixed: `1.2M`, `3.4K`, else one decimal place.
    Compact,
    /// Percentage with one decimal place: `42.0%`
    Percent,
    /// Fixed number of decimal places, no grouping.
    Fixed(u8),
    /// Caller-supplied formatter.
    Custom(fn(f64) -> String),
}

impl NumberFormat {
    /// Format a value for display.
    ///
    /// Non-finite values render as a placeholder; they must never reach
    /// the markup as literal `NaN`/`inf` text.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "n/a".to_string();
        }

        match self {
            Self::Grouped => format_grouped(value),
            Self::Compact => format_compact(value),
            Self::Percent => format!("{:.1}%", value),
            Self::Fixed(decimals) => format!("{:.*}", *decimals as usize, value),
            Self::Custom(f) => f(value),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Grouped
    }
}

/// One decimal place with thousands separators in the integer part.
fn format_grouped(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let formatted = format!("{:.1}", rounded.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "0"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Magnitude suffixing for dense surfaces like scorecards.
fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.1}", value)
    }
}
