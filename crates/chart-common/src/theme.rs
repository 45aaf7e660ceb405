//! Theme configuration for chart presentation.
//!
//! A JSON-based schema for the colors shared by all renderers. Defaults
//! are built in, so no file is required; a deployment can still ship its
//! own palette as configuration.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::kpi::KpiStatus;

/// Root theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Version of the theme schema
    #[serde(default = "default_version")]
    pub version: String,

    /// Color tokens
    #[serde(default)]
    pub colors: ThemeColors,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            version: default_version(),
            colors: ThemeColors::default(),
        }
    }
}

impl Theme {
    /// Load theme configuration from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ChartResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse theme configuration from a JSON string.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let theme: Self =
            serde_json::from_str(json).map_err(|e| ChartError::ThemeParse(e.to_string()))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Validate that every configured color parses.
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in self.colors.entries() {
            if Color::parse(value).is_none() {
                return Err(ChartError::ThemeValidation(format!(
                    "color '{}' has unparseable value '{}'",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Resolve a color token or literal color string to sanitized hex.
    ///
    /// Accepts a token name ("primary", "muted", ...), a hex literal, or a
    /// named color; anything unparseable falls back to the primary color
    /// so bad input degrades to an odd-looking chart, not broken markup.
    pub fn resolve(&self, token: &str) -> String {
        let raw = match token {
            "primary" => self.colors.primary.as_str(),
            "muted" => self.colors.muted.as_str(),
            "grid" => self.colors.grid.as_str(),
            "text" => self.colors.text.as_str(),
            "target" => self.colors.target.as_str(),
            "good" | "success" => self.colors.good.as_str(),
            "warning" => self.colors.warning.as_str(),
            "danger" => self.colors.danger.as_str(),
            other => other,
        };

        match Color::parse(raw) {
            Some(color) => color.to_hex(),
            None => Color::parse(&self.colors.primary)
                .unwrap_or(Color::opaque(0x25, 0x63, 0xeb))
                .to_hex(),
        }
    }

    /// Presentation color for a scorecard status.
    pub fn status_color(&self, status: KpiStatus) -> String {
        match status {
            KpiStatus::Good => self.resolve("good"),
            KpiStatus::Warning => self.resolve("warning"),
            KpiStatus::Danger => self.resolve("danger"),
        }
    }
}

/// Named color tokens used across the renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Default stroke/accent color
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Subordinate strokes (target overlays, needles, secondary text)
    #[serde(default = "default_muted")]
    pub muted: String,

    /// Gridlines and track backgrounds
    #[serde(default = "default_grid")]
    pub grid: String,

    /// Axis and label text
    #[serde(default = "default_text")]
    pub text: String,

    /// Dashed target overlays and tick marks
    #[serde(default = "default_target")]
    pub target: String,

    /// Status colors
    #[serde(default = "default_good")]
    pub good: String,
    #[serde(default = "default_warning")]
    pub warning: String,
    #[serde(default = "default_danger")]
    pub danger: String,
}

fn default_primary() -> String {
    "#2563eb".to_string()
}
fn default_muted() -> String {
    "#9ca3af".to_string()
}
fn default_grid() -> String {
    "#e5e7eb".to_string()
}
fn default_text() -> String {
    "#6b7280".to_string()
}
fn default_target() -> String {
    "#9ca3af".to_string()
}
fn default_good() -> String {
    "#059669".to_string()
}
fn default_warning() -> String {
    "#d97706".to_string()
}
fn default_danger() -> String {
    "#dc2626".to_string()
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            muted: default_muted(),
            grid: default_grid(),
            text: default_text(),
            target: default_target(),
            good: default_good(),
            warning: default_warning(),
            danger: default_danger(),
        }
    }
}

impl ThemeColors {
    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", &self.primary),
            ("muted", &self.muted),
            ("grid", &self.grid),
            ("text", &self.text),
            ("target", &self.target),
            ("good", &self.good),
            ("warning", &self.warning),
            ("danger", &self.danger),
        ]
    }
}

/// Size token governing font and widget dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeToken {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SizeToken {
    /// Font size for primary value text, in view-box units.
    pub fn value_font(&self) -> f64 {
        match self {
            Self::Sm => 12.0,
            Self::Md => 16.0,
            Self::Lg => 22.0,
        }
    }

    /// Font size for labels and secondary text.
    pub fn label_font(&self) -> f64 {
        match self {
            Self::Sm => 7.0,
            Self::Md => 8.0,
            Self::Lg => 10.0,
        }
    }

    /// Nominal rendered width for fixed-aspect widgets (gauge, scorecard).
    pub fn widget_width(&self) -> f64 {
        match self {
            Self::Sm => 120.0,
            Self::Md => 160.0,
            Self::Lg => 220.0,
        }
    }
}
