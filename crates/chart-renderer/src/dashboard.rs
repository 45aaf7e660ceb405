//! Dashboard composition.
//!
//! Renders a set of widgets into one SVG grid. Because every renderer is
//! a pure function of its props, the cells are rendered in parallel and
//! composed in input order; output is still fully deterministic.

use rayon::prelude::*;

use chart_common::kpi::ScorecardSpec;
use chart_common::series::{BarDatum, GaugeSpec, Series};
use chart_common::theme::Theme;

use crate::svg::SvgDocument;
use crate::{bar, gauge, line, scorecard};

/// Height of the title strip above titled cells.
const TITLE_STRIP: f64 = 18.0;

/// One dashboard cell.
#[derive(Debug, Clone)]
pub enum Widget {
    Line {
        title: String,
        series: Series,
        config: line::LineChartConfig,
    },
    Bar {
        title: String,
        data: Vec<BarDatum>,
        config: bar::BarChartConfig,
    },
    Gauge {
        spec: GaugeSpec,
        config: gauge::GaugeConfig,
    },
    Scorecard {
        spec: ScorecardSpec,
        config: scorecard::ScorecardConfig,
    },
}

/// Grid layout configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub columns: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub gutter: f64,
    pub theme: Theme,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            cell_width: 320.0,
            cell_height: 220.0,
            gutter: 16.0,
            theme: Theme::default(),
        }
    }
}

/// Gauge and scorecard cells carry their own titles; line and bar cells
/// get one drawn in the title strip.
fn widget_document<'a>(widget: &'a Widget, theme: &Theme) -> (Option<&'a str>, SvgDocument) {
    match widget {
        Widget::Line {
            title,
            series,
            config,
        } => (
            (!title.is_empty()).then_some(title.as_str()),
            line::document(series, config, theme),
        ),
        Widget::Bar {
            title,
            data,
            config,
        } => (
            (!title.is_empty()).then_some(title.as_str()),
            bar::document(data, config, theme),
        ),
        Widget::Gauge { spec, config } => (None, gauge::document(spec, config, theme)),
        Widget::Scorecard { spec, config } => (None, scorecard::document(spec, config, theme)),
    }
}

/// Render widgets into a single SVG document laid out as a grid.
pub fn render_dashboard(widgets: &[Widget], config: &DashboardConfig) -> String {
    let columns = config.columns.max(1);

    let cells: Vec<(Option<&str>, SvgDocument)> = widgets
        .par_iter()
        .map(|widget| widget_document(widget, &config.theme))
        .collect();

    let rows = widgets.len().div_ceil(columns);
    let total_width = columns as f64 * config.cell_width + (columns as f64 - 1.0) * config.gutter;
    let total_height = rows as f64 * config.cell_height
        + rows.saturating_sub(1) as f64 * config.gutter;
    let mut doc = SvgDocument::new(
        total_width.max(config.cell_width),
        total_height.max(config.cell_height),
    );

    let title_fill = config.theme.resolve("text");
    for (i, (title, cell)) in cells.into_iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let x = col as f64 * (config.cell_width + config.gutter);
        let y = row as f64 * (config.cell_height + config.gutter);

        let mut content_y = y;
        let mut content_height = config.cell_height;
        if let Some(title) = title {
            doc.text(
                x + 2.0,
                y + 12.0,
                &format!(r#"font-size="12" font-weight="bold" fill="{}""#, title_fill),
                title,
            );
            content_y += TITLE_STRIP;
            content_height -= TITLE_STRIP;
        }

        doc.push_raw(&cell.finish_embedded(x, content_y, config.cell_width, content_height));
    }

    tracing::debug!(
        widgets = widgets.len(),
        columns,
        rows,
        "composed dashboard"
    );
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_common::kpi::KpiStatus;
    use chart_common::series::DataPoint;

    fn sample_widgets() -> Vec<Widget> {
        vec![
            Widget::Scorecard {
                spec: ScorecardSpec::new(1_200_000.0, KpiStatus::Good),
                config: scorecard::ScorecardConfig {
                    title: "Revenue".to_string(),
                    ..Default::default()
                },
            },
            Widget::Gauge {
                spec: GaugeSpec {
                    value: 82.0,
                    min: 0.0,
                    max: 100.0,
                },
                config: gauge::GaugeConfig::default(),
            },
            Widget::Line {
                title: "Budget vs actual".to_string(),
                series: Series::new(vec![
                    DataPoint::new("Jan", 10.0),
                    DataPoint::new("Feb", 20.0),
                ]),
                config: line::LineChartConfig::default(),
            },
        ]
    }

    #[test]
    fn test_grid_dimensions() {
        let config = DashboardConfig::default();
        let svg = render_dashboard(&sample_widgets(), &config);
        // 2 columns, 2 rows: 320*2 + 16 wide, 220*2 + 16 tall
        assert!(svg.contains(r#"viewBox="0 0 656.00 456.00""#));
    }

    #[test]
    fn test_cells_are_positioned() {
        let config = DashboardConfig::default();
        let svg = render_dashboard(&sample_widgets(), &config);
        // Second cell starts after the first column plus gutter
        assert!(svg.contains(r#"<svg x="336.00""#));
    }

    #[test]
    fn test_titled_cells_reserve_strip() {
        let config = DashboardConfig::default();
        let svg = render_dashboard(&sample_widgets(), &config);
        assert!(svg.contains(">Budget vs actual</text>"));
    }

    #[test]
    fn test_deterministic_despite_parallel_render() {
        let config = DashboardConfig::default();
        let widgets = sample_widgets();
        assert_eq!(
            render_dashboard(&widgets, &config),
            render_dashboard(&widgets, &config)
        );
    }

    #[test]
    fn test_empty_dashboard() {
        let config = DashboardConfig::default();
        let svg = render_dashboard(&[], &config);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }
}
