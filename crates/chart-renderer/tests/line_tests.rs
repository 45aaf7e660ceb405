//! Tests for line chart layout and rendering.

use chart_common::series::{DataPoint, Series};
use chart_common::theme::Theme;
use chart_renderer::line::{layout, render_line_chart, LineChartConfig};

fn series(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(format!("P{}", i), v))
        .collect()
}

// ============================================================================
// Path structure
// ============================================================================

#[test]
fn test_path_has_one_move_and_n_minus_one_lines() {
    let config = LineChartConfig::default();
    let geometry = layout(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), &config);

    assert_eq!(geometry.value_path.matches('M').count(), 1);
    assert_eq!(geometry.value_path.matches('L').count(), 4);
    assert!(geometry.value_path.starts_with("M "));
}

#[test]
fn test_x_positions_span_full_width() {
    let config = LineChartConfig::default();
    let geometry = layout(&series(&[1.0, 2.0, 3.0]), &config);

    assert_eq!(geometry.points[0].x, 0.0);
    assert_eq!(geometry.points[1].x, 50.0);
    assert_eq!(geometry.points[2].x, 100.0);
}

#[test]
fn test_y_axis_is_inverted() {
    let config = LineChartConfig {
        height: 100.0,
        ..Default::default()
    };
    let geometry = layout(&series(&[0.0, 10.0]), &config);

    // Smallest value sits at the bottom, largest at the top
    assert_eq!(geometry.points[0].y, 100.0);
    assert_eq!(geometry.points[1].y, 0.0);
    assert_eq!(geometry.value_path, "M 0.00,100.00 L 100.00,0.00");
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_empty_series_renders_nothing() {
    let config = LineChartConfig::default();
    let theme = Theme::default();

    let geometry = layout(&Series::default(), &config);
    assert!(geometry.points.is_empty());
    assert!(geometry.value_path.is_empty());

    let svg = render_line_chart(&Series::default(), &config, &theme);
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("<path"));
}

#[test]
fn test_single_point_series() {
    let config = LineChartConfig {
        height: 200.0,
        ..Default::default()
    };
    let geometry = layout(&series(&[10.0]), &config);

    // No division by zero in the x position; the degenerate domain maps
    // to the vertical midpoint
    assert_eq!(geometry.points.len(), 1);
    assert_eq!(geometry.points[0].x, 0.0);
    assert_eq!(geometry.points[0].y, 100.0);
    assert_eq!(geometry.value_path, "M 0.00,100.00");
}

#[test]
fn test_flat_series_has_no_nan() {
    let config = LineChartConfig::default();
    let geometry = layout(&series(&[5.0, 5.0, 5.0]), &config);

    assert!(!geometry.value_path.contains("NaN"));
    for point in &geometry.points {
        assert!(point.y.is_finite());
    }
}

#[test]
fn test_non_finite_points_are_skipped() {
    let config = LineChartConfig::default();
    let geometry = layout(&series(&[1.0, f64::NAN, 3.0]), &config);

    assert_eq!(geometry.points.len(), 2);
    // Index order still fixes x: the surviving third point stays at 100%
    assert_eq!(geometry.points[1].x, 100.0);
    assert!(!geometry.value_path.contains("NaN"));
    assert_eq!(geometry.value_path.matches('L').count(), 1);
}

#[test]
fn test_all_non_finite_renders_nothing() {
    let config = LineChartConfig::default();
    let geometry = layout(&series(&[f64::NAN, f64::INFINITY]), &config);
    assert!(geometry.points.is_empty());
}

// ============================================================================
// Target overlay
// ============================================================================

#[test]
fn test_target_overlay_paths() {
    let config = LineChartConfig {
        show_target: true,
        height: 100.0,
        ..Default::default()
    };
    let series = Series::new(vec![
        DataPoint::with_target("Jan", 10.0, 20.0),
        DataPoint::with_target("Feb", 30.0, 20.0),
    ]);
    let geometry = layout(&series, &config);

    let target_path = geometry.target_path.as_ref().unwrap();
    assert_eq!(target_path.matches('M').count(), 1);
    assert_eq!(target_path.matches('L').count(), 1);

    // Domain is 10..30; the flat target at 20 maps to the middle
    assert_eq!(geometry.points[0].target_y, Some(50.0));
    assert_eq!(geometry.points[1].target_y, Some(50.0));
}

#[test]
fn test_missing_target_reads_as_zero() {
    let config = LineChartConfig {
        show_target: true,
        height: 100.0,
        ..Default::default()
    };
    let series = Series::new(vec![
        DataPoint::with_target("Jan", 10.0, 20.0),
        DataPoint::new("Feb", 20.0),
    ]);
    let geometry = layout(&series, &config);

    // Domain 10..20; absent target is treated as 0, mapped below the plot
    let expected = chart_renderer::scale::linear(0.0, 10.0, 20.0, 100.0, 0.0);
    assert_eq!(geometry.points[1].target_y, Some(expected));
}

#[test]
fn test_target_excluded_from_domain_when_hidden() {
    let config = LineChartConfig {
        show_target: false,
        ..Default::default()
    };
    let series = Series::new(vec![
        DataPoint::with_target("Jan", 10.0, 500.0),
        DataPoint::with_target("Feb", 20.0, 500.0),
    ]);
    let geometry = layout(&series, &config);

    let domain = geometry.domain.unwrap();
    assert_eq!(domain.max, 20.0);
    assert!(geometry.target_path.is_none());
}

// ============================================================================
// Labels and markup
// ============================================================================

#[test]
fn test_y_axis_labels() {
    let config = LineChartConfig::default();
    let geometry = layout(&series(&[0.0, 50.0, 100.0]), &config);

    assert_eq!(
        geometry.y_labels,
        Some(["100.0".to_string(), "50.0".to_string(), "0.0".to_string()])
    );
}

#[test]
fn test_svg_has_marker_and_tooltip_per_point() {
    let config = LineChartConfig::default();
    let theme = Theme::default();
    let svg = render_line_chart(&series(&[1.0, 2.0, 3.0]), &config, &theme);

    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<title>").count(), 3);
    assert!(svg.contains("P0: 1.0"));
}

#[test]
fn test_labels_are_escaped() {
    let config = LineChartConfig::default();
    let theme = Theme::default();
    let series = Series::new(vec![DataPoint::new("R&D <budget>", 1.0)]);
    let svg = render_line_chart(&series, &config, &theme);

    assert!(svg.contains("R&amp;D &lt;budget&gt;"));
    assert!(!svg.contains("R&D <budget>"));
}

#[test]
fn test_render_is_deterministic() {
    let config = LineChartConfig {
        show_target: true,
        ..Default::default()
    };
    let theme = Theme::default();
    let series = Series::new(vec![
        DataPoint::with_target("Jan", 104_000.0, 100_000.0),
        DataPoint::with_target("Feb", 98_500.0, 101_000.0),
        DataPoint::with_target("Mar", 112_300.0, 102_000.0),
    ]);

    let first = render_line_chart(&series, &config, &theme);
    let second = render_line_chart(&series, &config, &theme);
    assert_eq!(first, second);
}
