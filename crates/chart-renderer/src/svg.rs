//! SVG document assembly.
//!
//! The engine emits markup directly as strings. Coordinates are always
//! written with fixed two-decimal precision, so identical geometry yields
//! byte-identical documents.

use std::fmt::Write;

/// Format a coordinate with the fixed precision used throughout the engine.
///
/// Negative zero is normalized so that values straddling 0.0 cannot
/// produce two spellings of the same coordinate.
pub fn fmt_coord(value: f64) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

/// Escape text for use in XML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds SVG path data as an ordered sequence of move/line commands.
///
/// The first point opens the path with a single `M`; every subsequent
/// point appends an `L`. This produces a polyline, no smoothing.
#[derive(Debug, Default)]
pub struct PathBuilder {
    data: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point in input order.
    pub fn point(&mut self, x: f64, y: f64) {
        let command = if self.data.is_empty() {
            "M"
        } else {
            " L"
        };
        let _ = write!(self.data, "{} {},{}", command, fmt_coord(x), fmt_coord(y));
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn finish(self) -> String {
        self.data
    }
}

/// Incremental SVG document writer.
///
/// The view box fixes the coordinate space renderers draw in; the nominal
/// width/height only affect the root attributes, so the same body can be
/// emitted standalone or embedded as a positioned cell of a larger
/// document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    view_box: (f64, f64),
    preserve_aspect_ratio: Option<&'static str>,
    body: String,
}

impl SvgDocument {
    /// New document whose nominal size matches its view box.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            view_box: (width, height),
            preserve_aspect_ratio: None,
            body: String::new(),
        }
    }

    /// Override the nominal rendered size, keeping the view box.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn preserve_aspect_ratio(mut self, value: &'static str) -> Self {
        self.preserve_aspect_ratio = Some(value);
        self
    }

    /// Append a pre-formatted element.
    pub fn push_raw(&mut self, element: &str) {
        self.body.push_str(element);
    }

    pub fn path(&mut self, d: &str, attrs: &str) {
        let _ = write!(self.body, r#"<path d="{}" {}/>"#, d, attrs);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, attrs: &str) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            fmt_coord(x1),
            fmt_coord(y1),
            fmt_coord(x2),
            fmt_coord(y2),
            attrs
        );
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, attrs: &str) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            fmt_coord(x),
            fmt_coord(y),
            fmt_coord(width),
            fmt_coord(height),
            attrs
        );
    }

    /// Rect carrying a `<title>` child, the SVG-native tooltip anchor.
    pub fn rect_titled(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attrs: &str,
        title: &str,
    ) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}><title>{}</title></rect>"#,
            fmt_coord(x),
            fmt_coord(y),
            fmt_coord(width),
            fmt_coord(height),
            attrs,
            escape(title)
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, attrs: &str) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            fmt_coord(cx),
            fmt_coord(cy),
            fmt_coord(r),
            attrs
        );
    }

    /// Circle carrying a `<title>` child, the SVG-native tooltip anchor.
    pub fn circle_titled(&mut self, cx: f64, cy: f64, r: f64, attrs: &str, title: &str) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" {}><title>{}</title></circle>"#,
            fmt_coord(cx),
            fmt_coord(cy),
            fmt_coord(r),
            attrs,
            escape(title)
        );
    }

    /// Text element; content is escaped.
    pub fn text(&mut self, x: f64, y: f64, attrs: &str, content: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" {}>{}</text>"#,
            fmt_coord(x),
            fmt_coord(y),
            attrs,
            escape(content)
        );
    }

    fn root_attrs(&self) -> String {
        let mut attrs = format!(
            r#"width="{}" height="{}" viewBox="0 0 {} {}""#,
            fmt_coord(self.width),
            fmt_coord(self.height),
            fmt_coord(self.view_box.0),
            fmt_coord(self.view_box.1),
        );
        if let Some(par) = self.preserve_aspect_ratio {
            let _ = write!(attrs, r#" preserveAspectRatio="{}""#, par);
        }
        attrs
    }

    /// Emit a standalone SVG document.
    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" {}>{}</svg>"#,
            self.root_attrs(),
            self.body
        )
    }

    /// Emit as a positioned cell inside a parent SVG document.
    pub fn finish_embedded(self, x: f64, y: f64, width: f64, height: f64) -> String {
        let mut attrs = format!(
            r#"x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}""#,
            fmt_coord(x),
            fmt_coord(y),
            fmt_coord(width),
            fmt_coord(height),
            fmt_coord(self.view_box.0),
            fmt_coord(self.view_box.1),
        );
        if let Some(par) = self.preserve_aspect_ratio {
            let _ = write!(attrs, r#" preserveAspectRatio="{}""#, par);
        }
        format!(r#"<svg {}>{}</svg>"#, attrs, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_coord_precision_and_negative_zero() {
        assert_eq!(fmt_coord(84.2105), "84.21");
        assert_eq!(fmt_coord(0.0), "0.00");
        assert_eq!(fmt_coord(-0.001), "0.00");
        assert_eq!(fmt_coord(-3.5), "-3.50");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D <Q1> \"plan\""), "R&amp;D &lt;Q1&gt; &quot;plan&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_path_builder_commands() {
        let mut path = PathBuilder::new();
        path.point(0.0, 10.0);
        path.point(50.0, 20.0);
        path.point(100.0, 0.0);
        assert_eq!(path.finish(), "M 0.00,10.00 L 50.00,20.00 L 100.00,0.00");
    }

    #[test]
    fn test_empty_path_builder() {
        assert!(PathBuilder::new().is_empty());
        assert_eq!(PathBuilder::new().finish(), "");
    }

    #[test]
    fn test_document_root() {
        let mut doc = SvgDocument::new(100.0, 50.0).preserve_aspect_ratio("none");
        doc.rect(0.0, 0.0, 10.0, 10.0, r##"fill="#2563eb""##);
        let svg = doc.finish();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains(r#"viewBox="0 0 100.00 50.00""#));
        assert!(svg.contains(r#"preserveAspectRatio="none""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_embedded_document_positions_cell() {
        let doc = SvgDocument::new(100.0, 50.0);
        let svg = doc.finish_embedded(320.0, 0.0, 300.0, 150.0);
        assert!(svg.starts_with(r#"<svg x="320.00" y="0.00""#));
        assert!(!svg.contains("xmlns"));
    }
}
