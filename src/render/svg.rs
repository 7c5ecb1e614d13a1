use std::fmt::Write as _;

use crate::foundation::{core::Size, math::fmt_num};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Root `<svg>` element assembled from a stylesheet, `<defs>` and body markup.
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    size: Size,
    xml_prolog: bool,
    xlink: bool,
    crisp: bool,
    style: String,
    defs: String,
    body: String,
}

impl SvgDocument {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            xml_prolog: true,
            crisp: true,
            ..Self::default()
        }
    }

    /// Declare the `xlink` namespace (needed for `xlink:href`).
    pub fn with_xlink(mut self) -> Self {
        self.xlink = true;
        self
    }

    /// Drop the XML declaration and the geometric-precision rendering hints.
    pub fn plain(mut self) -> Self {
        self.xml_prolog = false;
        self.crisp = false;
        self
    }

    pub fn with_style(mut self, css: &str) -> Self {
        self.style.push_str(css);
        self
    }

    pub fn with_def(mut self, markup: &str) -> Self {
        self.defs.push_str(markup);
        self
    }

    pub fn push(&mut self, markup: &str) {
        self.body.push_str(markup);
    }

    pub fn finish(self) -> String {
        let (w, h) = (fmt_num(self.size.width), fmt_num(self.size.height));
        let mut out = String::with_capacity(self.body.len() + self.style.len() + 512);
        if self.xml_prolog {
            out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }
        let _ = write!(
            out,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{SVG_NS}""#
        );
        if self.xlink {
            let _ = write!(out, r#" xmlns:xlink="{XLINK_NS}""#);
        }
        if self.crisp {
            out.push_str(r#" text-rendering="geometricPrecision" shape-rendering="geometricPrecision""#);
        }
        out.push_str(">\n");
        if !self.style.is_empty() {
            let _ = writeln!(out, "  <style>{}</style>", self.style);
        }
        if !self.defs.is_empty() {
            let _ = writeln!(out, "  <defs>{}</defs>", self.defs);
        }
        out.push_str(&self.body);
        out.push_str("\n</svg>\n");
        out
    }
}

/// Rounded clip rectangle covering the whole viewport.
pub fn clip_frame(id: &str, size: Size, radius: f64) -> String {
    let (w, h, r) = (fmt_num(size.width), fmt_num(size.height), fmt_num(radius));
    format!(
        r#"<clipPath id="{id}"><rect x="0" y="0" width="{w}" height="{h}" rx="{r}" ry="{r}"/></clipPath>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_namespaces_and_sections() {
        let mut doc = SvgDocument::new(Size::new(100.0, 50.0))
            .with_xlink()
            .with_style(".a{fill:red}")
            .with_def(&clip_frame("frame", Size::new(100.0, 50.0), 8.0));
        doc.push("<rect/>");
        let s = doc.finish();
        assert!(s.starts_with("<?xml"));
        assert!(s.contains(r#"viewBox="0 0 100 50""#));
        assert!(s.contains("xmlns:xlink"));
        assert!(s.contains("<style>.a{fill:red}</style>"));
        assert!(s.contains(r#"<clipPath id="frame"><rect x="0" y="0" width="100" height="50" rx="8" ry="8"/></clipPath>"#));
        assert!(s.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn plain_document_skips_prolog() {
        let s = SvgDocument::new(Size::new(1.0, 1.0)).plain().finish();
        assert!(s.starts_with("<svg"));
        assert!(!s.contains("geometricPrecision"));
    }
}
