//! Single, non-animated repository card.

use std::fmt::Write as _;

use crate::{
    foundation::{core::Size, math::fmt_num},
    model::repo::RepoSummary,
    render::{icons, svg::SvgDocument},
    text::format::{collapse_whitespace, xml_escape},
};

const CARD: Size = Size::new(480.0, 230.0);
const BAR_WIDTH: f64 = 440.0;
const UNKNOWN_LANGUAGE_COLOR: &str = "#ccc";

const CSS: &str = "
    .title { font: 600 16px sans-serif; fill: #ff4775; }
    .meta  { font: 12px sans-serif; fill: #8abecf; dominant-baseline: middle; }
  ";

/// Brand colors for common languages; these win over colors reported by the API.
pub fn language_color(name: &str) -> Option<&'static str> {
    match name {
        "Python" => Some("#3572A5"),
        "JavaScript" => Some("#f1e05a"),
        "TypeScript" => Some("#3178c6"),
        "Shell" => Some("#89e051"),
        "CSS" => Some("#563d7c"),
        "HTML" => Some("#e34c26"),
        "Rust" => Some("#dea584"),
        _ => None,
    }
}

fn color_for<'a>(name: &str, reported: &'a str) -> &'a str {
    match language_color(name) {
        Some(c) => c,
        None if !reported.is_empty() => reported,
        None => UNKNOWN_LANGUAGE_COLOR,
    }
}

/// Render `repo` as a standalone 480x230 card.
///
/// `avatar_href` is used verbatim as the image link (a URL or a `data:` URI).
#[tracing::instrument(skip_all, fields(repo = %repo.full_name))]
pub fn render_static_card(repo: &RepoSummary, avatar_href: Option<&str>) -> String {
    let mut doc = SvgDocument::new(CARD)
        .plain()
        .with_xlink()
        .with_style(CSS)
        .with_def(r#"<clipPath id="avatar-clip"><rect x="20" y="16" width="20" height="20" rx="4"/></clipPath>"#);

    let mut body = String::new();
    body.push_str(r##"
  <rect width="100%" height="100%" rx="10" fill="#0d1117"/>"##);
    if let Some(href) = avatar_href {
        let _ = write!(
            body,
            r#"
  <image x="20" y="16" width="20" height="20" xlink:href="{}" clip-path="url(#avatar-clip)" preserveAspectRatio="xMidYMid slice"/>"#,
            xml_escape(href)
        );
    }
    let _ = write!(
        body,
        r#"
  <text x="48" y="31" class="title">{name}</text>
  <foreignObject x="48" y="40" width="400" height="120">
    <div xmlns="http://www.w3.org/1999/xhtml" style="color:#8abecf;font:13px sans-serif;line-height:1.4;white-space:normal;overflow:hidden;">{desc}</div>
  </foreignObject>"#,
        name = xml_escape(&repo.name),
        desc = xml_escape(&collapse_whitespace(&repo.description)),
    );

    if let Some(primary) = repo.segments.first() {
        let _ = write!(
            body,
            r#"
  <circle cx="48" cy="180" r="6" fill="{color}"/>
  <text x="64" y="180" class="meta">{name}</text>"#,
            color = xml_escape(color_for(&primary.name, &primary.color)),
            name = xml_escape(&primary.name),
        );
    }

    let _ = write!(
        body,
        r#"
  <g transform="translate(140, 172)"><svg viewBox="0 0 24 24" width="16" height="16">{star}</svg></g>
  <text x="162" y="180" class="meta">{stars}</text>
  <g transform="translate(200, 173)"><svg viewBox="0 0 24 24" width="16" height="16">{fork}</svg></g>
  <text x="222" y="180" class="meta">{forks}</text>
  <g transform="translate(20, 0)">"#,
        star = icons::STAR,
        fork = icons::FORK,
        stars = repo.stars,
        forks = repo.forks,
    );

    let mut x = 0.0;
    for seg in &repo.segments {
        let w = seg.weight * BAR_WIDTH;
        let _ = write!(
            body,
            r#"
    <rect x="{x}" y="195" width="{w}" height="6" fill="{color}"/>"#,
            x = fmt_num(x),
            w = fmt_num(w),
            color = xml_escape(color_for(&seg.name, &seg.color)),
        );
        x += w;
    }
    body.push_str("\n  </g>");

    doc.push(&body);
    doc.finish()
}
