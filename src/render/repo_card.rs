use std::fmt::Write as _;

use crate::{
    foundation::{core::Frame, error::BadgeResult, math::fmt_num},
    model::repo::RepoSummary,
    render::{CardItem, icons},
    text::{
        fit::{FitOpts, fit},
        format::{collapse_whitespace, thousands, xml_escape},
        wrap::fit_title,
    },
};

/// Repositories link here as `{REPO_URL_BASE}/{owner}/{name}`.
pub const REPO_URL_BASE: &str = "https://github.com";

const PAD: f64 = 20.0;
const TITLE_MAX_CHARS: usize = 40;
const TITLE_MAX_LINES: usize = 2;
const TITLE_BASELINE: f64 = 30.0;
const TITLE_LINE_STEP: f64 = 20.0;
const DESC_TOP_ONE_LINE_TITLE: f64 = 54.0;
const DESC_TOP_TWO_LINE_TITLE: f64 = 70.0;
const DESC_BOTTOM: f64 = 130.0;
const DESC_MIN_HEIGHT: f64 = 12.0;
const BADGES_Y: f64 = 135.0;
const BAR_Y: f64 = 165.0;
const BAR_HEIGHT: f64 = 12.0;
const LEGEND_ENTRIES: usize = 4;
const LEGEND_COLUMN: f64 = 190.0;

/// Stylesheet for repo cards.
pub const REPO_CARD_CSS: &str = "
    :root{ color-scheme: dark; }
    .name{ font:800 18px system-ui; fill:#e5e7eb }
    .desc{ fill:#9ca3af }
    .pill{ font:700 12px system-ui; fill:#e5e7eb }
    .legend{ font:600 12px system-ui; fill:#cbd5e1 }
    a:hover .name, a:hover .desc { text-decoration: underline; }
  ";

/// Font search used for descriptions.
pub fn description_fit_opts() -> FitOpts {
    FitOpts {
        start_font_size: 13.0,
        min_font_size: 9.0,
        line_spacing: 2.0,
        avg_char_width_factor: 0.58,
    }
}

fn pill(out: &mut String, x: f64, icon: &str, icon_dx: f64, icon_size: f64, count: u64) {
    let _ = write!(
        out,
        r##"
        <g transform="translate({x},0)">
          <rect x="0" y="-12" rx="10" ry="10" width="78" height="20" fill="#111827" stroke="#1f2937"/>
          <g transform="translate({icon_dx}, -9)"><svg viewBox="0 0 24 24" width="{icon_size}" height="{icon_size}">{icon}</svg></g>
          <text x="26" y="2" class="pill">{count}</text>
        </g>"##,
        x = fmt_num(x),
        icon_dx = fmt_num(icon_dx),
        icon_size = fmt_num(icon_size),
        count = thousands(count),
    );
}

impl CardItem for RepoSummary {
    fn render(&self, x: f64, frame: &Frame) -> BadgeResult<String> {
        let cw = frame.card.width;
        let bar_width = cw - 2.0 * PAD;
        let mut out = String::new();

        let _ = write!(
            out,
            r##"
  <a xlink:href="{base}/{full}" target="_blank">
    <g transform="translate({x},{top})">
      <rect x="0" y="0" rx="14" ry="14" width="{cw}" height="{ch}" fill="#0b1220" stroke="#1f2937"/>"##,
            base = REPO_URL_BASE,
            full = xml_escape(&self.full_name),
            x = fmt_num(x),
            top = fmt_num(frame.top),
            cw = fmt_num(cw),
            ch = fmt_num(frame.card.height),
        );

        let title = fit_title(&self.name, TITLE_MAX_CHARS, TITLE_MAX_LINES);
        for (i, line) in title.iter().enumerate() {
            let _ = write!(
                out,
                r#"
      <text x="{PAD}" y="{y}" class="name">{line}</text>"#,
                y = fmt_num(TITLE_BASELINE + i as f64 * TITLE_LINE_STEP),
                line = xml_escape(line),
            );
        }

        let desc_top = if title.len() > 1 {
            DESC_TOP_TWO_LINE_TITLE
        } else {
            DESC_TOP_ONE_LINE_TITLE
        };
        let desc_height = (DESC_BOTTOM - desc_top).floor().max(DESC_MIN_HEIGHT);
        let desc = fit(
            &collapse_whitespace(&self.description),
            bar_width,
            desc_height,
            &description_fit_opts(),
        )?;
        for (i, line) in desc.lines.iter().enumerate() {
            let _ = write!(
                out,
                r#"
      <text x="{PAD}" y="{y}" style="font:400 {size}px system-ui" class="desc">{line}</text>"#,
                y = fmt_num(desc_top + i as f64 * desc.line_height),
                size = fmt_num(desc.font_size),
                line = xml_escape(line),
            );
        }

        let _ = write!(
            out,
            r#"
      <g class="badges" transform="translate(0,{BADGES_Y})">"#
        );
        pill(&mut out, cw - 180.0, icons::STAR, 8.0, 16.0, self.stars);
        pill(&mut out, cw - 90.0, icons::FORK, 4.0, 18.0, self.forks);
        out.push_str("\n      </g>");

        for ((sx, sw), seg) in self.bar_spans(bar_width).into_iter().zip(&self.segments) {
            let _ = write!(
                out,
                r#"
      <rect x="{x}" y="{BAR_Y}" width="{w}" height="{BAR_HEIGHT}" fill="{color}"/>"#,
                x = fmt_num(PAD + sx),
                w = fmt_num(sw),
                color = xml_escape(&seg.color),
            );
        }

        for (i, seg) in self.segments.iter().take(LEGEND_ENTRIES).enumerate() {
            let lx = PAD + (i % 2) as f64 * LEGEND_COLUMN;
            let ly = BAR_Y + 30.0 + (i / 2) as f64 * 12.0;
            let _ = write!(
                out,
                r#"
      <rect x="{x}" y="{y}" width="8" height="8" rx="2" fill="{color}"/><text x="{tx}" y="{ty}" class="legend">{name}</text>"#,
                x = fmt_num(lx),
                y = fmt_num(ly - 8.0),
                color = xml_escape(&seg.color),
                tx = fmt_num(lx + 12.0),
                ty = fmt_num(ly),
                name = xml_escape(&seg.name),
            );
        }

        out.push_str("\n    </g>\n  </a>");
        Ok(out)
    }
}
