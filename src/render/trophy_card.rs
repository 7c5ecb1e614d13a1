use std::fmt::Write as _;

use crate::{
    foundation::{core::Frame, error::BadgeResult, math::fmt_num},
    model::trophy::Trophy,
    render::CardItem,
    text::format::{thousands, xml_escape},
};

/// Glow extends this far beyond the card on every side.
const GLOW_BLEED: f64 = 6.0;

/// Stylesheet for trophy cards.
pub const TROPHY_CARD_CSS: &str = "
    :root{ color-scheme: dark; }
    .cardTitle{ font:700 16px system-ui; fill:#e5e7eb }
    .cardValue{ font:800 22px system-ui; fill:#60a5fa }
    .grade{ font:700 16px system-ui; fill:#e11d48 }
    .cardDesc{ font:12px system-ui; fill:#9ca3af }
  ";

/// Blur filter referenced by the pulsing glow behind each card.
pub const GLOW_FILTER: &str = r#"<filter id="glow" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="6" result="b"/><feMerge><feMergeNode in="b"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#;

impl CardItem for Trophy {
    fn render(&self, x: f64, frame: &Frame) -> BadgeResult<String> {
        let mut out = String::new();
        let _ = write!(
            out,
            r##"
  <g filter="url(#glow)">
    <rect x="{gx}" y="{gy}" width="{gw}" height="{gh}" rx="18" ry="18" fill="#0ea5e9" opacity="0.14">
      <animate attributeName="opacity" values="0.10;0.20;0.10" dur="2s" repeatCount="indefinite"/>
    </rect>
  </g>
  <g transform="translate({x},{top})">
    <rect x="0" y="0" rx="14" ry="14" width="{cw}" height="{ch}" fill="#0b1220" stroke="#1f2937"/>
    <text x="20" y="34" class="cardTitle">{title}</text>
    <text x="20" y="70" class="cardValue">{value} <tspan class="grade">[{grade}]</tspan></text>
    <text x="20" y="96" class="cardDesc">{desc}</text>
  </g>"##,
            gx = fmt_num(x - GLOW_BLEED),
            gy = fmt_num(frame.top - GLOW_BLEED),
            gw = fmt_num(frame.card.width + 2.0 * GLOW_BLEED),
            gh = fmt_num(frame.card.height + 2.0 * GLOW_BLEED),
            x = fmt_num(x),
            top = fmt_num(frame.top),
            cw = fmt_num(frame.card.width),
            ch = fmt_num(frame.card.height),
            title = xml_escape(&self.title),
            value = thousands(self.value),
            grade = self.grade().as_str(),
            desc = xml_escape(&self.description),
        );
        Ok(out)
    }
}
