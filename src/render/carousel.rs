//! Serialize a [`CarouselLayout`] into slides driven by SMIL `animateTransform`.

use std::fmt::Write as _;

use crate::{
    animation::carousel::CarouselLayout,
    foundation::{
        core::{Frame, Size},
        error::{BadgeError, BadgeResult},
        math::fmt_num,
    },
    render::{
        CardItem,
        repo_card::REPO_CARD_CSS,
        svg::{SvgDocument, clip_frame},
        trophy_card::{GLOW_FILTER, TROPHY_CARD_CSS},
    },
};

const FRAME_CLIP_ID: &str = "frame";
const FRAME_RADIUS: f64 = 8.0;

/// Geometry and styling of one carousel flavour.
#[derive(Clone, Copy, Debug)]
pub struct CarouselTheme {
    pub frame: Frame,
    pub css: &'static str,
    /// Extra `<defs>` content besides the clip frame.
    pub defs: &'static str,
    /// Cards contain `xlink:href` links.
    pub xlink: bool,
}

impl CarouselTheme {
    /// 880x280 viewport, two 420x230 repo cards per page.
    pub const REPOS: Self = Self {
        frame: Frame {
            viewport: Size::new(880.0, 280.0),
            card: Size::new(420.0, 230.0),
            gap: 40.0,
            top: 20.0,
        },
        css: REPO_CARD_CSS,
        defs: "",
        xlink: true,
    };

    /// 760x150 viewport, two 300x120 trophy cards per page.
    pub const TROPHIES: Self = Self {
        frame: Frame {
            viewport: Size::new(760.0, 150.0),
            card: Size::new(300.0, 120.0),
            gap: 40.0,
            top: 10.0,
        },
        css: TROPHY_CARD_CSS,
        defs: GLOW_FILTER,
        xlink: false,
    };
}

/// How slides move in the emitted document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Looping SMIL animation over the shared cycle.
    Animated,
    /// Static transforms sampled at one instant, no SMIL.
    Frozen { at_secs: f64 },
}

/// Render every page of `layout` as a slide inside one SVG document.
///
/// Errors when a full page of cards is wider than the theme's viewport.
pub fn render_carousel<T: CardItem>(
    layout: &CarouselLayout<'_, T>,
    theme: &CarouselTheme,
    motion: Motion,
) -> BadgeResult<String> {
    let frame = &theme.frame;
    if !frame.fits_row(layout.page_size) {
        return Err(BadgeError::validation(format!(
            "{} cards per page need {}px but the viewport is {}px wide",
            layout.page_size,
            frame.row_width(layout.page_size),
            frame.viewport.width
        )));
    }
    if let Motion::Frozen { at_secs } = motion {
        if !at_secs.is_finite() {
            return Err(BadgeError::validation("snapshot time must be finite"));
        }
        tracing::debug!(at_secs, page = layout.active_page(at_secs), "freezing carousel");
    }
    let w = fmt_num(frame.viewport.width);
    let dur = fmt_num(layout.total_cycle_secs);
    let progress = match motion {
        Motion::Animated => 0.0,
        Motion::Frozen { at_secs } => layout.cycle_progress(at_secs),
    };

    let mut doc = SvgDocument::new(frame.viewport)
        .with_style(theme.css)
        .with_def(&clip_frame(FRAME_CLIP_ID, frame.viewport, FRAME_RADIUS))
        .with_def(theme.defs);
    if theme.xlink {
        doc = doc.with_xlink();
    }

    for page in &layout.pages {
        let mut cards = String::new();
        for (slot, item) in page.items.iter().enumerate() {
            cards.push_str(&item.render(frame.card_x(slot, layout.page_size), frame)?);
        }

        let mut slide = String::new();
        match motion {
            Motion::Animated => {
                let s = &page.schedule;
                let _ = write!(
                    slide,
                    r#"
  <g class="slide" transform="translate({w},0)" clip-path="url(#{FRAME_CLIP_ID})">{cards}
    <animateTransform attributeName="transform" type="translate"
      values="{values}"
      keyTimes="{key_times}"
      keySplines="{splines}"
      calcMode="spline"
      dur="{dur}s"
      begin="0s"
      repeatCount="indefinite"/>
  </g>"#,
                    values = s.values_attr(),
                    key_times = s.key_times_attr(),
                    splines = s.key_splines_attr(),
                );
            }
            Motion::Frozen { .. } => {
                let tx = fmt_num(page.schedule.sample(progress));
                let _ = write!(
                    slide,
                    r#"
  <g class="slide" transform="translate({tx},0)" clip-path="url(#{FRAME_CLIP_ID})">{cards}
  </g>"#
                );
            }
        }
        doc.push(&slide);
    }

    Ok(doc.finish())
}
