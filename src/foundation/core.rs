use crate::foundation::error::{BadgeError, BadgeResult};

pub use kurbo::{Point, Size};

/// Geometry of a carousel: the clipped viewport plus the card grid placed inside each page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Visible area; its width is the slide distance.
    pub viewport: Size,
    /// Size of one card.
    pub card: Size,
    /// Horizontal gap between neighbouring cards.
    pub gap: f64,
    /// Top offset of the card row.
    pub top: f64,
}

impl Frame {
    /// Create a validated frame.
    pub fn new(viewport: Size, card: Size, gap: f64, top: f64) -> BadgeResult<Self> {
        let dims = [viewport.width, viewport.height, card.width, card.height];
        if dims.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(BadgeError::validation(
                "frame viewport and card sizes must be finite and > 0",
            ));
        }
        if !gap.is_finite() || gap < 0.0 || !top.is_finite() {
            return Err(BadgeError::validation("frame gap must be finite and >= 0"));
        }
        Ok(Self {
            viewport,
            card,
            gap,
            top,
        })
    }

    /// Width of a row holding `per_page` cards.
    pub fn row_width(&self, per_page: usize) -> f64 {
        let n = per_page.max(1) as f64;
        n * self.card.width + (n - 1.0) * self.gap
    }

    /// Whether a row of `per_page` cards fits inside the viewport.
    pub fn fits_row(&self, per_page: usize) -> bool {
        self.row_width(per_page) <= self.viewport.width
    }

    /// Left edge of card `slot` in a row that is centered for `per_page` cards.
    pub fn card_x(&self, slot: usize, per_page: usize) -> f64 {
        let x0 = (self.viewport.width - self.row_width(per_page)) / 2.0;
        x0 + slot as f64 * (self.card.width + self.gap)
    }
}
