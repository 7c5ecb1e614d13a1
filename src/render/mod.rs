pub mod carousel;
pub mod preview;
pub mod repo_card;
pub mod static_card;
pub mod svg;
pub mod trophy_card;

use crate::foundation::{core::Frame, error::BadgeResult};

/// Anything the carousel can place on a page.
///
/// The layout engine only sees items as indivisible units; rendering is delegated here.
pub trait CardItem {
    /// Markup for this card with its left edge at `x` inside `frame`.
    fn render(&self, x: f64, frame: &Frame) -> BadgeResult<String>;
}

/// Shared outline icons, drawn in a 24x24 view box.
pub(crate) mod icons {
    pub(crate) const STAR: &str = r##"<path fill="none" stroke="#8abecf" stroke-width="2" d="M12 2.5l2.68 5.43 5.82.85-4.2 4.09.99 5.8L12 16.6 6.71 18.67l.99-5.8-4.2-4.09 5.82-.85L12 2.5z"/>"##;

    pub(crate) const FORK: &str = r##"<path fill="#8abecf" d="M5 5.372v.878c0 .414.336.75.75.75h4.5a.75.75 0 0 0 .75-.75v-.878a2.25 2.25 0 1 1 1.5 0v.878a2.25 2.25 0 0 1-2.25 2.25h-1.5v2.128a2.25 2.25 0 1 1-1.5 0V8.5h-1.5A2.25 2.25 0 0 1 3.5 6.25v-.878a2.25 2.25 0 1 1 1.5 0ZM5 3.25a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Zm6.75.75a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm-3 8.75a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Z"/>"##;
}
