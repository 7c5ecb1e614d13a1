//! badgereel renders animated SVG profile badges.
//!
//! - [`layout`] pages cards into a carousel whose pages share one looping cycle
//! - [`fit`] picks the largest font at which a description fits its box
//! - [`generate`] turns [`RepoSummary`] and [`Trophy`] records into finished documents
//! - [`render_static_card`] draws a single repository card
//! - [`preview::rasterize`] renders a frozen snapshot for inspection
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod foundation;
pub mod generate;
pub mod model;
pub mod render;
pub mod text;

pub use crate::animation::carousel::{
    CarouselLayout, CarouselOpts, CarouselPage, PageWindow, layout,
};
pub use crate::animation::ease::KeySpline;
pub use crate::animation::schedule::AnimationSchedule;
pub use crate::config::GeneratorConfig;
pub use crate::foundation::core::{Frame, Point, Size};
pub use crate::foundation::error::{BadgeError, BadgeResult};
pub use crate::generate::{CarouselKind, repo_carousel, trophy_carousel};
pub use crate::model::repo::{RepoCatalog, RepoNode, RepoRef, RepoSummary, select_repos};
pub use crate::model::trophy::{Grade, Trophy, TrophyStats};
pub use crate::render::CardItem;
pub use crate::render::carousel::{CarouselTheme, Motion, render_carousel};
pub use crate::render::preview;
pub use crate::render::static_card::render_static_card;
pub use crate::text::fit::{FitOpts, FitResult, fit};
pub use crate::text::wrap::fit_title;
