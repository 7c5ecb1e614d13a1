//! End-to-end generators: records in, SVG document out.

use crate::{
    animation::carousel::{CarouselOpts, layout},
    foundation::error::BadgeResult,
    model::{repo::RepoSummary, trophy::Trophy},
    render::{
        CardItem,
        carousel::{CarouselTheme, Motion, render_carousel},
    },
};

/// The two carousel flavours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselKind {
    Repos,
    Trophies,
}

impl CarouselKind {
    pub fn theme(self) -> CarouselTheme {
        match self {
            Self::Repos => CarouselTheme::REPOS,
            Self::Trophies => CarouselTheme::TROPHIES,
        }
    }

    /// Repo cards carry more text, so they dwell for a smaller share of the page.
    pub fn default_hold_fraction(self) -> f64 {
        match self {
            Self::Repos => 0.55,
            Self::Trophies => 0.75,
        }
    }

    /// Environment variable holding the page duration for this flavour.
    pub fn page_secs_env(self) -> &'static str {
        match self {
            Self::Repos => "REPO_PAGE_SEC",
            Self::Trophies => "TROPHIES_PAGE_SEC",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Repos => "repos",
            Self::Trophies => "trophies",
        }
    }
}

fn carousel<T: CardItem>(
    kind: CarouselKind,
    items: &[T],
    opts: &CarouselOpts,
    motion: Motion,
) -> BadgeResult<String> {
    let theme = kind.theme();
    let opts = CarouselOpts {
        viewport_width: theme.frame.viewport.width,
        ..*opts
    };
    let l = layout(items, &opts)?;
    let svg = render_carousel(&l, &theme, motion)?;
    tracing::info!(
        kind = kind.name(),
        items = items.len(),
        pages = l.pages.len(),
        cycle_secs = l.total_cycle_secs,
        bytes = svg.len(),
        "carousel rendered"
    );
    Ok(svg)
}

/// Animated (or frozen) repo carousel.
#[tracing::instrument(skip_all)]
pub fn repo_carousel(
    repos: &[RepoSummary],
    opts: &CarouselOpts,
    motion: Motion,
) -> BadgeResult<String> {
    carousel(CarouselKind::Repos, repos, opts, motion)
}

/// Animated (or frozen) trophy carousel.
#[tracing::instrument(skip_all)]
pub fn trophy_carousel(
    trophies: &[Trophy],
    opts: &CarouselOpts,
    motion: Motion,
) -> BadgeResult<String> {
    carousel(CarouselKind::Trophies, trophies, opts, motion)
}
