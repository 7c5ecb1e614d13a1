//! Generator settings loaded from an optional JSON file.
//!
//! Precedence is: command line (or its environment variable), then the file, then the
//! built-in defaults.

use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    animation::carousel::CarouselOpts,
    foundation::error::{BadgeError, BadgeResult},
    generate::CarouselKind,
};

pub const DEFAULT_PAGE_SECS: f64 = 6.0;
pub const DEFAULT_PAGE_SIZE: usize = 2;
pub const DEFAULT_MAX_REPOS: usize = 12;

/// Per-carousel overrides; unset fields fall back to the flavour's defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselOverrides {
    pub page_size: Option<usize>,
    pub page_secs: Option<f64>,
    pub hold_fraction: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Owner assumed for bare repository names.
    pub owner: Option<String>,
    pub max_repos: Option<usize>,
    pub repos: CarouselOverrides,
    pub trophies: CarouselOverrides,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> BadgeResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn owner(&self) -> &str {
        self.owner.as_deref().unwrap_or_default()
    }

    pub fn max_repos(&self) -> usize {
        self.max_repos.unwrap_or(DEFAULT_MAX_REPOS)
    }

    fn overrides(&self, kind: CarouselKind) -> &CarouselOverrides {
        match kind {
            CarouselKind::Repos => &self.repos,
            CarouselKind::Trophies => &self.trophies,
        }
    }

    /// Resolve validated layout options for `kind`; `page_secs` wins over the file when set.
    pub fn carousel_opts(
        &self,
        kind: CarouselKind,
        page_secs: Option<f64>,
    ) -> BadgeResult<CarouselOpts> {
        let o = self.overrides(kind);
        let opts = CarouselOpts {
            page_size: o.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            page_duration_secs: page_secs.or(o.page_secs).unwrap_or(DEFAULT_PAGE_SECS),
            hold_fraction: o
                .hold_fraction
                .unwrap_or_else(|| kind.default_hold_fraction()),
            viewport_width: kind.theme().frame.viewport.width,
        };
        opts.validate().map_err(|e| {
            BadgeError::validation(format!("{} carousel settings: {e}", kind.name()))
        })?;
        let frame = kind.theme().frame;
        if !frame.fits_row(opts.page_size) {
            return Err(BadgeError::validation(format!(
                "{} carousel settings: page_size {} needs {}px, viewport is {}px",
                kind.name(),
                opts.page_size,
                frame.row_width(opts.page_size),
                frame.viewport.width
            )));
        }
        Ok(opts)
    }
}
