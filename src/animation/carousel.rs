//! Carousel layout: pages of cards sliding through a shared animation cycle.
//!
//! Every page animates over the same cycle of `pages * page_duration` seconds. Pages start
//! together at `0s` and repeat together, so the carousel reads as one round-robin sequence
//! instead of N independently looping slides drifting apart.

use crate::{
    animation::{ease::KeySpline, schedule::AnimationSchedule},
    foundation::{
        error::{BadgeError, BadgeResult},
        math::quantize_key_times,
    },
};

/// Decimal digits kept for key times.
const KEY_TIME_PRECISION: u32 = 4;

/// Carousel tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselOpts {
    /// Cards per page (>= 1).
    pub page_size: usize,
    /// Seconds each page owns within the cycle (> 0).
    pub page_duration_secs: f64,
    /// Fraction of a page window spent centered, in `(0, 1)`.
    pub hold_fraction: f64,
    /// Slide distance; pages rest at `+W` before their window and `-W` after it.
    pub viewport_width: f64,
}

impl CarouselOpts {
    pub fn validate(&self) -> BadgeResult<()> {
        if self.page_size == 0 {
            return Err(BadgeError::validation("page_size must be >= 1"));
        }
        if !self.page_duration_secs.is_finite() || self.page_duration_secs <= 0.0 {
            return Err(BadgeError::validation(format!(
                "page_duration_secs must be finite and > 0, got {}",
                self.page_duration_secs
            )));
        }
        if !(self.hold_fraction > 0.0 && self.hold_fraction < 1.0) {
            return Err(BadgeError::validation(format!(
                "hold_fraction must be in (0, 1), got {}",
                self.hold_fraction
            )));
        }
        if !self.viewport_width.is_finite() || self.viewport_width <= 0.0 {
            return Err(BadgeError::validation("viewport_width must be finite and > 0"));
        }
        Ok(())
    }
}

/// Unrounded breakpoints of one page inside the unit cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PageWindow {
    /// Window start; the page begins entering here.
    pub t0: f64,
    /// End of the entrance, start of the dwell.
    pub enter_end: f64,
    /// End of the dwell, start of the exit.
    pub hold_end: f64,
    /// Window end; the page is fully off-screen left.
    pub t1: f64,
}

/// One page: a contiguous slice of the input and its schedule.
#[derive(Clone, Debug)]
pub struct CarouselPage<'a, T> {
    pub index: usize,
    pub items: &'a [T],
    pub window: PageWindow,
    pub schedule: AnimationSchedule,
}

/// Result of [`layout`].
#[derive(Clone, Debug)]
pub struct CarouselLayout<'a, T> {
    /// Length of the shared cycle in seconds.
    pub total_cycle_secs: f64,
    /// Cards per page the items were grouped by.
    pub page_size: usize,
    pub pages: Vec<CarouselPage<'a, T>>,
}

impl<T> CarouselLayout<'_, T> {
    /// Page centered (or closest to its dwell) at `at_secs`, wrapping around the cycle.
    pub fn active_page(&self, at_secs: f64) -> usize {
        let n = self.pages.len().max(1);
        let p = self.cycle_progress(at_secs);
        ((p * n as f64).floor() as usize).min(n - 1)
    }

    /// Cycle progress in `[0, 1)` for an absolute time.
    pub fn cycle_progress(&self, at_secs: f64) -> f64 {
        if !at_secs.is_finite() || self.total_cycle_secs <= 0.0 {
            return 0.0;
        }
        at_secs.rem_euclid(self.total_cycle_secs) / self.total_cycle_secs
    }
}

/// Group `items` into pages and compute each page's keyframes over the shared cycle.
///
/// Errors when `items` is empty or `opts` breaks a precondition.
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn layout<'a, T>(items: &'a [T], opts: &CarouselOpts) -> BadgeResult<CarouselLayout<'a, T>> {
    opts.validate()?;
    if items.is_empty() {
        return Err(BadgeError::validation("carousel needs at least one item"));
    }

    let n = items.len().div_ceil(opts.page_size);
    let total_cycle_secs = n as f64 * opts.page_duration_secs;
    let page_span = opts.page_duration_secs / total_cycle_secs;
    let transition = (1.0 - opts.hold_fraction) / 2.0;
    let w = opts.viewport_width;

    let pages = items
        .chunks(opts.page_size)
        .enumerate()
        .map(|(i, chunk)| -> BadgeResult<CarouselPage<'a, T>> {
            let window = PageWindow {
                t0: i as f64 / n as f64,
                enter_end: i as f64 / n as f64 + transition * page_span,
                hold_end: i as f64 / n as f64 + (1.0 - transition) * page_span,
                t1: (i + 1) as f64 / n as f64,
            };

            let mut key_times = vec![
                0.0,
                window.t0,
                window.enter_end,
                window.hold_end,
                window.t1,
                1.0,
            ];
            quantize_key_times(&mut key_times, KEY_TIME_PRECISION);

            let schedule = AnimationSchedule {
                key_times,
                values: vec![w, w, 0.0, 0.0, -w, -w],
                splines: vec![
                    KeySpline::LINEAR,
                    KeySpline::EASE_IN,
                    KeySpline::EASE_HOLD,
                    KeySpline::EASE_OUT,
                    KeySpline::LINEAR,
                ],
            };
            schedule.validate()?;

            Ok(CarouselPage {
                index: i,
                items: chunk,
                window,
                schedule,
            })
        })
        .collect::<BadgeResult<Vec<_>>>()?;

    tracing::debug!(pages = n, total_cycle_secs, "carousel laid out");
    Ok(CarouselLayout {
        total_cycle_secs,
        page_size: opts.page_size,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(page_size: usize, secs: f64, hold: f64) -> CarouselOpts {
        CarouselOpts {
            page_size,
            page_duration_secs: secs,
            hold_fraction: hold,
            viewport_width: 880.0,
        }
    }

    #[test]
    fn four_items_two_per_page() {
        let items = ["A", "B", "C", "D"];
        let l = layout(&items, &opts(2, 6.0, 0.55)).unwrap();
        assert_eq!(l.pages.len(), 2);
        assert_eq!(l.page_size, 2);
        assert_eq!(l.total_cycle_secs, 12.0);
        assert_eq!(l.pages[0].window.t0, 0.0);
        assert_eq!(l.pages[0].window.t1, 0.5);
        assert_eq!(l.pages[1].window.t0, 0.5);
        assert_eq!(l.pages[1].window.t1, 1.0);
        assert_eq!(l.pages[0].items, &["A", "B"]);
        assert_eq!(l.pages[1].items, &["C", "D"]);
        assert_eq!(
            l.pages[0].schedule.key_times,
            vec![0.0, 0.0, 0.1125, 0.3875, 0.5, 1.0]
        );
        assert_eq!(
            l.pages[1].schedule.key_times,
            vec![0.0, 0.5, 0.6125, 0.8875, 1.0, 1.0]
        );
    }

    #[test]
    fn last_page_may_be_short() {
        let items = [1, 2, 3];
        let l = layout(&items, &opts(2, 6.0, 0.55)).unwrap();
        assert_eq!(l.pages.len(), 2);
        assert_eq!(l.pages[1].items, &[3]);
    }

    #[test]
    fn single_page_still_moves() {
        let l = layout(&["only"], &opts(2, 5.0, 0.75)).unwrap();
        assert_eq!(l.pages.len(), 1);
        assert_eq!(l.total_cycle_secs, 5.0);
        let s = &l.pages[0].schedule;
        assert_eq!(s.values, vec![880.0, 880.0, 0.0, 0.0, -880.0, -880.0]);
        assert_eq!(s.sample(0.0), 880.0);
        assert_eq!(s.sample(0.5), 0.0);
        assert_eq!(s.sample(1.0), -880.0);
    }

    #[test]
    fn splines_follow_segment_roles() {
        let l = layout(&[(); 4], &opts(2, 6.0, 0.55)).unwrap();
        for p in &l.pages {
            assert_eq!(p.schedule.splines[0], KeySpline::LINEAR);
            assert_eq!(p.schedule.splines[1], KeySpline::EASE_IN);
            assert_eq!(p.schedule.splines[2], KeySpline::EASE_HOLD);
            assert_eq!(p.schedule.splines[3], KeySpline::EASE_OUT);
            assert_eq!(p.schedule.splines[4], KeySpline::LINEAR);
        }
    }

    #[test]
    fn rejects_bad_preconditions() {
        let empty: [u8; 0] = [];
        assert!(layout(&empty, &opts(2, 6.0, 0.5)).is_err());
        assert!(layout(&[1], &opts(0, 6.0, 0.5)).is_err());
        assert!(layout(&[1], &opts(2, 0.0, 0.5)).is_err());
        assert!(layout(&[1], &opts(2, f64::INFINITY, 0.5)).is_err());
        assert!(layout(&[1], &opts(2, 6.0, 0.0)).is_err());
        assert!(layout(&[1], &opts(2, 6.0, 1.0)).is_err());
        assert!(layout(&[1], &opts(2, 6.0, f64::NAN)).is_err());
    }

    #[test]
    fn active_page_wraps_around_cycle() {
        let l = layout(&[(); 6], &opts(2, 4.0, 0.5)).unwrap();
        assert_eq!(l.total_cycle_secs, 12.0);
        assert_eq!(l.active_page(0.0), 0);
        assert_eq!(l.active_page(5.0), 1);
        assert_eq!(l.active_page(11.9), 2);
        assert_eq!(l.active_page(12.5), 0);
        assert_eq!(l.active_page(-1.0), 2);
    }
}
