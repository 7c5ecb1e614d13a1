use crate::{
    animation::ease::KeySpline,
    foundation::{
        error::{BadgeError, BadgeResult},
        math::{fmt_fixed, fmt_num},
    },
};

/// Digits emitted for key times in markup.
pub const KEY_TIME_DIGITS: usize = 4;

/// Keyframes of one page over the shared cycle.
///
/// `key_times` are fractions of the cycle, `values` horizontal translations and `splines` the
/// easing applied from each key toward the next.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSchedule {
    pub key_times: Vec<f64>,
    pub values: Vec<f64>,
    pub splines: Vec<KeySpline>,
}

impl AnimationSchedule {
    pub fn validate(&self) -> BadgeResult<()> {
        if self.key_times.len() < 2 {
            return Err(BadgeError::layout("schedule needs at least two key times"));
        }
        if self.key_times.len() != self.values.len() {
            return Err(BadgeError::layout(format!(
                "schedule has {} key times but {} values",
                self.key_times.len(),
                self.values.len()
            )));
        }
        if self.splines.len() + 1 != self.key_times.len() {
            return Err(BadgeError::layout(format!(
                "schedule has {} key times but {} splines",
                self.key_times.len(),
                self.splines.len()
            )));
        }
        if !self.key_times.windows(2).all(|w| w[0] <= w[1]) {
            return Err(BadgeError::layout("key times must be non-decreasing"));
        }
        if self.key_times.first() != Some(&0.0) || self.key_times.last() != Some(&1.0) {
            return Err(BadgeError::layout("key times must start at 0 and end at 1"));
        }
        for s in &self.splines {
            s.validate()?;
        }
        Ok(())
    }

    /// Value at cycle progress `p` in `[0, 1]`, eased by the spline of the active segment.
    pub fn sample(&self, p: f64) -> f64 {
        let Some(first) = self.values.first() else {
            return 0.0;
        };
        let p = p.clamp(0.0, 1.0);
        let idx = self.key_times.partition_point(|&k| k <= p);

        if idx == 0 {
            return *first;
        }
        if idx >= self.key_times.len() {
            return self.values[self.values.len() - 1];
        }

        let (ta, tb) = (self.key_times[idx - 1], self.key_times[idx]);
        let (va, vb) = (self.values[idx - 1], self.values[idx]);
        let span = tb - ta;
        if span <= 0.0 {
            return va;
        }
        let ease = self
            .splines
            .get(idx - 1)
            .copied()
            .unwrap_or(KeySpline::LINEAR);
        let t = ease.apply((p - ta) / span);
        va + (vb - va) * t
    }

    /// `keyTimes` attribute value.
    pub fn key_times_attr(&self) -> String {
        self.key_times
            .iter()
            .map(|&t| {
                if t == 0.0 || t == 1.0 {
                    fmt_num(t)
                } else {
                    fmt_fixed(t, KEY_TIME_DIGITS)
                }
            })
            .collect::<Vec<_>>()
            .join(";")
    }

    /// `values` attribute value.
    pub fn values_attr(&self) -> String {
        self.values
            .iter()
            .map(|&v| fmt_num(v))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// `keySplines` attribute value.
    pub fn key_splines_attr(&self) -> String {
        self.splines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
