//! Fit a paragraph into a box by shrinking the font until the greedy wrap places every word.
//!
//! Widths are estimated from an average character width (`font_size * avg_char_width_factor`),
//! not from glyph metrics.

use crate::{
    foundation::error::{BadgeError, BadgeResult},
    text::wrap::{ellipsize, greedy_wrap},
};

/// Never estimate fewer characters per line than this.
pub const MIN_CHARS_PER_LINE: usize = 8;

/// Largest accepted starting font size.
pub const MAX_FONT_SIZE: f64 = 1024.0;

/// Search bounds and metrics for [`fit`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitOpts {
    pub start_font_size: f64,
    pub min_font_size: f64,
    /// Extra space added to the font size to get the line height.
    pub line_spacing: f64,
    /// Average glyph advance as a fraction of the font size.
    pub avg_char_width_factor: f64,
}

impl Default for FitOpts {
    fn default() -> Self {
        Self {
            start_font_size: 13.0,
            min_font_size: 9.0,
            line_spacing: 2.0,
            avg_char_width_factor: 0.58,
        }
    }
}

impl FitOpts {
    pub fn validate(&self) -> BadgeResult<()> {
        let finite = [
            self.start_font_size,
            self.min_font_size,
            self.line_spacing,
            self.avg_char_width_factor,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(BadgeError::validation("fit options must be finite"));
        }
        if self.min_font_size <= 0.0 || self.start_font_size < self.min_font_size {
            return Err(BadgeError::validation(format!(
                "font sizes must satisfy 0 < min ({}) <= start ({})",
                self.min_font_size, self.start_font_size
            )));
        }
        if self.start_font_size > MAX_FONT_SIZE {
            return Err(BadgeError::validation(format!(
                "start_font_size must be <= {MAX_FONT_SIZE}, got {}",
                self.start_font_size
            )));
        }
        if self.avg_char_width_factor <= 0.0 {
            return Err(BadgeError::validation("avg_char_width_factor must be > 0"));
        }
        if self.line_spacing < 0.0 {
            return Err(BadgeError::validation("line_spacing must be >= 0"));
        }
        Ok(())
    }
}

/// Lines chosen by [`fit`] and the font they were measured for.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FitResult {
    pub lines: Vec<String>,
    pub font_size: f64,
    pub line_height: f64,
    /// Words were dropped or a line was cut at the minimum font size; the cut is marked with an
    /// ellipsis.
    pub truncated: bool,
}

struct Metrics {
    line_height: f64,
    max_lines: usize,
    chars_per_line: usize,
}

fn metrics(font: f64, box_width: f64, box_height: f64, opts: &FitOpts) -> Metrics {
    let line_height = font + opts.line_spacing;
    let max_lines = ((box_height / line_height).floor() as usize).max(1);
    let chars_per_line = ((box_width / (font * opts.avg_char_width_factor)).floor() as usize)
        .max(MIN_CHARS_PER_LINE);
    Metrics {
        line_height,
        max_lines,
        chars_per_line,
    }
}

/// Sizes tried by [`fit`]: `start`, `start - 1`, ... down to `min`, which is always included.
fn candidate_sizes(opts: &FitOpts) -> impl Iterator<Item = f64> {
    let (start, min) = (opts.start_font_size, opts.min_font_size);
    let steps = (start - min).floor() as u64;
    let last = start - steps as f64;
    (0..=steps)
        .map(move |s| start - s as f64)
        .chain((last > min).then_some(min))
}

/// Largest font size in `[min, start]` (step 1, plus `min` itself) at which `text` wraps into
/// the box.
///
/// When even the minimum size does not fit, the wrap at the minimum size is returned with the
/// overflow dropped and marked by an ellipsis on the last line.
pub fn fit(text: &str, box_width: f64, box_height: f64, opts: &FitOpts) -> BadgeResult<FitResult> {
    opts.validate()?;
    if !(box_width.is_finite() && box_height.is_finite()) || box_width < 0.0 || box_height < 0.0
    {
        return Err(BadgeError::validation(
            "box dimensions must be finite and >= 0",
        ));
    }

    let words: Vec<&str> = text.split_whitespace().collect();

    for font in candidate_sizes(opts) {
        let m = metrics(font, box_width, box_height, opts);
        let wrapped = greedy_wrap(&words, m.chars_per_line, m.max_lines);
        if wrapped.fits(words.len(), m.chars_per_line) {
            return Ok(FitResult {
                lines: wrapped.lines,
                font_size: font,
                line_height: m.line_height,
                truncated: false,
            });
        }
    }

    let font = opts.min_font_size;
    let m = metrics(font, box_width, box_height, opts);
    let wrapped = greedy_wrap(&words, m.chars_per_line, m.max_lines);
    let dropped = wrapped.placed < words.len();
    tracing::debug!(
        words = words.len(),
        placed = wrapped.placed,
        font_size = font,
        "text does not fit at minimum font size; truncating"
    );

    let last_idx = wrapped.lines.len().saturating_sub(1);
    let mut cut = dropped;
    let lines = wrapped
        .lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if line.chars().count() > m.chars_per_line || (dropped && i == last_idx) {
                cut = true;
                ellipsize(&line, m.chars_per_line)
            } else {
                line
            }
        })
        .collect();

    Ok(FitResult {
        lines,
        font_size: font,
        line_height: m.line_height,
        truncated: cut,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::wrap::ELLIPSIS;

    #[test]
    fn empty_text_has_no_lines() {
        let r = fit("", 380.0, 76.0, &FitOpts::default()).unwrap();
        assert!(r.lines.is_empty());
        assert_eq!(r.font_size, 13.0);
        assert!(!r.truncated);
    }

    #[test]
    fn short_text_is_one_line_at_start_size() {
        let r = fit("Fast badges.", 380.0, 76.0, &FitOpts::default()).unwrap();
        assert_eq!(r.lines, vec!["Fast badges."]);
        assert_eq!(r.font_size, 13.0);
        assert_eq!(r.line_height, 15.0);
    }

    #[test]
    fn shrinks_font_before_dropping_words() {
        // Two lines at every size; only 9px gives the 17 chars per line this needs.
        let opts = FitOpts::default();
        let text = "alpha beta gamma delta epsil";
        let r = fit(text, 92.0, 30.0, &opts).unwrap();
        assert_eq!(r.font_size, 9.0);
        assert!(!r.truncated);
        assert_eq!(r.lines.join(" "), text);
    }

    #[test]
    fn fractional_bounds_still_try_min_size() {
        let opts = FitOpts {
            start_font_size: 13.5,
            ..FitOpts::default()
        };
        let text = "alpha beta gammaa delta epsil";
        let r = fit(text, 92.0, 30.0, &opts).unwrap();
        assert_eq!(r.font_size, 9.0);
        assert!(!r.truncated);
        assert_eq!(r.lines, vec!["alpha beta gammaa", "delta epsil"]);
    }

    #[test]
    fn candidate_sizes_step_down_to_min() {
        let opts = FitOpts {
            start_font_size: 11.5,
            ..FitOpts::default()
        };
        let sizes: Vec<f64> = candidate_sizes(&opts).collect();
        assert_eq!(sizes, vec![11.5, 10.5, 9.5, 9.0]);
        let sizes: Vec<f64> = candidate_sizes(&FitOpts::default()).collect();
        assert_eq!(sizes, vec![13.0, 12.0, 11.0, 10.0, 9.0]);
    }

    #[test]
    fn huge_start_size_is_rejected() {
        let opts = FitOpts {
            start_font_size: 1e17,
            min_font_size: 1.0,
            ..FitOpts::default()
        };
        assert!(fit("a b c", 1.0, 1.0, &opts).is_err());
    }

    #[test]
    fn largest_start_size_terminates() {
        let opts = FitOpts {
            start_font_size: MAX_FONT_SIZE,
            min_font_size: 1.0,
            ..FitOpts::default()
        };
        let r = fit("a b c d e f g h i j k l m n o p", 1.0, 1.0, &opts).unwrap();
        assert_eq!(r.font_size, 1.0);
        assert!(r.truncated);
    }

    #[test]
    fn floor_truncates_with_ellipsis() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let r = fit(text, 50.0, 12.0, &FitOpts::default()).unwrap();
        assert_eq!(r.font_size, 9.0);
        assert!(r.truncated);
        assert_eq!(r.lines.len(), 1);
        assert!(r.lines[0].ends_with(ELLIPSIS));
        assert_eq!(r.lines[0], "one two…");
    }

    #[test]
    fn collapses_whitespace_between_words() {
        let r = fit("  a \n\t b  ", 380.0, 76.0, &FitOpts::default()).unwrap();
        assert_eq!(r.lines, vec!["a b"]);
    }

    #[test]
    fn rejects_bad_options() {
        let opts = FitOpts {
            min_font_size: 20.0,
            ..FitOpts::default()
        };
        assert!(fit("x", 10.0, 10.0, &opts).is_err());
        assert!(fit("x", -1.0, 10.0, &FitOpts::default()).is_err());
    }
}
