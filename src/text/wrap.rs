/// Truncation marker shared by description fitting and title fitting.
pub const ELLIPSIS: char = '…';

/// Outcome of a greedy wrap at a fixed character budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Wrapped {
    pub(crate) lines: Vec<String>,
    /// Number of leading words that made it into `lines`.
    pub(crate) placed: usize,
}

impl Wrapped {
    /// Every word placed and every line inside the budget.
    pub(crate) fn fits(&self, word_count: usize, chars_per_line: usize) -> bool {
        self.placed == word_count
            && self
                .lines
                .iter()
                .all(|l| l.chars().count() <= chars_per_line)
    }
}

/// Greedy first-fit wrap of `words` into at most `max_lines` lines of `chars_per_line` chars.
///
/// A word longer than the budget is placed alone on its own line. Wrapping stops as soon as
/// `max_lines` lines are full; the remaining words are not placed.
pub(crate) fn greedy_wrap(words: &[&str], chars_per_line: usize, max_lines: usize) -> Wrapped {
    let max_lines = max_lines.max(1);
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0usize;
    let mut cur_words = 0usize;
    let mut placed = 0usize;

    for w in words {
        let w_len = w.chars().count();
        if cur_words == 0 {
            cur.push_str(w);
            cur_len = w_len;
            cur_words = 1;
            continue;
        }
        if cur_len + 1 + w_len <= chars_per_line {
            cur.push(' ');
            cur.push_str(w);
            cur_len += 1 + w_len;
            cur_words += 1;
            continue;
        }

        lines.push(std::mem::take(&mut cur));
        placed += cur_words;
        cur_words = 0;
        if lines.len() == max_lines {
            break;
        }
        cur.push_str(w);
        cur_len = w_len;
        cur_words = 1;
    }

    if cur_words > 0 && lines.len() < max_lines {
        lines.push(cur);
        placed += cur_words;
    }

    Wrapped { lines, placed }
}

/// Shorten `line` so that it ends with [`ELLIPSIS`] and stays within `max_chars`.
pub(crate) fn ellipsize(line: &str, max_chars: usize) -> String {
    let keep = max_chars.saturating_sub(1);
    let mut out: String = line.chars().take(keep).collect();
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push(ELLIPSIS);
    out
}

/// Wrap a card title into at most `max_lines` lines of `max_chars` characters.
///
/// Short titles are returned untouched. Longer titles break on whitespace and `-`; if words
/// remain or the last line is still too long, the last line ends with [`ELLIPSIS`].
pub fn fit_title(title: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let title = title.trim();
    if title.is_empty() {
        return Vec::new();
    }
    if title.chars().count() <= max_chars {
        return vec![title.to_owned()];
    }

    let words: Vec<&str> = title
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .collect();
    let mut wrapped = greedy_wrap(&words, max_chars, max_lines);
    let dropped = wrapped.placed < words.len();

    let last_idx = wrapped.lines.len().saturating_sub(1);
    for (i, line) in wrapped.lines.iter_mut().enumerate() {
        let too_long = line.chars().count() > max_chars;
        if too_long || (dropped && i == last_idx) {
            *line = ellipsize(line, max_chars);
        }
    }
    wrapped.lines
}
