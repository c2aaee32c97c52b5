use crate::text::metrics::{TextMeasure, TextStyle};

const ELLIPSIS: &str = "\u{2026}";

/// Greedy word wrap against a pixel budget.
///
/// Lines break only between words. A single word wider than `max_width` gets its own
/// line, truncated with an ellipsis so no line is ever wider than `max_width`.
pub fn wrap_words<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: f64,
    style: TextStyle,
    measure: &mut M,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if measure.measure(word, style) > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let truncated = truncate_to_width(word, max_width, style, measure);
            if !truncated.is_empty() {
                lines.push(truncated);
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure.measure(&candidate, style) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Longest prefix of `word` that fits in `max_width` once an ellipsis is appended.
///
/// Falls back to a bare prefix when even the ellipsis alone does not fit.
pub fn truncate_to_width<M: TextMeasure + ?Sized>(
    word: &str,
    max_width: f64,
    style: TextStyle,
    measure: &mut M,
) -> String {
    if measure.measure(word, style) <= max_width {
        return word.to_string();
    }

    let suffix = if measure.measure(ELLIPSIS, style) <= max_width {
        ELLIPSIS
    } else {
        ""
    };

    let boundaries = word
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(word.len()));
    let mut best = suffix.to_string();
    for end in boundaries {
        let candidate = format!("{}{suffix}", &word[..end]);
        if measure.measure(&candidate, style) > max_width {
            break;
        }
        best = candidate;
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
