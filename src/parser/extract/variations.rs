use std::ops::Range;

use crate::vocab::Vocabulary;

/// Indices of body lines naming a variation, in source order. Pure lexical
/// membership against the variation vocabulary; no positional constraint.
pub fn candidates(body: &[String], vocab: &Vocabulary) -> Vec<usize> {
    body.iter()
        .enumerate()
        .filter(|(_, line)| vocab.is_variation(line))
        .map(|(i, _)| i)
        .collect()
}

/// Field-resolution window for each candidate: from the line after the
/// candidate to the next candidate or `lookahead` lines, whichever is
/// nearer. Bounding keeps a later variation's values from leaking into an
/// earlier one.
pub fn windows(body_len: usize, candidates: &[usize], lookahead: usize) -> Vec<Range<usize>> {
    candidates
        .iter()
        .enumerate()
        .map(|(n, &c)| {
            let start = c + 1;
            let mut end = body_len.min(start + lookahead);
            if let Some(&next) = candidates.get(n + 1) {
                end = end.min(next);
            }
            start..end.max(start)
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn body(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn candidates_in_source_order() {
        let b = body(&["上半身（黒）", "price", "¥ 3,000", "下半身（白）", "price"]);
        assert_eq!(candidates(&b, &Vocabulary::default()), [0, 3]);
    }

    #[test]
    fn value_lines_are_not_candidates() {
        let b = body(&["price", "¥ 2,500", "stock", "5"]);
        assert!(candidates(&b, &Vocabulary::default()).is_empty());
    }

    #[test]
    fn window_bounded_by_next_candidate() {
        let w = windows(10, &[0, 4], 20);
        assert_eq!(w, [1..4, 5..10]);
    }

    #[test]
    fn window_capped_by_lookahead() {
        let w = windows(100, &[0], 20);
        assert_eq!(w, [1..21]);
    }

    #[test]
    fn adjacent_candidates_give_empty_window() {
        let w = windows(5, &[0, 1], 20);
        assert_eq!(w, [1..1, 2..5]);
    }
}
