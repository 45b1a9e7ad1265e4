//! Two-pointer minimum-window scan.

use std::hash::Hash;

use crate::config::{EmptyTarget, SearchConfig};
use crate::freq::FreqTable;
use crate::span::Span;

/// Find the shortest contiguous span of `source` containing every element of
/// `target` at least as many times as it appears there.
///
/// Returns inclusive indices into `source`, or `None` when no window
/// qualifies. Among windows of equal minimal length the leftmost one is
/// returned. An empty target yields `None`; use [`min_window_with`] to pick
/// the alternate policy.
pub fn min_window<T: Eq + Hash>(source: &[T], target: &[T]) -> Option<Span> {
    min_window_with(source, target, &SearchConfig::default())
}

/// [`min_window`] with an explicit [`SearchConfig`].
pub fn min_window_with<T: Eq + Hash>(
    source: &[T],
    target: &[T],
    config: &SearchConfig,
) -> Option<Span> {
    if target.is_empty() {
        return match config.empty_target {
            EmptyTarget::NotFound => None,
            EmptyTarget::EmptyMatch if source.is_empty() => None,
            EmptyTarget::EmptyMatch => Some(Span::new(0, 0)),
        };
    }
    // No window can satisfy a requirement larger than the source.
    if source.is_empty() || target.len() > source.len() {
        return None;
    }

    let required: FreqTable<&T> = FreqTable::from_elems(target.iter());
    let needed = required.distinct();
    let mut window: FreqTable<&T> = FreqTable::new();
    let mut have = 0usize;
    let mut best: Option<Span> = None;
    let mut best_len = usize::MAX;
    let mut left = 0usize;

    for right in 0..source.len() {
        let elem = &source[right];
        let count = window.add(elem);
        // An unrequired element has a requirement of zero, which a live
        // count can never equal, so `have` only moves on the exact step
        // where a required element crosses from below its requirement to
        // meeting it.
        if count == required.count(&elem) {
            have += 1;
        }

        // Invariant: at the top of each iteration the window [left, right]
        // meets every requirement.
        while have == needed {
            let len = right - left + 1;
            // Strict comparison keeps the leftmost span of minimal length.
            if len < best_len {
                best_len = len;
                best = Some(Span::new(left, right));
            }
            let out = &source[left];
            let remaining = window.remove(&out);
            if required.contains(&out) && remaining < required.count(&out) {
                have -= 1;
            }
            left += 1;
        }
    }

    best
}

/// Char-level front-end over string slices.
///
/// Elements are compared as raw `char` scalar values. The returned span
/// holds byte indices into `source` positioned on character boundaries, so
/// `&source[span.range()]` is the matched window.
pub fn min_window_str(source: &str, target: &str) -> Option<Span> {
    min_window_str_with(source, target, &SearchConfig::default())
}

/// [`min_window_str`] with an explicit [`SearchConfig`].
pub fn min_window_str_with(source: &str, target: &str, config: &SearchConfig) -> Option<Span> {
    let (offsets, chars): (Vec<usize>, Vec<char>) = source.char_indices().unzip();
    let want: Vec<char> = target.chars().collect();
    let span = min_window_with(&chars, &want, config)?;
    let start = offsets[span.start];
    let end = offsets[span.end] + chars[span.end].len_utf8() - 1;
    Some(Span::new(start, end))
}
