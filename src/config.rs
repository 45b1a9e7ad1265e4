/// Behavior of the search when the target sequence is empty.
///
/// The reference behavior treats an empty target as never matching.
/// [`EmptyTarget::EmptyMatch`] instead treats it as trivially satisfied:
/// spans are inclusive and cannot cover zero elements, so a non-empty source
/// yields the smallest representable window `[0, 0]` and an empty source
/// still yields no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTarget {
    /// An empty target never matches.
    #[default]
    NotFound,
    /// An empty target matches the leading one-element window of a
    /// non-empty source.
    EmptyMatch,
}

/// Runtime configuration for a window search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Policy applied when the target sequence is empty.
    pub empty_target: EmptyTarget,
}
