//! Minimum-window search over finite sequences.
//!
//! Given a source sequence and a target multiset of required elements, find
//! the shortest contiguous span of the source that contains every required
//! element at least as many times as the target demands. The scan is a
//! single two-pointer pass with per-element frequency bookkeeping, O(n + m)
//! time and O(distinct target elements) space, and every piece of state is
//! local to one invocation.

pub mod config;
pub mod error;
pub mod freq;
pub mod search;
pub mod span;

pub use config::{EmptyTarget, SearchConfig};
pub use error::MinspanError;
pub use freq::FreqTable;
pub use search::{min_window, min_window_str, min_window_str_with, min_window_with};
pub use span::Span;
