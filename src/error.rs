use thiserror::Error;

/// Errors surfaced by the I/O layer around the search.
///
/// A search that finds no qualifying window is not an error: it is the
/// `None` arm of the result. These variants only cover getting input into
/// the searcher in the first place.
#[derive(Error, Debug)]
pub enum MinspanError {
    /// Source text that cannot be searched as given.
    #[error("input error: {0}")]
    Input(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
