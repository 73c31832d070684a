//! Errors surfaced by the terminal front-end.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermError {
    /// Writing to or configuring the terminal failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tokio runtime could not be built
    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),
}
