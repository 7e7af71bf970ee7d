//! Screen engine errors.

use crate::client::ClientError;

/// Errors raised by screens and interactive elements.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A screen was built without any input-handling element.
    #[error("screen creation failed: no interactive element found")]
    NoInteractiveElement,

    /// A screen was built with more than one input-handling element.
    #[error("screen creation failed: multiple interactive elements found")]
    MultipleInteractiveElements,

    /// Navigation or an action was attempted on an empty page. Callers must
    /// filter out empty pages before mounting a list table.
    #[error("list must contain at least one row of data")]
    NoData,

    /// A menu needs at least two options to offer a meaningful choice.
    #[error("menu must contain at least {minimum} options")]
    TooFewOptions { minimum: usize },

    /// A list table was configured without columns.
    #[error("list table requires at least one column")]
    NoColumns,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A data-bound element hit the resource client (page advance).
    #[error(transparent)]
    Client(#[from] ClientError),
}
