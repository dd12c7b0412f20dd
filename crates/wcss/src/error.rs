//! Error types for selector parsing.

use thiserror::Error;

/// Errors that can occur while turning selector text into a [`Selector`](crate::Selector).
///
/// Parsing is deliberately lenient: unknown clause shapes degrade to glob
/// clauses. The only hard failure is a combinator that has nothing to combine.
///
/// # Examples
///
/// ```rust
/// use wcss::{Selector, WcssError};
///
/// let err = Selector::parse(".panel >").unwrap_err();
/// assert!(matches!(err, WcssError::MalformedSelector { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WcssError {
    /// A `>` combinator is missing the clause on one of its sides.
    #[error("malformed selector `{selector}`: {reason}")]
    MalformedSelector {
        /// The selector text as given by the caller.
        selector: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}
