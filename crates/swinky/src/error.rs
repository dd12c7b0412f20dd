//! Error types for widget tree manipulation and stylesheet registration.

use thiserror::Error;
use wcss::WcssError;

use crate::types::Layout;

/// Errors produced by the widget tree, stylesheets and the UI dispatcher.
///
/// Style *matching* never fails; a style that does not fit a widget simply
/// does not apply. Only registration (bad selector text) and structural tree
/// edits can go wrong.
#[derive(Error, Debug)]
pub enum SwinkyError {
    /// Selector text could not be parsed at registration time.
    #[error(transparent)]
    Selector(#[from] WcssError),

    /// A child was added to a widget that cannot hold children.
    #[error("{kind} cannot hold children")]
    NotAContainer { kind: &'static str },

    /// A widget was added to itself or to one of its own descendants.
    #[error("adding {child} to {parent} would create a cycle")]
    WouldCreateCycle { parent: String, child: String },

    /// [`Widget::at`](crate::Widget::at) was called on a widget that was not
    /// built inside a container.
    #[error("{kind} was not built inside a container")]
    NoPendingContainer { kind: &'static str },

    /// A child was appended without a placement constraint to a container
    /// whose layout needs one.
    #[error("{kind} uses a {layout:?} layout; children need a placement constraint")]
    ConstraintRequired { kind: &'static str, layout: Layout },

    /// The UI dispatcher was dropped before a job could be queued.
    #[error("UI dispatcher has shut down")]
    DispatcherClosed,

    #[error("a logger is already installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),

    #[error("I/O error opening log file")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SwinkyError> = std::result::Result<T, E>;
