//! Umbrella crate: the widget DSL ([`swinky`]) and its selector language
//! ([`wcss`]).

pub use swinky::*;
pub use wcss;
pub use wcss::{Combinator, Element, Selector, WcssError};
