//! # WCSS - Widget Selectors
//!
//! A small CSS-like selector language for matching nodes of a live widget
//! tree by name, class list and ancestry.
//!
//! ## Quick Start
//!
//! ```rust
//! use wcss::{Element, Selector};
//!
//! #[derive(Clone)]
//! struct Node {
//!     name: Option<&'static str>,
//!     classes: Vec<&'static str>,
//!     parent: Option<Box<Node>>,
//! }
//!
//! impl Element for Node {
//!     fn has_name(&self, name: &str) -> bool {
//!         self.name == Some(name)
//!     }
//!     fn supports_class_list(&self) -> bool {
//!         true
//!     }
//!     fn has_class(&self, class: &str) -> bool {
//!         self.classes.contains(&class)
//!     }
//!     fn parent_element(&self) -> Option<Self> {
//!         self.parent.as_deref().cloned()
//!     }
//! }
//!
//! let form = Node { name: Some("form"), classes: vec![], parent: None };
//! let field = Node { name: None, classes: vec!["field", "wide"], parent: Some(Box::new(form)) };
//!
//! assert!(Selector::parse("#form > .field").unwrap().matches(&field));
//! assert!(!Selector::parse(".field.narrow").unwrap().matches(&field));
//! ```
//!
//! ## Supported Syntax
//!
//! - ID clauses: `#submit`, optionally followed by classes: `#submit.primary`
//! - Class clauses: `.primary`, `.error.disabled`
//! - Glob: `*` (and any token not starting with `#` or `.`)
//! - Descendant combinator: `.form .field`
//! - Child combinator: `.form > .field`
//!
//! ## Modules
//!
//! - [`selector`]: selector model and matching
//! - [`element`]: the trait host trees implement
//! - [`error`]: parse errors

pub mod element;
pub mod error;
mod parser;
pub mod selector;

pub use element::Element;
pub use error::WcssError;
pub use selector::{Combinator, Selector};
