//! Selector data structures and the matching algorithm.
//!
//! A [`Selector`] is stored as a chain that points *leftward*: the value you
//! hold describes the subject clause (the rightmost one in the text), and
//! [`Selector::parent`] describes the clause that must match an ancestor.
//!
//! ```text
//! ".form > .row .label"
//!
//! Selector { classes: [label], combinator: Descendant,
//!     parent: Selector { classes: [row], combinator: DirectChild,
//!         parent: Selector { classes: [form], combinator: None } } }
//! ```

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use crate::element::Element;
use crate::error::WcssError;
use crate::parser::parse_selector;

/// How a selector's ancestor requirement relates to the clause before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// First clause of a selector; there is no ancestor requirement.
    #[default]
    None,
    /// Whitespace: some strict ancestor must match the parent clause.
    Descendant,
    /// `>`: the immediate parent must match the parent clause.
    DirectChild,
}

/// A parsed selector: id, classes and an optional ancestor clause.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    id: Option<String>,
    classes: Vec<String>,
    combinator: Combinator,
    parent: Option<Box<Selector>>,
}

impl Selector {
    /// Parses selector text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wcss::{Combinator, Selector};
    ///
    /// let selector = Selector::parse(".super-panel > *").unwrap();
    /// assert!(selector.is_glob());
    /// assert_eq!(selector.combinator(), Combinator::DirectChild);
    /// assert_eq!(selector.parent().unwrap().classes(), ["super-panel"]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, WcssError> {
        parse_selector(text)
    }

    /// The selector matching every element, `*`.
    pub fn glob() -> Self {
        Self::default()
    }

    pub(crate) fn clause(id: Option<String>, classes: Vec<String>) -> Self {
        Self {
            id,
            classes,
            combinator: Combinator::None,
            parent: None,
        }
    }

    pub(crate) fn with_parent(mut self, combinator: Combinator, parent: Selector) -> Self {
        self.combinator = combinator;
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn parent(&self) -> Option<&Selector> {
        self.parent.as_deref()
    }

    /// True when the subject clause constrains neither id nor classes.
    ///
    /// A glob selector may still carry an ancestor requirement (`.a > *`).
    pub fn is_glob(&self) -> bool {
        self.id.is_none() && self.classes.is_empty()
    }

    /// Number of clauses in the chain, including this one.
    pub fn depth(&self) -> usize {
        1 + self.parent.as_ref().map_or(0, |p| p.depth())
    }

    /// Tests the selector against `element` and, through the parent chain,
    /// against its ancestors.
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        self.matches_local(element) && self.matches_ancestry(element)
    }

    /// Like [`matches`](Self::matches), but accepts any value.
    ///
    /// Values that are not an `E` never match.
    pub fn matches_any<E: Element + 'static>(&self, target: &dyn Any) -> bool {
        target
            .downcast_ref::<E>()
            .is_some_and(|element| self.matches(element))
    }

    fn matches_local<E: Element>(&self, element: &E) -> bool {
        if let Some(id) = &self.id {
            if !element.has_name(id) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            if !element.supports_class_list() {
                return false;
            }
            return self.classes.iter().all(|class| element.has_class(class));
        }
        true
    }

    fn matches_ancestry<E: Element>(&self, element: &E) -> bool {
        let Some(parent) = self.parent.as_deref() else {
            return true;
        };

        match self.combinator {
            Combinator::DirectChild => element
                .parent_element()
                .is_some_and(|immediate| parent.matches(&immediate)),
            Combinator::Descendant | Combinator::None => {
                let mut current = element.parent_element();
                while let Some(ancestor) = current {
                    if parent.matches(&ancestor) {
                        return true;
                    }
                    current = ancestor.parent_element();
                }
                false
            }
        }
    }

    fn fmt_clause(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_glob() {
            return f.write_str("*");
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            write!(f, "{parent}")?;
            match self.combinator {
                Combinator::DirectChild => f.write_str(" > ")?,
                Combinator::Descendant | Combinator::None => f.write_str(" ")?,
            }
        }
        self.fmt_clause(f)
    }
}

impl FromStr for Selector {
    type Err = WcssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
