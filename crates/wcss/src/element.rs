//! The capability surface a host widget tree exposes to the matcher.

/// A node that selectors can be matched against.
///
/// The matcher only ever asks yes/no questions, so implementations are free to
/// keep their data behind `RefCell`s or other interior mutability without
/// handing out long-lived borrows.
pub trait Element: Sized {
    /// Returns true if the element's stable name equals `name` exactly.
    ///
    /// Elements without a name return false for every input.
    fn has_name(&self, name: &str) -> bool;

    /// Returns true if the element carries a class list at all.
    ///
    /// Class selectors never match elements without this capability.
    fn supports_class_list(&self) -> bool;

    /// Returns true if `class` is in the element's class list.
    fn has_class(&self, class: &str) -> bool;

    /// The element's immediate parent, if it is attached to one.
    fn parent_element(&self) -> Option<Self>;
}
