//! Integration tests for selector matching against a small in-memory tree.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wcss::{Element, Selector};

// =============================================================================
// Test Tree
// =============================================================================

struct NodeData {
    name: Option<String>,
    /// `None` models a node without the class-list capability.
    classes: Option<Vec<String>>,
    parent: RefCell<Weak<NodeData>>,
}

#[derive(Clone)]
struct Node(Rc<NodeData>);

impl Node {
    fn new(name: Option<&str>, classes: &str) -> Self {
        Node(Rc::new(NodeData {
            name: name.map(String::from),
            classes: Some(classes.split_whitespace().map(String::from).collect()),
            parent: RefCell::new(Weak::new()),
        }))
    }

    fn without_class_list(name: Option<&str>) -> Self {
        Node(Rc::new(NodeData {
            name: name.map(String::from),
            classes: None,
            parent: RefCell::new(Weak::new()),
        }))
    }

    fn add(&self, child: &Node) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
    }
}

impl Element for Node {
    fn has_name(&self, name: &str) -> bool {
        self.0.name.as_deref() == Some(name)
    }

    fn supports_class_list(&self) -> bool {
        self.0.classes.is_some()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0
            .classes
            .as_ref()
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(Node)
    }
}

fn sel(text: &str) -> Selector {
    Selector::parse(text).unwrap()
}

// =============================================================================
// ID Matching
// =============================================================================

#[test]
fn id_selector_matches_name() {
    assert!(sel("#myId").matches(&Node::new(Some("myId"), "")));
}

#[test]
fn id_selector_fails_on_other_name() {
    assert!(!sel("#myId").matches(&Node::new(Some("otherId"), "")));
}

#[test]
fn id_selector_is_case_sensitive() {
    assert!(!sel("#myid").matches(&Node::new(Some("myId"), "")));
}

#[test]
fn id_selector_never_matches_unnamed_node() {
    assert!(!sel("#myId").matches(&Node::new(None, "")));
}

#[test]
fn id_selector_ignores_classes() {
    assert!(sel("#myId").matches(&Node::new(Some("myId"), "irrelevant")));
    assert!(sel("#myId").matches(&Node::without_class_list(Some("myId"))));
}

#[test]
fn id_and_class_selector_requires_both() {
    assert!(sel("#myId.foo").matches(&Node::new(Some("myId"), "foo bar")));
    assert!(!sel("#myId.foo").matches(&Node::new(Some("myId"), "bar")));
    assert!(!sel("#myId.foo").matches(&Node::new(Some("other"), "foo")));
}

// =============================================================================
// Class Matching
// =============================================================================

#[test]
fn class_selector_matches_subset() {
    assert!(sel(".foo").matches(&Node::new(None, "foo")));
    assert!(sel(".foo.bar").matches(&Node::new(None, "foo bar baz")));
    assert!(!sel(".foo.bar").matches(&Node::new(None, "foo baz")));
}

#[test]
fn class_selector_ignores_name() {
    assert!(sel(".foo").matches(&Node::new(Some("nonMatchingId"), "foo")));
}

#[test]
fn class_selector_never_matches_without_capability() {
    assert!(!sel(".foo").matches(&Node::without_class_list(Some("anything"))));
}

#[test]
fn class_selector_fails_on_empty_class_list() {
    assert!(!sel(".foo").matches(&Node::new(None, "")));
}

// =============================================================================
// Glob Matching
// =============================================================================

#[test]
fn glob_matches_everything_without_ancestor_constraint() {
    for node in [
        Node::new(None, ""),
        Node::new(Some("x"), "a b"),
        Node::without_class_list(None),
    ] {
        assert!(sel("*").matches(&node));
        assert!(sel("button").matches(&node));
    }
}

#[test]
fn glob_with_parent_requires_parent() {
    let panel = Node::new(None, "super-panel");
    let label = Node::new(None, "");
    panel.add(&label);

    assert!(sel(".super-panel > *").matches(&label));
    assert!(!sel(".super-panel > *").matches(&panel));
}

// =============================================================================
// Ancestor Matching
// =============================================================================

fn three_levels() -> (Node, Node, Node) {
    let grandparent = Node::new(Some("parent"), "foo");
    let parent = Node::new(Some("intermediate"), "");
    let child = Node::new(Some("child"), "bar");
    grandparent.add(&parent);
    parent.add(&child);
    (grandparent, parent, child)
}

#[test]
fn descendant_matches_immediate_parent() {
    let parent = Node::new(Some("parent"), "");
    let child = Node::new(Some("child"), "");
    parent.add(&child);
    assert!(sel("#parent #child").matches(&child));
}

#[test]
fn descendant_fails_without_matching_ancestor() {
    let parent = Node::new(Some("other"), "");
    let child = Node::new(Some("child"), "");
    parent.add(&child);
    assert!(!sel("#parent #child").matches(&child));
}

#[test]
fn descendant_matches_distant_ancestor() {
    let (_grandparent, _parent, child) = three_levels();
    assert!(sel(".foo .bar").matches(&child));
    assert!(sel("#parent #child").matches(&child));
}

#[test]
fn direct_child_matches_immediate_parent() {
    let parent = Node::new(Some("parent"), "");
    let child = Node::new(Some("child"), "");
    parent.add(&child);
    assert!(sel("#parent > #child").matches(&child));
}

#[test]
fn direct_child_fails_when_match_is_not_immediate() {
    let (_grandparent, _parent, child) = three_levels();
    assert!(!sel(".foo > .bar").matches(&child));
    assert!(!sel("#parent > #child").matches(&child));
}

#[test]
fn ancestor_clause_fails_at_root() {
    let orphan = Node::new(Some("child"), "bar");
    assert!(!sel(".foo .bar").matches(&orphan));
    assert!(!sel(".foo > .bar").matches(&orphan));
}

#[test]
fn ancestor_search_never_considers_the_node_itself() {
    let node = Node::new(None, "foo bar");
    assert!(!sel(".foo .bar").matches(&node));
}

#[test]
fn mixed_combinators_walk_from_the_subject() {
    // root.form > row.row > cell > label.label
    let form = Node::new(Some("form"), "");
    let row = Node::new(None, "row");
    let cell = Node::new(None, "");
    let label = Node::new(None, "label");
    form.add(&row);
    row.add(&cell);
    cell.add(&label);

    assert!(sel("#form > .row .label").matches(&label));
    assert!(!sel("#form > .row > .label").matches(&label));
    assert!(!sel("#form .row > .label").matches(&label));
}

// =============================================================================
// Non-element Input
// =============================================================================

#[test]
fn non_element_input_never_matches() {
    let not_a_node = "I am not a component";
    assert!(!sel(".foo").matches_any::<Node>(&not_a_node));
    assert!(!sel("*").matches_any::<Node>(&42_u32));
}

#[test]
fn element_input_through_any_matches() {
    let node = Node::new(None, "foo");
    assert!(sel(".foo").matches_any::<Node>(&node));
}
