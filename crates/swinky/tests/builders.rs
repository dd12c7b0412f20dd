//! Integration tests for builders, auto-add and factories.

use swinky::builders::{
    border_pane, button, combo_box, label, panel, scroll_pane, split_pane, text_field,
};
use swinky::types::{Constraint, Layout};
use swinky::{Button, Frame, Label, Panel, StyleTarget, SwinkyError};

// =============================================================================
// Auto-add
// =============================================================================

#[test]
fn builders_attach_to_flow_panels() {
    let root = Panel::new();
    let a = label(&root, |l| l.set_text("a"));
    let b = button(&root, |b| b.set_text("b"));

    assert_eq!(root.child_count(), 2);
    assert!(a.parent().unwrap().ptr_eq(&root));
    assert!(root.child(1).unwrap().ptr_eq(&b));
}

#[test]
fn builders_return_the_initialized_view() {
    let root = Panel::new();
    let field = text_field(&root, |t| {
        t.set_columns(20);
        t.set_text("John Doe");
    });
    let combo = combo_box(&root, |c| {
        for i in 1..=3 {
            c.add_item(format!("Item {i}"));
        }
    });

    assert_eq!(field.columns(), 20);
    assert_eq!(field.text(), "John Doe");
    assert_eq!(combo.item_count(), 3);
    assert_eq!(combo.selected_item().as_deref(), Some("Item 1"));
}

#[test]
fn constraint_layout_children_stay_pending() {
    let root = Panel::with_layout(Layout::GridBag);
    let l = label(&root, |_| {});

    assert_eq!(root.child_count(), 0);
    assert!(l.parent().is_none());
    assert!(l.pending_container().unwrap().ptr_eq(&root));
}

#[test]
fn at_places_pending_widget() {
    let root = Panel::with_layout(Layout::Card);
    let first = label(&root, |l| l.set_text("first"));
    let second = label(&root, |l| l.set_text("second"));

    first.at(Constraint::Card("one".into())).unwrap();
    second.at(Constraint::Card("two".into())).unwrap();

    assert_eq!(root.child_count(), 2);
    assert_eq!(second.constraint(), Some(Constraint::Card("two".into())));
}

#[test]
fn at_replaces_the_occupant() {
    let pane = swinky::BorderPane::new();
    let old = label(&pane, |_| {});
    let new = label(&pane, |_| {});
    old.at(Constraint::North).unwrap();
    new.at(Constraint::North).unwrap();

    assert_eq!(pane.child_count(), 1);
    assert!(pane.north().unwrap().ptr_eq(&new));
    assert!(old.parent().is_none());
}

#[test]
fn leaf_parent_leaves_widget_pending() {
    let parent = Button::new("leaf");
    let l = label(&parent, |_| {});
    assert!(l.parent().is_none());
    assert!(matches!(
        parent.add(&l),
        Err(SwinkyError::NotAContainer { kind: "Button" })
    ));
}

#[test]
fn frame_content_pane_takes_children() {
    let frame = Frame::new("Example");
    let content = frame.content_pane();
    label(&content, |l| l.set_text("Hello"));

    // Building directly on the frame does not attach.
    let stray = label(&frame, |_| {});
    assert!(stray.parent().is_none());

    assert_eq!(frame.title(), "Example");
    assert_eq!(frame.child_count(), 1);
    assert_eq!(content.child_count(), 1);
    assert!(frame.content_pane().ptr_eq(&content));
}

#[test]
fn removed_content_pane_is_recreated() {
    let frame = Frame::new("Example");
    let old = frame.content_pane();
    assert!(frame.remove(&old));

    let fresh = frame.content_pane();
    assert!(!fresh.ptr_eq(&old));
    assert_eq!(fresh.constraint(), Some(Constraint::Center));
    assert_eq!(frame.child_count(), 1);
}

// =============================================================================
// Factories
// =============================================================================

#[test]
fn factory_on_ancestor_is_used() {
    let root = Panel::new();
    root.set_factory(|| Button::new("factory").with_classes("made"));

    let mut made = None;
    panel(&root, |p| {
        made = Some(button(p, |_| {}));
    });
    let made = made.unwrap();

    assert_eq!(made.text(), "factory");
    assert!(made.has_class("made"));
    assert!(made.parent().unwrap().parent().unwrap().ptr_eq(&root));
}

#[test]
fn removed_factory_falls_back_to_default() {
    let root = Panel::new();
    root.set_factory(|| Label::new("factory"));
    assert!(root.remove_factory::<Label>());

    let l = label(&root, |_| {});
    assert_eq!(l.text(), "");
}

// =============================================================================
// Split / scroll / border panes
// =============================================================================

#[test]
fn split_pane_sides() {
    let root = Panel::new();
    let split = split_pane(&root, |s| {
        s.set_left(Some(&label(s, |l| l.set_text("Left"))));
        s.set_right(Some(&label(s, |l| l.set_text("Right"))));
    });

    assert_eq!(root.child_count(), 1);
    assert_eq!(split.child_count(), 2);
    let left = split.left().unwrap();
    assert_eq!(left.constraint(), Some(Constraint::Leading));

    split.set_left(None);
    assert!(split.left().is_none());
    assert!(split.right().is_some());
}

#[test]
fn scroll_pane_holds_one_view() {
    let root = Panel::new();
    let scroll = scroll_pane(&root, |s| {
        label(s, |l| l.set_text("first"));
        label(s, |l| l.set_text("second"));
    });

    assert_eq!(scroll.child_count(), 1);
    let view = scroll.view().unwrap();
    assert_eq!(Label::cast(&view).unwrap().text(), "second");

    scroll.set_view(None);
    assert!(scroll.view().is_none());
}

#[test]
fn border_pane_regions_replace() {
    let root = Panel::new();
    let pane = border_pane(&root, |p| {
        p.set_north(Some(&label(p, |l| l.set_text("North"))));
        p.set_center(Some(&panel(p, |c| {
            button(c, |b| b.set_text("Click Me"));
        })));
    });

    let replacement = Label::new("New North");
    pane.set_north(Some(&replacement));
    assert_eq!(pane.child_count(), 2);
    assert!(pane.north().unwrap().ptr_eq(&replacement));

    pane.set_north(None);
    assert!(pane.north().is_none());
    assert_eq!(pane.center().unwrap().child_count(), 1);
}

// =============================================================================
// Snapshot
// =============================================================================

#[test]
fn hello_tree_outline() {
    let frame = Frame::new("Swinky DSL Example");
    panel(&frame.content_pane(), |p| {
        p.add_class("super-panel");
        label(p, |l| l.set_text("Hello, DSL!"));
        panel(p, |p| {
            label(p, |l| l.set_text("This is a nested panel."));
            border_pane(p, |b| {
                b.set_north(Some(&label(b, |l| l.set_text("North"))));
                b.set_center(Some(&panel(b, |c| {
                    button(c, |b| b.set_text("Click Me"));
                })));
            });
            split_pane(p, |s| {
                s.set_left(Some(&label(s, |l| l.set_text("Left"))));
                s.set_right(Some(&label(s, |l| l.set_text("Right"))));
            });
        });
        button(p, |b| {
            b.set_text("OK");
            b.add_class("green");
        });
    });

    let outline = frame.dump();
    insta::assert_snapshot!(outline.trim_end(), @r#"
    Frame "Swinky DSL Example"
      Panel @center
        Panel.super-panel
          Label "Hello, DSL!"
          Panel
            Label "This is a nested panel."
            BorderPane
              Label @north "North"
              Panel @center
                Button "Click Me"
            SplitPane
              Label @leading "Left"
              Label @trailing "Right"
          Button.green "OK"
    "#);
}
