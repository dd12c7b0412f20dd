//! Push button.

use std::rc::Rc;

use crate::{Widget, WidgetKind};

widget_view! {
    /// A push button with a text and action listeners.
    Button => Button
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        let button = Button(Widget::new(WidgetKind::Button));
        button.set_text(text);
        button
    }

    pub fn text(&self) -> String {
        self.state().text.clone().unwrap_or_default()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.state_mut().text = Some(text.into());
    }

    /// Registers a listener run by [`click`](Self::click).
    pub fn on_action(&self, action: impl Fn(&Button) + 'static) {
        let action = Rc::new(move |widget: &Widget| {
            action(&Button(widget.clone()));
        });
        self.state_mut().actions.push(action);
    }

    /// Runs the action listeners in registration order. Disabled buttons do
    /// nothing. Returns how many listeners ran.
    pub fn click(&self) -> usize {
        if !self.is_enabled() {
            return 0;
        }
        // Snapshot so listeners may register more listeners.
        let actions = self.state().actions.clone();
        for action in &actions {
            action(&self.0);
        }
        actions.len()
    }
}

impl Default for Button {
    fn default() -> Self {
        Button::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn click_runs_listeners_in_order() {
        let button = Button::new("OK");
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        for id in 0..3 {
            let log = log.clone();
            button.on_action(move |_| log.borrow_mut().push(id));
        }
        assert_eq!(button.click(), 3);
        assert_eq!(*log.borrow(), [0, 1, 2]);
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let button = Button::new("OK");
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        button.on_action(move |_| counter.set(counter.get() + 1));
        button.set_enabled(false);
        assert_eq!(button.click(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_receives_the_button() {
        let button = Button::new("Load");
        button.on_action(|b| b.set_text("Loading"));
        button.click();
        assert_eq!(button.text(), "Loading");
    }
}
