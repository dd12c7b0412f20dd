//! Drop-down selection.

use crate::{Widget, WidgetKind};

widget_view! {
    /// A drop-down list of string items with at most one selection.
    ComboBox => ComboBox
}

impl ComboBox {
    pub fn new() -> Self {
        ComboBox(Widget::new(WidgetKind::ComboBox))
    }

    pub fn items(&self) -> Vec<String> {
        self.state().items.clone()
    }

    pub fn item_count(&self) -> usize {
        self.state().items.len()
    }

    /// Appends an item. The first item added becomes the selection.
    pub fn add_item(&self, item: impl Into<String>) {
        let mut state = self.state_mut();
        state.items.push(item.into());
        if state.selected.is_none() {
            state.selected = Some(0);
        }
    }

    pub fn remove_all_items(&self) {
        let mut state = self.state_mut();
        state.items.clear();
        state.selected = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state().selected
    }

    pub fn selected_item(&self) -> Option<String> {
        let state = self.state();
        state.selected.and_then(|i| state.items.get(i).cloned())
    }

    /// Selects `index`; out-of-range indices clear the selection.
    pub fn set_selected_index(&self, index: usize) {
        let mut state = self.state_mut();
        state.selected = (index < state.items.len()).then_some(index);
    }
}

impl Default for ComboBox {
    fn default() -> Self {
        ComboBox::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_is_selected() {
        let combo = ComboBox::new();
        assert_eq!(combo.selected_item(), None);
        combo.add_item("Item 1");
        combo.add_item("Item 2");
        assert_eq!(combo.selected_item().as_deref(), Some("Item 1"));

        combo.set_selected_index(1);
        assert_eq!(combo.selected_item().as_deref(), Some("Item 2"));

        combo.set_selected_index(7);
        assert_eq!(combo.selected_index(), None);
    }
}
