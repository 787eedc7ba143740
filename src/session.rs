use std::collections::BTreeSet;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    AddCustomer,
    ShowConversation,
}

/// Per-session dashboard state: the active view and the set of checked rows.
/// Created once at startup and mutated only through the transitions below;
/// nothing here outlives the process.
#[derive(Debug)]
pub struct SessionState {
    page: Page,
    selected: BTreeSet<String>,
    conversation_id: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            selected: BTreeSet::new(),
            conversation_id: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// The record whose transcript the conversation view shows. Only set
    /// while on `ShowConversation`.
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Checkbox toggle: add on check, remove on uncheck. Rows are keyed by
    /// the identity card number itself.
    pub fn toggle_selection(&mut self, id: &str, checked: bool) {
        if checked {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// Every bulk action ends with this, whatever its per-id outcomes were.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn open_add_customer(&mut self) {
        self.page = Page::AddCustomer;
    }

    pub fn back_home(&mut self) {
        self.page = Page::Home;
        self.conversation_id = None;
    }

    /// Guarded transition to the conversation view: requires exactly one
    /// checked row. On refusal the page stays where it was and the caller
    /// surfaces the warning.
    pub fn open_conversation(&mut self) -> Result<String, AppError> {
        let mut ids = self.selected.iter();
        match (ids.next(), ids.next()) {
            (Some(id), None) => {
                let id = id.clone();
                self.page = Page::ShowConversation;
                self.conversation_id = Some(id.clone());
                Ok(id)
            }
            (None, _) => Err(AppError::Validation(
                "Please select a customer to view the conversation.".to_string(),
            )),
            (Some(_), Some(_)) => Err(AppError::Validation(
                "Please select exactly one customer to view the conversation.".to_string(),
            )),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
