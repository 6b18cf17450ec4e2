use std::collections::HashSet;

use crate::model::{IncidentId, SeverityFilter, SortOrder};

#[derive(Default)]
pub struct UiState {
    pub show_form: bool,
    pub show_about: bool,

    pub severity_filter: SeverityFilter,
    pub sort_order: SortOrder,
    /// Cards whose description is currently expanded.
    pub expanded: HashSet<IncidentId>,
}

impl UiState {
    pub fn toggle_expanded(&mut self, id: IncidentId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: IncidentId) -> bool {
        self.expanded.contains(&id)
    }
}
