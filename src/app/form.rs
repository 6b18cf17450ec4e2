use crate::model::{IncidentDraft, IncidentId, IncidentStore, Severity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields { title: bool, description: bool },
}

/// Input buffer behind the "Report New Incident" panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl ReportForm {
    /// Builds a draft from the current input. Text is passed through as typed;
    /// only whitespace-only fields are rejected.
    pub fn validate(&self) -> Result<IncidentDraft, ValidationError> {
        let title = self.title.trim().is_empty();
        let description = self.description.trim().is_empty();
        if title || description {
            return Err(ValidationError::MissingFields { title, description });
        }
        Ok(IncidentDraft::new(
            self.title.clone(),
            self.description.clone(),
            self.severity,
        ))
    }

    /// Adds the draft to `store` and clears the form. The form is untouched on error.
    pub fn submit(&mut self, store: &mut IncidentStore) -> Result<IncidentId, ValidationError> {
        let draft = self.validate()?;
        let id = store.add(draft);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
