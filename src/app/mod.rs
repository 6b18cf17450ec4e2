mod form;
mod notice;
mod run;
mod ui_state;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::Config;
use crate::model::{IncidentId, IncidentStore, SeverityCounts, Subscription};
use eframe::egui;

pub use form::{ReportForm, ValidationError};
pub use notice::{Notice, NoticeKind, Notices};
pub use run::run;
pub use ui_state::UiState;

pub struct IncidentAtlasApp {
    pub incidents: IncidentStore,
    pub form: ReportForm,
    pub ui: UiState,
    pub notices: Notices,
    /// Per-severity totals, refreshed by a store subscription.
    pub counts: Rc<Cell<SeverityCounts>>,
    counts_subscription: Subscription,
}

impl Default for IncidentAtlasApp {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Drop for IncidentAtlasApp {
    fn drop(&mut self) {
        self.incidents.unsubscribe(self.counts_subscription);
    }
}

impl eframe::App for IncidentAtlasApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, frame, self);
    }
}

impl IncidentAtlasApp {
    pub fn new(config: &Config) -> Self {
        Self::with_store(
            if config.empty {
                IncidentStore::new()
            } else {
                IncidentStore::demo()
            },
            config,
        )
    }

    pub fn with_store(mut incidents: IncidentStore, config: &Config) -> Self {
        let counts = Rc::new(Cell::new(SeverityCounts::tally(incidents.list())));
        let sink = Rc::clone(&counts);
        let counts_subscription =
            incidents.subscribe(move |list| sink.set(SeverityCounts::tally(list)));

        tracing::info!(
            incidents = incidents.len(),
            filter = ?config.severity,
            "incident atlas session started"
        );

        Self {
            incidents,
            form: ReportForm::default(),
            ui: UiState {
                severity_filter: config.severity.into(),
                sort_order: config.sort.into(),
                ..UiState::default()
            },
            notices: Notices::new(config.notice_lifetime()),
            counts,
            counts_subscription,
        }
    }

    /// Submits the report form, posting a notice either way.
    pub fn submit_report(&mut self) -> Option<IncidentId> {
        match self.form.submit(&mut self.incidents) {
            Ok(id) => {
                self.notices
                    .success("Success", "Incident reported successfully");
                self.ui.show_form = false;
                Some(id)
            }
            Err(e) => {
                tracing::warn!(error = ?e, "incident report rejected");
                self.notices.error("Error", e.to_string());
                None
            }
        }
    }

    pub fn delete_incident(&mut self, id: IncidentId) {
        self.incidents.delete_incident(id);
        self.ui.expanded.remove(&id);
        self.notices.success(
            "Incident Deleted",
            "The incident has been successfully removed.",
        );
    }
}
