mod clock;
mod incident;
mod store;
mod view;

pub use clock::{Clock, SystemClock};
pub use incident::{Incident, IncidentDraft, IncidentId, Severity};
pub use store::{IncidentStore, Subscription};
pub use view::{SeverityCounts, SeverityFilter, SortOrder, project};
