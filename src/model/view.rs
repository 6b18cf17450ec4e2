use std::cmp::Ordering;

use crate::model::{Incident, Severity};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub const OPTIONS: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::Low),
        SeverityFilter::Only(Severity::Medium),
        SeverityFilter::Only(Severity::High),
    ];

    pub fn matches(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(s) => s == severity,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityFilter::All => "All Severities",
            SeverityFilter::Only(s) => s.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub const OPTIONS: [SortOrder; 2] = [SortOrder::NewestFirst, SortOrder::OldestFirst];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "Newest First",
            SortOrder::OldestFirst => "Oldest First",
        }
    }

    fn compare(self, a: &Incident, b: &Incident) -> Ordering {
        let by_time = match self {
            SortOrder::NewestFirst => b.reported_at.cmp(&a.reported_at),
            SortOrder::OldestFirst => a.reported_at.cmp(&b.reported_at),
        };
        by_time.then(a.id.cmp(&b.id))
    }
}

/// Incidents to display for the given filter and order.
///
/// Equal timestamps fall back to ascending id in both orders.
pub fn project(incidents: &[Incident], filter: SeverityFilter, order: SortOrder) -> Vec<&Incident> {
    let mut out: Vec<&Incident> = incidents
        .iter()
        .filter(|i| filter.matches(i.severity))
        .collect();
    out.sort_by(|a, b| order.compare(a, b));
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SeverityCounts {
    pub fn tally(incidents: &[Incident]) -> Self {
        let mut counts = Self::default();
        for inc in incidents {
            match inc.severity {
                Severity::Low => counts.low += 1,
                Severity::Medium => counts.medium += 1,
                Severity::High => counts.high += 1,
            }
        }
        counts
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IncidentId, IncidentStore};

    fn ids(view: &[&Incident]) -> Vec<u64> {
        view.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn demo_newest_first() {
        let store = IncidentStore::demo();
        let view = project(store.list(), SeverityFilter::All, SortOrder::NewestFirst);
        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn demo_oldest_first() {
        let store = IncidentStore::demo();
        let view = project(store.list(), SeverityFilter::All, SortOrder::OldestFirst);
        assert_eq!(ids(&view), vec![1, 3, 2]);
    }

    #[test]
    fn filter_keeps_only_matching_severity() {
        let store = IncidentStore::demo();
        let view = project(
            store.list(),
            SeverityFilter::Only(Severity::High),
            SortOrder::NewestFirst,
        );
        assert_eq!(ids(&view), vec![2]);
        assert!(view.iter().all(|i| i.severity == Severity::High));
    }

    #[test]
    fn equal_timestamps_order_by_id() {
        let stamp = time::macros::datetime!(2025-06-01 12:00:00 UTC);
        let mut store = IncidentStore::with_clock(move || stamp);
        for t in ["a", "b", "c"] {
            store.add(crate::model::IncidentDraft::new(t, "d", Severity::Low));
        }
        for order in SortOrder::OPTIONS {
            let view = project(store.list(), SeverityFilter::All, order);
            assert_eq!(ids(&view), vec![1, 2, 3]);
        }
    }

    #[test]
    fn projection_leaves_store_untouched() {
        let store = IncidentStore::demo();
        let _ = project(store.list(), SeverityFilter::Only(Severity::Low), SortOrder::OldestFirst);
        let order: Vec<_> = store.iter().map(|i| i.id).collect();
        assert_eq!(order, vec![IncidentId(1), IncidentId(2), IncidentId(3)]);
    }

    #[test]
    fn counts_per_severity() {
        let store = IncidentStore::demo();
        let counts = SeverityCounts::tally(store.list());
        assert_eq!(counts, SeverityCounts { low: 1, medium: 1, high: 1 });
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(Severity::High), 1);
        assert_eq!(SeverityFilter::All.label(), "All Severities");
    }
}
