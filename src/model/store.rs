use std::fmt;

use time::OffsetDateTime;
use time::macros::datetime;

use crate::model::{Clock, Incident, IncidentDraft, IncidentId, Severity, SystemClock};

type Subscriber = Box<dyn FnMut(&[Incident])>;

/// Handle returned by [`IncidentStore::subscribe`]; pass it back to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Session-wide owner of every reported incident.
///
/// Mutation only happens through [`add`](Self::add) and
/// [`delete_incident`](Self::delete_incident); both notify subscribers
/// synchronously before returning.
pub struct IncidentStore {
    incidents: Vec<Incident>,
    subscribers: Vec<(Subscription, Subscriber)>,
    next_subscription: u64,
    clock: Box<dyn Clock>,
}

impl Default for IncidentStore {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl fmt::Debug for IncidentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidentStore")
            .field("incidents", &self.incidents)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            incidents: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 1,
            clock: Box::new(clock),
        }
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Id the next `add` will assign: one past the largest id present, or 1 when empty.
    ///
    /// Recomputed from the collection each time, so ids freed by deleting the
    /// newest incident are handed out again.
    pub fn next_id(&self) -> IncidentId {
        let max = self.incidents.iter().map(|i| i.id.0).max().unwrap_or(0);
        IncidentId(max + 1)
    }

    /// Stores a new incident stamped with the current clock time.
    ///
    /// The draft is taken as-is; blank titles are rejected by the form before
    /// this point, not here.
    pub fn add(&mut self, draft: IncidentDraft) -> IncidentId {
        let reported_at = self.clock.now();
        self.insert(draft, reported_at)
    }

    /// Removes the incident with `id`. Unknown ids are ignored.
    pub fn delete_incident(&mut self, id: IncidentId) {
        let before = self.incidents.len();
        self.incidents.retain(|i| i.id != id);
        if self.incidents.len() == before {
            tracing::debug!(%id, "delete ignored, no such incident");
        } else {
            tracing::debug!(%id, remaining = self.incidents.len(), "incident deleted");
        }
        self.notify();
    }

    /// Registers `callback` to run after every mutation with the updated collection.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Incident]) + 'static) -> Subscription {
        let sub = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((sub, Box::new(callback)));
        tracing::debug!(subscription = sub.0, "store subscriber registered");
        sub
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(s, _)| *s != subscription);
        let removed = self.subscribers.len() != before;
        if removed {
            tracing::debug!(subscription = subscription.0, "store subscriber removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Store preloaded with the sample incidents the dashboard ships with.
    pub fn demo() -> Self {
        let mut s = Self::default();

        s.insert(
            IncidentDraft::new(
                "Biased Recommendation Algorithm",
                "Algorithm consistently favored certain demographics in job recommendations, leading to potential discrimination issues.",
                Severity::Medium,
            ),
            datetime!(2025-03-15 10:00:00 UTC),
        );

        s.insert(
            IncidentDraft::new(
                "LLM Hallucination in Critical Info",
                "LLM provided incorrect safety procedure information during emergency response simulation.",
                Severity::High,
            ),
            datetime!(2025-04-01 14:30:00 UTC),
        );

        s.insert(
            IncidentDraft::new(
                "Minor Data Leak via Chatbot",
                "Chatbot inadvertently exposed non-sensitive user metadata during conversation.",
                Severity::Low,
            ),
            datetime!(2025-03-20 09:15:00 UTC),
        );

        s
    }

    fn insert(&mut self, draft: IncidentDraft, reported_at: OffsetDateTime) -> IncidentId {
        let id = self.next_id();
        let severity = draft.severity;
        self.incidents.push(draft.into_incident(id, reported_at));
        tracing::debug!(%id, %severity, total = self.incidents.len(), "incident added");
        self.notify();
        id
    }

    fn notify(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.incidents);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use time::Duration;

    fn ticking_store() -> IncidentStore {
        let tick = Cell::new(0i64);
        IncidentStore::with_clock(move || {
            let n = tick.get();
            tick.set(n + 1);
            datetime!(2025-01-01 00:00:00 UTC) + Duration::minutes(n)
        })
    }

    fn draft(title: &str, severity: Severity) -> IncidentDraft {
        IncidentDraft::new(title, "d", severity)
    }

    #[test]
    fn first_id_is_one() {
        let mut store = ticking_store();
        assert_eq!(store.next_id(), IncidentId(1));
        assert_eq!(store.add(draft("A", Severity::Low)), IncidentId(1));
    }

    #[test]
    fn report_scenario() {
        let mut store = ticking_store();
        let a = store.add(IncidentDraft::new("A", "d", Severity::Low));
        let b = store.add(IncidentDraft::new("B", "d2", Severity::High));
        assert_eq!((a, b), (IncidentId(1), IncidentId(2)));

        store.delete_incident(IncidentId(1));
        let ids: Vec<_> = store.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![IncidentId(2)]);

        store.delete_incident(IncidentId(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "B");
    }

    #[test]
    fn ids_follow_current_maximum() {
        let mut store = ticking_store();
        for t in ["a", "b", "c"] {
            store.add(draft(t, Severity::Medium));
        }
        store.delete_incident(IncidentId(2));
        assert_eq!(store.add(draft("d", Severity::Medium)), IncidentId(4));

        store.delete_incident(IncidentId(4));
        assert_eq!(store.next_id(), IncidentId(4));
    }

    #[test]
    fn reported_at_comes_from_clock() {
        let mut store = ticking_store();
        let id = store.add(draft("a", Severity::High));
        let inc = store.get(id).unwrap();
        assert_eq!(inc.reported_at, datetime!(2025-01-01 00:00:00 UTC));
        assert_eq!(inc.severity, Severity::High);
    }

    #[test]
    fn store_does_not_validate_drafts() {
        let mut store = ticking_store();
        let id = store.add(IncidentDraft::new("  ", "", Severity::Low));
        assert_eq!(store.get(id).unwrap().title, "  ");
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let mut store = ticking_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = store.subscribe(move |incidents| sink.borrow_mut().push(incidents.len()));

        store.add(draft("a", Severity::Low));
        store.add(draft("b", Severity::Low));
        store.delete_incident(IncidentId(1));
        store.delete_incident(IncidentId(99));
        assert_eq!(*seen.borrow(), vec![1, 2, 1, 1]);

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add(draft("c", Severity::Low));
        assert_eq!(seen.borrow().len(), 4);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn demo_store_has_sample_incidents() {
        let store = IncidentStore::demo();
        let titles: Vec<_> = store.iter().map(|i| (i.id.0, i.severity)).collect();
        assert_eq!(
            titles,
            vec![(1, Severity::Medium), (2, Severity::High), (3, Severity::Low)]
        );
        assert_eq!(store.get(IncidentId(2)).unwrap().reported_at, datetime!(2025-04-01 14:30:00 UTC));
        assert_eq!(store.next_id(), IncidentId(4));
    }
}
