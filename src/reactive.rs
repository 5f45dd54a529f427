use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Change tracking
// ---------------------------------------------------------------------------

/// Monotonically increasing counter identifying one settled state of the
/// inputs. Bumped once per settle, regardless of how many inputs changed.
pub type Generation = u64;

/// Central dispatcher for input invalidation.
///
/// Writers call [`mark_changed`](ChangeTracker::mark_changed) as inputs are
/// edited; the pending writes take effect together at the next
/// [`settle`](ChangeTracker::settle). Derived values compare their own
/// recompute stamp against per-input change stamps, so recomputation stays
/// pull-driven: nothing is evaluated until somebody reads it.
pub struct ChangeTracker<K: Copy + Ord> {
    generation: Generation,
    last_changed: BTreeMap<K, Generation>,
    pending: BTreeSet<K>,
    subscribers: Vec<Box<dyn FnMut(&[K])>>,
}

impl<K: Copy + Ord> ChangeTracker<K> {
    pub fn new() -> Self {
        ChangeTracker {
            generation: 0,
            last_changed: BTreeMap::new(),
            pending: BTreeSet::new(),
            subscribers: Vec::new(),
        }
    }

    /// Record that `input` was written. Takes effect at the next settle.
    pub fn mark_changed(&mut self, input: K) {
        self.pending.insert(input);
    }

    /// Apply all pending writes under a single new generation and notify
    /// subscribers with the changed batch. Returns the new generation, or
    /// `None` when nothing was pending.
    pub fn settle(&mut self) -> Option<Generation> {
        if self.pending.is_empty() {
            return None;
        }
        self.generation += 1;
        let changed: Vec<K> = std::mem::take(&mut self.pending).into_iter().collect();
        for &input in &changed {
            self.last_changed.insert(input, self.generation);
        }
        for subscriber in &mut self.subscribers {
            subscriber(&changed);
        }
        Some(self.generation)
    }

    /// Current settled generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generation at which `input` last settled a change. Zero if never.
    pub fn last_changed(&self, input: K) -> Generation {
        self.last_changed.get(&input).copied().unwrap_or(0)
    }

    /// Register a consumer invoked on every settle with the changed inputs.
    pub fn subscribe(&mut self, subscriber: Box<dyn FnMut(&[K])>) {
        self.subscribers.push(subscriber);
    }
}

impl<K: Copy + Ord> Default for ChangeTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// A lazily recomputed value with declared input dependencies.
///
/// Two states: stale (never computed, or a declared dependency settled after
/// the last computation) and fresh. Reading a stale value recomputes it once;
/// reading a fresh value returns the cache. Memoization is keyed by
/// generation, not call count.
pub struct Derived<K: Copy + Ord, T> {
    deps: Vec<K>,
    computed_at: Generation,
    value: Option<T>,
}

impl<K: Copy + Ord, T> Derived<K, T> {
    pub fn new(deps: impl IntoIterator<Item = K>) -> Self {
        Derived {
            deps: deps.into_iter().collect(),
            computed_at: 0,
            value: None,
        }
    }

    /// Whether a read would recompute.
    pub fn is_stale(&self, tracker: &ChangeTracker<K>) -> bool {
        self.value.is_none()
            || self
                .deps
                .iter()
                .any(|&dep| tracker.last_changed(dep) > self.computed_at)
    }

    /// Return the current value, recomputing via `compute` if stale.
    pub fn read<'a>(
        &'a mut self,
        tracker: &ChangeTracker<K>,
        compute: impl FnOnce() -> T,
    ) -> &'a T {
        if self.is_stale(tracker) {
            self.value = None;
            self.computed_at = tracker.generation();
        }
        self.value.get_or_insert_with(compute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Key {
        A,
        B,
    }

    #[test]
    fn two_reads_without_settle_compute_once() {
        let tracker: ChangeTracker<Key> = ChangeTracker::new();
        let mut derived: Derived<Key, u32> = Derived::new([Key::A]);
        let mut computes = 0;

        let first = *derived.read(&tracker, || {
            computes += 1;
            7
        });
        let second = *derived.read(&tracker, || {
            computes += 1;
            7
        });

        assert_eq!((first, second), (7, 7));
        assert_eq!(computes, 1);
    }

    #[test]
    fn settle_batches_writes_into_one_generation() {
        let mut tracker: ChangeTracker<Key> = ChangeTracker::new();
        tracker.mark_changed(Key::A);
        tracker.mark_changed(Key::B);
        tracker.mark_changed(Key::A); // duplicate write in the same batch

        assert_eq!(tracker.settle(), Some(1));
        assert_eq!(tracker.last_changed(Key::A), 1);
        assert_eq!(tracker.last_changed(Key::B), 1);
        assert_eq!(tracker.generation(), 1);
    }

    #[test]
    fn settle_without_writes_is_a_no_op() {
        let mut tracker: ChangeTracker<Key> = ChangeTracker::new();
        assert_eq!(tracker.settle(), None);
        assert_eq!(tracker.generation(), 0);
    }

    #[test]
    fn dependency_settle_invalidates_the_derived_value() {
        let mut tracker: ChangeTracker<Key> = ChangeTracker::new();
        let mut derived: Derived<Key, u32> = Derived::new([Key::A]);
        let mut source = 1u32;

        assert_eq!(*derived.read(&tracker, || source), 1);

        source = 2;
        tracker.mark_changed(Key::A);
        // Not settled yet: the cached value still stands.
        assert_eq!(*derived.read(&tracker, || source), 1);

        tracker.settle();
        assert!(derived.is_stale(&tracker));
        assert_eq!(*derived.read(&tracker, || source), 2);
    }

    #[test]
    fn unrelated_inputs_do_not_invalidate() {
        let mut tracker: ChangeTracker<Key> = ChangeTracker::new();
        let mut derived: Derived<Key, u32> = Derived::new([Key::A]);
        let mut computes = 0;

        derived.read(&tracker, || {
            computes += 1;
            0
        });

        tracker.mark_changed(Key::B);
        tracker.settle();

        assert!(!derived.is_stale(&tracker));
        derived.read(&tracker, || {
            computes += 1;
            0
        });
        assert_eq!(computes, 1);
    }

    #[test]
    fn no_dependencies_means_never_stale_after_first_read() {
        let mut tracker: ChangeTracker<Key> = ChangeTracker::new();
        let mut derived: Derived<Key, u32> = Derived::new([]);
        let mut computes = 0;

        derived.read(&tracker, || {
            computes += 1;
            9
        });

        tracker.mark_changed(Key::A);
        tracker.mark_changed(Key::B);
        tracker.settle();

        assert_eq!(
            *derived.read(&tracker, || {
                computes += 1;
                9
            }),
            9
        );
        assert_eq!(computes, 1);
    }

    #[test]
    fn subscribers_are_notified_once_per_settle_with_the_batch() {
        let mut tracker: ChangeTracker<Key> = ChangeTracker::new();
        let calls: Rc<Cell<usize>> = Rc::new(Cell::new(0));
        let seen: Rc<Cell<usize>> = Rc::new(Cell::new(0));

        let calls_in = Rc::clone(&calls);
        let seen_in = Rc::clone(&seen);
        tracker.subscribe(Box::new(move |changed: &[Key]| {
            calls_in.set(calls_in.get() + 1);
            seen_in.set(seen_in.get() + changed.len());
        }));

        tracker.mark_changed(Key::B);
        tracker.mark_changed(Key::A);
        tracker.settle();

        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), 2);

        // A settle with no pending writes does not notify.
        tracker.settle();
        assert_eq!(calls.get(), 1);
    }
}
