// Behavioural Pattern: Observer
// A subject keeps a list of observers and pushes every state change to them.

use design_patterns::console;
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Subject / Observer traits
// ============================================================================

trait Observer {
    fn update(&self, subject: &dyn Subject);
}

trait Subject {
    fn add_observer(&mut self, observer: Rc<dyn Observer>) -> bool;
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) -> bool;
    fn notify_observers(&self);
    fn state(&self) -> i64;
    fn set_state(&mut self, state: i64);
}

// ============================================================================
// Concrete observer
// ============================================================================

struct ConcreteObserver {
    id: u32,
    updates: Cell<usize>,
    last_seen: Cell<Option<i64>>,
}

impl ConcreteObserver {
    fn new(id: u32) -> Rc<Self> {
        Rc::new(Self {
            id,
            updates: Cell::new(0),
            last_seen: Cell::new(None),
        })
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, subject: &dyn Subject) {
        self.updates.set(self.updates.get() + 1);
        self.last_seen.set(Some(subject.state()));
        console::outcome(format!(
            "Observer {} updated. New state: {}",
            self.id,
            subject.state()
        ));
    }
}

// ============================================================================
// Concrete subject
// ============================================================================

#[derive(Default)]
struct ConcreteSubject {
    observers: Vec<Rc<dyn Observer>>,
    state: i64,
}

impl ConcreteSubject {
    fn new() -> Self {
        Self::default()
    }

    fn position(&self, observer: &Rc<dyn Observer>) -> Option<usize> {
        self.observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for ConcreteSubject {
    /// Registers `observer` unless that same instance is already attached.
    fn add_observer(&mut self, observer: Rc<dyn Observer>) -> bool {
        if self.position(&observer).is_some() {
            console::warn("Observer has been attached already.");
            return false;
        }

        console::step("Attached an observer.");
        self.observers.push(observer);
        true
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) -> bool {
        match self.position(observer) {
            Some(index) => {
                self.observers.remove(index);
                console::step("Detached an observer.");
                true
            }
            None => {
                console::warn("Nonexistent observer.");
                false
            }
        }
    }

    fn notify_observers(&self) {
        console::step("Notifying all observers...");
        for observer in &self.observers {
            observer.update(self);
        }
    }

    fn state(&self) -> i64 {
        self.state
    }

    fn set_state(&mut self, state: i64) {
        console::step("Setting state...");
        self.state = state;
        self.notify_observers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingObserver {
        id: u32,
        log: Rc<RefCell<Vec<(u32, i64)>>>,
    }

    impl Observer for RecordingObserver {
        fn update(&self, subject: &dyn Subject) {
            self.log.borrow_mut().push((self.id, subject.state()));
        }
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut subject = ConcreteSubject::new();
        let observer: Rc<dyn Observer> = ConcreteObserver::new(1);

        assert!(subject.add_observer(Rc::clone(&observer)));
        assert!(!subject.add_observer(Rc::clone(&observer)));
        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn test_equal_but_distinct_observers_both_attach() {
        let mut subject = ConcreteSubject::new();
        assert!(subject.add_observer(ConcreteObserver::new(1)));
        assert!(subject.add_observer(ConcreteObserver::new(1)));
        assert_eq!(subject.observer_count(), 2);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = ConcreteSubject::new();
        for id in [3, 1, 2] {
            subject.add_observer(Rc::new(RecordingObserver {
                id,
                log: Rc::clone(&log),
            }));
        }

        subject.set_state(123);

        assert_eq!(*log.borrow(), vec![(3, 123), (1, 123), (2, 123)]);
    }

    #[test]
    fn test_each_observer_notified_once() {
        let first = ConcreteObserver::new(1);
        let second = ConcreteObserver::new(2);
        let mut subject = ConcreteSubject::new();
        subject.add_observer(first.clone());
        subject.add_observer(second.clone());

        subject.set_state(7);

        assert_eq!(first.updates.get(), 1);
        assert_eq!(second.updates.get(), 1);
        assert_eq!(first.last_seen.get(), Some(7));
    }

    #[test]
    fn test_removed_observer_not_notified() {
        let kept = ConcreteObserver::new(1);
        let dropped = ConcreteObserver::new(2);
        let dropped_dyn: Rc<dyn Observer> = dropped.clone();

        let mut subject = ConcreteSubject::new();
        subject.add_observer(kept.clone());
        subject.add_observer(Rc::clone(&dropped_dyn));

        assert!(subject.remove_observer(&dropped_dyn));
        subject.set_state(42);

        assert_eq!(kept.updates.get(), 1);
        assert_eq!(dropped.updates.get(), 0);
    }

    #[test]
    fn test_remove_absent_observer_is_noop() {
        let mut subject = ConcreteSubject::new();
        subject.add_observer(ConcreteObserver::new(1));

        let stranger: Rc<dyn Observer> = ConcreteObserver::new(2);
        assert!(!subject.remove_observer(&stranger));
        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn test_state_read_view() {
        let mut subject = ConcreteSubject::new();
        assert_eq!(subject.state(), 0);
        subject.set_state(-5);
        assert_eq!(subject.state(), -5);
    }
}

fn main() {
    console::banner("Observer Pattern");

    let mut subject = ConcreteSubject::new();

    let observer1: Rc<dyn Observer> = ConcreteObserver::new(1);
    subject.add_observer(Rc::clone(&observer1));

    let observer2: Rc<dyn Observer> = ConcreteObserver::new(2);
    subject.add_observer(Rc::clone(&observer2));

    // Same instance again: reported and ignored.
    subject.add_observer(Rc::clone(&observer1));
    console::step(format!("{} observers attached", subject.observer_count()));

    subject.set_state(123);

    println!();
    subject.remove_observer(&observer2);
    subject.remove_observer(&observer2);
    subject.set_state(456);

    console::when_to_use("observer");
}
