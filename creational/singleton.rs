// Creational Pattern: Singleton
// One instance per process, reached through a single access point.
//
// The instance lives in an explicit `SingletonSlot` declared at module level
// rather than in a hidden static inside the type. The slot is initialized at
// most once: `instance` checks for an existing value and only then creates
// one. Tests create their own slots, so they never share global state.

use design_patterns::console;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

// ============================================================================
// Single-initialization slot
// ============================================================================

struct SingletonSlot<T> {
    cell: OnceLock<T>,
}

impl<T> SingletonSlot<T> {
    const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the instance, running `init` only if the slot is still empty.
    fn instance(&self, init: impl FnOnce() -> T) -> &T {
        match self.cell.get() {
            Some(existing) => existing,
            None => {
                console::step("Creating the instance");
                self.cell.get_or_init(init)
            }
        }
    }

    fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

// ============================================================================
// The process-wide instance
// ============================================================================

#[derive(Debug, Default)]
struct Settings {
    value: AtomicI64,
}

impl Settings {
    fn value(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    fn set_value(&self, value: i64) {
        self.value.store(value, Ordering::Relaxed);
    }
}

static SETTINGS: SingletonSlot<Settings> = SingletonSlot::new();

fn settings() -> &'static Settings {
    SETTINGS.instance(Settings::default)
}


fn main() {
    console::banner("Singleton Pattern");

    console::step(format!("Initialized before first use: {}", SETTINGS.is_initialized()));

    let instance1 = settings();
    let instance2 = settings();
    instance1.set_value(10);

    println!("instance1.value = {}", instance1.value());
    println!("instance2.value = {}", instance2.value());
    console::outcome(format!(
        "Same instance: {}",
        std::ptr::eq(instance1, instance2)
    ));

    console::when_to_use("singleton");
}
