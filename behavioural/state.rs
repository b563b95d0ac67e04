// Behavioural Pattern: State
// A light switch whose behaviour on `press` is decided by its current state
// object. Each state knows which state comes next.

use design_patterns::console;

// ============================================================================
// States
// ============================================================================

trait LightState {
    /// Narrates the transition and returns the state to switch to.
    fn switch_state(&self) -> Box<dyn LightState>;
    fn name(&self) -> &'static str;
}

struct OnState;

impl LightState for OnState {
    fn switch_state(&self) -> Box<dyn LightState> {
        console::step("Light state is On. Turning Off ...");
        Box::new(OffState)
    }

    fn name(&self) -> &'static str {
        "On"
    }
}

struct OffState;

impl LightState for OffState {
    fn switch_state(&self) -> Box<dyn LightState> {
        console::step("Light state is Off. Turning On ...");
        Box::new(OnState)
    }

    fn name(&self) -> &'static str {
        "Off"
    }
}

// ============================================================================
// Context
// ============================================================================

struct LightSwitch {
    state: Box<dyn LightState>,
}

impl LightSwitch {
    fn new(state: Box<dyn LightState>) -> Self {
        Self { state }
    }

    fn set_state(&mut self, state: Box<dyn LightState>) {
        self.state = state;
    }

    fn press(&mut self) {
        let next = self.state.switch_state();
        self.set_state(next);
    }

    fn state_name(&self) -> &'static str {
        self.state.name()
    }
}


fn main() {
    console::banner("State Pattern");

    let mut light = LightSwitch::new(Box::new(OffState));
    console::outcome(format!("Initial state: {}", light.state_name()));

    light.press();
    console::outcome(format!("Now: {}", light.state_name()));

    light.press();
    console::outcome(format!("Now: {}", light.state_name()));

    console::when_to_use("state");
}
