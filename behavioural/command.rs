// Behavioural Pattern: Command
// Requests become standalone values: they can be queued, executed later and
// undone.

use design_patterns::console;
use design_patterns::PatternError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default)]
struct Light {
    on: bool,
}

impl Light {
    fn turn_on(&mut self) {
        self.on = true;
        console::outcome("The Light is on");
    }

    fn turn_off(&mut self) {
        self.on = false;
        console::outcome("The Light is off");
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

// ============================================================================
// Commands
// ============================================================================

trait Command {
    fn execute(&self);
    fn undo(&self);
    fn name(&self) -> &'static str;
}

struct TurnOnCommand {
    light: Rc<RefCell<Light>>,
}

impl TurnOnCommand {
    fn new(light: &Rc<RefCell<Light>>) -> Box<Self> {
        Box::new(Self {
            light: Rc::clone(light),
        })
    }
}

impl Command for TurnOnCommand {
    fn execute(&self) {
        self.light.borrow_mut().turn_on();
    }

    fn undo(&self) {
        self.light.borrow_mut().turn_off();
    }

    fn name(&self) -> &'static str {
        "turn on"
    }
}

struct TurnOffCommand {
    light: Rc<RefCell<Light>>,
}

impl TurnOffCommand {
    fn new(light: &Rc<RefCell<Light>>) -> Box<Self> {
        Box::new(Self {
            light: Rc::clone(light),
        })
    }
}

impl Command for TurnOffCommand {
    fn execute(&self) {
        self.light.borrow_mut().turn_off();
    }

    fn undo(&self) {
        self.light.borrow_mut().turn_on();
    }

    fn name(&self) -> &'static str {
        "turn off"
    }
}

// ============================================================================
// Invoker: a remote with a FIFO queue and one level of undo
// ============================================================================

#[derive(Default)]
struct SimpleRemoteControl {
    queue: VecDeque<Box<dyn Command>>,
    last_executed: Option<Box<dyn Command>>,
}

impl SimpleRemoteControl {
    fn new() -> Self {
        Self::default()
    }

    fn set_command(&mut self, command: Box<dyn Command>) {
        console::step(format!("Queued '{}'", command.name()));
        self.queue.push_back(command);
    }

    /// Runs the oldest pending command. Returns `false` when nothing was
    /// queued.
    fn button_was_pressed(&mut self) -> bool {
        match self.queue.pop_front() {
            Some(command) => {
                command.execute();
                self.last_executed = Some(command);
                true
            }
            None => false,
        }
    }

    /// Reverts the last executed command. Only one level is kept, so a second
    /// undo in a row fails.
    fn undo_button_was_pressed(&mut self) -> Result<(), PatternError> {
        let command = self.last_executed.take().ok_or(PatternError::NothingToUndo)?;
        console::step(format!("Undoing '{}'", command.name()));
        command.undo();
        Ok(())
    }

    fn has_commands(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> Rc<RefCell<Light>> {
        Rc::new(RefCell::new(Light::default()))
    }

    #[test]
    fn test_execute_turn_on() {
        let light = light();
        let mut remote = SimpleRemoteControl::new();

        remote.set_command(TurnOnCommand::new(&light));
        assert!(remote.button_was_pressed());
        assert!(light.borrow().is_on());
    }

    #[test]
    fn test_undo_turn_on_leaves_light_off() {
        let light = light();
        let mut remote = SimpleRemoteControl::new();

        remote.set_command(TurnOnCommand::new(&light));
        remote.button_was_pressed();
        remote.undo_button_was_pressed().unwrap();

        assert!(!light.borrow().is_on());
    }

    #[test]
    fn test_undo_turn_off_restores_light() {
        let light = light();
        let mut remote = SimpleRemoteControl::new();

        remote.set_command(TurnOnCommand::new(&light));
        remote.set_command(TurnOffCommand::new(&light));
        remote.button_was_pressed();
        remote.button_was_pressed();
        assert!(!light.borrow().is_on());

        remote.undo_button_was_pressed().unwrap();
        assert!(light.borrow().is_on());
    }

    #[test]
    fn test_undo_without_execution_fails() {
        let mut remote = SimpleRemoteControl::new();
        assert_eq!(
            remote.undo_button_was_pressed(),
            Err(PatternError::NothingToUndo)
        );
    }

    #[test]
    fn test_only_one_level_of_undo() {
        let light = light();
        let mut remote = SimpleRemoteControl::new();

        remote.set_command(TurnOnCommand::new(&light));
        remote.button_was_pressed();

        assert!(remote.undo_button_was_pressed().is_ok());
        assert!(remote.undo_button_was_pressed().is_err());
    }

    #[test]
    fn test_queue_is_fifo() {
        let light = light();
        let mut remote = SimpleRemoteControl::new();

        remote.set_command(TurnOnCommand::new(&light));
        remote.set_command(TurnOffCommand::new(&light));

        remote.button_was_pressed();
        assert!(light.borrow().is_on());
        remote.button_was_pressed();
        assert!(!light.borrow().is_on());
        assert!(!remote.has_commands());
    }

    #[test]
    fn test_press_with_empty_queue() {
        let mut remote = SimpleRemoteControl::new();
        assert!(!remote.has_commands());
        assert!(!remote.button_was_pressed());
    }
}

fn main() {
    console::banner("Command Pattern");

    let light = Rc::new(RefCell::new(Light::default()));
    let mut remote = SimpleRemoteControl::new();

    console::step("Turning on the light");
    remote.set_command(TurnOnCommand::new(&light));
    remote.button_was_pressed();

    console::step("Turning off the light");
    remote.set_command(TurnOffCommand::new(&light));
    remote.button_was_pressed();

    console::step("Undoing the last operation");
    if let Err(err) = remote.undo_button_was_pressed() {
        console::failure(err.to_string());
    }

    console::step("Undoing again (only one level is kept)");
    if let Err(err) = remote.undo_button_was_pressed() {
        console::warn(err.to_string());
    }

    println!();
    console::banner("Command Queue");
    remote.set_command(TurnOnCommand::new(&light));
    remote.set_command(TurnOffCommand::new(&light));
    while remote.has_commands() {
        remote.button_was_pressed();
    }

    console::when_to_use("command");
}
