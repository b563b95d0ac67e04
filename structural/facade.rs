// Structural Pattern: Facade
// One `make_coffee` call hides the grinder, boiler and brewer and the order
// in which they have to run.

use design_patterns::console;

struct Grinder;

impl Grinder {
    fn grind_beans(&self) -> &'static str {
        "Grinding beans ..."
    }
}

struct Boiler;

impl Boiler {
    fn boil_water(&self) -> &'static str {
        "Boiling water ..."
    }
}

struct Brewer;

impl Brewer {
    fn brew_coffee(&self) -> &'static str {
        "Brewing coffee ..."
    }
}

struct CoffeeMakerFacade {
    grinder: Grinder,
    boiler: Boiler,
    brewer: Brewer,
}

impl CoffeeMakerFacade {
    fn new(grinder: Grinder, boiler: Boiler, brewer: Brewer) -> Self {
        Self {
            grinder,
            boiler,
            brewer,
        }
    }

    /// Runs every subsystem in order and returns what happened.
    fn make_coffee(&self) -> Vec<&'static str> {
        vec![
            self.grinder.grind_beans(),
            self.boiler.boil_water(),
            self.brewer.brew_coffee(),
            "The coffee is ready",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_coffee_runs_steps_in_order() {
        let maker = CoffeeMakerFacade::new(Grinder, Boiler, Brewer);
        assert_eq!(
            maker.make_coffee(),
            vec![
                "Grinding beans ...",
                "Boiling water ...",
                "Brewing coffee ...",
                "The coffee is ready",
            ]
        );
    }
}

fn main() {
    console::banner("Facade Pattern");

    let coffee_maker = CoffeeMakerFacade::new(Grinder, Boiler, Brewer);
    let steps = coffee_maker.make_coffee();
    if let Some((last, work)) = steps.split_last() {
        for step in work {
            console::step(step);
        }
        console::outcome(last);
    }

    console::when_to_use("facade");
}
