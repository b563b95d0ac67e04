// Structural Pattern: Decorator
// Wraps a coffee in another coffee that adds to its cost and description.
// Decorators stack because they implement the same trait they wrap.

use design_patterns::console;

trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        10
    }

    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }
}

struct MilkDecorator {
    coffee: Box<dyn Coffee>,
}

impl MilkDecorator {
    const PRICE: u32 = 2;

    fn wrap(coffee: Box<dyn Coffee>) -> Box<dyn Coffee> {
        Box::new(Self { coffee })
    }
}

impl Coffee for MilkDecorator {
    fn cost(&self) -> u32 {
        self.coffee.cost() + Self::PRICE
    }

    fn description(&self) -> String {
        format!("{}, with milk", self.coffee.description())
    }
}


fn main() {
    console::banner("Decorator Pattern");

    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    console::step(format!("Cost: {}", coffee.cost()));
    console::step(format!("Description: {}", coffee.description()));

    coffee = MilkDecorator::wrap(coffee);
    console::outcome(format!("Cost: {}", coffee.cost()));
    console::outcome(format!("Description: {}", coffee.description()));

    console::when_to_use("decorator");
}
