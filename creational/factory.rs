// Creational Pattern: Factory
// `CarFactory::create_car` picks the concrete car type from a runtime kind.
// Callers only ever hold a `Box<dyn Car>`.

use design_patterns::console;
use design_patterns::PatternError;
use std::str::FromStr;

// ============================================================================
// Products
// ============================================================================

trait Car {
    fn model(&self) -> &str;
    fn production_year(&self) -> u16;
    fn kind(&self) -> CarKind;

    fn display_car_info(&self) -> String {
        format!(
            "This is a {}. Model: {}, Production Year: {}",
            self.kind().label(),
            self.model(),
            self.production_year()
        )
    }
}

// Every car variant carries the same data; the macro writes the struct and
// its Car impl.
macro_rules! car_type {
    ($name:ident, $kind:expr) => {
        struct $name {
            model: String,
            production_year: u16,
        }

        impl Car for $name {
            fn model(&self) -> &str {
                &self.model
            }

            fn production_year(&self) -> u16 {
                self.production_year
            }

            fn kind(&self) -> CarKind {
                $kind
            }
        }
    };
}

car_type!(Sedan, CarKind::Sedan);
car_type!(Suv, CarKind::Suv);
car_type!(Hatchback, CarKind::Hatchback);

// ============================================================================
// Kinds and factory
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarKind {
    Sedan,
    Suv,
    Hatchback,
}

impl CarKind {
    const NAMES: [&'static str; 3] = ["sedan", "suv", "hatchback"];

    fn label(self) -> &'static str {
        match self {
            CarKind::Sedan => "Sedan",
            CarKind::Suv => "SUV",
            CarKind::Hatchback => "Hatchback",
        }
    }
}

impl FromStr for CarKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sedan" => Ok(CarKind::Sedan),
            "suv" => Ok(CarKind::Suv),
            "hatchback" => Ok(CarKind::Hatchback),
            _ => Err(PatternError::unknown_kind("car", s, &CarKind::NAMES)),
        }
    }
}

struct CarFactory;

impl CarFactory {
    fn create_car(
        &self,
        kind: &str,
        model: &str,
        production_year: u16,
    ) -> Result<Box<dyn Car>, PatternError> {
        let model = model.to_string();
        let car: Box<dyn Car> = match kind.parse::<CarKind>()? {
            CarKind::Sedan => Box::new(Sedan {
                model,
                production_year,
            }),
            CarKind::Suv => Box::new(Suv {
                model,
                production_year,
            }),
            CarKind::Hatchback => Box::new(Hatchback {
                model,
                production_year,
            }),
        };
        Ok(car)
    }
}


fn main() {
    console::banner("Factory Pattern");

    let factory = CarFactory;
    let orders = [
        ("sedan", "Camry", 2023),
        ("suv", "Defender", 2023),
        ("hatchback", "Corolla", 2023),
        ("truck", "F-150", 2023),
    ];

    for (kind, model, year) in orders {
        console::step(format!("Ordering a {} ({})", kind, model));
        match factory.create_car(kind, model, year) {
            Ok(car) => console::outcome(car.display_car_info()),
            Err(err) => console::failure(err.to_string()),
        }
    }

    console::when_to_use("factory");
}
