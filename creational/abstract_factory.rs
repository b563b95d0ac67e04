// Creational Pattern: Abstract Factory
// A factory creates a family of related products; clients only see the
// product traits, never the concrete types.

use design_patterns::console;

// ============================================================================
// Products
// ============================================================================

trait ProductA {
    fn operation_a(&self) -> String;
}

trait ProductB {
    fn operation_b(&self) -> String;

    /// Product B can work with any product A, from any family.
    fn combined_operation(&self, collaborator: &dyn ProductA) -> String;
}

struct ConcreteProductA;

impl ProductA for ConcreteProductA {
    fn operation_a(&self) -> String {
        "This is the result of Operation A".to_string()
    }
}

struct ConcreteProductB;

impl ProductB for ConcreteProductB {
    fn operation_b(&self) -> String {
        "This is the result of Operation B".to_string()
    }

    fn combined_operation(&self, collaborator: &dyn ProductA) -> String {
        format!(
            "The result of Product B collaborating with ({})",
            collaborator.operation_a()
        )
    }
}

// ============================================================================
// Factory
// ============================================================================

trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn ProductA>;
    fn create_product_b(&self) -> Box<dyn ProductB>;
}

struct ConcreteFactory;

impl AbstractFactory for ConcreteFactory {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ConcreteProductA)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ConcreteProductB)
    }
}

fn client_code(factory: &dyn AbstractFactory) -> Vec<String> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    vec![
        product_a.operation_a(),
        product_b.combined_operation(&*product_a),
        product_b.operation_b(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_products() {
        let factory = ConcreteFactory;
        assert_eq!(
            factory.create_product_a().operation_a(),
            "This is the result of Operation A"
        );
        assert_eq!(
            factory.create_product_b().operation_b(),
            "This is the result of Operation B"
        );
    }

    #[test]
    fn test_products_collaborate() {
        let lines = client_code(&ConcreteFactory);
        assert_eq!(
            lines[1],
            "The result of Product B collaborating with (This is the result of Operation A)"
        );
    }

    #[test]
    fn test_product_b_accepts_foreign_product_a() {
        struct StubA;
        impl ProductA for StubA {
            fn operation_a(&self) -> String {
                "stub".to_string()
            }
        }

        let product_b = ConcreteFactory.create_product_b();
        assert!(product_b.combined_operation(&StubA).ends_with("(stub)"));
    }
}

fn main() {
    console::banner("Abstract Factory Pattern");

    for line in client_code(&ConcreteFactory) {
        console::outcome(line);
    }

    console::when_to_use("abstract-factory");
}
