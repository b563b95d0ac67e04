// Creational Pattern: Builder
// A builder assembles a product part by part. The director knows the
// recipes; the builder knows how to add each part.

use design_patterns::console;
use std::fmt;
use std::mem;

#[derive(Debug, Default, Clone, PartialEq)]
struct Product {
    parts: Vec<String>,
}

impl Product {
    fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product Parts: {}", self.parts.join(", "))
    }
}

trait Builder {
    fn set_part_a(&mut self);
    fn set_part_b(&mut self);
    fn set_part_c(&mut self);
}

#[derive(Default)]
struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.product = Product::default();
    }

    /// Hands out the finished product and starts a fresh one.
    fn get_product(&mut self) -> Product {
        mem::take(&mut self.product)
    }
}

impl Builder for ConcreteBuilder {
    fn set_part_a(&mut self) {
        self.product.add("PartA");
    }

    fn set_part_b(&mut self) {
        self.product.add("PartB");
    }

    fn set_part_c(&mut self) {
        self.product.add("PartC");
    }
}

struct Director;

impl Director {
    fn build_minimum_product(&self, builder: &mut dyn Builder) {
        builder.set_part_a();
    }

    fn build_full_product(&self, builder: &mut dyn Builder) {
        builder.set_part_a();
        builder.set_part_b();
        builder.set_part_c();
    }
}


fn main() {
    console::banner("Builder Pattern");

    let mut builder = ConcreteBuilder::new();
    let director = Director;

    console::step("Director builds the minimum product");
    director.build_minimum_product(&mut builder);
    console::outcome(builder.get_product().to_string());

    console::step("Director builds the full product");
    director.build_full_product(&mut builder);
    console::outcome(builder.get_product().to_string());

    console::step("Custom product without a director");
    builder.set_part_b();
    builder.set_part_c();
    console::outcome(builder.get_product().to_string());

    console::step("Started a product, then changed our mind");
    builder.set_part_a();
    builder.reset();
    console::outcome(format!("{:?}", builder.get_product()));

    console::when_to_use("builder");
}
