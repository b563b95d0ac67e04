// Structural Pattern: Adapter
// Client code works with anything rectangular. A square does not speak that
// interface, so an adapter translates for it.

use design_patterns::console;

// Target interface
trait Rectangular {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

#[derive(Debug)]
struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Rectangular for Rectangle {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

// Adaptee: a different interface we cannot change
#[derive(Debug)]
struct Square {
    side: f64,
}

impl Square {
    fn new(side: f64) -> Self {
        Self { side }
    }

    fn side(&self) -> f64 {
        self.side
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Debug)]
struct SquareToRectangleAdapter {
    square: Square,
}

impl SquareToRectangleAdapter {
    fn new(square: Square) -> Self {
        Self { square }
    }
}

impl Rectangular for SquareToRectangleAdapter {
    fn width(&self) -> f64 {
        self.square.side()
    }

    fn height(&self) -> f64 {
        self.square.side()
    }

    fn area(&self) -> f64 {
        self.square.area()
    }
}

fn describe(shape: &dyn Rectangular) -> String {
    format!(
        "width: {}, height: {}, area: {}",
        shape.width(),
        shape.height(),
        shape.area()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_reports_square_as_rectangle() {
        let adapter = SquareToRectangleAdapter::new(Square::new(5.0));
        assert_eq!(adapter.width(), 5.0);
        assert_eq!(adapter.height(), 5.0);
        assert_eq!(adapter.area(), 25.0);
    }

    #[test]
    fn test_adapter_and_rectangle_interchangeable() {
        let shapes: Vec<Box<dyn Rectangular>> = vec![
            Box::new(Rectangle::new(2.0, 3.0)),
            Box::new(SquareToRectangleAdapter::new(Square::new(4.0))),
        ];
        let total: f64 = shapes.iter().map(|s| s.area()).sum();
        assert_eq!(total, 22.0);
    }

    #[test]
    fn test_describe() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(describe(&rect), "width: 2, height: 3, area: 6");
    }
}

fn main() {
    console::banner("Adapter Pattern");

    let adapter = SquareToRectangleAdapter::new(Square::new(5.0));
    console::outcome(format!("height: {}", adapter.height()));
    console::outcome(format!("width: {}", adapter.width()));
    console::outcome(format!("area: {}", adapter.area()));
    println!("{:?}", adapter);

    println!();
    console::step("Rectangles and adapted squares side by side");
    let rectangle = Rectangle::new(2.0, 3.0);
    let shapes: [&dyn Rectangular; 2] = [&rectangle, &adapter];
    for shape in shapes {
        println!("  {}", describe(shape));
    }

    console::when_to_use("adapter");
}
