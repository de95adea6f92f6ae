// Pattern 4: Polymorphism
// Same method name, different behaviour per type, chosen at runtime
// through a trait object.

use crate::Transcript;
use std::f64::consts::PI;

pub trait Area {
    /// A shape with no override has no area.
    fn area(&self) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str;
}

pub struct Point;

pub struct Circle {
    radius: f64,
}

pub struct Square {
    side: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Area for Point {
    fn name(&self) -> &'static str {
        "Point"
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.side.powi(2)
    }

    fn name(&self) -> &'static str {
        "Square"
    }
}

pub fn total_area(shapes: &[Box<dyn Area>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

// ============================================================================
// Example: Construction order - the base part always exists first
// ============================================================================

pub struct Base;

impl Base {
    pub fn new(log: &mut Transcript) -> Self {
        log.push("Base constructor".to_string());
        Base
    }
}

pub struct Derived {
    _base: Base,
}

impl Derived {
    pub fn new(log: &mut Transcript) -> Self {
        // The base must be built before `Self` can be assembled.
        let base = Base::new(log);
        log.push("Derived after base".to_string());
        Self { _base: base }
    }
}

pub fn demo() -> Transcript {
    let shapes: Vec<Box<dyn Area>> = vec![
        Box::new(Circle::new(3.0)),
        Box::new(Square::new(4.0)),
        Box::new(Point),
    ];
    let mut lines: Transcript = shapes
        .iter()
        .map(|s| format!("{} area: {:.2}", s.name(), s.area()))
        .collect();
    lines.push(format!("Total: {:.2}", total_area(&shapes)));

    let _derived = Derived::new(&mut lines);
    lines
}
