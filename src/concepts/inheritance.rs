// Pattern 3: Inheritance
// Rust has no class inheritance. Behaviour is reused through default trait
// methods, and state through embedding the "parent" struct.

use crate::Transcript;

// ============================================================================
// Example: Single Inheritance - Dog reuses Animal's behaviour
// ============================================================================

pub trait Animal {
    fn name(&self) -> &str;

    fn move_around(&self) -> String {
        format!("{} moves", self.name())
    }
}

pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn bark(&self) -> String {
        format!("{} barks", self.name)
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }
}

pub fn single_example() -> Transcript {
    let d = Dog::new("Bruno");
    vec![d.move_around(), d.bark()]
}

// ============================================================================
// Example: Multilevel Inheritance - constructors run base first
// ============================================================================

pub struct LivingBeing;

impl LivingBeing {
    pub fn new(log: &mut Transcript) -> Self {
        log.push("LivingBeing constructor".to_string());
        LivingBeing
    }
}

pub struct Mammal {
    _base: LivingBeing,
}

impl Mammal {
    pub fn new(log: &mut Transcript) -> Self {
        let base = LivingBeing::new(log);
        log.push("Mammal constructor".to_string());
        Self { _base: base }
    }
}

pub struct Puppy {
    _base: Mammal,
}

impl Puppy {
    pub fn new(log: &mut Transcript) -> Self {
        let base = Mammal::new(log);
        log.push("Puppy constructor".to_string());
        Self { _base: base }
    }
}

pub fn multilevel_example() -> Transcript {
    let mut log = Transcript::new();
    let _puppy = Puppy::new(&mut log);
    log
}

// ============================================================================
// Example: Hierarchical Inheritance - several types share one parent
// ============================================================================

pub trait Vehicle {
    fn start(&self) -> String {
        "Vehicle started".to_string()
    }
}

pub struct Car;
pub struct Bike;

impl Vehicle for Car {}
impl Vehicle for Bike {}

impl Car {
    pub fn drive(&self) -> String {
        "Car is driving".to_string()
    }
}

impl Bike {
    pub fn ride(&self) -> String {
        "Bike is riding".to_string()
    }
}

pub fn hierarchical_example() -> Transcript {
    let car = Car;
    let bike = Bike;
    vec![car.start(), car.drive(), bike.start(), bike.ride()]
}
