// Pattern 1: Classes and Objects
// A struct is the blueprint; each value built from it is an object.

use crate::Transcript;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    brand: String,
}

impl Car {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn drive(&self) -> String {
        format!("{} is driving", self.brand)
    }
}

pub fn demo() -> Transcript {
    let my_car = Car::new("Toyota");
    let other = Car::new("Volvo");
    vec![my_car.drive(), other.drive()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive() {
        let car = Car::new("Toyota");
        assert_eq!(car.drive(), "Toyota is driving");
        assert_eq!(car.brand(), "Toyota");
    }

    #[test]
    fn test_objects_are_independent() {
        assert_ne!(Car::new("Toyota"), Car::new("Volvo"));
        assert_eq!(demo(), vec!["Toyota is driving", "Volvo is driving"]);
    }
}
