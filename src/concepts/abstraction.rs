// Pattern 5: Abstraction
// Required trait methods play the role of abstract methods; provided ones
// are the shared concrete behaviour.

use crate::Transcript;

pub trait Vehicle {
    fn start(&self) -> String; // must be implemented

    fn stop(&self) -> String {
        "Vehicle stopped".to_string()
    }
}

pub struct Bike;

impl Vehicle for Bike {
    fn start(&self) -> String {
        "Bike started".to_string()
    }
}

pub struct Truck;

impl Vehicle for Truck {
    fn start(&self) -> String {
        "Truck started".to_string()
    }

    fn stop(&self) -> String {
        "Truck stopped with air brakes".to_string()
    }
}

/// Callers only see the abstract contract.
pub fn run_trip(vehicle: &dyn Vehicle) -> Transcript {
    vec![vehicle.start(), vehicle.stop()]
}

pub fn demo() -> Transcript {
    let mut lines = run_trip(&Bike);
    lines.extend(run_trip(&Truck));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_method() {
        assert_eq!(run_trip(&Bike), vec!["Bike started", "Vehicle stopped"]);
    }

    #[test]
    fn test_overridden_method() {
        assert_eq!(Truck.stop(), "Truck stopped with air brakes");
        assert_eq!(demo().len(), 4);
    }
}
