// Pattern 6: Interfaces
// A type can implement any number of traits; callers ask only for the
// capability they need.

use crate::Transcript;

pub trait Flyable {
    fn fly(&self) -> String;
}

pub trait Swimmable {
    fn swim(&self) -> String;
}

pub struct Duck;
pub struct Fish;

impl Flyable for Duck {
    fn fly(&self) -> String {
        "Duck flies".to_string()
    }
}

impl Swimmable for Duck {
    fn swim(&self) -> String {
        "Duck swims".to_string()
    }
}

impl Swimmable for Fish {
    fn swim(&self) -> String {
        "Fish swims".to_string()
    }
}

/// Static dispatch with two bounds.
pub fn migrate<T: Flyable + Swimmable>(animal: &T) -> Transcript {
    vec![animal.fly(), animal.swim()]
}

pub fn demo() -> Transcript {
    let mut lines = migrate(&Duck);
    let swimmers: Vec<&dyn Swimmable> = vec![&Duck, &Fish];
    lines.extend(swimmers.iter().map(|s| s.swim()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duck_implements_both() {
        assert_eq!(migrate(&Duck), vec!["Duck flies", "Duck swims"]);
    }

    #[test]
    fn test_trait_objects() {
        assert_eq!(demo()[2..], ["Duck swims", "Fish swims"]);
    }
}
