// Pattern 10: Prototype - a shape with scalar and nested fields
use crate::prototype::Prototype;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Named numeric measurements of a shape, e.g. `width = 10`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimensions(BTreeMap<String, f64>);

impl Dimensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Dimensions {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Dimensions(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A shape whose `dimensions` live in shared, mutable storage.
///
/// `kind` is owned by each instance. `dimensions` is reference counted, so
/// whether two shapes see each other's writes depends on how they were cloned.
#[derive(Debug, PartialEq)]
pub struct Shape {
    pub kind: String,
    pub dimensions: Rc<RefCell<Dimensions>>,
}

impl Shape {
    pub fn new(kind: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            kind: kind.into(),
            dimensions: Rc::new(RefCell::new(dimensions)),
        }
    }

    /// The `{ type: "Rectangle", dimensions: { width: 10, height: 20 } }` shape.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(
            "Rectangle",
            [("width", width), ("height", height)].into_iter().collect(),
        )
    }

    pub fn dimension(&self, name: &str) -> Option<f64> {
        self.dimensions.borrow().get(name)
    }

    /// Writes through the shared storage; shallow clones observe the change.
    pub fn set_dimension(&self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.dimensions.borrow_mut().set(name, value)
    }

    pub fn shares_dimensions_with(&self, other: &Shape) -> bool {
        Rc::ptr_eq(&self.dimensions, &other.dimensions)
    }

    pub fn snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot {
            kind: self.kind.clone(),
            dimensions: self.dimensions.borrow().clone(),
        }
    }
}

impl Prototype for Shape {
    fn clone_shallow(&self) -> Self {
        Shape {
            kind: self.kind.clone(),
            dimensions: Rc::clone(&self.dimensions),
        }
    }

    fn clone_deep(&self) -> Self {
        Shape {
            kind: self.kind.clone(),
            dimensions: Rc::new(RefCell::new(self.dimensions.borrow().clone())),
        }
    }
}

/// Owned, serializable view of a [`Shape`] at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    #[serde(rename = "type")]
    pub kind: String,
    pub dimensions: Dimensions,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let snapshot = self.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_clone_shares_dimensions() {
        let original = Shape::rectangle(10.0, 20.0);
        let shallow = original.clone_shallow();

        assert!(shallow.shares_dimensions_with(&original));
        assert_eq!(Rc::strong_count(&original.dimensions), 2);

        original.set_dimension("width", 99.0);
        assert_eq!(shallow.dimension("width"), Some(99.0));
    }

    #[test]
    fn test_deep_clone_owns_dimensions() {
        let original = Shape::rectangle(10.0, 20.0);
        let deep = original.clone_deep();

        assert!(!deep.shares_dimensions_with(&original));
        assert_eq!(deep, original);

        original.set_dimension("width", 99.0);
        assert_eq!(deep.dimension("width"), Some(10.0));
        assert_eq!(original.dimension("width"), Some(99.0));
    }

    #[test]
    fn test_write_through_shallow_clone_reaches_original() {
        let original = Shape::rectangle(10.0, 20.0);
        let shallow = original.clone_shallow();

        shallow.set_dimension("height", 5.0);
        assert_eq!(original.dimension("height"), Some(5.0));
    }

    #[test]
    fn test_kind_is_never_shared() {
        let original = Shape::rectangle(10.0, 20.0);
        let mut shallow = original.clone_shallow();
        let mut deep = original.clone_deep();

        shallow.kind = "Square".to_string();
        deep.kind = "Circle".to_string();

        assert_eq!(original.kind, "Rectangle");
    }

    #[test]
    fn test_display_uses_original_field_names() {
        let shape = Shape::rectangle(10.0, 20.0);
        assert_eq!(
            shape.to_string(),
            r#"{"type":"Rectangle","dimensions":{"height":20.0,"width":10.0}}"#
        );
    }

    #[test]
    fn test_dimensions_from_iter() {
        let dims: Dimensions = [("radius", 3.0)].into_iter().collect();
        assert_eq!(dims.get("radius"), Some(3.0));
        assert!(dims.contains("radius"));
        assert_eq!(dims.len(), 1);
        assert!(!dims.is_empty());
    }
}
