//! The prototype pattern: build new instances by copying an existing one.
//!
//! Rust has no runtime prototypes, so the "prototype" is just a value of a
//! concrete type plus two copy constructors with different sharing rules.

/// Types that can be copied with either sharing rule.
///
/// - `clone_shallow` copies owned scalar fields and shares every nested,
///   reference-counted part with `self`.
/// - `clone_deep` allocates fresh storage for every nested part, so the
///   result and `self` share nothing mutable.
pub trait Prototype: Sized {
    fn clone_shallow(&self) -> Self;
    fn clone_deep(&self) -> Self;
}
