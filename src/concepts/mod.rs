//! One module per object-oriented concept. Each `demo` function returns the
//! lines its binary prints, so the behaviour can be asserted in tests.

pub mod abstraction;
pub mod aggregation;
pub mod association;
pub mod classes;
pub mod composition;
pub mod encapsulation;
pub mod inheritance;
pub mod interfaces;
pub mod polymorphism;
