//! # Object-Oriented Concepts in Rust
//!
//! This crate contains runnable examples of classic object-oriented ideas,
//! expressed with structs, traits and ownership instead of class hierarchies.
//!
//! ## Patterns Covered
//!
//! 1. **Classes and Objects** - structs with methods
//! 2. **Encapsulation** - private fields behind a method API
//! 3. **Inheritance** - single, multilevel and hierarchical reuse via traits
//! 4. **Polymorphism** - one method name, many implementations
//! 5. **Abstraction** - required vs provided trait methods
//! 6. **Interfaces** - a type implementing several contracts
//! 7. **Association** - shared references between independent objects
//! 8. **Aggregation** - a container borrowing parts that outlive it
//! 9. **Composition** - a container owning its parts
//! 10. **Prototype** - shallow vs deep cloning of nested, shared storage
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_classes_objects
//! cargo run --bin p3_inheritance
//! cargo run --bin p10_prototype_clone -- --verbose
//! OOP_DEMO_CONFIG=demo.toml cargo run --bin p10_prototype_clone
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the clone and config error types
//! - `serde` / `toml` - Demo configuration
//! - `serde_json` - Rendering value graphs for the console
//! - `log` / `env_logger` - Diagnostic logging
//! - `colored` - Console highlighting

pub mod cloner;
pub mod concepts;
pub mod config;
pub mod error;
pub mod prototype;
pub mod report;
pub mod shape;
pub mod value;

pub use cloner::Cloner;
pub use config::{ClonerConfig, CyclePolicy, DemoConfig, OpaquePolicy};
pub use error::{CloneError, ConfigError};
pub use prototype::Prototype;
pub use shape::{Dimensions, Shape};
pub use value::Value;

/// Console lines produced by a concept example, in the order they happened.
pub type Transcript = Vec<String>;
