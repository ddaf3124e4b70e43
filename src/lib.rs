// Design Patterns & SOLID Principles Catalog
// This crate provides runnable examples, one binary per pattern or principle.

pub mod examples {
    //! # Design Patterns & SOLID Principles
    //!
    //! Runnable examples for:
    //!
    //! ## Creational Patterns
    //! - Builder Pattern (fluent API, typestate) - `p1_builder`
    //! - Factory Pattern (trait objects, enums) - `p2_factory`
    //! - Singleton Pattern (OnceLock, lazy_static) - `p3_singleton`
    //!
    //! ## SOLID Principles
    //! - Open/Closed Principle (payment methods) - `p4_open_closed`
    //! - Single Responsibility Principle (invoice refactor) - `p5_single_responsibility`
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_builder
    //! cargo run --bin p2_factory
    //! cargo run --bin p3_singleton
    //! cargo run --bin p4_open_closed
    //! cargo run --bin p5_single_responsibility
    //! ```
}
