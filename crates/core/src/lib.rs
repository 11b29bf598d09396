#![forbid(unsafe_code)]

//! Domain model for the hub: quiz sessions over a question bank and
//! lost-pet reports. No IO lives here; persistence and transport sit in
//! the `storage` and `services` crates.

pub mod model;
pub mod time;

pub use time::Clock;
