//! Domain models returned to clients.
//!
//! # Design Decisions
//! - The same structs decode upstream payloads and encode responses
//! - Every scalar is a `String`: upstream mixes numbers with "n/a", "unknown"
//! - Field declaration order is the wire order
//! - Unknown upstream fields are dropped on decode

pub mod person;
pub mod starship;

pub use person::{PeopleList, Person};
pub use starship::{Starship, Starships};
