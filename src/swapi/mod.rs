//! Upstream SWAPI access.
//!
//! # Data Flow
//! ```text
//! handler
//!     → SwapiClient (trait object held in AppState)
//!         → client.rs: HttpSwapiClient (reqwest → swapi.dev)
//!         → mock.rs:   MockSwapiClient (caller-supplied values, call counts)
//!     → ApiResult<model>
//! ```
//!
//! # Design Decisions
//! - Handlers only see the trait; the implementation is injected at router build
//! - Every operation is a single request/response pair, no internal state
//! - Errors come back already classified (NotFound vs Internal)

pub mod client;
pub mod mock;

use std::fmt;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{PeopleList, Person, Starship, Starships};

pub use client::HttpSwapiClient;
pub use mock::{CallControl, MockSwapiClient};

/// The capability set an upstream client must provide.
#[async_trait]
pub trait SwapiClient: Send + Sync {
    /// Fetch one starship by its upstream id.
    async fn get_starship(&self, id: i64) -> ApiResult<Starship>;

    /// Fetch the first page of starships.
    async fn get_starships(&self) -> ApiResult<Starships>;

    /// Fetch one person by their upstream id.
    async fn get_person(&self, id: i64) -> ApiResult<Person>;

    /// Fetch the first page of people.
    async fn get_people_list(&self) -> ApiResult<PeopleList>;
}

/// Names the four client operations, for logs, metrics and mock bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetStarship,
    GetStarships,
    GetPerson,
    GetPeopleList,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::GetStarship,
        Operation::GetStarships,
        Operation::GetPerson,
        Operation::GetPeopleList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetStarship => "get_starship",
            Operation::GetStarships => "get_starships",
            Operation::GetPerson => "get_person",
            Operation::GetPeopleList => "get_people_list",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
