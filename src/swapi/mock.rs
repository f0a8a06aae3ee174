//! Test double for [`SwapiClient`].
//!
//! Each operation has an optional responder closure, which supplies the exact
//! value the call returns, and a [`CallControl`] counting invocations. Tests
//! build their own mock, hand an `Arc` of it to the router, then call
//! [`MockSwapiClient::assert_calls`] once the request has completed.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::models::{PeopleList, Person, Starship, Starships};
use crate::swapi::{Operation, SwapiClient};

type ByIdResponder<T> = Box<dyn Fn(i64) -> ApiResult<T> + Send + Sync>;
type ListResponder<T> = Box<dyn Fn() -> ApiResult<T> + Send + Sync>;

/// Expected versus observed invocation count for one operation.
#[derive(Debug, Default)]
pub struct CallControl {
    expected_calls: usize,
    calls: AtomicUsize,
}

impl CallControl {
    pub fn expect(expected_calls: usize) -> Self {
        Self {
            expected_calls,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn expected_calls(&self) -> usize {
        self.expected_calls
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn is_satisfied(&self) -> bool {
        self.calls() == self.expected_calls
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scriptable [`SwapiClient`] for handler tests.
///
/// Operations without a responder expect zero calls and answer with an
/// internal error if called anyway.
#[derive(Default)]
pub struct MockSwapiClient {
    get_starship: Option<ByIdResponder<Starship>>,
    get_starship_control: CallControl,
    get_starships: Option<ListResponder<Starships>>,
    get_starships_control: CallControl,
    get_person: Option<ByIdResponder<Person>>,
    get_person_control: CallControl,
    get_people_list: Option<ListResponder<PeopleList>>,
    get_people_list_control: CallControl,
}

impl MockSwapiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get_starship<F>(mut self, expected_calls: usize, responder: F) -> Self
    where
        F: Fn(i64) -> ApiResult<Starship> + Send + Sync + 'static,
    {
        self.get_starship = Some(Box::new(responder));
        self.get_starship_control = CallControl::expect(expected_calls);
        self
    }

    pub fn on_get_starships<F>(mut self, expected_calls: usize, responder: F) -> Self
    where
        F: Fn() -> ApiResult<Starships> + Send + Sync + 'static,
    {
        self.get_starships = Some(Box::new(responder));
        self.get_starships_control = CallControl::expect(expected_calls);
        self
    }

    pub fn on_get_person<F>(mut self, expected_calls: usize, responder: F) -> Self
    where
        F: Fn(i64) -> ApiResult<Person> + Send + Sync + 'static,
    {
        self.get_person = Some(Box::new(responder));
        self.get_person_control = CallControl::expect(expected_calls);
        self
    }

    pub fn on_get_people_list<F>(mut self, expected_calls: usize, responder: F) -> Self
    where
        F: Fn() -> ApiResult<PeopleList> + Send + Sync + 'static,
    {
        self.get_people_list = Some(Box::new(responder));
        self.get_people_list_control = CallControl::expect(expected_calls);
        self
    }

    pub fn control(&self, operation: Operation) -> &CallControl {
        match operation {
            Operation::GetStarship => &self.get_starship_control,
            Operation::GetStarships => &self.get_starships_control,
            Operation::GetPerson => &self.get_person_control,
            Operation::GetPeopleList => &self.get_people_list_control,
        }
    }

    /// Number of times `operation` has been invoked so far.
    pub fn calls(&self, operation: Operation) -> usize {
        self.control(operation).calls()
    }

    /// Total invocations across every operation.
    pub fn total_calls(&self) -> usize {
        Operation::ALL.iter().map(|op| self.calls(*op)).sum()
    }

    /// Check every operation's call count against its expectation.
    ///
    /// Returns one message per unmet expectation.
    pub fn verify(&self) -> Result<(), Vec<String>> {
        let failures: Vec<String> = Operation::ALL
            .iter()
            .filter_map(|op| {
                let control = self.control(*op);
                (!control.is_satisfied()).then(|| {
                    format!(
                        "{}: expected {} call(s), got {}",
                        op,
                        control.expected_calls(),
                        control.calls()
                    )
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    /// Panic if any operation was called a different number of times than expected.
    pub fn assert_calls(&self) {
        if let Err(failures) = self.verify() {
            panic!("mock call expectations not met: {}", failures.join("; "));
        }
    }
}

fn unconfigured<T>(operation: Operation) -> ApiResult<T> {
    Err(ApiError::internal_with(format!(
        "no mock response configured for {}",
        operation
    )))
}

#[async_trait]
impl SwapiClient for MockSwapiClient {
    async fn get_starship(&self, id: i64) -> ApiResult<Starship> {
        self.get_starship_control.record();
        match &self.get_starship {
            Some(responder) => responder(id),
            None => unconfigured(Operation::GetStarship),
        }
    }

    async fn get_starships(&self) -> ApiResult<Starships> {
        self.get_starships_control.record();
        match &self.get_starships {
            Some(responder) => responder(),
            None => unconfigured(Operation::GetStarships),
        }
    }

    async fn get_person(&self, id: i64) -> ApiResult<Person> {
        self.get_person_control.record();
        match &self.get_person {
            Some(responder) => responder(id),
            None => unconfigured(Operation::GetPerson),
        }
    }

    async fn get_people_list(&self) -> ApiResult<PeopleList> {
        self.get_people_list_control.record();
        match &self.get_people_list {
            Some(responder) => responder(),
            None => unconfigured(Operation::GetPeopleList),
        }
    }
}

impl std::fmt::Debug for MockSwapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSwapiClient")
            .field("get_starship", &self.get_starship_control)
            .field("get_starships", &self.get_starships_control)
            .field("get_person", &self.get_person_control)
            .field("get_people_list", &self.get_people_list_control)
            .finish()
    }
}
