//! In-memory `DogApi` for view tests
//!
//! Responses are queued per endpoint; every call is recorded so tests can
//! assert on exactly which requests a view issued.

use super::{ApiError, DogApi};
use crate::model::{Credentials, Dog, MatchResponse, SearchPage, SearchQuery};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(Credentials),
    Logout,
    Breeds,
    Search(SearchQuery),
    Dogs(Vec<String>),
    Match(Vec<String>),
}

/// Canned response: either a value or a status code to fail with
pub type Canned<T> = Result<T, u16>;

#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<Call>>,
    pub login: Mutex<VecDeque<Canned<()>>>,
    pub breeds: Mutex<VecDeque<Canned<Vec<String>>>>,
    pub search: Mutex<VecDeque<Canned<SearchPage>>>,
    pub dogs: Mutex<VecDeque<Canned<Vec<Dog>>>>,
    pub matches: Mutex<VecDeque<Canned<MatchResponse>>>,
}

fn status(code: u16) -> ApiError {
    if code == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Status(StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
    }
}

fn next<T>(queue: &Mutex<VecDeque<Canned<T>>>) -> Result<T, ApiError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(Err(500))
        .map_err(status)
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn dog(id: &str) -> Dog {
    Dog {
        id: id.to_string(),
        name: format!("Dog {}", id),
        breed: "Beagle".to_string(),
        age: 4,
        zip_code: "10001".to_string(),
        img: format!("https://img.example/{}.jpg", id),
    }
}

impl DogApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(Call::Login(credentials.clone()));
        next(&self.login)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record(Call::Logout);
        Ok(())
    }

    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        self.record(Call::Breeds);
        next(&self.breeds)
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, ApiError> {
        self.record(Call::Search(query.clone()));
        next(&self.search)
    }

    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        self.record(Call::Dogs(ids.to_vec()));
        next(&self.dogs)
    }

    async fn find_match(&self, ids: &[String]) -> Result<MatchResponse, ApiError> {
        self.record(Call::Match(ids.to_vec()));
        next(&self.matches)
    }
}
