// API module - typed client for the dog search service
//
// Every request carries the server session cookie (kept in reqwest's cookie
// store after a successful login). A 401 from any endpoint is surfaced as
// `ApiError::Unauthorized` so views can treat it as "session expired".
//
// The `DogApi` trait is the seam between the views and the network: the TUI
// drives `HttpDogApi`, tests drive an in-memory fake.

mod error;

pub use error::ApiError;

use crate::model::{Credentials, Dog, MatchResponse, SearchPage, SearchQuery};
use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Operations the views need from the remote service
pub trait DogApi: Send + Sync + 'static {
    fn login(&self, credentials: &Credentials)
        -> impl Future<Output = Result<(), ApiError>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn breeds(&self) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchPage, ApiError>> + Send;

    fn dogs(&self, ids: &[String]) -> impl Future<Output = Result<Vec<Dog>, ApiError>> + Send;

    fn find_match(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<MatchResponse, ApiError>> + Send;
}

/// HTTP implementation backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpDogApi {
    client: Client,
    base_url: Url,
}

impl HttpDogApi {
    /// Build a client with a cookie store and the configured transport timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// Map non-2xx statuses to errors, 401 to `Unauthorized`
    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check(response)?
            .json::<T>()
            .await
            .map_err(ApiError::Decode)
    }
}

impl DogApi for HttpDogApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        tracing::debug!("POST /auth/login for {}", credentials.name);
        let response = self
            .client
            .post(self.url("/auth/login")?)
            .json(credentials)
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        tracing::debug!("POST /auth/logout");
        let response = self.client.post(self.url("/auth/logout")?).send().await?;
        Self::check(response)?;
        Ok(())
    }

    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        tracing::debug!("GET /dogs/breeds");
        let response = self.client.get(self.url("/dogs/breeds")?).send().await?;
        Self::decode(response).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, ApiError> {
        let pairs = query.to_query_pairs();
        tracing::debug!("GET /dogs/search {:?}", pairs);
        let response = self
            .client
            .get(self.url("/dogs/search")?)
            .query(&pairs)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        tracing::debug!("POST /dogs with {} id(s)", ids.len());
        let response = self
            .client
            .post(self.url("/dogs")?)
            .json(ids)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn find_match(&self, ids: &[String]) -> Result<MatchResponse, ApiError> {
        tracing::debug!("POST /dogs/match with {} candidate(s)", ids.len());
        let response = self
            .client
            .post(self.url("/dogs/match")?)
            .json(ids)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Filters, PageSize};
    use axum::{
        extract::{Json, RawQuery},
        http::{header, HeaderMap, StatusCode as AxumStatus},
        response::IntoResponse,
        routing::{get, post},
        Router,
    };
    use tokio::net::TcpListener;

    const SESSION_COOKIE: &str = "fetch-access-token=abc123";

    async fn login_handler(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
        if body["email"] == "bad@example.com" {
            return AxumStatus::INTERNAL_SERVER_ERROR.into_response();
        }
        (
            [(header::SET_COOKIE, format!("{}; Path=/", SESSION_COOKIE))],
            "OK",
        )
            .into_response()
    }

    fn has_session(headers: &HeaderMap) -> bool {
        headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains(SESSION_COOKIE))
            .unwrap_or(false)
    }

    async fn search_handler(headers: HeaderMap, RawQuery(query): RawQuery) -> impl IntoResponse {
        if !has_session(&headers) {
            return AxumStatus::UNAUTHORIZED.into_response();
        }
        // Echo the raw query back in the id list so the test can inspect it
        Json(serde_json::json!({
            "resultIds": [query.unwrap_or_default()],
            "total": 1
        }))
        .into_response()
    }

    async fn dogs_handler(headers: HeaderMap, Json(ids): Json<Vec<String>>) -> impl IntoResponse {
        if !has_session(&headers) {
            return AxumStatus::UNAUTHORIZED.into_response();
        }
        let dogs: Vec<Dog> = ids
            .into_iter()
            .map(|id| Dog {
                name: format!("Dog {}", id),
                breed: "Beagle".to_string(),
                age: 3,
                zip_code: "10001".to_string(),
                img: format!("https://img.example/{}.jpg", id),
                id,
            })
            .collect();
        Json(dogs).into_response()
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/auth/login", post(login_handler))
            .route("/auth/logout", post(|| async { AxumStatus::OK }))
            .route("/dogs/breeds", get(|| async { Json(vec!["Akita", "Boxer"]) }))
            .route("/dogs/search", get(search_handler))
            .route("/dogs", post(dogs_handler))
            .route(
                "/dogs/match",
                post(|Json(ids): Json<Vec<String>>| async move {
                    Json(serde_json::json!({ "match": ids.last().cloned().unwrap_or_default() }))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base: &str) -> HttpDogApi {
        HttpDogApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_requests_before_login_are_unauthorized() {
        let base = spawn_server().await;
        let api = client(&base);

        let err = api.dogs(&["d1".to_string()]).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_login_cookie_is_sent_on_later_requests() {
        let base = spawn_server().await;
        let api = client(&base);

        api.login(&Credentials {
            name: "Ann".into(),
            email: "ann@example.com".into(),
        })
        .await
        .unwrap();

        let dogs = api.dogs(&["d1".to_string(), "d2".to_string()]).await.unwrap();
        assert_eq!(dogs.len(), 2);
        assert_eq!(dogs[0].id, "d1");
        assert_eq!(dogs[1].img, "https://img.example/d2.jpg");
    }

    #[tokio::test]
    async fn test_login_failure_maps_status() {
        let base = spawn_server().await;
        let api = client(&base);

        let err = api
            .login(&Credentials {
                name: "Ann".into(),
                email: "bad@example.com".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_search_serializes_repeated_keys() {
        let base = spawn_server().await;
        let api = client(&base);
        api.login(&Credentials {
            name: "Ann".into(),
            email: "ann@example.com".into(),
        })
        .await
        .unwrap();

        let query = SearchQuery {
            page_size: PageSize::Five,
            page_num: 1,
            filters: Filters {
                breeds: vec!["Akita".into(), "Boxer".into()],
                ..Filters::default()
            },
            ..SearchQuery::default()
        };
        let page = api.search(&query).await.unwrap();
        let raw = &page.result_ids[0];

        assert!(raw.contains("size=5"));
        assert!(raw.contains("from=5"));
        assert!(raw.contains("sort=breed%3Aasc"));
        assert!(raw.contains("breeds=Akita&breeds=Boxer"));
    }

    #[tokio::test]
    async fn test_breeds_and_match() {
        let base = spawn_server().await;
        let api = client(&base);

        assert_eq!(api.breeds().await.unwrap(), vec!["Akita", "Boxer"]);

        let response = api
            .find_match(&["d1".to_string(), "d9".to_string()])
            .await
            .unwrap();
        assert_eq!(response.id(), Some("d9"));

        api.logout().await.unwrap();
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(HttpDogApi::new("not a url", Duration::from_secs(1)).is_err());
    }
}
