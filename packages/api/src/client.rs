//! # REST client for the habits server
//!
//! [`HabitApi`] is the seam between the client core and the network. The core
//! is generic over it, so tests drive the session and habit logic with an
//! in-process fake while the apps use [`HttpApi`].
//!
//! ## Status mapping
//!
//! | Response | Result |
//! |----------|--------|
//! | 2xx | `Ok` (body decoded where the contract has one) |
//! | 401 | [`ApiError::Unauthorized`] |
//! | 422 on a bearer request | [`ApiError::Unauthorized`] |
//! | other | [`ApiError::Status`] |
//! | no response / bad body | [`ApiError::Http`] |
//!
//! The server's JWT layer answers malformed or badly signed tokens with 422.
//!
//! `/register` is the exception: any status completes the call and is
//! reported as a [`RegisterOutcome`].

use reqwest::{Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Credentials, Habit, HabitId, HabitName, RegisterOutcome, TokenResponse};

/// Async trait for the habits REST contract.
///
/// Authenticated methods take the bearer token explicitly; the client core
/// decides which token is current.
pub trait HabitApi {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<TokenResponse, ApiError>>;
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<RegisterOutcome, ApiError>>;
    fn list_habits(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Habit>, ApiError>>;
    fn create_habit(
        &self,
        token: &str,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Habit, ApiError>>;
    fn rename_habit(
        &self,
        token: &str,
        id: HabitId,
        name: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn delete_habit(
        &self,
        token: &str,
        id: HabitId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed [`HabitApi`]. Cheap to clone; clones share one
/// connection pool.
#[derive(Clone, Debug)]
pub struct HttpApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn habit_path(id: HabitId) -> String {
        format!("api/habits/{id}")
    }
}

/// Map a response status onto the contract's error kinds.
fn check(response: Response, bearer: bool) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED
        || (bearer && status == StatusCode::UNPROCESSABLE_ENTITY)
    {
        return Err(ApiError::Unauthorized);
    }
    Err(ApiError::Status {
        status: status.as_u16(),
    })
}

impl HabitApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        tracing::debug!("POST /login as {}", credentials.username);
        let response = self
            .http
            .post(self.config.endpoint("login")?)
            .json(credentials)
            .send()
            .await?;
        Ok(check(response, false)?.json().await?)
    }

    async fn register(&self, credentials: &Credentials) -> Result<RegisterOutcome, ApiError> {
        tracing::debug!("POST /register as {}", credentials.username);
        let response = self
            .http
            .post(self.config.endpoint("register")?)
            .json(credentials)
            .send()
            .await?;
        let status = response.status();
        Ok(if status.is_success() {
            RegisterOutcome::Created
        } else {
            RegisterOutcome::Rejected {
                status: status.as_u16(),
            }
        })
    }

    async fn list_habits(&self, token: &str) -> Result<Vec<Habit>, ApiError> {
        tracing::debug!("GET /api/habits");
        let response = self
            .http
            .get(self.config.endpoint("api/habits")?)
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(response, true)?.json().await?)
    }

    async fn create_habit(&self, token: &str, name: &str) -> Result<Habit, ApiError> {
        tracing::debug!("POST /api/habits");
        let response = self
            .http
            .post(self.config.endpoint("api/habits")?)
            .bearer_auth(token)
            .json(&HabitName { name })
            .send()
            .await?;
        Ok(check(response, true)?.json().await?)
    }

    async fn rename_habit(&self, token: &str, id: HabitId, name: &str) -> Result<(), ApiError> {
        tracing::debug!("PUT /api/habits/{id}");
        let response = self
            .http
            .put(self.config.endpoint(&Self::habit_path(id))?)
            .bearer_auth(token)
            .json(&HabitName { name })
            .send()
            .await?;
        check(response, true)?;
        Ok(())
    }

    async fn delete_habit(&self, token: &str, id: HabitId) -> Result<(), ApiError> {
        tracing::debug!("DELETE /api/habits/{id}");
        let response = self
            .http
            .delete(self.config.endpoint(&Self::habit_path(id))?)
            .bearer_auth(token)
            .send()
            .await?;
        check(response, true)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HttpApi {
        HttpApi::new(ApiConfig::new(&server.uri()))
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"username": "alice", "password": "secret"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok123"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let token = api_for(&server)
            .login(&Credentials::new("alice", "secret"))
            .await
            .unwrap();
        assert_eq!(token.access_token, "tok123");
    }

    #[tokio::test]
    async fn test_login_bad_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let err = api_for(&server)
            .login(&Credentials::new("alice", "wrong"))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_login_422_is_plain_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .login(&Credentials::new("alice", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 422 }));
    }

    #[tokio::test]
    async fn test_register_completes_on_any_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(201))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let creds = Credentials::new("bob", "hunter2");
        assert_eq!(api.register(&creds).await.unwrap(), RegisterOutcome::Created);
        assert_eq!(
            api.register(&creds).await.unwrap(),
            RegisterOutcome::Rejected { status: 500 }
        );
    }

    #[tokio::test]
    async fn test_list_habits_sends_bearer_and_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/habits"))
            .and(header("authorization", "Bearer tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 3, "name": "Stretch"},
                {"id": 1, "name": "Run"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let habits = api_for(&server).list_habits("tok123").await.unwrap();
        assert_eq!(habits, vec![Habit::new(3, "Stretch"), Habit::new(1, "Run")]);
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/habits"))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/habits"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let api = api_for(&server);
        assert!(api.list_habits("expired").await.unwrap_err().is_unauthorized());
        assert!(api.list_habits("garbage").await.unwrap_err().is_unauthorized());
    }

    #[tokio::test]
    async fn test_create_habit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/habits"))
            .and(header("authorization", "Bearer tok123"))
            .and(body_json(json!({"name": "Meditate"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": 9, "name": "Meditate"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let habit = api_for(&server)
            .create_habit("tok123", "Meditate")
            .await
            .unwrap();
        assert_eq!(habit, Habit::new(9, "Meditate"));
    }

    #[tokio::test]
    async fn test_rename_habit() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/habits/42"))
            .and(header("authorization", "Bearer tok123"))
            .and(body_json(json!({"name": "Run 5k"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 42, "name": "Run 5k"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server)
            .rename_habit("tok123", HabitId(42), "Run 5k")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_habit_errors_carry_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/habits/7"))
            .and(header("authorization", "Bearer tok123"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = api_for(&server)
            .delete_habit("tok123", HabitId(7))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/habits"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).list_habits("tok123").await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
