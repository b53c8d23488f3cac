//! In-process stand-in for the habits server, recording every request.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::future::poll_fn;
use std::rc::Rc;
use std::task::Poll;

use api::{ApiError, Credentials, Habit, HabitApi, HabitId, RegisterOutcome, TokenResponse};

#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Login(String),
    Register(String),
    List(String),
    Create { token: String, name: String },
    Rename { token: String, id: HabitId, name: String },
    Delete { token: String, id: HabitId },
}

#[derive(Default)]
struct Server {
    requests: Vec<Request>,
    /// username -> (password, token issued on login)
    users: HashMap<String, (String, String)>,
    valid_tokens: HashSet<String>,
    reject_all: bool,
    habits: Vec<Habit>,
    next_id: i64,
    fail_next: Option<u16>,
    held: Option<Gate>,
}

/// Holds one request open until [`Gate::release`]. The held future only
/// makes progress when polled again after release.
#[derive(Clone, Default)]
pub struct Gate(Rc<Cell<bool>>);

impl Gate {
    pub fn release(&self) {
        self.0.set(true);
    }

    async fn wait(&self) {
        poll_fn(|_| {
            if self.0.get() {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await
    }
}

impl Server {
    fn authorize(&mut self, token: &str) -> Result<(), ApiError> {
        if let Some(status) = self.fail_next.take() {
            return Err(status_error(status));
        }
        if !self.reject_all && self.valid_tokens.contains(token) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

fn status_error(status: u16) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Status { status }
    }
}

#[derive(Clone, Default)]
pub struct FakeApi {
    server: Rc<RefCell<Server>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.server.borrow_mut().next_id = 100;
        api
    }

    pub fn with_user(self, username: &str, password: &str, token: &str) -> Self {
        {
            let mut server = self.server.borrow_mut();
            server.users.insert(
                username.to_string(),
                (password.to_string(), token.to_string()),
            );
            server.valid_tokens.insert(token.to_string());
        }
        self
    }

    pub fn with_habits(self, habits: Vec<Habit>) -> Self {
        self.set_habits(habits);
        self
    }

    pub fn set_habits(&self, habits: Vec<Habit>) {
        self.server.borrow_mut().habits = habits;
    }

    pub fn server_habits(&self) -> Vec<Habit> {
        self.server.borrow().habits.clone()
    }

    /// Answer the next request with `status` instead of its normal response.
    pub fn fail_next(&self, status: u16) {
        self.server.borrow_mut().fail_next = Some(status);
    }

    /// Reject every bearer token from now on, including ones issued later.
    pub fn reject_tokens(&self) {
        self.server.borrow_mut().reject_all = true;
    }

    /// Keep the next request from answering until the returned gate is
    /// released. Never releasing it models a server that hangs.
    pub fn hold_next(&self) -> Gate {
        let gate = Gate::default();
        self.server.borrow_mut().held = Some(gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<Request> {
        self.server.borrow().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.server.borrow_mut().requests.clear();
    }
}

impl FakeApi {
    /// Log the request, then wait out a held gate before it is served.
    async fn receive(&self, request: Request) {
        let held = {
            let mut server = self.server.borrow_mut();
            server.requests.push(request);
            server.held.take()
        };
        if let Some(gate) = held {
            gate.wait().await;
        }
    }
}

impl HabitApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.receive(Request::Login(credentials.username.clone())).await;
        let mut server = self.server.borrow_mut();
        if let Some(status) = server.fail_next.take() {
            return Err(status_error(status));
        }
        let token = match server.users.get(&credentials.username) {
            Some((password, token)) if *password == credentials.password => token.clone(),
            _ => return Err(ApiError::Unauthorized),
        };
        server.valid_tokens.insert(token.clone());
        Ok(TokenResponse {
            access_token: token,
        })
    }

    async fn register(&self, credentials: &Credentials) -> Result<RegisterOutcome, ApiError> {
        self.receive(Request::Register(credentials.username.clone())).await;
        let mut server = self.server.borrow_mut();
        if let Some(status) = server.fail_next.take() {
            return Ok(RegisterOutcome::Rejected { status });
        }
        if server.users.contains_key(&credentials.username) {
            return Ok(RegisterOutcome::Rejected { status: 409 });
        }
        let token = format!("token-{}", credentials.username);
        server.users.insert(
            credentials.username.clone(),
            (credentials.password.clone(), token),
        );
        Ok(RegisterOutcome::Created)
    }

    async fn list_habits(&self, token: &str) -> Result<Vec<Habit>, ApiError> {
        self.receive(Request::List(token.to_string())).await;
        let mut server = self.server.borrow_mut();
        server.authorize(token)?;
        Ok(server.habits.clone())
    }

    async fn create_habit(&self, token: &str, name: &str) -> Result<Habit, ApiError> {
        self.receive(Request::Create {
            token: token.to_string(),
            name: name.to_string(),
        })
        .await;
        let mut server = self.server.borrow_mut();
        server.authorize(token)?;
        server.next_id += 1;
        let habit = Habit::new(server.next_id, name);
        server.habits.push(habit.clone());
        Ok(habit)
    }

    async fn rename_habit(&self, token: &str, id: HabitId, name: &str) -> Result<(), ApiError> {
        self.receive(Request::Rename {
            token: token.to_string(),
            id,
            name: name.to_string(),
        })
        .await;
        let mut server = self.server.borrow_mut();
        server.authorize(token)?;
        match server.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                habit.name = name.to_string();
                Ok(())
            }
            None => Err(ApiError::Status { status: 404 }),
        }
    }

    async fn delete_habit(&self, token: &str, id: HabitId) -> Result<(), ApiError> {
        self.receive(Request::Delete {
            token: token.to_string(),
            id,
        })
        .await;
        let mut server = self.server.borrow_mut();
        server.authorize(token)?;
        let before = server.habits.len();
        server.habits.retain(|h| h.id != id);
        if server.habits.len() == before {
            return Err(ApiError::Status { status: 404 });
        }
        Ok(())
    }
}
