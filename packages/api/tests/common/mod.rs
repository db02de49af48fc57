#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use admin_core::{Credentials, Session};
use api::{AdminClient, ApiError, ApiRequest, ApiResponse, ClientConfig, Method, Transport, TransportFuture};
use serde_json::Value;

pub const BASE_URL: &str = "http://backend.test/api";
pub const TOKEN: &str = "test-token";

struct Route {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    replies: VecDeque<Result<ApiResponse, ApiError>>,
}

impl Route {
    fn matches(&self, request: &ApiRequest) -> bool {
        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        self.method == request.method
            && path == self.path
            && self.query.iter().all(|pair| request.query.contains(pair))
    }

    fn next_reply(&mut self) -> Result<ApiResponse, ApiError> {
        if self.replies.len() > 1 {
            if let Some(reply) = self.replies.pop_front() {
                return reply;
            }
        }
        self.replies
            .front()
            .cloned()
            .unwrap_or_else(|| Ok(ApiResponse::new(500, "")))
    }
}

#[derive(Default)]
struct MockState {
    routes: Vec<Route>,
    requests: Vec<ApiRequest>,
}

/// Scripted [`Transport`] recording every request it sees.
///
/// Replies registered for one route are served in order; the last one
/// repeats. Unknown routes answer 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, query: &[(&str, &str)], reply: Result<ApiResponse, ApiError>) {
        let mut state = self.state.borrow_mut();
        let query: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if let Some(route) = state
            .routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path && r.query == query)
        {
            route.replies.push_back(reply);
            return;
        }
        state.routes.push(Route {
            method,
            path: path.to_string(),
            query,
            replies: VecDeque::from([reply]),
        });
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.push(method, path, &[], Ok(ApiResponse::new(status, body.to_string())));
    }

    pub fn respond_page(&self, path: &str, page: u32, body: Value) {
        let page = page.to_string();
        self.push(
            Method::Get,
            path,
            &[("page", page.as_str())],
            Ok(ApiResponse::new(200, body.to_string())),
        );
    }

    pub fn fail(&self, method: Method, path: &str) {
        self.push(
            method,
            path,
            &[],
            Err(ApiError::Transport("connection refused".to_string())),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        let mut state = self.state.borrow_mut();
        let reply = state
            .routes
            .iter_mut()
            .rev()
            .find(|r| r.matches(&request))
            .map(Route::next_reply)
            .unwrap_or_else(|| Ok(ApiResponse::new(404, r#"{"message":"no such route"}"#)));
        state.requests.push(request);
        Box::pin(async move { reply })
    }
}

/// A client over `transport` with a signed-in session.
pub fn signed_in_client(transport: &MockTransport) -> AdminClient {
    let session = Session::in_memory();
    session.sign_in(Credentials {
        token: TOKEN.to_string(),
        user_id: Some("admin-1".to_string()),
    });
    AdminClient::new(ClientConfig::new(BASE_URL), transport.clone(), session)
}

/// A client over `transport` with no session.
pub fn anonymous_client(transport: &MockTransport) -> AdminClient {
    AdminClient::new(ClientConfig::new(BASE_URL), transport.clone(), Session::in_memory())
}
