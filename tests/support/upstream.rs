//! Throwaway auth backend bound to an ephemeral port.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: &'static str,
    queries: Arc<Mutex<Vec<String>>>,
}

pub struct Upstream {
    pub addr: SocketAddr,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl Upstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().ok().and_then(|q| q.last().cloned())
    }
}

async fn whoami(State(stub): State<Stub>, RawQuery(query): RawQuery) -> Response {
    if let Ok(mut q) = stub.queries.lock() {
        q.push(query.unwrap_or_default());
    }
    (stub.status, stub.body).into_response()
}

/// Serve `body` with `status` on `/auth/whoami`, recording raw query strings.
pub async fn spawn(status: StatusCode, body: &'static str) -> Upstream {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        status,
        body,
        queries: queries.clone(),
    };
    let app = Router::new()
        .route("/auth/whoami", get(whoami))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream { addr, queries }
}

/// An address nothing is listening on.
pub async fn dead_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
