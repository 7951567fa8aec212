#![allow(dead_code)]
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const SUMMARY_BODY: &str = r#"{
    "domains_being_blocked": "121,436",
    "dns_queries_today": "12,085",
    "ads_blocked_today": "1,184",
    "ads_percentage_today": "9.8",
    "unique_clients": "7",
    "status": "enabled"
}"#;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

/// Local stand-in for the appliance's `admin/api.php` endpoint.
pub struct MockPiholeServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockPiholeServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_query = Arc::new(Mutex::new(None));
        let state = MockState {
            status,
            body: Arc::new(body.to_string()),
            hits: Arc::clone(&hits),
            last_query: Arc::clone(&last_query),
        };

        let app = Router::new()
            .route("/admin/api.php", get(summary))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            hits,
            last_query,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub async fn ok() -> Self {
        Self::start(StatusCode::OK, SUMMARY_BODY).await
    }

    /// `host:port` to put in `PiholeConfig::host`.
    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

impl Drop for MockPiholeServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn summary(State(state): State<MockState>, RawQuery(query): RawQuery) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query;
    (state.status, state.body.as_ref().clone())
}
