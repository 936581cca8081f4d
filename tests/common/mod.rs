#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use pomo::api::{build_router, AppState};
use pomo::db::{create_test_pool, migrations, repositories::SqlxSessionRepository};
use pomo::services::SessionService;

/// A pomo-server over an in-memory store, alive as long as the runtime.
pub struct TestServer {
    addr: SocketAddr,
    _runtime: tokio::runtime::Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let addr = runtime.block_on(async {
            let pool = create_test_pool().await.expect("pool");
            migrations::run_migrations(&pool).await.expect("migrations");
            let service = Arc::new(SessionService::new(SqlxSessionRepository::boxed(
                pool.clone(),
            )));
            let app = build_router(AppState::new(pool, service), "*");

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind");
            let addr = listener.local_addr().expect("local addr");
            tokio::spawn(async move {
                axum::serve(listener, app).await.expect("serve");
            });
            addr
        });

        Self {
            addr,
            _runtime: runtime,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
