use axum::{http::StatusCode, routing::get, Router};
use insightbot::{
    backend::{config::InsightConfig, start, utils::error::BackendResult},
    frontend::api::ApiClient,
};
use log::LevelFilter;
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
        Once,
    },
    time::Duration,
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle, time::sleep};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Warn)
            .filter_module("insightbot", LevelFilter::Debug)
            .init();
    });
}

/// Article source which answers every listing request with the same response.
pub struct MockSource {
    pub addr: SocketAddr,
    requests: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockSource {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> BackendResult<Self> {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like [MockSource::start], but each response is sent only after `delay`.
    pub async fn start_delayed(
        status: StatusCode,
        body: impl Into<String>,
        delay: Duration,
    ) -> BackendResult<Self> {
        init_logging();
        let body = body.into();
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = requests.clone();
        let app = Router::new().route(
            "/api/articles/",
            get(move || {
                let body = body.clone();
                counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    sleep(delay).await;
                    (status, body)
                }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    /// Number of listing requests received so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(reqwest::Client::new(), self.url())
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Address on which nothing listens.
pub async fn unused_addr() -> BackendResult<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    Ok(listener.local_addr()?)
}

/// Dashboard server reading from the given article source.
pub struct TestDashboard {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestDashboard {
    pub async fn start(article_source: String) -> BackendResult<Self> {
        init_logging();
        let addr = unused_addr().await?;
        let config = InsightConfig {
            bind: addr.to_string(),
            article_source,
        };
        let (notify_start, started) = oneshot::channel();
        let handle = tokio::spawn(async move {
            if let Err(e) = start(config, Some(addr), Some(notify_start)).await {
                log::error!("Test dashboard failed: {e}");
            }
        });
        started.await?;
        Ok(Self { addr, handle })
    }

    pub async fn get_page(&self, path: &str) -> BackendResult<String> {
        let res = reqwest::get(format!("http://{}{path}", self.addr)).await?;
        Ok(res.error_for_status()?.text().await?)
    }
}

impl Drop for TestDashboard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
