use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::protocol::Command;
use crate::store::Store;

/// HTTP server
pub struct Server {
  listener: TcpListener,
  local_addr: SocketAddr,
  store: Arc<Store>,
}

impl Server {
  /// Create and bind HTTP server to specified address
  pub async fn bind(addr: &str) -> std::io::Result<Self> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("HTTP server bound to {}", local_addr);

    Ok(Self {
      listener,
      local_addr,
      store: Arc::new(Store::new()),
    })
  }

  /// Get local listening address
  pub fn local_addr(&self) -> SocketAddr {
    self.local_addr
  }

  /// Get the store served by this server
  pub fn store(&self) -> Arc<Store> {
    Arc::clone(&self.store)
  }

  /// Serve requests until `shutdown` resolves
  pub async fn run<F>(self, shutdown: F) -> std::io::Result<()>
  where
    F: Future<Output = ()> + Send + 'static,
  {
    info!("Server started, listening on {}", self.local_addr);

    let app = router(self.store);
    axum::serve(self.listener, app)
      .with_graceful_shutdown(shutdown)
      .await?;

    info!("Server stopped");
    Ok(())
  }
}

/// Build the request router over `store`
pub fn router(store: Arc<Store>) -> Router {
  Router::new()
    .route("/{command}", any(handle_command))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

/// Dispatch a request to the store command named by its path
async fn handle_command(
  State(store): State<Arc<Store>>,
  Path(name): Path<String>,
  Query(params): Query<HashMap<String, String>>,
) -> Response {
  let Some(cmd) = Command::parse(&name, &params) else {
    return not_found().await.into_response();
  };

  let reply = cmd.execute(&store);
  let status = reply.status();
  if status.is_success() {
    debug!("{} {:?} -> {}", cmd.name(), cmd.key(), status);
  } else {
    warn!("{} {:?} -> {}: {}", cmd.name(), cmd.key(), status, reply.body());
  }

  reply.into_response()
}

async fn not_found() -> (StatusCode, &'static str) {
  (StatusCode::NOT_FOUND, "404 page not found")
}

/// Resolve when the process receives Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      warn!("Failed to listen for Ctrl-C: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        warn!("Failed to listen for SIGTERM: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }

  info!("Shutdown signal received");
}
