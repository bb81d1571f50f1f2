use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::Router;
use bramble_core::{BrambleError, BrambleResult, ListenerConfig};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::template::DecoyTemplate;

/// No routes at all: the fallback answers every method and path with
/// the same template.
pub fn decoy_router(template: Arc<DecoyTemplate>) -> Router {
    Router::new().fallback(serve_decoy).with_state(template)
}

async fn serve_decoy(State(template): State<Arc<DecoyTemplate>>) -> Response {
    template.to_response()
}

/// A running decoy listener. Dropping the handle (or calling
/// [`ServerHandle::shutdown`]) stops the accept loop and releases the
/// port.
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting, waits for in-flight connections to finish.
    pub async fn shutdown(mut self) -> BrambleResult<()> {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        match self.task.await {
            Ok(result) => Ok(result?),
            Err(join) => Err(BrambleError::Io(std::io::Error::other(join))),
        }
    }

    /// Blocks until the serve loop exits on its own, which only happens
    /// on a transport-level failure.
    pub async fn wait(self) -> BrambleResult<()> {
        match self.task.await {
            Ok(result) => Ok(result?),
            Err(join) => Err(BrambleError::Io(std::io::Error::other(join))),
        }
    }
}

/// Binds the listener and starts serving the decoy. Fails with
/// [`BrambleError::Bind`] when the port is already taken or privileged.
pub async fn start(config: ListenerConfig) -> BrambleResult<ServerHandle> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| BrambleError::Bind {
            addr: config.addr,
            source,
        })?;
    let addr = listener.local_addr()?;

    let router = decoy_router(Arc::new(DecoyTemplate::apache_default()));
    let (stop, stopped) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                // resolves on explicit shutdown or when the handle is dropped
                let _ = stopped.await;
            })
            .await
    });

    info!(%addr, "decoy listening");

    Ok(ServerHandle {
        addr,
        stop: Some(stop),
        task,
    })
}
