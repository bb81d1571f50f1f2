use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrambleError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BrambleResult<T> = Result<T, BrambleError>;
