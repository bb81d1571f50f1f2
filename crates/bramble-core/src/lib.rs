pub mod error;
pub mod types;

pub use error::{BrambleError, BrambleResult};
pub use types::ListenerConfig;
