pub mod server;
pub mod template;
