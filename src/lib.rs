pub mod common;
pub mod handlers;
pub mod invoke;
pub mod server;
