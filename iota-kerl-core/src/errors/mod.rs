pub mod error_handler;
pub mod error_messages;
