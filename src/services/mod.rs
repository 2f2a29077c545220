pub mod date_window;
pub mod gong_client;
pub mod logger;
pub mod tool_executor;
