pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod registry;
pub mod tools;
pub mod ui;

pub use dispatch::{DispatchResult, Dispatcher};
pub use error::{Result, RouterError};
pub use models::ToolSpec;
pub use registry::ToolRegistry;
