pub mod api;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod prompt;
pub mod tools;
pub mod ui;

pub use api::GenerationService;
pub use dispatcher::Dispatcher;
pub use error::{CreatorError, GenerationError, Result};
pub use tools::{ToolDescriptor, ToolId, ToolInput};
