pub mod guards;
pub mod messages;
pub mod session;
pub mod tools;
mod content;
mod error;

pub use content::parts::{
    Blob, CodeExecutionResult, ExecutableCode, FileData, FunctionCall, FunctionResponse, Language,
    Outcome, Part,
};
pub use content::{Content, Role};
pub use error::{DecodeError, ValidationError};
pub use messages::{ClientMessage, ServerMessage};
