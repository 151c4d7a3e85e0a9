// Core types and request translation for the e-Stat MCP server

pub mod arguments;
pub mod error;
pub mod survey_years;
pub mod translate;
pub mod types;

pub use arguments::ToolArguments;
pub use error::{ValidationError, ValidationResult};
pub use survey_years::normalize_survey_years;
pub use translate::translate;
pub use types::*;
