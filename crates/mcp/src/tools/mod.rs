pub mod estat;
mod registry;

pub use estat::{error_message, schema_for, EStatTool};
pub use registry::{
    json_schema_number, json_schema_number_with_default, json_schema_object, json_schema_string,
    Tool, ToolRegistry,
};
