// MCP tool trait and registry

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult>;
}

/// Tool registry for managing available tools.
///
/// Tools are listed in registration order.
pub struct ToolRegistry {
    tools: Vec<(String, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.tools.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = tool,
            None => self.tools.push((name, tool)),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, tool)| tool.clone())
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|(_, t)| t.schema()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_number(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_number_with_default(description: &str, default: u64) -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": description,
        "default": default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool(&'static str);

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.0.to_string(),
                description: "Echo the arguments".to_string(),
                input_schema: json_schema_object(serde_json::json!({}), vec![]),
            }
        }

        async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
            Ok(CallToolResult::text(arguments.to_string()))
        }
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool("b")));
        registry.register(Arc::new(EchoTool("a")));
        registry.register(Arc::new(EchoTool("c")));

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool("echo")));
        registry.register(Arc::new(EchoTool("echo")));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("echo").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_get_and_execute() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool("echo")));

        let tool = registry.get("echo").unwrap();
        let result = tool.execute(serde_json::json!({"x": 1})).await.unwrap();
        assert_eq!(result.content[0].as_text(), "{\"x\":1}");
    }
}
