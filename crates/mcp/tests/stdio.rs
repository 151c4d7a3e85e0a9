// End-to-end: JSON-RPC lines in, JSON-RPC lines out, against a mock e-Stat API

use estat_mcp::server::McpServer;
use estat_mcp::tools::{EStatTool, ToolRegistry};
use estat_sdk::EStatClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::io::AsyncReadExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(upstream: &MockServer) -> McpServer {
    let client = EStatClient::builder()
        .app_id("integration-app-id")
        .base_url(upstream.uri())
        .build()
        .unwrap();

    let mut registry = ToolRegistry::new();
    for tool in EStatTool::all(&client) {
        registry.register(tool);
    }
    McpServer::new(registry)
}

/// Feed `requests` to the server, one per line, and collect responses by id.
async fn exchange(server: &McpServer, requests: &[Value]) -> HashMap<i64, Value> {
    let input: String = requests.iter().map(|r| format!("{}\n", r)).collect();
    let (writer, mut reader) = tokio::io::duplex(1 << 20);

    server.serve(input.as_bytes(), writer).await.unwrap();

    let mut output = String::new();
    reader.read_to_string(&mut output).await.unwrap();

    output
        .lines()
        .map(|line| {
            let response: Value = serde_json::from_str(line).unwrap();
            (response["id"].as_i64().unwrap(), response)
        })
        .collect()
}

fn tool_text(response: &Value) -> Value {
    serde_json::from_str(response["result"]["content"][0]["text"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_session_lists_and_calls_tools() {
    let upstream = MockServer::start().await;
    let body = json!({
        "GET_STATS_LIST": {
            "RESULT": {"STATUS": 0},
            "DATALIST_INF": {"NUMBER": 1, "TABLE_INF": [{"@id": "0003448697"}]}
        }
    });

    Mock::given(method("GET"))
        .and(path("/getStatsList"))
        .and(query_param("appId", "integration-app-id"))
        .and(query_param("searchWord", "人口"))
        .and(query_param("limit", "5"))
        .and(query_param("searchKind", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = server_for(&upstream);
    let responses = exchange(
        &server,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "integration", "version": "0.0.1"}
            }}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list", "params": {}}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {
                "name": "search_e_stat_tables",
                "arguments": {"search_word": "人口", "limit": 5, "searchKind": "1"}
            }}),
            json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call", "params": {
                "name": "get_specific_e_stat_data",
                "arguments": {"data_set_id": "ds1", "stats_data_id": "0003448697"}
            }}),
            json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {
                "name": "search_e_stat_tables",
                "arguments": {"search_word": "人口", "surveyYears": "202013"}
            }}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 5);
    assert_eq!(responses[&1]["result"]["serverInfo"]["name"], "estat-mcp");

    let names: Vec<&str> = responses[&2]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "search_e_stat_tables",
            "get_e_stat_meta_info",
            "get_specific_e_stat_data",
            "get_e_stat_ref_dataset",
            "get_e_stat_data_catalog"
        ]
    );

    assert!(responses[&3]["result"].get("isError").is_none());
    assert_eq!(tool_text(&responses[&3]), body);

    assert_eq!(responses[&4]["result"]["isError"], true);
    assert_eq!(
        tool_text(&responses[&4]),
        json!({"error": "Please provide either data_set_id OR stats_data_id, not both"})
    );

    let invalid = tool_text(&responses[&5]);
    assert!(invalid["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid surveyYears format: 202013."));
}

#[tokio::test]
async fn test_upstream_http_error_is_returned_as_error_result() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getMetaInfo"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;

    let server = server_for(&upstream);
    let responses = exchange(
        &server,
        &[json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": {
            "name": "get_e_stat_meta_info",
            "arguments": {"stats_data_id": "0003448697"}
        }})],
    )
    .await;

    assert_eq!(responses[&1]["result"]["isError"], true);
    assert_eq!(
        tool_text(&responses[&1]),
        json!({"error": "HTTP error! status: 404", "status": "404"})
    );
}
