// e-Stat API tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_number, json_schema_number_with_default, json_schema_object, json_schema_string,
    Tool,
};
use anyhow::{Context, Result};
use estat_sdk::{EStatClient, Operation, ToolArguments};
use serde::Serialize;
use std::sync::Arc;

/// One e-Stat operation exposed as an MCP tool
pub struct EStatTool {
    operation: Operation,
    client: EStatClient,
}

impl EStatTool {
    pub fn new(operation: Operation, client: EStatClient) -> Self {
        Self { operation, client }
    }

    /// All five e-Stat tools sharing one client
    pub fn all(client: &EStatClient) -> Vec<Arc<dyn Tool>> {
        Operation::ALL
            .into_iter()
            .map(|op| Arc::new(Self::new(op, client.clone())) as Arc<dyn Tool>)
            .collect()
    }
}

fn pretty(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize tool output")
}

#[derive(Serialize)]
struct ErrorMessage {
    error: String,
}

/// Tool output for a failure that never reached the upstream
pub fn error_message(message: impl Into<String>) -> Result<CallToolResult> {
    let body = pretty(&ErrorMessage {
        error: message.into(),
    })?;
    Ok(CallToolResult::error(body))
}

#[async_trait::async_trait]
impl Tool for EStatTool {
    fn schema(&self) -> ToolSchema {
        schema_for(self.operation)
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let outcome = match ToolArguments::from_value(arguments) {
            Ok(args) => self.client.call(self.operation, &args).await,
            Err(invalid) => Err(invalid),
        };

        match outcome {
            Ok(Ok(body)) => Ok(CallToolResult::text(pretty(&body)?)),
            Ok(Err(failure)) => {
                tracing::warn!(tool = %self.operation, status = %failure.status, "e-Stat request failed");
                Ok(CallToolResult::error(pretty(&failure)?))
            }
            Err(invalid) => {
                tracing::debug!(tool = %self.operation, error = %invalid, "Rejected tool arguments");
                error_message(invalid.to_string())
            }
        }
    }
}

const START_POSITION: &str =
    "Start position for data retrieval (default: 1). データ取得開始位置（デフォルト: 1）";
const LIMIT: &str = "Number of items to retrieve (default: 100). 取得件数（デフォルト: 100）";
const SURVEY_YEARS: &str = "Target year/month in format yyyy, yyyymm, or yyyymm-yyyymm. \
     対象年月（yyyy、yyyymm、yyyymm-yyyymm形式）";

/// MCP schema advertised for an operation
pub fn schema_for(operation: Operation) -> ToolSchema {
    let (description, input_schema) = match operation {
        Operation::SearchTables => (
            "Search statistics tables from e-Stat API by keyword and year. \
             Returns a list of matching statistics tables. \
             キーワードと年度で政府統計表を検索します。",
            json_schema_object(
                serde_json::json!({
                    "search_word": json_schema_string(
                        "Search keyword for statistics (supports AND/OR/NOT operators). \
                         統計の検索キーワード（AND/OR/NOT演算子対応）"
                    ),
                    "surveyYears": json_schema_string(SURVEY_YEARS),
                    "startPosition": json_schema_number_with_default(START_POSITION, 1),
                    "limit": json_schema_number_with_default(LIMIT, 100),
                    "openYears": json_schema_string(
                        "Data release year/month in format yyyy, yyyymm, or yyyymm-yyyymm. \
                         データ公開年月（yyyy、yyyymm、yyyymm-yyyymm形式）"
                    ),
                    "statsField": json_schema_string(
                        "Statistics field code (e.g., '02' for population). \
                         統計分野コード（例：人口なら'02'）"
                    ),
                    "statsCode": json_schema_string(
                        "Statistics code for specific statistical surveys. 特定の統計調査コード"
                    ),
                    "searchKind": json_schema_string(
                        "Search type: '1' for summary, '2' for details (default: '1'). \
                         検索種別：'1'=要約、'2'=詳細（デフォルト：'1'）"
                    )
                }),
                vec!["search_word"],
            ),
        ),
        Operation::GetMetaInfo => (
            "Get metadata information for a specific statistics table from e-Stat API. \
             Returns detailed metadata including table structure and categories. \
             特定の統計表のメタ情報を取得します。",
            json_schema_object(
                serde_json::json!({
                    "stats_data_id": json_schema_string("Statistics table ID. 統計表ID"),
                    "explanationGetFlg": json_schema_string(
                        "Flag to get explanations: 'Y' to include, 'N' to exclude (default: 'N'). \
                         説明情報取得フラグ：'Y'=取得、'N'=非取得（デフォルト：'N'）"
                    )
                }),
                vec!["stats_data_id"],
            ),
        ),
        Operation::GetStatsData => {
            let mut schema = json_schema_object(
                serde_json::json!({
                    "data_set_id": json_schema_string(
                        "Dataset ID (use this OR stats_data_id). \
                         データセットID（stats_data_idとは排他的）"
                    ),
                    "stats_data_id": json_schema_string(
                        "Statistics table ID (use this OR data_set_id). \
                         統計表ID（data_set_idとは排他的）"
                    ),
                    "startPosition": json_schema_number_with_default(START_POSITION, 1),
                    "limit": json_schema_number_with_default(LIMIT, 100),
                    "sectionHeaderFlg": json_schema_number(
                        "Section header flag: 1 to include section headers, 2 to exclude (default: 1). \
                         項目名出力フラグ：1=出力、2=非出力（デフォルト：1）"
                    ),
                    "replaceSpChars": json_schema_number(
                        "Replace special characters: 1 to replace, 2 to keep (default: 2). \
                         特殊文字置換フラグ：1=置換、2=非置換（デフォルト：2）"
                    ),
                    "narrowDownArea": json_schema_string(
                        "Area code to narrow down results (e.g., '13000' for Tokyo). \
                         地域絞込みコード（例：東京都なら'13000'）"
                    )
                }),
                vec![],
            );
            if let Some(object) = schema.as_object_mut() {
                object.remove("required");
                object.insert(
                    "oneOf".to_string(),
                    serde_json::json!([
                        {"required": ["data_set_id"]},
                        {"required": ["stats_data_id"]}
                    ]),
                );
            }
            (
                "Get specific statistical data (numeric values) from e-Stat API. \
                 Use either data_set_id OR stats_data_id (not both). \
                 特定の統計データ（数値）を取得します。",
                schema,
            )
        }
        Operation::RefDataset => (
            "Reference dataset filtering conditions from e-Stat API. \
             Returns available filtering options for the dataset. \
             データセットのフィルタリング条件を参照します。",
            json_schema_object(
                serde_json::json!({
                    "data_set_id": json_schema_string("Dataset ID. データセットID")
                }),
                vec!["data_set_id"],
            ),
        ),
        Operation::GetDataCatalog => (
            "Get statistics file and database catalog information from e-Stat API. \
             Returns available data files and database information. \
             統計ファイル・データベースのカタログ情報を取得します。",
            json_schema_object(
                serde_json::json!({
                    "search_word": json_schema_string(
                        "Search keyword (supports AND/OR/NOT operators). \
                         検索キーワード（AND/OR/NOT演算子対応）"
                    ),
                    "surveyYears": json_schema_string(SURVEY_YEARS),
                    "startPosition": json_schema_number_with_default(START_POSITION, 1),
                    "limit": json_schema_number_with_default(LIMIT, 100),
                    "dataType": json_schema_string(
                        "Data type: 'XLS' for Excel files, 'CSV' for CSV files, 'PDF' for PDF files. \
                         データ種別：'XLS'=Excel、'CSV'=CSV、'PDF'=PDF"
                    ),
                    "catalogId": json_schema_string(
                        "Catalog ID for specific data catalog. 特定のデータカタログID"
                    ),
                    "resourceId": json_schema_string(
                        "Resource ID for specific data resource. 特定のデータリソースID"
                    )
                }),
                vec![],
            ),
        ),
    };

    ToolSchema {
        name: operation.tool_name().to_string(),
        description: description.to_string(),
        input_schema,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> EStatClient {
        EStatClient::builder()
            .app_id("test-app-id")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    fn text_of(result: &CallToolResult) -> Value {
        serde_json::from_str(result.content[0].as_text()).unwrap()
    }

    #[test]
    fn test_schema_names_and_required_fields() {
        let required = |op: Operation| schema_for(op).input_schema["required"].clone();

        assert_eq!(schema_for(Operation::SearchTables).name, "search_e_stat_tables");
        assert_eq!(required(Operation::SearchTables), json!(["search_word"]));
        assert_eq!(required(Operation::GetMetaInfo), json!(["stats_data_id"]));
        assert_eq!(required(Operation::RefDataset), json!(["data_set_id"]));
        assert_eq!(required(Operation::GetDataCatalog), json!([]));
    }

    #[test]
    fn test_stats_data_schema_uses_one_of() {
        let schema = schema_for(Operation::GetStatsData).input_schema;

        assert!(schema.get("required").is_none());
        assert_eq!(
            schema["oneOf"],
            json!([{"required": ["data_set_id"]}, {"required": ["stats_data_id"]}])
        );
        assert_eq!(schema["properties"]["limit"]["default"], json!(100));
    }

    #[tokio::test]
    async fn test_validation_error_is_reported_as_text() {
        let server = MockServer::start().await;
        let tool = EStatTool::new(Operation::GetStatsData, client_for(&server).await);

        let result = tool.execute(json!({})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            json!({"error": "Please provide either data_set_id OR stats_data_id"})
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_body_is_returned_pretty_printed() {
        let server = MockServer::start().await;
        let body = json!({"GET_META_INFO": {"RESULT": {"STATUS": 0}}});

        Mock::given(method("GET"))
            .and(path("/getMetaInfo"))
            .and(query_param("statsDataId", "0003448697"))
            .and(query_param("explanationGetFlg", "Y"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let tool = EStatTool::new(Operation::GetMetaInfo, client_for(&server).await);
        let result = tool
            .execute(json!({"stats_data_id": "0003448697", "explanationGetFlg": "Y"}))
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        assert_eq!(text_of(&result), body);
        assert!(result.content[0].as_text().contains('\n'));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_reported_as_error_result() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/refDataset"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tool = EStatTool::new(Operation::RefDataset, client_for(&server).await);
        let result = tool.execute(json!({"data_set_id": "ds1"})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            json!({"error": "HTTP error! status: 503", "status": "503"})
        );
    }
}
