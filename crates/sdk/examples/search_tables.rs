//! Search statistics tables.
//!
//! Looks up tables matching a keyword and prints the raw API response.
//!
//! Run with: E_STAT_APP_ID=... cargo run --example search_tables -- 人口

use estat_sdk::{EStatClient, EStatResult, ToolArguments};

#[tokio::main]
async fn main() -> EStatResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let app_id = std::env::var("E_STAT_APP_ID").unwrap_or_default();
    let client = EStatClient::builder().app_id(app_id).build()?;

    let keyword = std::env::args().nth(1).unwrap_or_else(|| "人口".to_string());
    let args = ToolArguments {
        search_word: Some(keyword.clone()),
        survey_years: Some("2015-2020".to_string()),
        limit: Some(5),
        ..Default::default()
    };

    println!("Searching tables for {:?}...", keyword);
    match client.search_tables(&args).await {
        Ok(Ok(body)) => {
            let pretty = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
            println!("{}", pretty);
        }
        Ok(Err(failure)) => {
            println!("Request failed ({}): {}", failure.status, failure.error);
        }
        Err(invalid) => {
            println!("Invalid arguments: {}", invalid);
        }
    }

    Ok(())
}
