//! # e-Stat SDK
//!
//! Rust client for the e-Stat API, the Japanese government statistics portal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use estat_sdk::{EStatClient, EStatResult, ToolArguments};
//!
//! #[tokio::main]
//! async fn main() -> EStatResult<()> {
//!     let client = EStatClient::builder()
//!         .app_id("your-application-id")
//!         .build()?;
//!
//!     let args = ToolArguments {
//!         search_word: Some("人口".to_string()),
//!         limit: Some(5),
//!         ..Default::default()
//!     };
//!
//!     match client.search_tables(&args).await {
//!         Ok(Ok(body)) => println!("{}", body),
//!         Ok(Err(failure)) => eprintln!("request failed: {}", failure),
//!         Err(invalid) => eprintln!("bad arguments: {}", invalid),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Request failures never surface as Rust errors. Timeouts, connection
//! problems and non-2xx answers come back as an [`ErrorResult`] with a fixed
//! `status` code; a successful body is returned exactly as the API sent it.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{EStatClient, EStatClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::{EStatError, EStatResult, ErrorResult, ErrorStatus, UpstreamResult};

// Re-export core types for convenience
pub use estat_core::{
    normalize_survey_years, translate, Endpoint, Operation, ParamValue, RequestParameters,
    ToolArguments, ValidationError, ValidationResult,
};
