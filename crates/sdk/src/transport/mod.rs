//! Transport layer for the e-Stat SDK.

pub mod http;

pub use http::HttpTransport;
