use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream REST endpoint of the e-Stat API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    #[serde(rename = "getStatsList")]
    GetStatsList,
    #[serde(rename = "getMetaInfo")]
    GetMetaInfo,
    #[serde(rename = "getStatsData")]
    GetStatsData,
    #[serde(rename = "refDataset")]
    RefDataset,
    #[serde(rename = "getDataCatalog")]
    GetDataCatalog,
}

impl Endpoint {
    /// Path segment appended to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::GetStatsList => "getStatsList",
            Self::GetMetaInfo => "getMetaInfo",
            Self::GetStatsData => "getStatsData",
            Self::RefDataset => "refDataset",
            Self::GetDataCatalog => "getDataCatalog",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Logical operation exposed as an MCP tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Search statistics tables by keyword and period
    SearchTables,
    /// Metadata of one statistics table
    GetMetaInfo,
    /// Numeric values of a table or dataset
    GetStatsData,
    /// Filter conditions registered for a dataset
    RefDataset,
    /// Statistics file and database catalog
    GetDataCatalog,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::SearchTables,
        Operation::GetMetaInfo,
        Operation::GetStatsData,
        Operation::RefDataset,
        Operation::GetDataCatalog,
    ];

    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::SearchTables => "search_e_stat_tables",
            Self::GetMetaInfo => "get_e_stat_meta_info",
            Self::GetStatsData => "get_specific_e_stat_data",
            Self::RefDataset => "get_e_stat_ref_dataset",
            Self::GetDataCatalog => "get_e_stat_data_catalog",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::SearchTables => Endpoint::GetStatsList,
            Self::GetMetaInfo => Endpoint::GetMetaInfo,
            Self::GetStatsData => Endpoint::GetStatsData,
            Self::RefDataset => Endpoint::RefDataset,
            Self::GetDataCatalog => Endpoint::GetDataCatalog,
        }
    }

    /// Look up an operation by its MCP tool name
    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.tool_name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

/// A single upstream query parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(u64),
    Text(String),
}

impl ParamValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Flat, ordered mapping of upstream parameter names to values.
///
/// Absent and empty values are never stored, so every entry ends up in the
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestParameters {
    entries: Vec<(&'static str, ParamValue)>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unless its value is empty
    pub fn with(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.entries.push((name, value));
        }
        self
    }

    /// Add a parameter if present and non-empty
    pub fn with_opt<V>(self, name: &'static str, value: Option<V>) -> Self
    where
        V: Into<ParamValue>,
    {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_lookup_by_tool_name() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_tool_name(op.tool_name()), Some(op));
        }
        assert_eq!(Operation::from_tool_name("get_weather"), None);
    }

    #[test]
    fn test_operation_endpoints() {
        assert_eq!(Operation::SearchTables.endpoint().path(), "getStatsList");
        assert_eq!(Operation::GetMetaInfo.endpoint().path(), "getMetaInfo");
        assert_eq!(Operation::GetStatsData.endpoint().path(), "getStatsData");
        assert_eq!(Operation::RefDataset.endpoint().path(), "refDataset");
        assert_eq!(Operation::GetDataCatalog.endpoint().path(), "getDataCatalog");
    }

    #[test]
    fn test_empty_values_are_dropped() {
        let params = RequestParameters::new()
            .with("searchWord", "人口")
            .with("openYears", "")
            .with_opt::<u64>("limit", None)
            .with_opt("startPosition", Some(1u64));

        assert_eq!(params.names(), vec!["searchWord", "startPosition"]);
        assert!(!params.contains("openYears"));
        assert!(!params.contains("limit"));
    }

    #[test]
    fn test_numeric_values_keep_their_type() {
        let params = RequestParameters::new().with("limit", 10u64);

        assert_eq!(params.get("limit"), Some(&ParamValue::Integer(10)));
        assert_eq!(params.get("limit").unwrap().to_string(), "10");
    }
}
