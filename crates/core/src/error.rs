/// Argument contract violation, raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please provide either data_set_id OR stats_data_id, not both")]
    ConflictingIdentifiers,

    #[error("Please provide either data_set_id OR stats_data_id")]
    MissingIdentifier,

    #[error(
        "Invalid surveyYears format: {0}. Valid formats are: yyyy (e.g., '2020'), \
         yyyymm (e.g., '202010'), or yyyymm-yyyymm (e.g., '202001-202012')"
    )]
    InvalidSurveyYears(String),

    /// Arguments could not be read into the expected shape
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
