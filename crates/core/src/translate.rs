// Maps tool arguments to upstream request parameters

use crate::arguments::ToolArguments;
use crate::error::{ValidationError, ValidationResult};
use crate::survey_years::normalize_survey_years;
use crate::types::{Operation, RequestParameters};

/// Validate the arguments of `operation` and build its upstream parameters.
pub fn translate(operation: Operation, args: &ToolArguments) -> ValidationResult<RequestParameters> {
    match operation {
        Operation::SearchTables => search_tables(args),
        Operation::GetMetaInfo => get_meta_info(args),
        Operation::GetStatsData => get_stats_data(args),
        Operation::RefDataset => ref_dataset(args),
        Operation::GetDataCatalog => get_data_catalog(args),
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> ValidationResult<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

fn survey_years(args: &ToolArguments) -> ValidationResult<Option<String>> {
    args.survey_years
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(normalize_survey_years)
        .transpose()
}

pub fn search_tables(args: &ToolArguments) -> ValidationResult<RequestParameters> {
    let search_word = required(&args.search_word, "search_word")?;
    let survey_years = survey_years(args)?;

    Ok(RequestParameters::new()
        .with("searchWord", search_word)
        .with_opt("surveyYears", survey_years)
        .with_opt("openYears", args.open_years.clone())
        .with_opt("statsField", args.stats_field.clone())
        .with_opt("statsCode", args.stats_code.clone())
        .with_opt("searchKind", args.search_kind.clone())
        .with_opt("startPosition", args.start_position)
        .with_opt("limit", args.limit))
}

pub fn get_meta_info(args: &ToolArguments) -> ValidationResult<RequestParameters> {
    let stats_data_id = required(&args.stats_data_id, "stats_data_id")?;

    Ok(RequestParameters::new()
        .with("statsDataId", stats_data_id)
        .with_opt("explanationGetFlg", args.explanation_get_flg.clone()))
}

pub fn get_stats_data(args: &ToolArguments) -> ValidationResult<RequestParameters> {
    let data_set_id = args.data_set_id.as_deref().filter(|v| !v.is_empty());
    let stats_data_id = args.stats_data_id.as_deref().filter(|v| !v.is_empty());

    let params = match (data_set_id, stats_data_id) {
        (Some(_), Some(_)) => return Err(ValidationError::ConflictingIdentifiers),
        (None, None) => return Err(ValidationError::MissingIdentifier),
        (Some(id), None) => RequestParameters::new().with("dataSetId", id),
        (None, Some(id)) => RequestParameters::new().with("statsDataId", id),
    };

    Ok(params
        .with_opt("startPosition", args.start_position)
        .with_opt("limit", args.limit)
        .with_opt("sectionHeaderFlg", args.section_header_flg)
        .with_opt("replaceSpChars", args.replace_sp_chars)
        .with_opt("narrowDownArea", args.narrow_down_area.clone()))
}

pub fn ref_dataset(args: &ToolArguments) -> ValidationResult<RequestParameters> {
    let data_set_id = required(&args.data_set_id, "data_set_id")?;

    Ok(RequestParameters::new().with("dataSetId", data_set_id))
}

pub fn get_data_catalog(args: &ToolArguments) -> ValidationResult<RequestParameters> {
    let survey_years = survey_years(args)?;

    Ok(RequestParameters::new()
        .with_opt("searchWord", args.search_word.clone())
        .with_opt("surveyYears", survey_years)
        .with_opt("startPosition", args.start_position)
        .with_opt("limit", args.limit)
        .with_opt("dataType", args.data_type.clone())
        .with_opt("catalogId", args.catalog_id.clone())
        .with_opt("resourceId", args.resource_id.clone()))
}
