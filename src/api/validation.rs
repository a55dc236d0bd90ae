use super::ApiError;
use crate::domain::DealerId;
use crate::domain::inventory_query;

pub fn parse_dealer_id(raw: &str) -> Result<DealerId, ApiError> {
    raw.parse::<DealerId>().map_err(|_| {
        ApiError::validation(format!(
            "Invalid dealer id: {raw}. Id must be an integer"
        ))
    })
}

pub fn parse_year(raw: &str) -> Result<i32, ApiError> {
    inventory_query::parse_year(raw).map_err(|e| ApiError::validation(e.to_string()))
}

pub fn validate_path_value<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}
