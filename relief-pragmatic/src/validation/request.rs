#[cfg(test)]
#[path = "../../tests/unit/validation/request_test.rs"]
mod request_test;

use super::*;

/// Checks that request has at least one destination.
fn check_e0002_has_destinations(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.request.destinations.is_empty() {
        Err(FormatError::new(
            "E0002".to_string(),
            "no destinations".to_string(),
            "at least one destination is required".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that amount of destinations does not exceed the limit.
fn check_e0003_destinations_limit(ctx: &ValidationContext) -> Result<(), FormatError> {
    let size = ctx.request.destinations.len();

    if size > ctx.max_destinations {
        Err(FormatError::new(
            "E0003".to_string(),
            "too many destinations".to_string(),
            format!("reduce amount of destinations from {size} to {} or split the request", ctx.max_destinations),
        ))
    } else {
        Ok(())
    }
}

/// Validates destinations of the request.
pub fn validate_request(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let errors = check_e0002_has_destinations(ctx)
        .err()
        .into_iter()
        .chain(check_e0003_destinations_limit(ctx).err())
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
