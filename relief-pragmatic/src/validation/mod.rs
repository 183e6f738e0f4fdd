//! This module provides functionality to validate route request for logical correctness.

use crate::format::problem::RouteRequest;
use crate::format::{FormatError, MultiFormatError};

mod closures;
pub(crate) use self::closures::check_e0004_closure_times;

mod request;
use self::request::validate_request;

/// Keeps a request and limits to validate it against.
pub(crate) struct ValidationContext<'a> {
    pub request: &'a RouteRequest,
    pub max_destinations: usize,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a RouteRequest, max_destinations: usize) -> Self {
        Self { request, max_destinations }
    }

    /// Validates request on set of rules and reports all found errors.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        validate_request(self).map_err(MultiFormatError::from)
    }
}
