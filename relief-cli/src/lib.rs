//! A relief routing library public API used by the command line interface.

pub mod extensions;

pub use relief_core as core;
pub use relief_pragmatic as pragmatic;

use relief_pragmatic::format::MultiFormatError;

/// Returns serialized into json list of format errors.
pub fn get_errors_serialized(errors: &MultiFormatError) -> String {
    errors.to_json()
}
