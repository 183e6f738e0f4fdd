#[cfg(test)]
#[path = "../../tests/unit/validation/closures_test.rs"]
mod closures_test;

use crate::format::FormatError;
use crate::format::problem::Closure;
use crate::parse_time;
use relief_core::models::problem::ActiveWindow;

/// Checks that closure times are valid RFC3339 strings and that no closure ends before it starts.
/// Returns active windows in closures order.
pub(crate) fn check_e0004_closure_times(closures: &[Closure]) -> Result<Vec<ActiveWindow>, FormatError> {
    let parse_window = |closure: &Closure| {
        let start = parse_time(&closure.start_time).ok()?;
        let end = closure.end_time.as_deref().map(parse_time).transpose().ok()?;

        end.is_none_or(|end| end >= start).then(|| ActiveWindow::new(start, end))
    };

    let (windows, ids) = closures.iter().fold(
        (Vec::with_capacity(closures.len()), Vec::new()),
        |(mut windows, mut ids), closure| {
            match parse_window(closure) {
                Some(window) => windows.push(window),
                None => ids.push(closure.id.to_string()),
            }
            (windows, ids)
        },
    );

    if ids.is_empty() {
        Ok(windows)
    } else {
        Err(FormatError::new(
            "E0004".to_string(),
            "invalid closure time".to_string(),
            format!("use RFC3339 start and end times with end not before start in closures: '{}'", ids.join(", ")),
        ))
    }
}
