use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Failures inside a single analysis component.
///
/// These never leave the component that raised them: each component converts them into
/// its degraded result (see `AtsScore::failed` and friends).
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("{component} panicked: {message}")]
    Panicked {
        component: &'static str,
        message: String,
    },
}

/// Runs one component's computation, catching a panic as `AnalysisError::Panicked`.
///
/// The computations only read their inputs and build fresh values, so nothing is left
/// half-updated when one unwinds.
pub fn guard<T>(component: &'static str, f: impl FnOnce() -> T) -> Result<T, AnalysisError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| AnalysisError::Panicked {
        component,
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_passes_values_through() {
        assert_eq!(guard("scorer", || 42), Ok(42));
    }

    #[test]
    fn test_guard_catches_static_panic() {
        let err = guard("scorer", || -> u32 { panic!("index out of range") }).unwrap_err();
        assert_eq!(err.to_string(), "scorer panicked: index out of range");
    }

    #[test]
    fn test_guard_catches_formatted_panic() {
        let n = 7;
        let err = guard("matcher", || -> u32 { panic!("bad token {n}") }).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Panicked {
                component: "matcher",
                message: "bad token 7".to_string(),
            }
        );
    }
}
