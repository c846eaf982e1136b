//! Planner error conversion for MCP responses.

use bestrong_core::PlannerError;
use rmcp::ErrorData;

/// Maps caller-correctable planner errors to `invalid_params` and everything
/// else to `internal_error`.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.status_code() < 500 {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_error_classes() {
        let err = to_mcp_error("Failed", &PlannerError::WorkoutNotFound { id: 3 });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Failed: Workout with ID 3 not found");

        let err = to_mcp_error(
            "Failed",
            &PlannerError::Generation {
                message: "no valid workout days".to_string(),
            },
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
