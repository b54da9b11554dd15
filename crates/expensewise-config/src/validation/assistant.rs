//! Validation for the `[assistant]` section.

use crate::schema::ExpenseWiseConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &ExpenseWiseConfig) {
    let assistant = &config.assistant;

    validate_not_blank(errors, "assistant.model", &assistant.model);
    validate_not_blank(errors, "assistant.api_key_env", &assistant.api_key_env);
    validate_range(
        errors,
        "assistant.request_timeout_secs",
        assistant.request_timeout_secs,
        0,
        600,
    );
    if let Some(tokens) = assistant.max_output_tokens {
        validate_range(errors, "assistant.max_output_tokens", tokens, 1, 65536);
    }
    if let Some(temperature) = assistant.temperature {
        validate_range_f64(errors, "assistant.temperature", temperature, 0.0, 2.0);
    }
}
