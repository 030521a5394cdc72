//! Combo validation rules applied before a combo is saved.

use crate::config::LimitsConfig;
use crate::error::{ComboError, Result};
use crate::token::{Connector, InputToken};

/// Check input count and the "then" requirement.
pub fn validate_combo_inputs(inputs: &[InputToken], limits: &LimitsConfig) -> Result<()> {
    if inputs.len() <= limits.min_inputs {
        tracing::debug!(len = inputs.len(), min = limits.min_inputs, "combo rejected: too few inputs");
        return Err(ComboError::Validation(format!(
            "Combo must have more than {} inputs",
            limits.min_inputs
        )));
    }

    let has_then = inputs
        .iter()
        .any(|t| *t == InputToken::Connector(Connector::Then));
    if limits.require_then && !has_then {
        return Err(ComboError::Validation(
            "Combo must contain at least one 'then' (>) operator".into(),
        ));
    }

    Ok(())
}

/// Check whether a user holding `current_count` combos may create another.
pub fn validate_user_combo_limit(current_count: usize, limits: &LimitsConfig) -> Result<()> {
    if current_count >= limits.max_combos_per_user {
        return Err(ComboError::Validation(format!(
            "You have reached the maximum limit of {} combos",
            limits.max_combos_per_user
        )));
    }
    Ok(())
}
