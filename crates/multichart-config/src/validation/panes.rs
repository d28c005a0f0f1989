//! Pane list validation.

use crate::schema::AppConfig;

/// Upper bound on panes; beyond this the rows become unusably thin.
pub(crate) const MAX_PANES: usize = 12;

/// Schemes a pane may open by default.
const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "file://", "about:"];

pub(crate) fn validate_panes(errors: &mut Vec<String>, config: &AppConfig) {
    if config.panes.is_empty() {
        errors.push("panes must contain at least one entry".into());
        return;
    }

    if config.panes.len() > MAX_PANES {
        errors.push(format!(
            "panes has {} entries, at most {MAX_PANES} are supported",
            config.panes.len()
        ));
    }

    for (i, pane) in config.panes.iter().enumerate() {
        let url = pane.default_url.trim();
        if url.is_empty() {
            errors.push(format!("panes[{i}].default_url must not be empty"));
        } else if !ALLOWED_SCHEMES.iter().any(|s| url.starts_with(s)) {
            errors.push(format!(
                "panes[{i}].default_url = {url:?} must start with one of {ALLOWED_SCHEMES:?}"
            ));
        }
    }
}
