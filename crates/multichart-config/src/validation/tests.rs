use super::*;
use crate::schema::PaneConfig;

fn pane(url: &str) -> PaneConfig {
    PaneConfig {
        default_url: url.into(),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&AppConfig::default()).is_ok());
}

#[test]
fn empty_pane_list_is_rejected() {
    let config = AppConfig {
        panes: Vec::new(),
        ..Default::default()
    };
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("at least one entry"));
}

#[test]
fn too_many_panes_is_rejected() {
    let config = AppConfig {
        panes: vec![pane("https://example.com"); panes::MAX_PANES + 1],
        ..Default::default()
    };
    assert!(validate(&config).is_err());
}

#[test]
fn blank_default_url_is_rejected() {
    let config = AppConfig {
        panes: vec![pane("https://example.com"), pane("  ")],
        ..Default::default()
    };
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("panes[1].default_url"));
}

#[test]
fn unknown_scheme_is_rejected() {
    let config = AppConfig {
        panes: vec![pane("javascript:alert(1)")],
        ..Default::default()
    };
    assert!(validate(&config).is_err());
}

#[test]
fn about_blank_is_allowed() {
    let config = AppConfig {
        panes: vec![pane("about:blank")],
        ..Default::default()
    };
    assert!(validate(&config).is_ok());
}

#[test]
fn zero_min_size_is_rejected() {
    let mut config = AppConfig::default();
    config.window.min_width = 0;
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("window.min_width = 0"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = AppConfig {
        panes: Vec::new(),
        ..Default::default()
    };
    config.window.min_height = 50_000;
    config.logging.filter = String::new();

    let msg = validate(&config).unwrap_err().to_string();
    assert!(msg.contains("panes"));
    assert!(msg.contains("window.min_height"));
    assert!(msg.contains("logging.filter"));
}
