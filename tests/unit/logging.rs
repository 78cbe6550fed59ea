//! Unit tests for default log filtering

use macrolens::logging::default_directives;

#[test]
fn test_sandbox_enables_debug_for_this_crate() {
    let directives = default_directives("sandbox");
    assert!(directives.starts_with("info,"));
    assert!(directives.contains("macrolens=debug"));
    assert!(directives.contains("reqwest=warn"));
}

#[test]
fn test_production_stays_at_info() {
    let directives = default_directives("production");
    assert!(!directives.contains("debug"));
    assert!(directives.contains("hyper=warn"));
}
