//! Browser module tests
//!
//! These tests verify the browser configuration and navigation types.
//! Note: Full browser integration tests require a running Chrome/Chromium instance.

use equipment_randomizer::browser::{
    BrowserConfig, NavigationOptions, NavigationResult, PageNavigator, UrlValidator,
    READY_STATE_SCRIPT,
};

#[test]
fn test_browser_config_default() {
    let config = BrowserConfig::default();
    assert!(config.headless);
    assert_eq!(config.width, 1920);
    assert_eq!(config.height, 1080);
    assert!(config.sandbox);
    assert!(config.user_agent.is_none());
    assert!(config.chrome_path.is_none());
    assert!(config.extra_args.is_empty());
}

#[test]
fn test_browser_config_builder() {
    let config = BrowserConfig::builder()
        .headless(false)
        .viewport(1280, 720)
        .sandbox(false)
        .user_agent("TestBot/1.0")
        .chrome_path("/usr/bin/chromium")
        .arg("--disable-gpu")
        .arg("--no-first-run")
        .build();

    assert!(!config.headless);
    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 720);
    assert!(!config.sandbox);
    assert_eq!(config.user_agent, Some("TestBot/1.0".to_string()));
    assert_eq!(config.chrome_path, Some("/usr/bin/chromium".to_string()));
    assert_eq!(config.extra_args.len(), 2);
    assert_eq!(config.launch_args().len(), 4);
}

#[test]
fn test_navigation_options_wait_thresholds() {
    let opts = NavigationOptions::default();
    assert_eq!(opts.url_timeout_ms, 10_000);
    assert_eq!(opts.element_timeout_ms, 5_000);
    assert!(opts.poll_interval_ms < opts.element_timeout_ms);
}

#[test]
fn test_clicked_page_load_shares_url_timeout() {
    // A clicked link must land and finish loading within the URL wait, which
    // is tighter than the initial page load
    let opts = NavigationOptions::default();
    assert!(opts.url_timeout_ms < opts.timeout_ms);
    assert!(READY_STATE_SCRIPT.contains("'load'"));
}

#[test]
fn test_navigation_result_structure() {
    let result = NavigationResult {
        final_url: "https://www.aonsrd.com/Default.aspx".to_string(),
        title: Some("Archives of Nethys".to_string()),
        duration_ms: 1500,
    };

    assert_eq!(result.final_url, "https://www.aonsrd.com/Default.aspx");
    assert_eq!(result.title.as_deref(), Some("Archives of Nethys"));
    assert_eq!(result.duration_ms, 1500);
}

#[test]
fn test_url_validator_rejects_unparsable() {
    assert!(UrlValidator::validate("https://").is_err());
    assert!(UrlValidator::validate("file:///tmp/page.html").is_ok());
}

#[test]
fn test_link_presence_script_uses_exact_text() {
    let script = PageNavigator::link_presence_script("Light Armor").unwrap();
    assert!(script.contains("querySelectorAll('a')"));
    assert!(script.contains(r#"=== "Light Armor""#));
}
