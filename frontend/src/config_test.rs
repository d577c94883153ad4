use super::*;

#[test]
fn defaults_match_portuguese_widget() {
    let config = WidgetConfig::default();
    assert_eq!(config.endpoint_url, "http://127.0.0.1:5000/chatbot");
    assert_eq!(config.typing_text, "Digitando...");
    assert_eq!(config.submit_key, "Enter");
    assert_eq!(config.render_mode, RenderMode::Text);
    assert!(config.greeting.starts_with("Olá!"));
}

#[test]
fn overrides_replace_settings() {
    let config = WidgetConfig::default().with_overrides(
        Some(" http://example.test/chatbot "),
        Some("markup"),
        Some("debug"),
    );
    assert_eq!(config.endpoint_url, "http://example.test/chatbot");
    assert_eq!(config.render_mode, RenderMode::Markup);
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn invalid_overrides_keep_defaults() {
    let config = WidgetConfig::default().with_overrides(Some("   "), Some("rich"), Some("loud"));
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn render_mode_maps_to_reply_format() {
    assert_eq!(RenderMode::parse("HTML"), Some(RenderMode::Markup));
    assert_eq!(RenderMode::parse("plain"), Some(RenderMode::Text));
    assert_eq!(RenderMode::Text.reply_format(), TextFormat::Plain);
    assert_eq!(RenderMode::Markup.reply_format(), TextFormat::Markup);
}

#[test]
fn only_configured_key_submits() {
    let config = WidgetConfig::default();
    assert!(config.is_submit_key("Enter"));
    assert!(!config.is_submit_key("a"));
    assert!(!config.is_submit_key("enter"));
}
