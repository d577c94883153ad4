use chat_widget::config::WidgetConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = WidgetConfig::from_build_env();
    console_log::init_with_level(config.log_level).expect("Failed to init logger");

    chat_widget::mount(config);
}
