use safetravel_web::config::CONFIG;
use safetravel_web::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 SafeTravel AI ({}) → {}",
        CONFIG.environment,
        CONFIG.api_base_url
    );

    yew::Renderer::<App>::new().render();
}
