#[cfg(feature = "ssr")]
#[tokio::main]
pub async fn main() -> insightbot::backend::utils::error::BackendResult<()> {
    use insightbot::backend::{config::InsightConfig, start};
    use log::LevelFilter;

    if std::env::args().nth(1).as_deref() == Some("--print-config") {
        println!("{}", doku::to_toml::<InsightConfig>());
        std::process::exit(0);
    }

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("insightbot", level)
        .init();

    let config = InsightConfig::read()?;
    start(config, None, None).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    use insightbot::frontend::app::App;

    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
