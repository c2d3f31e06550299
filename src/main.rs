use inteliq::config::{self, AppConfig};
use inteliq::logging;

fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    let config = config::install(AppConfig::from_env()?);
    logging::init(&config.log_filter);
    tracing::info!(api_base = %config.api_base, "starting inteliq");

    dioxus::launch(inteliq::ui::App);
    Ok(())
}
