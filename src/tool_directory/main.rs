mod startup;
mod telemetry;

use common::settings::get_settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = get_settings(".env").map_err(std::io::Error::other)?;

    let _guard = telemetry::init_subscriber(settings.debug, settings.application.max_log_files)
        .map_err(std::io::Error::other)?;

    let application = startup::Application::build(settings).await?;

    tracing::event!(target: "backend", tracing::Level::INFO, "Listening on http://127.0.0.1:{}/", application.port());

    application.run_until_stopped().await?;
    Ok(())
}
