use anyhow::Context;
use order_lookup::startup::Application;
use order_lookup::{configuration::get_configuration, telemetry::*};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("order_lookup".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    Application::build(configuration)?
        .run_until_stopped(tokio::io::BufReader::new(tokio::io::stdin()), std::io::stdout())
        .await?;
    Ok(())
}
