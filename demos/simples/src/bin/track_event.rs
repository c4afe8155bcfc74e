use klaviyo_client::application::client::Client;
use klaviyo_client::application::config::Config;
use klaviyo_client::application::interfaces::public::PublicService;
use klaviyo_client::model::requests::TrackOptions;
use klaviyo_client::utils::setup_logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting track event example");

    // KLAVIYO_PUBLIC_TOKEN is read from the environment or a .env file
    let client = Client::from_config(Config::from_env()?)?;

    let options = TrackOptions::new()
        .email("thomas.jefferson@mailinator.com")
        .property("YearElected", 1801)
        .customer_property("$first_name", "Thomas")
        .test(true);

    let response = client.track("Elected President", options).await?;
    if response.is_success_flag() {
        info!("Event accepted");
    } else {
        warn!("Event rejected: {}", response);
    }

    Ok(())
}
