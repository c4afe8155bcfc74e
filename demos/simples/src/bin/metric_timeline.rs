use klaviyo_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting metric timeline example");

    let client = Client::from_config(Config::from_env()?)?;

    let metrics = client.get_metrics(Page { page: 0, count: 10 }).await?;
    info!("Metrics: {}", metrics);

    let since = Utc::now().timestamp() - 7 * 24 * 3600;
    let timeline = client
        .get_metrics_timeline(TimelineQuery::new().since(since).count(20))
        .await?;

    if let Some(next) = timeline
        .as_json()
        .and_then(|body| body.get("next"))
        .and_then(Value::as_str)
    {
        info!("Next page cursor: {}", next);
    }

    Ok(())
}
