use klaviyo_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting list overview example");

    let client = Client::from_config(Config::from_env()?)?;

    let lists = match client.get_lists().await {
        Ok(lists) => lists,
        Err(KlaviyoError::Authentication(e)) => {
            error!("Private token rejected: {}", e.message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(entries) = lists.as_json().and_then(Value::as_array) else {
        warn!("Unexpected lists response: {}", lists);
        return Ok(());
    };

    for entry in entries {
        let Some(list_id) = entry.get("list_id").and_then(Value::as_str) else {
            continue;
        };
        let name = entry.get("list_name").and_then(Value::as_str).unwrap_or("");
        info!("List {} ({})", name, list_id);

        let members = client.get_all_members(list_id, None).await?;
        info!("First page of members: {}", members);
    }

    Ok(())
}
