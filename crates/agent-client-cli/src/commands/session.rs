use agent_client::SessionClient;
use anyhow::Result;

/// Create a session and format what should be printed for it.
pub async fn run(client: &SessionClient, secret_only: bool) -> Result<String> {
    let credential = client.create_session().await?;

    if secret_only {
        return Ok(credential.client_secret().to_string());
    }
    Ok(serde_json::to_string_pretty(credential.as_value())?)
}
