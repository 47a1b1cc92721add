pub mod fetch;

use papers_client::ClientConfig;

pub fn create_client_config(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: &str,
    debug: bool,
) -> ClientConfig {
    let mut config = ClientConfig::new().with_tool(tool).with_debug(debug);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = email {
        config = config.with_email(email);
    }

    config
}
