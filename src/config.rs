use anyhow::{Context, Result};

/// Credentials and endpoints loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub access_token: String, // OAuth bearer token with the youtube scope, issued out of band
    pub chart_data_url: String,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();

    Ok(Config {
        api_key: required_var("YOUTUBE_API_KEY")?,
        access_token: required_var("YOUTUBE_ACCESS_TOKEN")?,
        chart_data_url: required_var("CHART_DATA_URL")?,
    })
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Environment variable {name} is not set"))
}
