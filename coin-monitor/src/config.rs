use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.coincap.io/v2";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn parse(yaml: &str) -> serde_yaml::Result<Self> {
        serde_yaml::from_str(yaml)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Name of the data source shown above the table, e.g. `coincap.io`.
    pub fn source_name(&self) -> String {
        let host = reqwest::Url::parse(&self.api_url)
            .ok()
            .and_then(|url| url.host_str().map(String::from))
            .unwrap_or_else(|| self.api_url.clone());
        host.strip_prefix("api.").map(String::from).unwrap_or(host)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
