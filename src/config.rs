const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BANK_SIMULATOR_URL: &str = "http://localhost:8080";
const DEFAULT_BANK_TIMEOUT_MS: u64 = 5000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bank_simulator_url: String,
    pub bank_timeout_ms: u64,
    pub bank_adapter: String,
    pub bank_mock_behavior: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing or unusable values fall
    /// back to the local-development defaults; a zero timeout counts as unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            bank_simulator_url: lookup("BANK_SIMULATOR_URL")
                .unwrap_or_else(|| DEFAULT_BANK_SIMULATOR_URL.to_string()),
            bank_timeout_ms: lookup("BANK_TIMEOUT_MS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_BANK_TIMEOUT_MS),
            bank_adapter: lookup("BANK_ADAPTER")
                .unwrap_or_else(|| "SIMULATOR".to_string())
                .to_uppercase(),
            bank_mock_behavior: lookup("BANK_MOCK_BEHAVIOR")
                .unwrap_or_else(|| "ALWAYS_AUTHORIZE".to_string()),
        }
    }

    pub fn uses_mock_bank(&self) -> bool {
        self.bank_adapter == "MOCK"
    }
}
