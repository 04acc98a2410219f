/// Runtime settings for the frontend, fixed at build time
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Base URL of the backend API, without a trailing slash
    pub api_base_url: String,
    /// Forward log lines to the backend's `/api/logs` endpoint
    pub remote_logging: bool,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

impl FrontendConfig {
    /// Build the config from `KID_REGISTER_API_URL` and `KID_REGISTER_REMOTE_LOGS`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("KID_REGISTER_API_URL"),
            option_env!("KID_REGISTER_REMOTE_LOGS"),
        )
    }

    fn from_values(api_base_url: Option<&str>, remote_logging: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let remote_logging = matches!(
            remote_logging.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("1" | "true" | "yes" | "on")
        );

        Self {
            api_base_url,
            remote_logging,
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
