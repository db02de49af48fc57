//! Client configuration.

/// Backend used when no base URL is configured at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Path the login form posts credentials to.
pub const DEFAULT_LOGIN_PATH: &str = "/adminauth/login";

/// Where the admin backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Login endpoint, relative to `base_url`.
    pub login_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Create a config for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// Read `ADMIN_API_BASE_URL` and `ADMIN_LOGIN_PATH` as set at compile
    /// time, since the browser has no process environment.
    pub fn from_env() -> Self {
        let config = Self::new(option_env!("ADMIN_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL));
        match option_env!("ADMIN_LOGIN_PATH") {
            Some(path) if !path.is_empty() => config.with_login_path(path),
            _ => config,
        }
    }

    /// Set the login endpoint.
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Absolute URL of `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_doubled_slashes() {
        let config = ClientConfig::new("https://api.example.com/api//");
        assert_eq!(config.base_url, "https://api.example.com/api");
        assert_eq!(
            config.url("/adminjob/jobs"),
            "https://api.example.com/api/adminjob/jobs"
        );
        assert_eq!(config.url("contact/getmsg"), "https://api.example.com/api/contact/getmsg");
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default().with_login_path("/auth/admin");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.login_path, "/auth/admin");
    }
}
