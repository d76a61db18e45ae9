use std::path::PathBuf;

use url::Url;

use crate::error::Error;

/// Console configuration.
///
/// The required field is a constructor parameter — no runtime "missing field"
/// errors. Use [`from_env()`](ConsoleConfig::from_env) for convention-based
/// setup, or [`new()`](ConsoleConfig::new) with `with_*` methods for full
/// control.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ConsoleConfig {
    pub(crate) api_url: Url,
    pub(crate) token_file: Option<PathBuf>,
}

impl ConsoleConfig {
    /// Create a configuration pointing at the backend API root.
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            token_file: None,
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// # Required env vars
    /// - `MESA_API_URL`: backend API root (must be a valid URL)
    ///
    /// # Optional env vars
    /// - `MESA_TOKEN_FILE`: path for a file-backed token store
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `MESA_API_URL` is missing or invalid.
    pub fn from_env() -> Result<Self, Error> {
        let api_url_str = std::env::var("MESA_API_URL")
            .map_err(|_| Error::Config("MESA_API_URL is required".into()))?;
        let api_url: Url = api_url_str
            .parse()
            .map_err(|e| Error::Config(format!("MESA_API_URL: {e}")))?;

        let token_file = std::env::var("MESA_TOKEN_FILE").ok().map(PathBuf::from);

        Ok(Self {
            api_url,
            token_file,
        })
    }

    /// Path for a file-backed token store, when configured.
    #[must_use]
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }

    /// Backend API root.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    #[must_use]
    pub fn token_file(&self) -> Option<&PathBuf> {
        self.token_file.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_and_overrides() {
        let config = ConsoleConfig::new("https://api.mesa.example/api".parse().unwrap())
            .with_token_file("/tmp/mesa-token");

        assert_eq!(config.api_url().as_str(), "https://api.mesa.example/api");
        assert_eq!(
            config.token_file().unwrap().to_str().unwrap(),
            "/tmp/mesa-token"
        );
    }
}
