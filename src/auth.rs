use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::Error;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl ApiClient {
    /// Authenticates against the backend and stores the issued token,
    /// replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on network failure or [`Error::Api`] when the
    /// credentials are refused. Note the backend answers a failed login with
    /// 401, which surfaces as [`Error::AuthRejected`] like any other
    /// credential rejection.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), Error> {
        let response: LoginResponse = self
            .post_json(
                "login",
                "auth/login",
                &LoginRequest { username, password },
            )
            .await?;
        self.session().save_token(&response.token);
        tracing::info!(username, "Login successful");
        Ok(())
    }

    /// Drops the stored session token. Purely local; the backend keeps no
    /// session state beyond the token itself.
    pub fn logout(&self) {
        self.session().clear();
    }
}
