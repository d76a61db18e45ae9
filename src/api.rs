//! Authenticated request pipeline for the Mesa Manager backend.
//!
//! Every feature call goes through [`ApiClient::send`], which applies the two
//! interceptor stages of the console:
//!
//! - outbound: attach the stored token as a bearer credential, if present;
//! - inbound: on 401/403, clear the stored token and fail with
//!   [`Error::AuthRejected`]. The failure is propagated — callers still see it
//!   and may show their own message — and the host shell maps it to a login
//!   navigation.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ConsoleConfig;
use crate::error::Error;
use crate::session::Session;

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    session: Session,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ConsoleConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.api_url,
            session,
        }
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// The session this client attaches credentials from and clears on
    /// authorization failure.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    /// Runs one request through both interceptor stages.
    pub(crate) async fn send(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.session.clear();
            tracing::warn!(%status, operation, "API rejected credentials; session cleared");
            return Err(Error::AuthRejected {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(%status, operation, detail, "API call failed");
            return Err(Error::Api {
                operation,
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, Error> {
        let response = self.send(operation, self.http.get(self.endpoint(path))).await?;
        response.json().await.map_err(Into::into)
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: &str,
        query: &Q,
    ) -> Result<T, Error> {
        let request = self.http.get(self.endpoint(path)).query(query);
        let response = self.send(operation, request).await?;
        response.json().await.map_err(Into::into)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let request = self.http.post(self.endpoint(path)).json(body);
        let response = self.send(operation, request).await?;
        response.json().await.map_err(Into::into)
    }

    /// POST for endpoints that answer with an empty or irrelevant body.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let request = self.http.post(self.endpoint(path)).json(body);
        self.send(operation, request).await?;
        Ok(())
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let request = self.http.put(self.endpoint(path)).json(body);
        let response = self.send(operation, request).await?;
        response.json().await.map_err(Into::into)
    }

    pub(crate) async fn delete(&self, operation: &'static str, path: &str) -> Result<(), Error> {
        self.send(operation, self.http.delete(self.endpoint(path)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let session = Session::new(MemoryTokenStore::new());
        let config = ConsoleConfig::new("http://localhost:8080/api/".parse().unwrap());
        let api = ApiClient::new(config, session);
        assert_eq!(
            api.endpoint("consumos/detalhar-conta/7"),
            "http://localhost:8080/api/consumos/detalhar-conta/7"
        );
    }
}
