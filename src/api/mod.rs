//! HTTP wrappers over the platform REST backend.
//!
//! Every function in the submodules issues exactly one request and hands
//! back the decoded body. Transport and decode failures propagate to the
//! caller untouched; there is no retry, timeout, or status-code policy on
//! this layer.

pub mod servers;
pub mod tasks;
pub mod users;

use crate::model::Error;
use http::Method;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Where the backend lives when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Body of the `{"message": ...}` acknowledgements some endpoints send.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub message: String,
}

/// Handle to the backend, passed into every wrapper call.
///
/// All three resource modules share the one base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self, Error> {
        let base = Url::parse(base)
            .map_err(|e| Error::InvalidRequest(format!("bad base url {base:?}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidRequest(format!(
                "base url {base} cannot carry path segments"
            )));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// Base URL baked in at build time: `SCRIBE_API_URL` over the default.
    pub fn from_env() -> Self {
        let base = option_env!("SCRIBE_API_URL").unwrap_or(DEFAULT_API_URL);
        match Self::new(base) {
            Ok(client) => client,
            Err(_) => Self {
                http: reqwest::Client::new(),
                base: Url::parse(DEFAULT_API_URL).expect("the default api url parses"),
            },
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Joins `segments` under the base path, percent-encoding as needed.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        Ok(self.http.get(url).send().await?.json().await?)
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, url: Url, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Ok(self
            .http
            .request(method, url)
            .json(body)
            .send()
            .await?
            .json()
            .await?)
    }

    /// For the endpoints that answer `204 No Content`.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        self.http.delete(url).send().await?;
        Ok(())
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        url: Url,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        Ok(self.http.post(url).multipart(form).send().await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_segments_under_the_base() {
        let api = ApiClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            api.endpoint(["servers", "5"]).as_str(),
            "http://localhost:8080/servers/5"
        );
    }

    #[test]
    fn endpoint_respects_an_existing_base_path() {
        for base in ["http://example.com/api", "http://example.com/api/"] {
            let api = ApiClient::new(base).unwrap();
            assert_eq!(
                api.endpoint(["users", "42", "jobs"]).as_str(),
                "http://example.com/api/users/42/jobs"
            );
        }
    }

    #[test]
    fn endpoint_percent_encodes_strange_ids() {
        let api = ApiClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            api.endpoint(["tasks", "a b"]).as_str(),
            "http://localhost:8080/tasks/a%20b"
        );
    }

    #[test]
    fn garbage_base_urls_are_rejected() {
        assert!(ApiClient::new("not a url").is_err());
        assert!(ApiClient::new("mailto:ops@example.com").is_err());
    }
}
