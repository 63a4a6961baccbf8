//! HTTP transport for Opalstack REST API calls
//!
//! One [`Transport`] owns one connection-reusing [`reqwest::Client`] with the
//! auth and content headers preset. Responses outside the 2xx range become
//! [`Error::Remote`]; 2xx responses that are not valid JSON become
//! [`Error::Protocol`]. No retries, no redirect handling beyond the client
//! defaults.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Client identifier sent with every request.
pub const USER_AGENT: &str = concat!("opalskill/", env!("CARGO_PKG_VERSION"));

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < MAX_LOG_BODY_LENGTH)
            .map(|(i, c)| i + c.len_utf8())
            .last()
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Connection-reusing JSON client for the Opalstack API.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    /// Create a transport bound to the config's base URL and token.
    pub fn new(config: &Config) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;

        let mut auth = HeaderValue::from_str(&format!("Token {}", config.token))
            .map_err(|_| Error::Configuration("token contains non-header characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Make a GET request to an API path
    pub async fn get(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Value> {
        tracing::debug!("GET {}", path);

        let mut request = self.client.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        self.handle(response).await
    }

    /// Make a POST request to an API path; the body defaults to `{}`
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("POST {}", path);

        let empty = Value::Object(serde_json::Map::new());
        let response = self
            .client
            .post(self.url(path))
            .json(body.unwrap_or(&empty))
            .send()
            .await?;

        self.handle(response).await
    }

    async fn handle(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            let payload =
                serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body.clone()));
            return Err(Error::Remote {
                status: status.as_u16(),
                body: payload,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Protocol(format!("non-JSON response: {e}")))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated, 500 bytes total"));
        assert!(sanitized.len() < body.len());
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("ab\x1b[31mcd\n"), "ab[31mcd");
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let config = Config::new("tok", Environment::Production).with_base_url("not a url");
        assert!(matches!(
            Transport::new(&config),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_url_joins_prefix_paths() {
        let config = Config::new("tok", Environment::Production);
        let transport = Transport::new(&config).unwrap();
        assert_eq!(
            transport.url("/app/list/"),
            "https://my.opalstack.com/api/v1/app/list/"
        );
    }
}
