pub mod error;
use crate::error::HttpError;
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::sync::RwLock;
use timepiece_settings::http::HttpConfig;
use timepiece_types::http::{JwtToken, RequestType, Resource};
use tracing::{debug, error, instrument};

const TIMEOUT_SECS: u64 = 60;

/// Create a new HTTP client that can be shared across the resource clients
pub fn build_http_client(settings: &HttpConfig) -> Result<Client, HttpError> {
    let mut headers = HeaderMap::new();

    headers.insert("Username", HeaderValue::from_str(&settings.username)?);
    headers.insert("Password", HeaderValue::from_str(&settings.password)?);

    let client_builder = Client::builder().timeout(std::time::Duration::from_secs(TIMEOUT_SECS));
    let client = client_builder.default_headers(headers).build()?;
    Ok(client)
}

/// Maps non-success status codes onto the client error taxonomy. Success
/// responses pass through untouched.
pub fn check_response(response: Response) -> Result<Response, HttpError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => {
            let url = response.url().path().to_string();
            Err(HttpError::NotFound(url))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(HttpError::Unauthorized),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let detail = response.text().unwrap_or_default();
            Err(HttpError::ValidationError(detail))
        }
        status => Err(HttpError::StatusError(status.as_u16())),
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_path: String,
    pub auth_token: Arc<RwLock<String>>,
}

impl HttpClient {
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        let client = build_http_client(&config)?;

        let api_client = HttpClient {
            client,
            auth_token: Arc::new(RwLock::new(config.auth_token.clone())),
            base_path: format!("{}/{}", config.server_uri, "api"),
        };

        api_client.refresh_token()?;

        debug!(
            "HttpClient initialized with base path: {}",
            api_client.base_path
        );
        Ok(api_client)
    }

    #[instrument(skip_all)]
    pub fn refresh_token(&self) -> Result<(), HttpError> {
        let url = format!("{}/{}", self.base_path, Resource::AuthLogin.as_str());
        debug!("Getting JWT token from {}", url);

        let response = self.client.get(url).send()?;

        // check if unauthorized
        if response.status().is_client_error() {
            error!("Unauthorized login request");
            return Err(HttpError::Unauthorized);
        }

        let token = response.json::<JwtToken>().map_err(|e| {
            error!("Failed to parse login response: {}", e);
            HttpError::ParseJwtTokenError(e.to_string())
        })?;

        if let Ok(mut token_guard) = self.auth_token.write() {
            *token_guard = token.token;
        } else {
            error!("Failed to acquire write lock for token update");
            return Err(HttpError::UpdateAuthTokenError);
        }

        Ok(())
    }

    pub fn update_token_from_response(&self, response: &Response) {
        if let Some(new_token) = response
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            match self.auth_token.write() {
                Ok(mut token_guard) => {
                    *token_guard = new_token.to_string();
                }
                Err(e) => {
                    error!("Failed to acquire write lock for jwt token update: {}", e);
                }
            }
        }
    }

    pub fn get_current_token(&self) -> String {
        match self.auth_token.read() {
            Ok(token_guard) => token_guard.clone(),
            Err(e) => {
                error!("Failed to acquire read lock for token: {}", e);
                "".to_string()
            }
        }
    }

    fn _request(
        &self,
        path: &str,
        request_type: RequestType,
        body_params: Option<Value>,
        query_string: Option<String>,
        headers: Option<HeaderMap>,
    ) -> Result<Response, HttpError> {
        let headers = headers.unwrap_or_default();

        let url = format!("{}/{}", self.base_path, path);
        let response = match request_type {
            RequestType::Get => {
                let url = if let Some(query_string) = query_string {
                    format!("{url}?{query_string}")
                } else {
                    url
                };

                self.client
                    .get(url)
                    .headers(headers)
                    .bearer_auth(self.get_current_token())
                    .send()?
            }
            RequestType::Post => self
                .client
                .post(url)
                .headers(headers)
                .json(&body_params)
                .bearer_auth(self.get_current_token())
                .send()?,
            RequestType::Put => self
                .client
                .put(url)
                .headers(headers)
                .json(&body_params)
                .bearer_auth(self.get_current_token())
                .send()?,
            RequestType::Patch => self
                .client
                .patch(url)
                .headers(headers)
                .json(&body_params)
                .bearer_auth(self.get_current_token())
                .send()?,
            RequestType::Delete => {
                let url = if let Some(query_string) = query_string {
                    format!("{url}?{query_string}")
                } else {
                    url
                };
                self.client
                    .delete(url)
                    .headers(headers)
                    .bearer_auth(self.get_current_token())
                    .send()?
            }
        };

        Ok(response)
    }

    /// Issues exactly one request. No retry, no backoff: failures propagate
    /// to the caller after the token rotation check.
    pub fn request(
        &self,
        path: &str,
        request_type: RequestType,
        body_params: Option<Value>,
        query_params: Option<String>,
        headers: Option<HeaderMap>,
    ) -> Result<Response, HttpError> {
        let response = self._request(path, request_type, body_params, query_params, headers)?;

        // Check and update token if a new one was provided
        self.update_token_from_response(&response);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timepiece_settings::http::HttpConfig;

    fn test_config(server_uri: String) -> HttpConfig {
        HttpConfig {
            server_uri,
            username: "guest".to_string(),
            password: "guest".to_string(),
            auth_token: "".to_string(),
        }
    }

    fn login_mock(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server
            .mock("GET", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"token": "test-token"}"#)
            .create()
    }

    #[test]
    fn test_login_stores_token() {
        let mut server = mockito::Server::new();
        let mock = login_mock(&mut server);

        let client = HttpClient::new(test_config(server.url())).unwrap();

        mock.assert();
        assert_eq!(client.get_current_token(), "test-token");
    }

    #[test]
    fn test_login_rejection_is_unauthorized() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/auth/login")
            .with_status(401)
            .create();

        let result = HttpClient::new(test_config(server.url()));

        assert!(matches!(result, Err(HttpError::Unauthorized)));
    }

    #[test]
    fn test_get_carries_bearer_token_and_query() {
        let mut server = mockito::Server::new();
        let _login = login_mock(&mut server);
        let mock = server
            .mock("GET", "/api/brands?page=0&size=20")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create();

        let client = HttpClient::new(test_config(server.url())).unwrap();
        let response = client
            .request(
                Resource::Brands.as_str(),
                RequestType::Get,
                None,
                Some("page=0&size=20".to_string()),
                None,
            )
            .unwrap();

        // single request per call
        mock.assert();
        assert!(response.status().is_success());
    }

    #[test]
    fn test_token_rotates_from_response_header() {
        let mut server = mockito::Server::new();
        let _login = login_mock(&mut server);
        let _mock = server
            .mock("GET", "/api/products")
            .with_status(200)
            .with_header("authorization", "Bearer rotated-token")
            .with_body("[]")
            .create();

        let client = HttpClient::new(test_config(server.url())).unwrap();
        client
            .request(Resource::Products.as_str(), RequestType::Get, None, None, None)
            .unwrap();

        assert_eq!(client.get_current_token(), "rotated-token");
    }

    #[test]
    fn test_status_normalization() {
        let mut server = mockito::Server::new();
        let _login = login_mock(&mut server);
        let _not_found = server
            .mock("GET", "/api/brands/99")
            .with_status(404)
            .create();
        let _invalid = server
            .mock("POST", "/api/brands")
            .with_status(422)
            .with_body("name must not be blank")
            .create();

        let client = HttpClient::new(test_config(server.url())).unwrap();

        let response = client
            .request("brands/99", RequestType::Get, None, None, None)
            .unwrap();
        assert!(matches!(
            check_response(response),
            Err(HttpError::NotFound(_))
        ));

        let response = client
            .request(
                Resource::Brands.as_str(),
                RequestType::Post,
                Some(serde_json::json!({"name": ""})),
                None,
                None,
            )
            .unwrap();
        match check_response(response) {
            Err(HttpError::ValidationError(detail)) => {
                assert_eq!(detail, "name must not be blank")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
