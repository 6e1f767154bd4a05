use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HttpConfig {
    pub server_uri: String,
    pub username: String,
    pub password: String,
    pub auth_token: String,
}

impl HttpConfig {
    pub fn new(
        server_uri: Option<String>,
        username: Option<String>,
        password: Option<String>,
        auth_token: Option<String>,
    ) -> Self {
        let server_uri = server_uri.unwrap_or_else(|| {
            std::env::var("TIMEPIECE_API_URI")
                .unwrap_or_else(|_| "http://localhost:8000".to_string())
        });

        let username = username.unwrap_or_else(|| {
            std::env::var("TIMEPIECE_USERNAME").unwrap_or_else(|_| "guest".to_string())
        });
        let password = password.unwrap_or_else(|| {
            std::env::var("TIMEPIECE_PASSWORD").unwrap_or_else(|_| "guest".to_string())
        });
        let auth_token = auth_token.unwrap_or_else(|| {
            std::env::var("TIMEPIECE_AUTH_TOKEN").unwrap_or_else(|_| "".to_string())
        });

        HttpConfig {
            server_uri,
            username,
            password,
            auth_token,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig::new(None, None, None, None)
    }
}
