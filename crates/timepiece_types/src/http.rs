use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JwtToken {
    pub token: String,
}

#[derive(Debug, Clone, Copy)]
pub enum RequestType {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Backend resource collections reachable under the API base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Brands,
    Categories,
    Products,
    Users,
    AuthLogin,
}

impl Resource {
    pub fn as_str(&self) -> &str {
        match self {
            Resource::Brands => "brands",
            Resource::Categories => "categories",
            Resource::Products => "products",
            Resource::Users => "users",
            Resource::AuthLogin => "auth/login",
        }
    }
}
