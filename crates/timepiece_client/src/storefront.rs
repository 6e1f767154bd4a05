use crate::error::ApiError;
use crate::resource::ResourceClient;
use timepiece_http::{check_response, HttpClient};
use timepiece_settings::http::HttpConfig;
use timepiece_types::contracts::{
    BrandFilter, CategoryFilter, Page, PageRequest, ProductFilter, UserFilter,
};
use timepiece_types::entity::{Brand, Category, Product, SavedProduct, User};
use timepiece_types::http::{RequestType, Resource};
use tracing::warn;

pub type BrandClient = ResourceClient<Brand, BrandFilter>;
pub type CategoryClient = ResourceClient<Category, CategoryFilter>;
pub type ProductClient = ResourceClient<Product, ProductFilter>;
pub type UserClient = ResourceClient<User, UserFilter>;

impl ResourceClient<Product, ProductFilter> {
    /// Bumps the product view counter. Non-critical: a lost increment must
    /// never surface to the browsing flow, so failures are logged and
    /// discarded instead of propagated.
    pub fn record_view(&self, id: i64) {
        let path = format!("{}/views", self.item_path(id));
        let outcome = self
            .http
            .request(&path, RequestType::Post, None, None, None)
            .map_err(ApiError::from)
            .and_then(|response| check_response(response).map_err(ApiError::from));

        if let Err(err) = outcome {
            warn!(product_id = id, "Failed to record product view: {}", err);
        }
    }
}

impl ResourceClient<User, UserFilter> {
    fn saved_products_path(&self, user_id: i64) -> String {
        format!("{}/saved-products", self.item_path(user_id))
    }

    /// The user's wishlist, newest first by default.
    pub fn saved_products(
        &self,
        user_id: i64,
        page: &PageRequest,
    ) -> Result<Page<SavedProduct>, ApiError> {
        let result = (|| {
            let query = timepiece_types::contracts::build_query_string::<UserFilter>(page, None)?;
            let response = self.http.request(
                &self.saved_products_path(user_id),
                RequestType::Get,
                None,
                Some(query),
                None,
            )?;
            let response = check_response(response)?;
            Ok(response.json::<Page<SavedProduct>>()?)
        })();

        self.logged("saved_products", Some(user_id), result)
    }

    pub fn save_product(&self, user_id: i64, product_id: i64) -> Result<SavedProduct, ApiError> {
        let result = (|| {
            let body = serde_json::json!({ "productId": product_id });
            let response = self.http.request(
                &self.saved_products_path(user_id),
                RequestType::Post,
                Some(body),
                None,
                None,
            )?;
            let response = check_response(response)?;
            Ok(response.json::<SavedProduct>()?)
        })();

        self.logged("save_product", Some(user_id), result)
    }

    pub fn unsave_product(&self, user_id: i64, product_id: i64) -> Result<bool, ApiError> {
        let result = (|| {
            let path = format!("{}/{}", self.saved_products_path(user_id), product_id);
            let response = self
                .http
                .request(&path, RequestType::Delete, None, None, None)?;
            check_response(response)?;
            Ok(true)
        })();

        self.logged("unsave_product", Some(user_id), result)
    }
}

/// Application-level bundle: one HTTP client logged in once, shared by a
/// long-lived client per resource. Constructed explicitly by the embedding
/// application and passed down to callers; there is no global instance.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    pub brands: BrandClient,
    pub categories: CategoryClient,
    pub products: ProductClient,
    pub users: UserClient,
}

impl StorefrontApi {
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config)?;
        Ok(StorefrontApi::with_http(http))
    }

    pub fn with_http(http: HttpClient) -> Self {
        StorefrontApi {
            brands: ResourceClient::new(http.clone(), Resource::Brands),
            categories: ResourceClient::new(http.clone(), Resource::Categories),
            products: ResourceClient::new(http.clone(), Resource::Products),
            users: ResourceClient::new(http, Resource::Users),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(server: &mut mockito::ServerGuard) -> StorefrontApi {
        let _login = server
            .mock("GET", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"token": "test-token"}"#)
            .create();

        let config = HttpConfig {
            server_uri: server.url(),
            username: "guest".to_string(),
            password: "guest".to_string(),
            auth_token: "".to_string(),
        };
        StorefrontApi::new(config).unwrap()
    }

    #[test]
    fn test_record_view_swallows_failure() {
        let mut server = mockito::Server::new();
        let api = api(&mut server);
        let mock = server
            .mock("POST", "/api/products/7/views")
            .with_status(500)
            .expect(1)
            .create();

        // must not panic or error out of the call
        api.products.record_view(7);

        mock.assert();
    }

    #[test]
    fn test_saved_products_hits_subresource_path() {
        let mut server = mockito::Server::new();
        let api = api(&mut server);
        let mock = server
            .mock("GET", "/api/users/3/saved-products")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "0".into()))
            .with_status(200)
            .with_body(
                r#"{
                    "content": [
                        {"id": 11, "userId": 3, "productId": 7, "createdAt": "2024-05-01T10:00:00Z"}
                    ],
                    "pageNumber": 0,
                    "pageSize": 20,
                    "totalElements": 1,
                    "totalPages": 1,
                    "first": true,
                    "last": true,
                    "empty": false
                }"#,
            )
            .create();

        let page = api
            .users
            .saved_products(3, &PageRequest::default())
            .unwrap();

        mock.assert();
        assert_eq!(page.content[0].product_id, 7);
    }

    #[test]
    fn test_save_product_posts_to_wishlist() {
        let mut server = mockito::Server::new();
        let api = api(&mut server);
        let mock = server
            .mock("POST", "/api/users/3/saved-products")
            .match_body(mockito::Matcher::JsonString(
                r#"{"productId": 7}"#.to_string(),
            ))
            .with_status(201)
            .with_body(
                r#"{"id": 11, "userId": 3, "productId": 7, "createdAt": "2024-05-01T10:00:00Z"}"#,
            )
            .create();

        let saved = api.users.save_product(3, 7).unwrap();

        mock.assert();
        assert_eq!(saved.user_id, 3);
        assert_eq!(saved.product_id, 7);
    }

    #[test]
    fn test_unsave_product_deletes_wishlist_row() {
        let mut server = mockito::Server::new();
        let api = api(&mut server);
        let mock = server
            .mock("DELETE", "/api/users/3/saved-products/7")
            .with_status(204)
            .create();

        assert!(api.users.unsave_product(3, 7).unwrap());

        mock.assert();
    }
}
