pub mod error;
pub mod resource;
pub mod storefront;

pub use error::ApiError;
pub use resource::ResourceClient;
pub use storefront::{BrandClient, CategoryClient, ProductClient, StorefrontApi, UserClient};

pub use timepiece_http::HttpClient;
pub use timepiece_settings::{FeatureFlags, HttpConfig};
pub use timepiece_types::{
    build_query_string, Brand, BrandFilter, Category, CategoryFilter, Page, PageRequest, Product,
    ProductFilter, SavedProduct, SortDirection, User, UserFilter,
};
