pub mod contracts;
pub mod entity;
pub mod error;
pub mod http;

pub use contracts::{
    build_query_string, ApiEnvelope, BrandFilter, CategoryFilter, Page, PageRequest,
    ProductFilter, SortDirection, UserFilter, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD,
};
pub use entity::{
    Brand, BrandPatch, Category, CategoryPatch, NewBrand, NewCategory, NewProduct, NewUser,
    Product, ProductPatch, SavedProduct, User, UserPatch,
};
pub use error::TypeError;
pub use http::{JwtToken, RequestType, Resource};
