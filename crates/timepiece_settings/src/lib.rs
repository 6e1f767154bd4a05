pub mod features;
pub mod http;

pub use features::FeatureFlags;
pub use http::HttpConfig;
