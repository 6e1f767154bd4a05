use serde::Serialize;

/// Feature switches consumed by the storefront. Routing catalog listings to
/// the in-memory mock is the only switch the data layer itself honors.
#[derive(Debug, Clone, Serialize, Default)]
pub struct FeatureFlags {
    pub use_mock_catalog: bool,
}

impl FeatureFlags {
    pub fn from_env() -> Self {
        let use_mock_catalog = std::env::var("TIMEPIECE_USE_MOCK_CATALOG")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        FeatureFlags { use_mock_catalog }
    }
}
