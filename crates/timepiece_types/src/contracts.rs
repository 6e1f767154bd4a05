use crate::error::TypeError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SORT_FIELD: &str = "createdAt";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Listing query controls. Serialized keys match the backend's query
/// parameters (`page`, `size`, `sortField`, `direction`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_field: String,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        PageRequest {
            page,
            size,
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = field.into();
        self.direction = direction;
        self
    }

    /// Start offset of this page within the full result sequence.
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

/// One page of a listing, as returned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Wraps one page of content, deriving the count and boundary fields.
    /// `total_pages` is always `ceil(total_elements / page_size)`.
    pub fn new(content: Vec<T>, page_number: u32, page_size: u32, total_elements: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_elements.div_ceil(page_size as u64) as u32
        };

        Page {
            first: page_number == 0,
            last: total_pages == 0 || page_number + 1 >= total_pages,
            empty: content.is_empty(),
            content,
            page_number,
            page_size,
            total_elements,
            total_pages,
        }
    }

    pub fn empty(page_number: u32, page_size: u32) -> Self {
        Page::new(Vec::new(), page_number, page_size, 0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    // Price bounds travel as `fromPrice`/`toPrice`, in cents.
    #[serde(rename = "fromPrice", skip_serializing_if = "Option::is_none")]
    pub from_price_cents: Option<i64>,

    #[serde(rename = "toPrice", skip_serializing_if = "Option::is_none")]
    pub to_price_cents: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Flattens pagination controls and an optional filter into one query string.
/// Filter fields that are unset or empty are dropped; the four pagination
/// keys are always present.
pub fn build_query_string<F: Serialize>(
    page: &PageRequest,
    filter: Option<&F>,
) -> Result<String, TypeError> {
    let mut parts = query_parts(page)?;
    if let Some(filter) = filter {
        parts.extend(query_parts(filter)?);
    }
    Ok(parts.join("&"))
}

fn query_parts<S: Serialize>(value: &S) -> Result<Vec<String>, TypeError> {
    let encoded = serde_qs::to_string(value)?;
    Ok(encoded
        .split('&')
        // an entry ending in '=' carries an empty value
        .filter(|part| !part.is_empty() && !part.ends_with('='))
        .map(str::to_owned)
        .collect())
}

/// Result wrapper used by the mock catalog: a success flag and user-facing
/// message ride along with the payload so listing pages never have to handle
/// a thrown error during render.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub status: bool,
    pub data: T,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        ApiEnvelope {
            status: true,
            data,
            message: message.into(),
            error_detail: None,
        }
    }

    pub fn fail(data: T, message: impl Into<String>, detail: impl Into<String>) -> Self {
        ApiEnvelope {
            status: false,
            data,
            message: message.into(),
            error_detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(query: &str) -> Vec<&str> {
        query.split('&').collect()
    }

    #[test]
    fn test_query_string_defaults() {
        let query = build_query_string::<BrandFilter>(&PageRequest::default(), None).unwrap();

        let parts = parts(&query);
        assert_eq!(parts.len(), 4);
        assert!(parts.contains(&"page=0"));
        assert!(parts.contains(&"size=20"));
        assert!(parts.contains(&"sortField=createdAt"));
        assert!(parts.contains(&"direction=desc"));
    }

    #[test]
    fn test_query_string_overrides() {
        let page = PageRequest::new(3, 12).sorted_by("name", SortDirection::Asc);
        let query = build_query_string::<BrandFilter>(&page, None).unwrap();

        let parts = parts(&query);
        assert!(parts.contains(&"page=3"));
        assert!(parts.contains(&"size=12"));
        assert!(parts.contains(&"sortField=name"));
        assert!(parts.contains(&"direction=asc"));
    }

    #[test]
    fn test_query_string_omits_unset_and_empty_filter_fields() {
        let filter = BrandFilter {
            name: Some("".to_string()),
            country: None,
            active: Some(true),
        };
        let query = build_query_string(&PageRequest::default(), Some(&filter)).unwrap();

        let parts = parts(&query);
        assert_eq!(parts.len(), 5);
        assert!(parts.contains(&"active=true"));
        assert!(!query.contains("name"));
        assert!(!query.contains("country"));
    }

    #[test]
    fn test_query_string_passes_filter_values_through() {
        let filter = ProductFilter {
            name: Some("diver".to_string()),
            from_price_cents: Some(25000),
            to_price_cents: Some(900000),
            active: Some(false),
            ..Default::default()
        };
        let query = build_query_string(&PageRequest::default(), Some(&filter)).unwrap();

        let parts = parts(&query);
        assert!(parts.contains(&"name=diver"));
        assert!(parts.contains(&"fromPrice=25000"));
        assert!(parts.contains(&"toPrice=900000"));
        assert!(parts.contains(&"active=false"));
    }

    #[test]
    fn test_page_count_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 0, 3, 10);

        assert_eq!(page.total_pages, 4);
        assert!(page.first);
        assert!(!page.last);
        assert!(!page.empty);
    }

    #[test]
    fn test_page_exact_fit() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], 1, 3, 6);

        assert_eq!(page.total_pages, 2);
        assert!(!page.first);
        assert!(page.last);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::empty(0, 20);

        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
        assert!(page.empty);
    }

    #[test]
    fn test_page_wire_format_is_camel_case() {
        let page: Page<i32> = Page::new(vec![7], 0, 1, 1);
        let json = serde_json::to_string(&page).unwrap();

        assert!(json.contains("\"pageNumber\":0"));
        assert!(json.contains("\"pageSize\":1"));
        assert!(json.contains("\"totalElements\":1"));
        assert!(json.contains("\"totalPages\":1"));
    }

    #[test]
    fn test_envelope_constructors() {
        let ok = ApiEnvelope::ok(1, "Brands retrieved");
        assert!(ok.status);
        assert!(ok.error_detail.is_none());

        let fail = ApiEnvelope::fail(0, "Brand not found", "no brand with id 99");
        assert!(!fail.status);
        assert_eq!(fail.error_detail.as_deref(), Some("no brand with id 99"));
    }
}
