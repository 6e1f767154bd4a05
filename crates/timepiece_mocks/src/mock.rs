use crate::catalog;
use timepiece_types::contracts::{
    ApiEnvelope, BrandFilter, CategoryFilter, Page, PageRequest, ProductFilter, SortDirection,
};
use timepiece_types::entity::{Brand, Category, Product};
use tracing::error;

/// Listing fallback for resources without a live backend. Each call is
/// stateless: filter, sort and slice over the static catalog, wrapped in an
/// envelope. This path feeds rendering directly, so it returns failure
/// envelopes instead of erroring.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    brands: Vec<Brand>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        MockCatalog {
            brands: catalog::brands(),
            categories: catalog::categories(),
            products: catalog::products(),
        }
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(brands: Vec<Brand>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        MockCatalog {
            brands,
            categories,
            products,
        }
    }

    pub fn get_brands(&self, page: &PageRequest, filter: &BrandFilter) -> ApiEnvelope<Page<Brand>> {
        let filtered: Vec<Brand> = self
            .brands
            .iter()
            .filter(|b| brand_matches(b, filter))
            .cloned()
            .collect();

        match sorted_brands(filtered, page) {
            Ok(sorted) => ApiEnvelope::ok(paginate(sorted, page), "Brands retrieved"),
            Err(detail) => listing_failure("brands", page, detail),
        }
    }

    pub fn get_brand_by_id(&self, id: i64) -> ApiEnvelope<Option<Brand>> {
        match self.brands.iter().find(|b| b.id == id) {
            Some(brand) => ApiEnvelope::ok(Some(brand.clone()), "Brand retrieved"),
            None => ApiEnvelope::fail(None, "Brand not found", format!("no brand with id {id}")),
        }
    }

    pub fn get_categories(
        &self,
        page: &PageRequest,
        filter: &CategoryFilter,
    ) -> ApiEnvelope<Page<Category>> {
        let filtered: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| category_matches(c, filter))
            .cloned()
            .collect();

        match sorted_categories(filtered, page) {
            Ok(sorted) => ApiEnvelope::ok(paginate(sorted, page), "Categories retrieved"),
            Err(detail) => listing_failure("categories", page, detail),
        }
    }

    pub fn get_products(
        &self,
        page: &PageRequest,
        filter: &ProductFilter,
    ) -> ApiEnvelope<Page<Product>> {
        let filtered: Vec<Product> = self
            .products
            .iter()
            .filter(|p| product_matches(p, filter))
            .cloned()
            .collect();

        match sorted_products(filtered, page) {
            Ok(sorted) => ApiEnvelope::ok(paginate(sorted, page), "Products retrieved"),
            Err(detail) => listing_failure("products", page, detail),
        }
    }

    pub fn get_product_by_id(&self, id: i64) -> ApiEnvelope<Option<Product>> {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => ApiEnvelope::ok(Some(product.clone()), "Product retrieved"),
            None => {
                ApiEnvelope::fail(None, "Product not found", format!("no product with id {id}"))
            }
        }
    }
}

fn listing_failure<T>(resource: &str, page: &PageRequest, detail: String) -> ApiEnvelope<Page<T>> {
    error!("Failed to list {}: {}", resource, detail);
    ApiEnvelope::fail(
        Page::empty(page.page, page.size),
        format!("Failed to list {resource}"),
        detail,
    )
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// Text filters match on case-insensitive substring; id and flag filters are
// strict equality. Inactive entities only show up when asked for.

fn brand_matches(brand: &Brand, filter: &BrandFilter) -> bool {
    let active_ok = match filter.active {
        Some(wanted) => brand.active == wanted,
        None => brand.active,
    };
    let name_ok = filter
        .name
        .as_deref()
        .is_none_or(|n| n.is_empty() || contains_ci(&brand.name, n));
    let country_ok = filter
        .country
        .as_deref()
        .is_none_or(|c| c.is_empty() || brand.country.eq_ignore_ascii_case(c));

    active_ok && name_ok && country_ok
}

fn category_matches(category: &Category, filter: &CategoryFilter) -> bool {
    let active_ok = match filter.active {
        Some(wanted) => category.active == wanted,
        None => category.active,
    };
    let name_ok = filter
        .name
        .as_deref()
        .is_none_or(|n| n.is_empty() || contains_ci(&category.name, n));
    let parent_ok = filter
        .parent_id
        .is_none_or(|parent| category.parent_id == Some(parent));

    active_ok && name_ok && parent_ok
}

fn product_matches(product: &Product, filter: &ProductFilter) -> bool {
    let active_ok = match filter.active {
        Some(wanted) => product.active == wanted,
        None => product.active,
    };
    let name_ok = filter
        .name
        .as_deref()
        .is_none_or(|n| n.is_empty() || contains_ci(&product.name, n));
    let brand_ok = filter.brand_id.is_none_or(|id| product.brand_id == id);
    let category_ok = filter
        .category_id
        .is_none_or(|id| product.category_id == id);
    let from_ok = filter
        .from_price_cents
        .is_none_or(|from| product.price_cents >= from);
    let to_ok = filter
        .to_price_cents
        .is_none_or(|to| product.price_cents <= to);

    active_ok && name_ok && brand_ok && category_ok && from_ok && to_ok
}

fn unsupported_sort(field: &str) -> String {
    format!("unsupported sort field: {field}")
}

fn sorted_brands(mut brands: Vec<Brand>, page: &PageRequest) -> Result<Vec<Brand>, String> {
    match page.sort_field.as_str() {
        "createdAt" => brands.sort_by_key(|b| b.created_at),
        "name" => brands.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        field => return Err(unsupported_sort(field)),
    }
    if page.direction == SortDirection::Desc {
        brands.reverse();
    }
    Ok(brands)
}

fn sorted_categories(
    mut categories: Vec<Category>,
    page: &PageRequest,
) -> Result<Vec<Category>, String> {
    match page.sort_field.as_str() {
        "createdAt" => categories.sort_by_key(|c| c.created_at),
        "name" => categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        field => return Err(unsupported_sort(field)),
    }
    if page.direction == SortDirection::Desc {
        categories.reverse();
    }
    Ok(categories)
}

fn sorted_products(mut products: Vec<Product>, page: &PageRequest) -> Result<Vec<Product>, String> {
    match page.sort_field.as_str() {
        "createdAt" => products.sort_by_key(|p| p.created_at),
        "name" => products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        "price" => products.sort_by_key(|p| p.price_cents),
        field => return Err(unsupported_sort(field)),
    }
    if page.direction == SortDirection::Desc {
        products.reverse();
    }
    Ok(products)
}

/// Slices one page out of the filtered sequence. Totals come from the
/// pre-pagination length.
fn paginate<T>(items: Vec<T>, page: &PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let start = page.offset().min(items.len());
    let end = (start + page.size as usize).min(items.len());
    let content = items.into_iter().skip(start).take(end - start).collect();

    Page::new(content, page.page, page.size, total)
}
