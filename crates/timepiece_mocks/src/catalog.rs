use chrono::{DateTime, TimeZone, Utc};
use timepiece_types::entity::{Brand, Category, Product};

// Static catalog data backing resources that have no live API yet. The
// collections are read-only; services slice and filter copies per call.

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn brand(id: i64, name: &str, slug: &str, country: &str, active: bool, created: DateTime<Utc>) -> Brand {
    Brand {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        country: country.to_string(),
        active,
        created_at: created,
        updated_at: created,
    }
}

#[rustfmt::skip]
pub fn brands() -> Vec<Brand> {
    vec![
        brand(1, "Rolex", "rolex", "CH", true, ts(2023, 1, 10)),
        brand(2, "Omega", "omega", "CH", true, ts(2023, 1, 12)),
        brand(3, "Seiko", "seiko", "JP", true, ts(2023, 2, 3)),
        brand(4, "Casio", "casio", "JP", true, ts(2023, 2, 18)),
        brand(5, "Citizen", "citizen", "JP", true, ts(2023, 3, 1)),
        brand(6, "Tissot", "tissot", "CH", true, ts(2023, 3, 14)),
        brand(7, "Longines", "longines", "CH", true, ts(2023, 4, 2)),
        brand(8, "Orient", "orient", "JP", true, ts(2023, 4, 21)),
        brand(9, "Timex", "timex", "US", true, ts(2023, 5, 9)),
        brand(10, "Nomos Glashuette", "nomos-glashuette", "DE", true, ts(2023, 5, 30)),
        // discontinued partner, hidden from default listings
        brand(11, "Meridian & Sons", "meridian-sons", "GB", false, ts(2023, 6, 11)),
    ]
}

fn category(id: i64, name: &str, slug: &str, created: DateTime<Utc>) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        parent_id: None,
        active: true,
        created_at: created,
        updated_at: created,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(1, "Dive", "dive", ts(2023, 1, 5)),
        category(2, "Dress", "dress", ts(2023, 1, 6)),
        category(3, "Chronograph", "chronograph", ts(2023, 1, 7)),
        category(4, "Field", "field", ts(2023, 1, 8)),
        category(5, "Digital", "digital", ts(2023, 1, 9)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    name: &str,
    slug: &str,
    brand_id: i64,
    category_id: i64,
    price_cents: i64,
    stock: u32,
    active: bool,
    created: DateTime<Utc>,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        brand_id,
        category_id,
        price_cents,
        currency: "USD".to_string(),
        stock,
        view_count: 0,
        active,
        created_at: created,
        updated_at: created,
    }
}

#[rustfmt::skip]
pub fn products() -> Vec<Product> {
    vec![
        product(1, "Submariner Date", "submariner-date", 1, 1, 1045000, 2, true, ts(2023, 7, 3)),
        product(2, "Speedmaster Moonwatch", "speedmaster-moonwatch", 2, 3, 735000, 4, true, ts(2023, 7, 10)),
        product(3, "Seamaster Diver 300M", "seamaster-diver-300m", 2, 1, 560000, 5, true, ts(2023, 7, 17)),
        product(4, "Prospex SPB143", "prospex-spb143", 3, 1, 120000, 9, true, ts(2023, 8, 1)),
        product(5, "Presage Cocktail Time", "presage-cocktail-time", 3, 2, 45000, 14, true, ts(2023, 8, 8)),
        product(6, "G-Shock DW-5600", "g-shock-dw-5600", 4, 5, 7500, 40, true, ts(2023, 8, 15)),
        product(7, "Edifice Chronograph", "edifice-chronograph", 4, 3, 18000, 22, true, ts(2023, 8, 22)),
        product(8, "Promaster Dive Eco-Drive", "promaster-dive-eco-drive", 5, 1, 32500, 11, true, ts(2023, 9, 4)),
        product(9, "Gentleman Powermatic 80", "gentleman-powermatic-80", 6, 2, 82500, 7, true, ts(2023, 9, 12)),
        product(10, "Spirit Zulu Time", "spirit-zulu-time", 7, 4, 312500, 3, true, ts(2023, 9, 25)),
        product(11, "Bambino Version 38", "bambino-version-38", 8, 2, 16000, 18, true, ts(2023, 10, 2)),
        product(12, "Expedition North Field", "expedition-north-field", 9, 4, 22000, 13, true, ts(2023, 10, 16)),
        product(13, "Tangente 38", "tangente-38", 10, 2, 224000, 2, true, ts(2023, 10, 23)),
        // delisted reference kept for order history
        product(14, "Meridian Heritage 40", "meridian-heritage-40", 11, 2, 99000, 0, false, ts(2023, 11, 6)),
    ]
}
