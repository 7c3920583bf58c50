//! Sorting for product lists.

use contracts::domain::Product;
use std::cmp::Ordering;

/// Sort key selected in the listings toolbar.
///
/// `Default` keeps fetch order: randomized for the browse view, server order
/// for the owner's own listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    DateAsc,
    DateDesc,
}

impl SortOption {
    /// Value used in the `<select>` element.
    pub fn value(self) -> &'static str {
        match self {
            SortOption::Default => "",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::DateAsc => "date-asc",
            SortOption::DateDesc => "date-desc",
        }
    }

    /// Unknown values fall back to `Default`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "price-asc" => SortOption::PriceAsc,
            "price-desc" => SortOption::PriceDesc,
            "date-asc" => SortOption::DateAsc,
            "date-desc" => SortOption::DateDesc,
            _ => SortOption::Default,
        }
    }
}

/// Sort products in place by the selected option.
///
/// Price comparisons use the coerced numeric value (non-numeric prices count
/// as 0); date comparisons use `created_at`, falling back to the record id.
/// All sorts are stable, so equal keys keep their relative order.
pub fn sort_products(items: &mut [Product], option: SortOption) {
    match option {
        SortOption::Default => {}
        SortOption::PriceAsc => items.sort_by(cmp_price),
        SortOption::PriceDesc => items.sort_by(|a, b| cmp_price(b, a)),
        SortOption::DateAsc => items.sort_by_key(Product::date_key),
        SortOption::DateDesc => items.sort_by(|a, b| b.date_key().cmp(&a.date_key())),
    }
}

fn cmp_price(a: &Product, b: &Product) -> Ordering {
    // Coerced values are never NaN, so the ordering is total.
    a.price
        .value()
        .partial_cmp(&b.price.value())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: &str, created_at: Option<&str>) -> Product {
        serde_json::from_str(&format!(
            r#"{{"id":{},"title":"item {}","price":{},"seller_email":"s@x.y"{}}}"#,
            id,
            id,
            price,
            created_at
                .map(|ts| format!(r#","created_at":"{}""#, ts))
                .unwrap_or_default(),
        ))
        .unwrap()
    }

    fn ids(items: &[Product]) -> Vec<i64> {
        items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_value_round_trip() {
        for option in [
            SortOption::Default,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::DateAsc,
            SortOption::DateDesc,
        ] {
            assert_eq!(SortOption::from_value(option.value()), option);
        }
        assert_eq!(SortOption::from_value("garbage"), SortOption::Default);
    }

    #[test]
    fn test_price_asc_with_coercion() {
        let mut items = vec![
            product(1, r#""10""#, None),
            product(2, "5", None),
            product(3, r#""abc""#, None),
        ];
        sort_products(&mut items, SortOption::PriceAsc);
        assert_eq!(ids(&items), vec![3, 2, 1]);
    }

    #[test]
    fn test_non_finite_price_strings_sort_as_zero() {
        let mut items = vec![
            product(1, r#""NaN""#, None),
            product(2, "5", None),
            product(3, r#""1""#, None),
        ];
        sort_products(&mut items, SortOption::PriceAsc);
        assert_eq!(ids(&items), vec![1, 3, 2]);

        sort_products(&mut items, SortOption::PriceDesc);
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn test_price_desc_reverses_asc_for_distinct_keys() {
        let mut asc = vec![
            product(1, r#""10""#, None),
            product(2, "5", None),
            product(3, r#""abc""#, None),
        ];
        let mut desc = asc.clone();
        sort_products(&mut asc, SortOption::PriceAsc);
        sort_products(&mut desc, SortOption::PriceDesc);
        asc.reverse();
        assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            product(4, "7", None),
            product(1, "7", None),
            product(9, "7", None),
        ];
        sort_products(&mut items, SortOption::PriceAsc);
        assert_eq!(ids(&items), vec![4, 1, 9]);

        // Re-sorting an already sorted list is a no-op.
        let before = items.clone();
        sort_products(&mut items, SortOption::PriceAsc);
        assert_eq!(items, before);
    }

    #[test]
    fn test_date_sort_falls_back_to_id() {
        let mut items = vec![
            product(50, "1", None),
            product(2, "1", Some("2024-06-01T12:00:00Z")),
            product(7, "1", None),
        ];
        // Timestamps dwarf raw ids, so the dated record sorts last ascending.
        sort_products(&mut items, SortOption::DateAsc);
        assert_eq!(ids(&items), vec![7, 50, 2]);

        sort_products(&mut items, SortOption::DateDesc);
        assert_eq!(ids(&items), vec![2, 50, 7]);
    }

    #[test]
    fn test_default_preserves_order() {
        let mut items = vec![
            product(3, "9", None),
            product(1, "2", None),
            product(2, "5", None),
        ];
        let before = items.clone();
        sort_products(&mut items, SortOption::Default);
        assert_eq!(items, before);
    }
}
