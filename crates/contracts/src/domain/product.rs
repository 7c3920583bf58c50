use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Price
// ============================================================================

/// Listing price as received from the API.
///
/// The backend is not consistent here: some records carry a JSON number,
/// others a numeric string. Both forms are accepted and normalized through
/// [`Price::value`] wherever a number is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Numeric value for sorting. Non-numeric or non-finite prices count as 0.
    pub fn value(&self) -> f64 {
        match self {
            Price::Number(n) if n.is_finite() => *n,
            Price::Number(_) => 0.0,
            // parse() accepts "NaN" and "inf"; those are as non-numeric as "abc" here.
            Price::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Product
// ============================================================================

/// A sellable listing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    pub title: String,

    pub price: Price,

    /// Image URL; the UI substitutes a deterministic placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Creation timestamp; older backend rows predate the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Contact address of the owning seller.
    pub seller_email: String,
}

impl Product {
    /// Key for date ordering: `created_at` in milliseconds, falling back to
    /// the record id for rows without a timestamp.
    pub fn date_key(&self) -> i64 {
        match self.created_at {
            Some(ts) => ts.timestamp_millis(),
            None => self.id,
        }
    }
}

// ============================================================================
// NewListing
// ============================================================================

/// Payload for creating a listing (`POST /products`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_value_coercion() {
        assert_eq!(Price::Number(5.0).value(), 5.0);
        assert_eq!(Price::Text("10".to_string()).value(), 10.0);
        assert_eq!(Price::Text(" 12.50 ".to_string()).value(), 12.5);
        assert_eq!(Price::Text("abc".to_string()).value(), 0.0);
        assert_eq!(Price::Text(String::new()).value(), 0.0);
        assert_eq!(Price::Text("NaN".to_string()).value(), 0.0);
        assert_eq!(Price::Text("inf".to_string()).value(), 0.0);
        assert_eq!(Price::Text("-inf".to_string()).value(), 0.0);
        assert_eq!(Price::Number(f64::NAN).value(), 0.0);
        assert_eq!(Price::Number(f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn test_price_deserializes_number_and_string() {
        let p: Product = serde_json::from_str(
            r#"{"id":1,"title":"Desk","price":40,"seller_email":"a@b.c"}"#,
        )
        .unwrap();
        assert_eq!(p.price, Price::Number(40.0));

        let p: Product = serde_json::from_str(
            r#"{"id":2,"title":"Lamp","price":"15.99","seller_email":"a@b.c"}"#,
        )
        .unwrap();
        assert_eq!(p.price, Price::Text("15.99".to_string()));
        assert_eq!(p.price.value(), 15.99);
    }

    #[test]
    fn test_optional_fields_default() {
        let p: Product = serde_json::from_str(
            r#"{"id":7,"title":"Chair","price":"20","seller_email":"s@x.y"}"#,
        )
        .unwrap();
        assert!(p.image_url.is_none());
        assert!(p.created_at.is_none());
    }

    #[test]
    fn test_date_key_falls_back_to_id() {
        let mut p: Product = serde_json::from_str(
            r#"{"id":42,"title":"Mug","price":3,"seller_email":"s@x.y"}"#,
        )
        .unwrap();
        assert_eq!(p.date_key(), 42);

        p.created_at = Some("2024-03-15T14:02:26Z".parse().unwrap());
        assert_eq!(p.date_key(), 1710511346000);
    }

    #[test]
    fn test_new_listing_skips_absent_fields() {
        let body = NewListing {
            title: "Bike".to_string(),
            price: 120.0,
            image_url: None,
            description: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"title":"Bike","price":120.0}"#);
    }
}
