use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::api;

/// A certificate order previously placed on the account.
///
/// Only ever decoded from list responses, never constructed by the client.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": 123456,
///   "certificate": {
///     "common_name": "example.com",
///     "dns_names": ["example.com", "www.example.com"],
///     "valid_till": "2027-06-01",
///     "signature_hash": "sha256"
///   },
///   "status": "issued",
///   "date_created": "2026-05-14T09:12:33Z",
///   "organization": { "id": 112233, "name": "Example Org" },
///   "validity_years": 1,
///   "container": { "id": 5, "name": "Example Division" },
///   "product": { "name_id": "ssl_plus", "name": "SSL Plus", "type": "ssl_certificate" },
///   "price": 195.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,

    pub certificate: Certificate,

    pub status: String,

    /// Uses ISO 8601 format.
    #[serde(with = "time::serde::iso8601")]
    pub date_created: OffsetDateTime,

    pub organization: api::OrganizationRef,

    pub validity_years: u32,

    pub container: api::Container,

    pub product: Product,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Certificate details embedded in an [`Order`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    /// Subject alternative names secured alongside the common name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,

    /// Expiration date as reported by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_till: Option<String>,

    pub signature_hash: String,
}

/// The product an order was placed against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name_id: String,

    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub _type: Option<String>,
}

/// Pagination metadata accompanying a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Envelope for the order list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orders {
    pub orders: Vec<Order>,
    pub page: Page,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS_JSON: &str = r#"{
        "orders": [
            {
                "id": 123456,
                "certificate": {
                    "common_name": "example.com",
                    "dns_names": ["example.com", "www.example.com"],
                    "valid_till": "2027-06-01",
                    "signature_hash": "sha256"
                },
                "status": "issued",
                "date_created": "2026-05-14T09:12:33Z",
                "organization": { "id": 112233, "name": "Example Org" },
                "validity_years": 1,
                "container": { "id": 5, "name": "Example Division" },
                "product": { "name_id": "ssl_plus", "name": "SSL Plus", "type": "ssl_certificate" },
                "price": 195.0
            },
            {
                "id": 123457,
                "certificate": {
                    "common_name": "*.example.net",
                    "valid_till": "2028-01-20",
                    "signature_hash": "sha256"
                },
                "status": "pending",
                "date_created": "2026-05-15T16:40:02Z",
                "organization": { "id": 112233 },
                "validity_years": 2,
                "container": { "id": 5, "name": "Example Division" },
                "product": { "name_id": "ssl_wildcard", "name": "Wildcard SSL" }
            }
        ],
        "page": { "total": 2, "limit": 0, "offset": 0 }
    }"#;

    #[test]
    fn test_orders_decode_preserves_records() {
        let envelope = serde_json::from_str::<Orders>(ORDERS_JSON).unwrap();

        assert_eq!(envelope.orders.len(), 2);
        assert_eq!(envelope.page.total, 2);

        let first = &envelope.orders[0];
        assert_eq!(first.id, 123456);
        assert_eq!(first.certificate.common_name.as_deref(), Some("example.com"));
        assert_eq!(
            first.certificate.dns_names.as_deref(),
            Some(&["example.com".to_owned(), "www.example.com".to_owned()][..])
        );
        assert_eq!(first.status, "issued");
        assert_eq!(first.organization.id, 112233);
        assert_eq!(first.validity_years, 1);
        assert_eq!(first.product.name_id, "ssl_plus");
        assert_eq!(first.price, Some(195.0));

        let second = &envelope.orders[1];
        assert_eq!(second.id, 123457);
        assert_eq!(second.certificate.common_name.as_deref(), Some("*.example.net"));
        assert!(second.certificate.dns_names.is_none());
        assert!(second.price.is_none());
    }

    #[test]
    fn test_date_created_is_iso8601() {
        let envelope = serde_json::from_str::<Orders>(ORDERS_JSON).unwrap();
        let created = envelope.orders[0].date_created;

        assert_eq!(created.year(), 2026);
        assert_eq!(u8::from(created.month()), 5);
        assert_eq!(created.day(), 14);
        assert_eq!(created.hour(), 9);
    }

    #[test]
    fn test_invalid_date_fails_decode() {
        let json = ORDERS_JSON.replace("2026-05-14T09:12:33Z", "yesterday");
        assert!(serde_json::from_str::<Orders>(&json).is_err());
    }
}
