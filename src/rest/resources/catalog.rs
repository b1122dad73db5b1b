//! Catalog resources: products and their items.
//!
//! A [`Product`] is the vendor-defined catalog entry; its sellable
//! [`ProductItem`]s live nested under it at `products/{product_id}/items`
//! and are listed with [`RestResource::list_with_parent`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// The publication status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Still being defined by the vendor.
    #[default]
    Draft,
    /// Published to the marketplace catalog.
    Published,
    /// Withdrawn from the catalog.
    Retired,
}

/// A product in the marketplace catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// The unique identifier, e.g. `PRD-123-456`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The display name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A short description shown in catalog listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// The publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// The ID of the vendor account that owns this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Product category, e.g. `Security`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated: Option<DateTime<Utc>>,
}

impl RestResource for Product {
    type Id = String;

    const NAME: &'static str = "Product";
    const COLLECTION: &'static str = "products";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

/// How an item is billed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemPeriod {
    /// Billed once.
    Onetime,
    /// Billed every month.
    #[default]
    Monthly,
    /// Billed every year.
    Yearly,
}

/// A sellable item of a product, such as a license seat.
///
/// Items live nested under their product:
///
/// ```rust,ignore
/// let items = ProductItem::list_with_parent(
///     &client, "products", "PRD-123-456", ListParams::new(),
/// ).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductItem {
    /// The unique identifier, e.g. `PRD-123-456-0001`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The display name of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Vendor-side identifier used on invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,

    /// The billing period of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<ItemPeriod>,

    /// The unit the quantity is measured in, e.g. `licenses`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RestResource for ProductItem {
    type Id = String;

    const NAME: &'static str = "ProductItem";
    const COLLECTION: &'static str = "items";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserializes_from_api_payload() {
        let payload = json!({
            "id": "PRD-123-456",
            "name": "Cloud Backup",
            "short_description": "Backups for workloads",
            "status": "published",
            "owner_id": "VA-123-456",
            "category": "Storage",
            "created": "2024-01-15T10:30:00Z",
            "updated": "2024-06-20T15:45:00Z"
        });

        let product: Product = serde_json::from_value(payload).unwrap();
        assert_eq!(product.id.as_deref(), Some("PRD-123-456"));
        assert_eq!(product.status, Some(ProductStatus::Published));
        assert!(product.updated.is_some());
    }

    #[test]
    fn test_product_serialization_skips_read_only_fields() {
        let product = Product {
            id: Some("PRD-123-456".to_string()),
            name: Some("Cloud Backup".to_string()),
            status: Some(ProductStatus::Draft),
            created: Some(Utc::now()),
            ..Default::default()
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("created").is_none());
        assert_eq!(value.get("status"), Some(&json!("draft")));
    }

    #[test]
    fn test_product_item_round_trips_through_serde() {
        let payload = json!({
            "id": "PRD-123-456-0001",
            "name": "Seat",
            "mpn": "BKP-SEAT",
            "period": "monthly",
            "unit": "licenses"
        });

        let item: ProductItem = serde_json::from_value(payload).unwrap();
        assert_eq!(item.get_id().as_deref(), Some("PRD-123-456-0001"));
        assert_eq!(item.period, Some(ItemPeriod::Monthly));
    }

    #[test]
    fn test_item_period_defaults_to_monthly() {
        assert_eq!(ItemPeriod::default(), ItemPeriod::Monthly);
    }

    #[test]
    fn test_collection_constants() {
        assert_eq!(Product::COLLECTION, "products");
        assert_eq!(ProductItem::COLLECTION, "items");
    }
}
