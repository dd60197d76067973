//! JSON description of a market: items, trucks with their stock, and sales.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use marketday_core::DomainError;
use marketday_inventory::{Event, FoodTruck, Item, OverstockPolicy};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item key '{0}' is declared more than once")]
    DuplicateItemKey(String),

    #[error("'{owner}' refers to unknown item key '{key}'")]
    UnknownItem { owner: String, key: String },

    #[error("item '{key}': {source}")]
    InvalidItem {
        key: String,
        #[source]
        source: DomainError,
    },

    #[error("truck '{truck}': {source}")]
    Stock {
        truck: String,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    /// Manifest-local handle that stock and sale lines refer to.
    pub key: String,
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StockLine {
    pub item: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoodTruckSpec {
    pub name: String,
    #[serde(default)]
    pub stock: Vec<StockLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub overstock_policy: Option<OverstockPolicy>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
    #[serde(default)]
    pub food_trucks: Vec<FoodTruckSpec>,
    /// Sales applied once every truck has joined, in order.
    #[serde(default)]
    pub sales: Vec<StockLine>,
}

impl Manifest {
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build the event. Items are shared by key, so a key stocked by several
    /// trucks is one product.
    pub fn build(&self, policy: OverstockPolicy) -> Result<Event, ManifestError> {
        let mut items: HashMap<&str, Item> = HashMap::with_capacity(self.items.len());
        for spec in &self.items {
            let item = Item::new(spec.name.as_str(), &spec.price).map_err(|source| {
                ManifestError::InvalidItem {
                    key: spec.key.clone(),
                    source,
                }
            })?;
            if items.insert(spec.key.as_str(), item).is_some() {
                return Err(ManifestError::DuplicateItemKey(spec.key.clone()));
            }
        }

        let lookup = |owner: &str, key: &str| {
            items.get(key).ok_or_else(|| ManifestError::UnknownItem {
                owner: owner.to_string(),
                key: key.to_string(),
            })
        };

        let mut event = Event::with_overstock_policy(self.name.as_str(), policy);
        for spec in &self.food_trucks {
            let mut truck = FoodTruck::new(spec.name.as_str());
            for line in &spec.stock {
                let item = lookup(spec.name.as_str(), line.item.as_str())?;
                truck
                    .stock(item, line.quantity)
                    .map_err(|source| ManifestError::Stock {
                        truck: spec.name.clone(),
                        source,
                    })?;
            }
            event.add_food_truck(truck);
        }

        for sale in &self.sales {
            let item = lookup(self.name.as_str(), sale.item.as_str())?;
            if event.sell(item, sale.quantity) {
                tracing::info!(item = %item.name(), quantity = sale.quantity, "sale applied");
            } else {
                tracing::warn!(
                    item = %item.name(),
                    quantity = sale.quantity,
                    "sale rejected: not enough stock"
                );
            }
        }

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOUTH_PEARL: &str = r#"{
        "name": "South Pearl Street Farmers Market",
        "items": [
            { "key": "peach-pie", "name": "Peach Pie (Slice)", "price": "$3.75" },
            { "key": "apple-pie", "name": "Apple Pie (Slice)", "price": "$2.50" },
            { "key": "nice-cream", "name": "Peach-Raspberry Nice Cream", "price": "$5.30" },
            { "key": "banana", "name": "Banana Nice Cream", "price": "$4.25" }
        ],
        "food_trucks": [
            { "name": "Rocky Mountain Pies", "stock": [
                { "item": "peach-pie", "quantity": 35 },
                { "item": "apple-pie", "quantity": 7 }
            ] },
            { "name": "Ba-Nom-a-Nom", "stock": [
                { "item": "banana", "quantity": 50 },
                { "item": "nice-cream", "quantity": 25 }
            ] },
            { "name": "Palisade Peach Shack", "stock": [
                { "item": "peach-pie", "quantity": 65 },
                { "item": "nice-cream", "quantity": 10 }
            ] }
        ]
    }"#;

    #[test]
    fn builds_event_with_shared_items() {
        let manifest = Manifest::from_json(SOUTH_PEARL).unwrap();
        let event = manifest.build(OverstockPolicy::default()).unwrap();

        assert_eq!(event.food_truck_names().len(), 3);
        let report = event.report();
        assert_eq!(report.total_inventory[0].quantity, 100);
        assert_eq!(report.overstocked_items, vec!["Peach Pie (Slice)"]);
    }

    #[test]
    fn applies_sales_in_order() {
        let mut manifest = Manifest::from_json(SOUTH_PEARL).unwrap();
        manifest.sales = vec![
            StockLine {
                item: "peach-pie".into(),
                quantity: 40,
            },
            StockLine {
                item: "apple-pie".into(),
                quantity: 8,
            },
        ];
        let event = manifest.build(OverstockPolicy::default()).unwrap();
        let report = event.report();
        assert_eq!(report.total_inventory[0].quantity, 60);
        assert_eq!(report.total_inventory[1].quantity, 7);
    }

    #[test]
    fn rejects_unknown_item_key() {
        let raw = r#"{ "name": "M", "food_trucks": [
            { "name": "Cart", "stock": [{ "item": "ghost", "quantity": 1 }] }
        ] }"#;
        let err = Manifest::from_json(raw)
            .unwrap()
            .build(OverstockPolicy::default())
            .unwrap_err();
        match err {
            ManifestError::UnknownItem { owner, key } => {
                assert_eq!(owner, "Cart");
                assert_eq!(key, "ghost");
            }
            other => panic!("expected UnknownItem, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_keys_and_bad_prices() {
        let dup = r#"{ "name": "M", "items": [
            { "key": "a", "name": "A", "price": "$1" },
            { "key": "a", "name": "B", "price": "$2" }
        ] }"#;
        assert!(matches!(
            Manifest::from_json(dup).unwrap().build(OverstockPolicy::default()),
            Err(ManifestError::DuplicateItemKey(_))
        ));

        let bad = r#"{ "name": "M", "items": [{ "key": "a", "name": "A", "price": "1.00" }] }"#;
        let err = Manifest::from_json(bad)
            .unwrap()
            .build(OverstockPolicy::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ManifestError::InvalidItem { source: DomainError::InvalidPrice(_), .. }
        ));
    }

    #[test]
    fn rejects_negative_quantities_at_parse_time() {
        let raw = r#"{ "name": "M", "items": [{ "key": "a", "name": "A", "price": "$1" }],
            "food_trucks": [{ "name": "Cart", "stock": [{ "item": "a", "quantity": -3 }] }] }"#;
        assert!(matches!(Manifest::from_json(raw), Err(ManifestError::Json(_))));
    }
}
