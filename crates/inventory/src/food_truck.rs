use std::collections::HashMap;

use marketday_core::{DomainError, DomainResult, Entity, FoodTruckId, ItemId};

use crate::item::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StockEntry {
    item: Item,
    quantity: u64,
}

/// A truck's stock: item → quantity on hand.
///
/// Keyed by [`ItemId`]. Iteration follows the order items were first stocked.
/// An item never stocked reads as quantity 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<StockEntry>,
    index: HashMap<ItemId, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity on hand, 0 when the item was never stocked.
    pub fn get(&self, item_id: &ItemId) -> u64 {
        self.index
            .get(item_id)
            .map(|&i| self.entries[i].quantity)
            .unwrap_or(0)
    }

    /// True when the item has an entry (even at quantity 0).
    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.index.contains_key(item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Item, u64)> {
        self.entries.iter().map(|e| (&e.item, e.quantity))
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().map(|e| &e.item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, item: &Item, quantity: u64) {
        match self.index.get(item.id()).copied() {
            Some(i) => self.entries[i].quantity = quantity,
            None => {
                self.index.insert(item.id_typed(), self.entries.len());
                self.entries.push(StockEntry {
                    item: item.clone(),
                    quantity,
                });
            }
        }
    }

    fn quantity_mut(&mut self, item_id: &ItemId) -> Option<&mut u64> {
        let i = *self.index.get(item_id)?;
        Some(&mut self.entries[i].quantity)
    }
}

/// A vendor at the market holding a quantity-tracked stock of items.
#[derive(Debug, Clone)]
pub struct FoodTruck {
    id: FoodTruckId,
    name: String,
    inventory: Inventory,
}

impl FoodTruck {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(FoodTruckId::new(), name)
    }

    pub fn with_id(id: FoodTruckId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            inventory: Inventory::new(),
        }
    }

    pub fn id_typed(&self) -> FoodTruckId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Add `quantity` units of `item` to what is on hand; returns the new total.
    ///
    /// Stocking 0 still records the item as carried by this truck.
    pub fn stock(&mut self, item: &Item, quantity: u64) -> DomainResult<u64> {
        let on_hand = self
            .inventory
            .get(item.id())
            .checked_add(quantity)
            .ok_or_else(|| {
                DomainError::invariant(format!(
                    "stock of '{}' on '{}' would overflow",
                    item.name(),
                    self.name
                ))
            })?;

        self.inventory.set(item, on_hand);
        tracing::debug!(truck = %self.name, item = %item.name(), quantity, on_hand, "stocked item");
        Ok(on_hand)
    }

    pub fn check_stock(&self, item: &Item) -> u64 {
        self.inventory.get(item.id())
    }

    /// Take up to `quantity` units of `item`; returns how many were taken.
    ///
    /// The item keeps its entry at 0 once drained.
    pub fn remove_stock(&mut self, item: &Item, quantity: u64) -> u64 {
        let Some(on_hand) = self.inventory.quantity_mut(item.id()) else {
            return 0;
        };
        let taken = (*on_hand).min(quantity);
        *on_hand -= taken;
        tracing::debug!(
            truck = %self.name,
            item = %item.name(),
            taken,
            remaining = *on_hand,
            "removed stock"
        );
        taken
    }

    /// Σ quantity × price over everything stocked. Recomputed on every call.
    pub fn potential_revenue(&self) -> f64 {
        self.inventory
            .iter()
            .map(|(item, quantity)| quantity as f64 * item.price())
            .sum()
    }
}

impl Entity for FoodTruck {
    type Id = FoodTruckId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for FoodTruck {
    fn eq(&self, other: &Self) -> bool {
        self.same_entity(other)
    }
}

impl Eq for FoodTruck {}
