//! Market event: the food trucks present and cross-truck aggregates.

use std::collections::HashMap;

use marketday_core::{Entity, FoodTruckId, ItemId};

use crate::food_truck::FoodTruck;
use crate::item::Item;
use crate::policy::OverstockPolicy;

/// Event-wide stock of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTotal<'a> {
    /// Sum of every selling truck's quantity on hand.
    pub quantity: u64,
    /// Trucks carrying the item, in the order they joined the event.
    pub food_trucks: Vec<&'a FoodTruck>,
}

/// Derived view: one [`ItemTotal`] per distinct item across all trucks.
///
/// Entries are ordered by first encounter, scanning trucks in addition order and
/// each truck's inventory in stocking order.
#[derive(Debug, Clone, Default)]
pub struct TotalInventory<'a> {
    entries: Vec<(&'a Item, ItemTotal<'a>)>,
    index: HashMap<ItemId, usize>,
}

impl<'a> TotalInventory<'a> {
    pub fn get(&self, item_id: &ItemId) -> Option<&ItemTotal<'a>> {
        self.index.get(item_id).map(|&i| &self.entries[i].1)
    }

    /// Aggregate quantity, 0 when no truck carries the item.
    pub fn quantity_of(&self, item_id: &ItemId) -> u64 {
        self.get(item_id).map(|t| t.quantity).unwrap_or(0)
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.index.contains_key(item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a Item, &ItemTotal<'a>)> {
        self.entries.iter().map(|(item, total)| (*item, total))
    }

    pub fn items(&self) -> impl Iterator<Item = &'a Item> {
        self.entries.iter().map(|(item, _)| *item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, item: &'a Item, total: ItemTotal<'a>) {
        match self.index.get(item.id()).copied() {
            Some(i) => self.entries[i].1 = total,
            None => {
                self.index.insert(item.id_typed(), self.entries.len());
                self.entries.push((item, total));
            }
        }
    }
}

/// A market event: an ordered roster of food trucks.
///
/// Every aggregate is recomputed from the trucks on each call.
#[derive(Debug, Clone)]
pub struct Event {
    name: String,
    food_trucks: Vec<FoodTruck>,
    overstock_policy: OverstockPolicy,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_overstock_policy(name, OverstockPolicy::default())
    }

    pub fn with_overstock_policy(
        name: impl Into<String>,
        overstock_policy: OverstockPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            food_trucks: Vec::new(),
            overstock_policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overstock_policy(&self) -> OverstockPolicy {
        self.overstock_policy
    }

    pub fn food_trucks(&self) -> &[FoodTruck] {
        &self.food_trucks
    }

    /// Append a truck. The same truck may be added twice; both copies count.
    pub fn add_food_truck(&mut self, truck: FoodTruck) {
        tracing::debug!(event = %self.name, truck = %truck.name(), "added food truck");
        self.food_trucks.push(truck);
    }

    /// First truck with this id.
    pub fn food_truck(&self, id: &FoodTruckId) -> Option<&FoodTruck> {
        self.food_trucks.iter().find(|t| t.id() == id)
    }

    /// First truck with this id, for stocking after it joined the event.
    pub fn food_truck_mut(&mut self, id: &FoodTruckId) -> Option<&mut FoodTruck> {
        self.food_trucks.iter_mut().find(|t| t.id() == id)
    }

    pub fn food_truck_names(&self) -> Vec<&str> {
        self.food_trucks.iter().map(FoodTruck::name).collect()
    }

    /// Trucks whose inventory has an entry for `item`, in addition order.
    pub fn food_trucks_that_sell(&self, item: &Item) -> Vec<&FoodTruck> {
        self.food_trucks
            .iter()
            .filter(|t| t.inventory().contains(item.id()))
            .collect()
    }

    pub fn total_inventory(&self) -> TotalInventory<'_> {
        let mut totals = TotalInventory::default();

        for truck in &self.food_trucks {
            for item in truck.inventory().items() {
                // Totals depend only on the roster, so a revisit would rewrite the same value.
                if totals.contains(item.id()) {
                    continue;
                }
                let sellers = self.food_trucks_that_sell(item);
                let quantity = sellers
                    .iter()
                    .map(|t| t.check_stock(item))
                    .fold(0u64, u64::saturating_add);
                totals.insert(
                    item,
                    ItemTotal {
                        quantity,
                        food_trucks: sellers,
                    },
                );
            }
        }

        tracing::trace!(
            event = %self.name,
            trucks = self.food_trucks.len(),
            items = totals.len(),
            "computed total inventory"
        );
        totals
    }

    /// Items above the policy's quantity threshold carried by enough trucks,
    /// in total-inventory order.
    pub fn overstocked_items(&self) -> Vec<&Item> {
        let policy = self.overstock_policy;
        let totals = self.total_inventory();
        totals
            .iter()
            .filter(|(_, total)| policy.is_overstocked(total.quantity, total.food_trucks.len()))
            .map(|(item, _)| item)
            .collect()
    }

    /// Names of every distinct item, ascending. Lookalike items keep one name each.
    pub fn sorted_item_list(&self) -> Vec<&str> {
        let totals = self.total_inventory();
        let mut names: Vec<&str> = totals.items().map(Item::name).collect();
        names.sort_unstable();
        names
    }

    /// Sell `quantity` units of `item`, draining trucks in addition order.
    ///
    /// Returns `false` without touching any stock when the event as a whole
    /// holds fewer than `quantity` units.
    pub fn sell(&mut self, item: &Item, quantity: u64) -> bool {
        let available = self
            .food_trucks
            .iter()
            .map(|t| t.check_stock(item))
            .fold(0u64, u64::saturating_add);

        if available < quantity {
            tracing::debug!(
                event = %self.name,
                item = %item.name(),
                quantity,
                available,
                "insufficient stock to sell"
            );
            return false;
        }

        let mut remaining = quantity;
        for truck in &mut self.food_trucks {
            if remaining == 0 {
                break;
            }
            remaining -= truck.remove_stock(item, remaining);
        }

        tracing::debug!(event = %self.name, item = %item.name(), quantity, "sold item");
        true
    }
}
