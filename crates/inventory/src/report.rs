//! Serializable snapshot of an event's aggregates.

use serde::Serialize;

use marketday_core::{FoodTruckId, ItemId};

use crate::event::Event;
use crate::food_truck::FoodTruck;
use crate::item::{Item, Price};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodTruckSummary {
    pub id: FoodTruckId,
    pub name: String,
    pub items_stocked: usize,
    pub potential_revenue: f64,
}

impl From<&FoodTruck> for FoodTruckSummary {
    fn from(truck: &FoodTruck) -> Self {
        Self {
            id: truck.id_typed(),
            name: truck.name().to_string(),
            items_stocked: truck.inventory().len(),
            potential_revenue: truck.potential_revenue(),
        }
    }
}

/// One row of the total inventory, with sellers named in addition order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemTotalRow {
    pub item_id: ItemId,
    pub name: String,
    pub price: Price,
    pub quantity: u64,
    pub food_trucks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventReport {
    pub name: String,
    pub food_trucks: Vec<FoodTruckSummary>,
    pub total_inventory: Vec<ItemTotalRow>,
    pub overstocked_items: Vec<String>,
    pub sorted_item_list: Vec<String>,
}

impl From<&Event> for EventReport {
    fn from(event: &Event) -> Self {
        let total_inventory = event
            .total_inventory()
            .iter()
            .map(|(item, total)| ItemTotalRow {
                item_id: item.id_typed(),
                name: item.name().to_string(),
                price: item.price_value().clone(),
                quantity: total.quantity,
                food_trucks: total
                    .food_trucks
                    .iter()
                    .map(|t| t.name().to_string())
                    .collect(),
            })
            .collect();

        Self {
            name: event.name().to_string(),
            food_trucks: event
                .food_trucks()
                .iter()
                .map(FoodTruckSummary::from)
                .collect(),
            total_inventory,
            overstocked_items: event
                .overstocked_items()
                .into_iter()
                .map(|item| item.name().to_string())
                .collect(),
            sorted_item_list: event
                .sorted_item_list()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Event {
    pub fn report(&self) -> EventReport {
        EventReport::from(self)
    }
}
