//! Food menu operations
//!
//! Menu entries are keyed by `(event, mealType)`; dishes are appended to
//! the matching entry, which is created on first use.

use crate::config;
use crate::error::{PlanError, Result};
use crate::plan::{next_id, MenuEntry, MenuItem, WeddingPlan};

use super::{require, PlanStore};

impl PlanStore {
    /// Add a dish to the menu for `(event, meal_type)`, creating the entry
    /// if it does not exist yet. Returns the entry's id.
    pub async fn add_menu_item(
        &mut self,
        event: &str,
        meal_type: &str,
        item: MenuItem,
    ) -> Result<i64> {
        require("event name", event)?;
        require("dish name", &item.name)?;

        let mut next = self.plan.clone();
        let existing = next
            .menu
            .iter()
            .position(|m| m.event == event && m.meal_type == meal_type);

        let id = match existing {
            Some(pos) => {
                let entry = &mut next.menu[pos];
                entry.items.push(item);
                entry.id
            }
            None => {
                let id = next_id(next.menu.iter().map(|m| m.id));
                next.menu.push(MenuEntry {
                    id,
                    event: event.to_string(),
                    meal_type: meal_type.to_string(),
                    items: vec![item],
                    caterer: config::DEFAULT_MENU_CATERER.to_string(),
                    estimated_cost: 0.0,
                });
                id
            }
        };

        self.replace(next).await;
        Ok(id)
    }

    /// Replace a menu entry wholesale, matched by id.
    pub async fn update_menu_entry(&mut self, entry: MenuEntry) -> Result<()> {
        require("event name", &entry.event)?;

        let mut next = self.plan.clone();
        let id = entry.id;
        *menu_mut(&mut next, id)? = entry;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_menu_entry(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        menu_mut(&mut next, id)?;
        next.menu.retain(|m| m.id != id);
        self.replace(next).await;
        Ok(())
    }
}

fn menu_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut MenuEntry> {
    plan.menu
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(PlanError::NotFound {
            collection: "menu",
            id,
        })
}
