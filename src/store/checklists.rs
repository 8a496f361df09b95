//! Task checklist and shopping list operations

use crate::error::{PlanError, Result};
use crate::plan::{next_id, PriceOption, ShoppingItem, Task, WeddingPlan};

use super::{require, PlanStore};

/// Input for [`PlanStore::add_task`].
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub name: String,
    pub assignee: String,
    pub deadline: String,
}

impl PlanStore {
    /// Add a task, pending until marked done.
    pub async fn add_task(&mut self, new: NewTask) -> Result<i64> {
        require("task name", &new.name)?;

        let mut next = self.plan.clone();
        let id = next_id(next.tasks.iter().map(|t| t.id));
        next.tasks.push(Task {
            id,
            name: new.name,
            assignee: new.assignee,
            deadline: new.deadline,
            done: false,
        });
        self.replace(next).await;
        Ok(id)
    }

    pub async fn set_task_done(&mut self, id: i64, done: bool) -> Result<()> {
        let mut next = self.plan.clone();
        task_mut(&mut next, id)?.done = done;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_task(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        task_mut(&mut next, id)?;
        next.tasks.retain(|t| t.id != id);
        self.replace(next).await;
        Ok(())
    }

    /// Add an item to shop for. Price quotes are collected separately.
    pub async fn add_shopping_item(&mut self, item: String) -> Result<i64> {
        require("shopping item", &item)?;

        let mut next = self.plan.clone();
        let id = next_id(next.shopping.iter().map(|s| s.id));
        next.shopping.push(ShoppingItem {
            id,
            item,
            options: vec![],
            shortlisted: false,
            delivered: false,
        });
        self.replace(next).await;
        Ok(id)
    }

    /// Append a vendor quote to a shopping item.
    pub async fn add_price_option(&mut self, item_id: i64, vendor: String, price: f64) -> Result<()> {
        require("quote vendor", &vendor)?;

        let mut next = self.plan.clone();
        shopping_mut(&mut next, item_id)?
            .options
            .push(PriceOption { vendor, price });
        self.replace(next).await;
        Ok(())
    }

    pub async fn set_item_shortlisted(&mut self, id: i64, shortlisted: bool) -> Result<()> {
        let mut next = self.plan.clone();
        shopping_mut(&mut next, id)?.shortlisted = shortlisted;
        self.replace(next).await;
        Ok(())
    }

    pub async fn set_item_delivered(&mut self, id: i64, delivered: bool) -> Result<()> {
        let mut next = self.plan.clone();
        shopping_mut(&mut next, id)?.delivered = delivered;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_shopping_item(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        shopping_mut(&mut next, id)?;
        next.shopping.retain(|s| s.id != id);
        self.replace(next).await;
        Ok(())
    }
}

fn task_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Task> {
    plan.tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(PlanError::NotFound {
            collection: "tasks",
            id,
        })
}

fn shopping_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut ShoppingItem> {
    plan.shopping
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(PlanError::NotFound {
            collection: "shopping",
            id,
        })
}
