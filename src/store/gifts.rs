//! Gift ledger operations
//!
//! The ledger mixes two shapes: return gifts bought in bulk for guests,
//! and gifts received (in kind, cash, or jewelry). Flags only apply to
//! the matching shape.

use crate::error::{PlanError, Result};
use crate::plan::{next_id, Gift, ReceivedGift, ReturnGift, WeddingPlan};

use super::{require, today, PlanStore};

/// Which received-gift shape a new entry takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GiftKind {
    #[default]
    Received,
    Cash,
    Jewelry,
}

/// Input for [`PlanStore::add_return_gift`].
#[derive(Debug, Clone, Default)]
pub struct NewReturnGift {
    pub item: String,
    pub quantity: u32,
    pub cost_per_unit: f64,
}

/// Input for [`PlanStore::add_received_gift`].
#[derive(Debug, Clone, Default)]
pub struct NewReceivedGift {
    pub kind: GiftKind,
    pub from: String,
    pub item: String,
    pub value: f64,
}

impl PlanStore {
    /// Add a return gift to order in bulk. The total cost is derived from
    /// quantity and unit cost.
    pub async fn add_return_gift(&mut self, new: NewReturnGift) -> Result<i64> {
        require("gift item", &new.item)?;

        let mut next = self.plan.clone();
        let id = next_id(next.gifts.iter().map(|g| g.id()));
        next.gifts.push(Gift::Return(ReturnGift {
            id,
            item: new.item,
            quantity: new.quantity,
            cost_per_unit: new.cost_per_unit,
            total_cost: new.quantity as f64 * new.cost_per_unit,
            ordered: false,
            delivered: false,
            notes: String::new(),
        }));
        self.replace(next).await;

        tracing::debug!("Added return gift {}", id);
        Ok(id)
    }

    /// Record a gift received, dated today.
    pub async fn add_received_gift(&mut self, new: NewReceivedGift) -> Result<i64> {
        require("gift item", &new.item)?;

        let mut next = self.plan.clone();
        let id = next_id(next.gifts.iter().map(|g| g.id()));
        let record = ReceivedGift {
            id,
            from: new.from,
            item: new.item,
            value: new.value,
            received_date: today(),
            thank_you_sent: false,
            notes: String::new(),
        };
        next.gifts.push(match new.kind {
            GiftKind::Received => Gift::Received(record),
            GiftKind::Cash => Gift::Cash(record),
            GiftKind::Jewelry => Gift::Jewelry(record),
        });
        self.replace(next).await;

        tracing::debug!("Added received gift {}", id);
        Ok(id)
    }

    /// Mark a return gift as ordered.
    pub async fn set_gift_ordered(&mut self, id: i64, ordered: bool) -> Result<()> {
        let mut next = self.plan.clone();
        match gift_mut(&mut next, id)? {
            Gift::Return(gift) => gift.ordered = ordered,
            _ => {
                return Err(PlanError::Validation(format!(
                    "gift {id} is not a return gift"
                )))
            }
        }
        self.replace(next).await;
        Ok(())
    }

    /// Mark a return gift as delivered.
    pub async fn set_gift_delivered(&mut self, id: i64, delivered: bool) -> Result<()> {
        let mut next = self.plan.clone();
        match gift_mut(&mut next, id)? {
            Gift::Return(gift) => gift.delivered = delivered,
            _ => {
                return Err(PlanError::Validation(format!(
                    "gift {id} is not a return gift"
                )))
            }
        }
        self.replace(next).await;
        Ok(())
    }

    /// Mark a received gift's thank-you note as sent.
    pub async fn set_thank_you_sent(&mut self, id: i64, sent: bool) -> Result<()> {
        let mut next = self.plan.clone();
        match gift_mut(&mut next, id)? {
            Gift::Received(gift) | Gift::Cash(gift) | Gift::Jewelry(gift) => {
                gift.thank_you_sent = sent
            }
            Gift::Return(_) => {
                return Err(PlanError::Validation(format!(
                    "gift {id} is not a received gift"
                )))
            }
        }
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_gift(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        gift_mut(&mut next, id)?;
        next.gifts.retain(|g| g.id() != id);
        self.replace(next).await;
        Ok(())
    }

    /// The return-gift side of the ledger.
    pub fn return_gifts(&self) -> Vec<&ReturnGift> {
        self.plan
            .gifts
            .iter()
            .filter_map(|g| match g {
                Gift::Return(gift) => Some(gift),
                _ => None,
            })
            .collect()
    }

    /// The received side of the ledger, with each entry's shape.
    pub fn received_gifts(&self) -> Vec<(GiftKind, &ReceivedGift)> {
        self.plan
            .gifts
            .iter()
            .filter_map(|g| match g {
                Gift::Received(gift) => Some((GiftKind::Received, gift)),
                Gift::Cash(gift) => Some((GiftKind::Cash, gift)),
                Gift::Jewelry(gift) => Some((GiftKind::Jewelry, gift)),
                Gift::Return(_) => None,
            })
            .collect()
    }
}

fn gift_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Gift> {
    plan.gifts
        .iter_mut()
        .find(|g| g.id() == id)
        .ok_or(PlanError::NotFound {
            collection: "gifts",
            id,
        })
}
