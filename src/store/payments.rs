//! Vendor settlement tracking
//!
//! Payment records track money still owed to vendors after the functions:
//! the advance already given, the agreed final payment, and the balance
//! due until it is settled.

use crate::error::{PlanError, Result};
use crate::plan::{next_id, PaymentRecord, WeddingPlan};

use super::{require, today, PlanStore};

/// Input for [`PlanStore::add_payment_record`].
#[derive(Debug, Clone, Default)]
pub struct NewPaymentRecord {
    pub vendor: String,
    pub category: String,
    pub advance: f64,
    pub final_payment: f64,
    pub due_date: String,
}

impl PlanStore {
    /// Open a settlement record for a vendor. The balance due equals the
    /// final payment until settled.
    pub async fn add_payment_record(&mut self, new: NewPaymentRecord) -> Result<i64> {
        require("payment vendor", &new.vendor)?;

        let mut next = self.plan.clone();
        let id = next_id(next.return_money.iter().map(|r| r.id));
        next.return_money.push(PaymentRecord {
            id,
            vendor: new.vendor,
            category: new.category,
            amount_given: new.advance + new.final_payment,
            advance: new.advance,
            final_payment: new.final_payment,
            balance_due: new.final_payment,
            due_date: new.due_date,
            paid: false,
            payment_date: None,
            notes: String::new(),
        });
        self.replace(next).await;

        tracing::debug!("Added payment record {}", id);
        Ok(id)
    }

    /// Mark a settlement as paid in full, dated today.
    pub async fn settle_payment(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        let record = payment_mut(&mut next, id)?;
        record.paid = true;
        record.balance_due = 0.0;
        record.payment_date = Some(today());
        self.replace(next).await;

        tracing::debug!("Settled payment record {}", id);
        Ok(())
    }

    pub async fn delete_payment_record(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        payment_mut(&mut next, id)?;
        next.return_money.retain(|r| r.id != id);
        self.replace(next).await;
        Ok(())
    }
}

fn payment_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut PaymentRecord> {
    plan.return_money
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(PlanError::NotFound {
            collection: "returnMoney",
            id,
        })
}
