//! Vendor roster operations

use crate::config;
use crate::error::{PlanError, Result};
use crate::plan::{next_id, Vendor, WeddingPlan};

use super::{require, PlanStore};

/// Input for [`PlanStore::add_vendor`].
#[derive(Debug, Clone, Default)]
pub struct NewVendor {
    pub name: String,
    pub vendor_type: String,
    pub contact: String,
    pub email: String,
    pub rate: f64,
}

impl PlanStore {
    /// Add a vendor. Payments and rating start at zero.
    pub async fn add_vendor(&mut self, new: NewVendor) -> Result<i64> {
        require("vendor name", &new.name)?;

        let mut next = self.plan.clone();
        let id = next_id(next.vendors.iter().map(|v| v.id));
        next.vendors.push(Vendor {
            id,
            name: new.name,
            vendor_type: new.vendor_type,
            contact: new.contact,
            email: new.email,
            rate: new.rate,
            advance_paid: 0.0,
            final_paid: false,
            rating: 0,
            notes: String::new(),
        });
        self.replace(next).await;

        tracing::debug!("Added vendor {}", id);
        Ok(id)
    }

    /// Replace a vendor record wholesale, matched by id.
    pub async fn update_vendor(&mut self, vendor: Vendor) -> Result<()> {
        require("vendor name", &vendor.name)?;
        check_rating(vendor.rating)?;

        let mut next = self.plan.clone();
        let id = vendor.id;
        *vendor_mut(&mut next, id)? = vendor;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_vendor(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        vendor_mut(&mut next, id)?;
        next.vendors.retain(|v| v.id != id);
        self.replace(next).await;
        Ok(())
    }

    /// Rate a vendor on the 0-5 scale.
    pub async fn rate_vendor(&mut self, id: i64, rating: u8) -> Result<()> {
        check_rating(rating)?;

        let mut next = self.plan.clone();
        vendor_mut(&mut next, id)?.rating = rating;
        self.replace(next).await;
        Ok(())
    }

    /// Add an advance payment to a vendor's running total.
    pub async fn record_vendor_advance(&mut self, id: i64, amount: f64) -> Result<f64> {
        if amount <= 0.0 {
            return Err(PlanError::Validation(
                "advance amount must be positive".into(),
            ));
        }

        let mut next = self.plan.clone();
        let vendor = vendor_mut(&mut next, id)?;
        vendor.advance_paid += amount;
        let total = vendor.advance_paid;
        self.replace(next).await;
        Ok(total)
    }

    pub async fn set_vendor_final_paid(&mut self, id: i64, paid: bool) -> Result<()> {
        let mut next = self.plan.clone();
        vendor_mut(&mut next, id)?.final_paid = paid;
        self.replace(next).await;
        Ok(())
    }
}

fn check_rating(rating: u8) -> Result<()> {
    if rating > config::MAX_VENDOR_RATING {
        return Err(PlanError::Validation(format!(
            "vendor rating must be at most {}",
            config::MAX_VENDOR_RATING
        )));
    }
    Ok(())
}

fn vendor_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Vendor> {
    plan.vendors
        .iter_mut()
        .find(|v| v.id == id)
        .ok_or(PlanError::NotFound {
            collection: "vendors",
            id,
        })
}
