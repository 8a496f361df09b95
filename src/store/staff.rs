//! Staff planning operations

use crate::error::{PlanError, Result};
use crate::plan::{next_id, StaffMember, WeddingPlan};

use super::{require, PlanStore};

/// Input for [`PlanStore::add_staff`].
#[derive(Debug, Clone, Default)]
pub struct NewStaff {
    pub name: String,
    pub category: String,
    pub contact: String,
    pub events: Vec<String>,
    pub shift: String,
    pub payment: f64,
    pub notes: String,
}

impl PlanStore {
    /// Add a staff member, unpaid until marked otherwise.
    pub async fn add_staff(&mut self, new: NewStaff) -> Result<i64> {
        require("staff name", &new.name)?;

        let mut next = self.plan.clone();
        let id = next_id(next.staff.iter().map(|s| s.id));
        next.staff.push(StaffMember {
            id,
            name: new.name,
            category: new.category,
            contact: new.contact,
            events: new.events,
            shift: new.shift,
            payment: new.payment,
            paid: false,
            notes: new.notes,
        });
        self.replace(next).await;

        tracing::debug!("Added staff member {}", id);
        Ok(id)
    }

    /// Replace a staff record wholesale, matched by id.
    pub async fn update_staff(&mut self, member: StaffMember) -> Result<()> {
        require("staff name", &member.name)?;

        let mut next = self.plan.clone();
        let id = member.id;
        *staff_mut(&mut next, id)? = member;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_staff(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        staff_mut(&mut next, id)?;
        next.staff.retain(|s| s.id != id);
        self.replace(next).await;
        Ok(())
    }

    pub async fn set_staff_paid(&mut self, id: i64, paid: bool) -> Result<()> {
        let mut next = self.plan.clone();
        staff_mut(&mut next, id)?.paid = paid;
        self.replace(next).await;
        Ok(())
    }
}

fn staff_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut StaffMember> {
    plan.staff
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(PlanError::NotFound {
            collection: "staff",
            id,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;

    #[tokio::test]
    async fn test_add_staff_starts_unpaid() {
        let mut store = test_store().await;

        let id = store
            .add_staff(NewStaff {
                name: "Security Team".into(),
                category: "Security".into(),
                events: vec!["Wedding Ceremony".into(), "Reception".into()],
                shift: "Full Day".into(),
                payment: 30_000.0,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(id, 4);
        let member = store.plan().staff.iter().find(|s| s.id == id).unwrap();
        assert!(!member.paid);
        assert_eq!(member.events.len(), 2);
    }

    #[tokio::test]
    async fn test_add_staff_requires_a_name() {
        let mut store = test_store().await;
        assert!(store.add_staff(NewStaff::default()).await.is_err());
        assert_eq!(store.plan().staff.len(), 3);
    }

    #[tokio::test]
    async fn test_set_staff_paid() {
        let mut store = test_store().await;

        store.set_staff_paid(1, true).await.unwrap();
        assert!(store.plan().staff[0].paid);

        let err = store.set_staff_paid(9, true).await.unwrap_err();
        assert!(matches!(
            err,
            PlanError::NotFound {
                collection: "staff",
                id: 9
            }
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_staff() {
        let mut store = test_store().await;

        let mut member = store.plan().staff[2].clone();
        member.shift = "Evening + Late Night".into();
        store.update_staff(member.clone()).await.unwrap();
        assert_eq!(store.plan().staff[2], member);

        store.delete_staff(member.id).await.unwrap();
        assert!(store.plan().staff.iter().all(|s| s.id != member.id));
    }
}
