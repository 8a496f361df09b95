//! Wedding details and family tree operations

use crate::error::{PlanError, Result};
use crate::plan::{next_id, FamilyMember, WeddingDetails, WeddingPlan};

use super::{require, PlanStore};

/// Input for [`PlanStore::add_family_member`].
#[derive(Debug, Clone, Default)]
pub struct NewFamilyMember {
    pub name: String,
    pub role: String,
    pub relation: String,
    pub group: String,
}

impl PlanStore {
    /// Replace the wedding details singleton.
    pub async fn update_wedding(&mut self, details: WeddingDetails) {
        let mut next = self.plan.clone();
        next.wedding = details;
        self.replace(next).await;

        tracing::debug!("Updated wedding details");
    }

    /// Add a family member to the tree. The photo slot starts empty.
    pub async fn add_family_member(&mut self, new: NewFamilyMember) -> Result<i64> {
        require("family member name", &new.name)?;

        let mut next = self.plan.clone();
        let id = next_id(next.family.iter().map(|f| f.id));
        next.family.push(FamilyMember {
            id,
            name: new.name,
            role: new.role,
            relation: new.relation,
            photo: String::new(),
            group: new.group,
        });
        self.replace(next).await;
        Ok(id)
    }

    /// Replace a family member record wholesale, matched by id.
    pub async fn update_family_member(&mut self, member: FamilyMember) -> Result<()> {
        require("family member name", &member.name)?;

        let mut next = self.plan.clone();
        let id = member.id;
        *family_mut(&mut next, id)? = member;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_family_member(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        family_mut(&mut next, id)?;
        next.family.retain(|f| f.id != id);
        self.replace(next).await;
        Ok(())
    }
}

fn family_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut FamilyMember> {
    plan.family
        .iter_mut()
        .find(|f| f.id == id)
        .ok_or(PlanError::NotFound {
            collection: "family",
            id,
        })
}
