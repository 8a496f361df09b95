//! Wedding plan document schema
//!
//! The whole plan is one nested document (`WeddingPlan`): guests, events,
//! budget, vendors, staff, menu, gifts, logistics, and the rest. The store
//! persists it as a single JSON value, so the types here double as the wire
//! format. Collections carry integer ids assigned with [`next_id`];
//! formerly positional collections accept documents without ids and get
//! them filled in by [`assign_missing_ids`].

pub mod defaults;
pub mod models;

pub use defaults::starter_plan;
pub use models::*;

use std::collections::HashSet;

use crate::error::{PlanError, Result};

/// Next id for a collection: one past the highest assigned id, `1` when
/// the collection is empty.
pub(crate) fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0).max(0) + 1
}

/// Check a parsed document before it is allowed to replace the current one.
///
/// Ids must be unique within each collection (and within each event's song
/// list), and budget category names must be unique. Collections that were
/// positional in older documents may carry unassigned (`0`) ids; those are
/// filled in afterwards by [`assign_missing_ids`].
pub(crate) fn validate(plan: &WeddingPlan) -> Result<()> {
    check_ids("guests", plan.guests.iter().map(|g| g.id), false)?;
    check_ids("events", plan.events.iter().map(|e| e.id), false)?;
    for event in &plan.events {
        check_ids("songs", event.songs.iter().map(|s| s.id), false)?;
    }
    check_ids("expenses", plan.budget.expenses.iter().map(|e| e.id), false)?;
    check_ids("vendors", plan.vendors.iter().map(|v| v.id), false)?;
    check_ids("menu", plan.menu.iter().map(|m| m.id), false)?;
    check_ids("transport", plan.transport.iter().map(|t| t.id), false)?;
    check_ids("staff", plan.staff.iter().map(|s| s.id), false)?;
    check_ids("gifts", plan.gifts.iter().map(|g| g.id()), false)?;
    check_ids("returnMoney", plan.return_money.iter().map(|r| r.id), false)?;

    check_ids("venues", plan.venues.iter().map(|v| v.id), true)?;
    check_ids("tasks", plan.tasks.iter().map(|t| t.id), true)?;
    check_ids("shopping", plan.shopping.iter().map(|s| s.id), true)?;
    check_ids("invitations", plan.invitations.iter().map(|i| i.id), true)?;
    check_ids(
        "accommodation",
        plan.accommodation.iter().map(|a| a.id),
        true,
    )?;
    check_ids("family", plan.family.iter().map(|f| f.id), true)?;

    let mut names = HashSet::new();
    for category in &plan.budget.categories {
        if !names.insert(category.name.as_str()) {
            return Err(PlanError::InvalidSnapshot(format!(
                "duplicate budget category name: {}",
                category.name
            )));
        }
    }

    Ok(())
}

fn check_ids(
    collection: &'static str,
    ids: impl Iterator<Item = i64>,
    allow_unassigned: bool,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id == 0 && allow_unassigned {
            continue;
        }
        if id <= 0 {
            return Err(PlanError::InvalidSnapshot(format!(
                "invalid id {id} in {collection}"
            )));
        }
        if !seen.insert(id) {
            return Err(PlanError::InvalidSnapshot(format!(
                "duplicate id {id} in {collection}"
            )));
        }
    }
    Ok(())
}

/// Assign fresh ids to records imported without one.
pub(crate) fn assign_missing_ids(plan: &mut WeddingPlan) {
    fill_ids(&mut plan.venues, |v| &mut v.id);
    fill_ids(&mut plan.tasks, |t| &mut t.id);
    fill_ids(&mut plan.shopping, |s| &mut s.id);
    fill_ids(&mut plan.invitations, |i| &mut i.id);
    fill_ids(&mut plan.accommodation, |a| &mut a.id);
    fill_ids(&mut plan.family, |f| &mut f.id);
}

fn fill_ids<T>(records: &mut [T], id_of: impl Fn(&mut T) -> &mut i64) {
    let mut next = next_id(records.iter_mut().map(|r| *id_of(r)));
    for record in records.iter_mut() {
        let id = id_of(record);
        if *id == 0 {
            *id = next;
            next += 1;
        }
    }
}
