//! shaadi-core library
//!
//! Local-first data core for an Indian wedding planner: one nested plan
//! document (guests, events, budget, vendors, staff, menu, gifts,
//! logistics), a central store with named mutation operations that
//! persist the whole document on every change, and a SQLite-backed
//! key/value store that degrades to memory when unavailable.

pub mod config;
pub mod error;
pub mod plan;
pub mod storage;
pub mod store;

pub use error::{PlanError, Result};
pub use plan::{starter_plan, WeddingPlan};
pub use storage::KvStore;
pub use store::{Collection, PlanStore};
