//! Central plan store
//!
//! Owns the in-memory wedding plan and its persistence contract: load once
//! at startup (the stored document or the bundled starter plan), persist on
//! every change, snapshot export/import, and per-collection reset. Named
//! mutation operations live in the submodules, one per planning area, and
//! every one of them funnels through [`PlanStore::replace`].

pub mod budget;
pub mod checklists;
pub mod events;
pub mod gifts;
pub mod guests;
pub mod logistics;
pub mod menu;
pub mod payments;
pub mod staff;
pub mod summary;
pub mod vendors;
pub mod wedding;

pub use budget::{CategoryBreakdown, NewExpense};
pub use checklists::NewTask;
pub use events::{NewEvent, NewSong};
pub use gifts::{GiftKind, NewReceivedGift, NewReturnGift};
pub use guests::{NewGuest, NewInvitation};
pub use logistics::{NewAccommodation, NewTransport, NewVenue};
pub use payments::NewPaymentRecord;
pub use staff::NewStaff;
pub use summary::PlanSummary;
pub use vendors::NewVendor;
pub use wedding::NewFamilyMember;

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;

use crate::config;
use crate::error::{PlanError, Result};
use crate::plan::{self, Budget, WeddingPlan};
use crate::storage::KvStore;

/// Collections that can be reset to their empty value.
///
/// Staff, gifts, and payment records cannot be reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Guests,
    Budget,
    Venues,
    Events,
    Vendors,
    Tasks,
    Shopping,
    Invitations,
    Accommodation,
    Menu,
    Family,
    Transport,
}

impl Collection {
    fn name(self) -> &'static str {
        match self {
            Collection::Guests => "guests",
            Collection::Budget => "budget",
            Collection::Venues => "venues",
            Collection::Events => "events",
            Collection::Vendors => "vendors",
            Collection::Tasks => "tasks",
            Collection::Shopping => "shopping",
            Collection::Invitations => "invitations",
            Collection::Accommodation => "accommodation",
            Collection::Menu => "menu",
            Collection::Family => "family",
            Collection::Transport => "transport",
        }
    }
}

/// Central state store for the wedding plan.
///
/// All mutation goes through [`replace`](Self::replace): the named
/// operations compute the next document and submit it, which persists the
/// whole plan under one key. Persistence failures never interrupt the
/// caller; they are logged and the in-memory document stays authoritative
/// for the session.
pub struct PlanStore {
    kv: KvStore,
    plan: WeddingPlan,
}

impl PlanStore {
    /// Load the stored plan, falling back to the bundled starter plan.
    ///
    /// An unreadable stored document is logged and treated as absent.
    pub async fn open(kv: KvStore) -> Self {
        let plan = match kv.get(config::PLAN_STORAGE_KEY).await {
            Some(raw) => match Self::parse_snapshot(&raw) {
                Ok(plan) => plan,
                Err(e) => {
                    tracing::warn!("Stored plan is unreadable, using the starter plan: {}", e);
                    plan::starter_plan()
                }
            },
            None => {
                tracing::info!("No stored plan found, using the starter plan");
                plan::starter_plan()
            }
        };

        Self { kv, plan }
    }

    /// Read access to the current document.
    pub fn plan(&self) -> &WeddingPlan {
        &self.plan
    }

    /// Replace the whole document and persist it.
    ///
    /// The sole mutation entry point. The in-memory document is replaced
    /// unconditionally; persistence failures are logged, never raised.
    pub async fn replace(&mut self, next: WeddingPlan) {
        self.plan = next;
        self.persist().await;
    }

    async fn persist(&self) {
        match serde_json::to_string(&self.plan) {
            Ok(raw) => self.kv.set(config::PLAN_STORAGE_KEY, &raw).await,
            Err(e) => tracing::warn!("Failed to serialize plan for persistence: {}", e),
        }
    }

    /// Pretty-printed JSON snapshot of the whole document.
    pub fn export_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.plan)?)
    }

    /// Parse and validate a snapshot without touching store state.
    ///
    /// Records in the formerly positional collections may arrive without
    /// ids; they are assigned fresh ones here.
    pub fn parse_snapshot(raw: &str) -> Result<WeddingPlan> {
        let mut plan: WeddingPlan =
            serde_json::from_str(raw).map_err(|e| PlanError::InvalidSnapshot(e.to_string()))?;
        plan::validate(&plan)?;
        plan::assign_missing_ids(&mut plan);
        Ok(plan)
    }

    /// Replace the document with a parsed snapshot.
    ///
    /// A snapshot that fails to parse or validate leaves the current
    /// document untouched.
    pub async fn import_snapshot(&mut self, raw: &str) -> Result<()> {
        let plan = Self::parse_snapshot(raw)?;
        self.replace(plan).await;
        tracing::info!("Imported plan snapshot");
        Ok(())
    }

    /// Drop the stored document and start over from the starter plan.
    pub async fn reset_to_default(&mut self) {
        tracing::info!("Resetting to the starter plan");
        self.kv.remove(config::PLAN_STORAGE_KEY).await;
        self.replace(plan::starter_plan()).await;
    }

    /// Empty a single collection, leaving the rest of the document as is.
    pub async fn reset_collection(&mut self, collection: Collection) {
        tracing::info!("Resetting collection '{}'", collection.name());

        let mut next = self.plan.clone();
        match collection {
            Collection::Guests => next.guests.clear(),
            Collection::Budget => {
                next.budget = Budget {
                    total: 0.0,
                    categories: vec![],
                    expenses: vec![],
                }
            }
            Collection::Venues => next.venues.clear(),
            Collection::Events => next.events.clear(),
            Collection::Vendors => next.vendors.clear(),
            Collection::Tasks => next.tasks.clear(),
            Collection::Shopping => next.shopping.clear(),
            Collection::Invitations => next.invitations.clear(),
            Collection::Accommodation => next.accommodation.clear(),
            Collection::Menu => next.menu.clear(),
            Collection::Family => next.family.clear(),
            Collection::Transport => next.transport.clear(),
        }

        self.replace(next).await;
    }

    /// Write the snapshot to `wedding-plan-YYYY-MM-DD.json` inside `dir`.
    pub async fn export_to_file(&self, dir: &Path) -> Result<PathBuf> {
        let snapshot = self.export_snapshot()?;
        let file_name = format!(
            "{}-{}.json",
            config::EXPORT_FILE_PREFIX,
            Utc::now().format(config::DATE_FORMAT)
        );
        let path = dir.join(file_name);

        fs::write(&path, snapshot).await?;
        tracing::info!("Exported plan to {:?}", path);

        Ok(path)
    }

    /// Import a snapshot file, replacing the document on success.
    pub async fn import_from_file(&mut self, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path).await?;
        self.import_snapshot(&raw).await
    }
}

/// Today's date in the document's `YYYY-MM-DD` format (UTC).
pub(crate) fn today() -> String {
    Utc::now().format(config::DATE_FORMAT).to_string()
}

/// Form-style defaulting: `fallback` when the submitted value is blank.
pub(crate) fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Reject a blank required field.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlanError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_store() -> PlanStore {
    PlanStore::open(KvStore::ephemeral()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_starts_from_the_starter_plan() {
        let store = test_store().await;
        assert_eq!(store.plan(), &plan::starter_plan());
    }

    #[tokio::test]
    async fn test_stored_plan_wins_over_the_starter() {
        let kv = KvStore::ephemeral();
        let mut doc = plan::starter_plan();
        doc.wedding.groom_name = "Test Groom".into();
        kv.set(
            config::PLAN_STORAGE_KEY,
            &serde_json::to_string(&doc).unwrap(),
        )
        .await;

        let store = PlanStore::open(kv).await;
        assert_eq!(store.plan().wedding.groom_name, "Test Groom");
    }

    #[tokio::test]
    async fn test_corrupt_stored_plan_falls_back_to_the_starter() {
        let kv = KvStore::ephemeral();
        kv.set(config::PLAN_STORAGE_KEY, "{{{ not json").await;

        let store = PlanStore::open(kv).await;
        assert_eq!(store.plan(), &plan::starter_plan());
    }

    #[tokio::test]
    async fn test_replace_persists_under_the_fixed_key() {
        let kv = KvStore::ephemeral();
        let mut store = PlanStore::open(kv.clone()).await;

        let mut next = store.plan().clone();
        next.wedding.overall_theme = "Royal Blue".into();
        store.replace(next).await;

        let raw = kv.get(config::PLAN_STORAGE_KEY).await.unwrap();
        assert!(raw.contains("Royal Blue"));

        let reopened = PlanStore::open(kv).await;
        assert_eq!(reopened.plan(), store.plan());
    }

    #[tokio::test]
    async fn test_import_accepts_own_export() {
        let store = test_store().await;
        let snapshot = store.export_snapshot().unwrap();

        let mut other = test_store().await;
        other.reset_collection(Collection::Guests).await;
        other.import_snapshot(&snapshot).await.unwrap();

        assert_eq!(other.plan(), store.plan());
    }

    #[tokio::test]
    async fn test_failed_import_leaves_the_document_untouched() {
        let mut store = test_store().await;
        let before = store.plan().clone();

        let err = store.import_snapshot("not json at all").await.unwrap_err();
        assert!(matches!(err, PlanError::InvalidSnapshot(_)));

        let err = store.import_snapshot(r#"{"wedding": {}}"#).await.unwrap_err();
        assert!(matches!(err, PlanError::InvalidSnapshot(_)));

        assert_eq!(store.plan(), &before);
    }

    #[tokio::test]
    async fn test_import_rejects_duplicate_ids() {
        let store = test_store().await;
        let mut doc: serde_json::Value =
            serde_json::from_str(&store.export_snapshot().unwrap()).unwrap();
        doc["guests"][1]["id"] = doc["guests"][0]["id"].clone();

        let err = PlanStore::parse_snapshot(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[tokio::test]
    async fn test_parse_snapshot_assigns_ids_older_exports_lack() {
        let store = test_store().await;
        let mut doc: serde_json::Value =
            serde_json::from_str(&store.export_snapshot().unwrap()).unwrap();
        for venue in doc["venues"].as_array_mut().unwrap() {
            venue.as_object_mut().unwrap().remove("id");
        }
        for task in doc["tasks"].as_array_mut().unwrap() {
            task.as_object_mut().unwrap().remove("id");
        }

        let parsed = PlanStore::parse_snapshot(&doc.to_string()).unwrap();
        assert!(parsed.venues.iter().all(|v| v.id > 0));
        assert!(parsed.tasks.iter().all(|t| t.id > 0));
    }

    #[tokio::test]
    async fn test_reset_to_default_restores_the_starter_plan() {
        let mut store = test_store().await;
        store.reset_collection(Collection::Guests).await;
        store.reset_collection(Collection::Events).await;

        store.reset_to_default().await;
        assert_eq!(store.plan(), &plan::starter_plan());
    }

    #[tokio::test]
    async fn test_reset_collection_touches_only_that_collection() {
        let mut store = test_store().await;
        store.reset_collection(Collection::Guests).await;

        assert!(store.plan().guests.is_empty());

        let mut expected = plan::starter_plan();
        expected.guests.clear();
        assert_eq!(store.plan(), &expected);
    }

    #[tokio::test]
    async fn test_reset_budget_yields_the_minimal_record() {
        let mut store = test_store().await;
        store.reset_collection(Collection::Budget).await;

        let budget = &store.plan().budget;
        assert_eq!(budget.total, 0.0);
        assert!(budget.categories.is_empty());
        assert!(budget.expenses.is_empty());
    }

    #[tokio::test]
    async fn test_export_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = test_store().await;

        let path = store.export_to_file(dir.path()).await.unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("wedding-plan-"));
        assert!(name.ends_with(".json"));

        let mut other = test_store().await;
        other.reset_collection(Collection::Vendors).await;
        other.import_from_file(&path).await.unwrap();
        assert_eq!(other.plan(), store.plan());
    }
}
