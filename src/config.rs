//! Application configuration constants
//!
//! Central location for configuration constants, storage keys, and the
//! defaulted form values shared by the store operations.

// ===== Persistence =====

/// Key under which the whole plan document is persisted.
/// Kept identical to the original web planner so its saved data imports as-is.
pub const PLAN_STORAGE_KEY: &str = "wedding_planner_data";

/// Filename of the durable key/value database.
pub const KV_DB_FILE: &str = "shaadi.db";

/// How long SQLite waits on a locked database before giving up.
pub const KV_BUSY_TIMEOUT_SECS: u64 = 5;

// ===== Export =====

/// Prefix for exported snapshot files (`wedding-plan-YYYY-MM-DD.json`).
pub const EXPORT_FILE_PREFIX: &str = "wedding-plan";

/// Date format embedded in export filenames and stamped on new records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ===== Validation boundaries =====

/// Highest vendor rating (star scale 0-5).
pub const MAX_VENDOR_RATING: u8 = 5;

// ===== Defaulted form values =====
// Values the planner fills in when an add-form leaves a field blank.

/// Start time assumed for events created without one.
pub const DEFAULT_EVENT_TIME: &str = "12:00";
/// Placeholder venue for events created before a venue is chosen.
pub const DEFAULT_EVENT_VENUE: &str = "TBD";
/// Theme assumed for events created without one.
pub const DEFAULT_EVENT_THEME: &str = "Traditional";
/// Dress code stamped on every newly created event.
pub const DEFAULT_EVENT_DRESS_CODE: &str = "Formal";
/// Caterer stamped on menu entries created through the add-item flow.
pub const DEFAULT_MENU_CATERER: &str = "Caterer";
