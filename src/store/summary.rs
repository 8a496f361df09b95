//! Dashboard summary

use chrono::{NaiveDate, Utc};

use crate::config;
use crate::plan::Rsvp;

use super::PlanStore;

/// Headline numbers for the dashboard, derived on demand and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub total_guests: usize,
    pub confirmed_guests: usize,
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub upcoming_events: usize,
    pub pending_tasks: usize,
    pub staff_count: usize,
}

impl PlanStore {
    /// Compute the dashboard numbers from the current document.
    ///
    /// Spend sums every expense regardless of its category. An event whose
    /// date does not parse is not counted as upcoming.
    pub fn summary(&self) -> PlanSummary {
        let plan = &self.plan;
        let today = Utc::now().date_naive();

        let total_spent: f64 = plan.budget.expenses.iter().map(|e| e.amount).sum();
        let upcoming_events = plan
            .events
            .iter()
            .filter(|e| {
                NaiveDate::parse_from_str(&e.date, config::DATE_FORMAT)
                    .map(|date| date >= today)
                    .unwrap_or(false)
            })
            .count();

        PlanSummary {
            total_guests: plan.guests.len(),
            confirmed_guests: plan
                .guests
                .iter()
                .filter(|g| g.rsvp == Rsvp::Confirmed)
                .count(),
            total_budget: plan.budget.total,
            total_spent,
            remaining: plan.budget.total - total_spent,
            upcoming_events,
            pending_tasks: plan.tasks.iter().filter(|t| !t.done).count(),
            staff_count: plan.staff.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{test_store, Collection, NewEvent, NewExpense};
    use chrono::Duration;

    #[tokio::test]
    async fn test_summary_counts_the_starter_plan() {
        let store = test_store().await;
        let summary = store.summary();

        assert_eq!(summary.total_guests, 4);
        assert_eq!(summary.confirmed_guests, 3);
        assert_eq!(summary.total_budget, 2_000_000.0);
        assert_eq!(summary.total_spent, 900_000.0);
        assert_eq!(summary.remaining, 1_100_000.0);
        assert_eq!(summary.pending_tasks, 4);
        assert_eq!(summary.staff_count, 3);
    }

    #[tokio::test]
    async fn test_total_spent_sums_expenses_regardless_of_category() {
        let mut store = test_store().await;

        store
            .add_expense(NewExpense {
                item: "Fireworks".into(),
                category: "No Such Category".into(),
                amount: 40_000.0,
                ..Default::default()
            })
            .await
            .unwrap();

        let summary = store.summary();
        assert_eq!(summary.total_spent, 940_000.0);
        assert_eq!(summary.remaining, 1_060_000.0);
    }

    #[tokio::test]
    async fn test_upcoming_events_are_date_aware() {
        let mut store = test_store().await;
        store.reset_collection(Collection::Events).await;

        let today = Utc::now().date_naive();
        let date = |d: NaiveDate| d.format(config::DATE_FORMAT).to_string();

        store
            .add_event(NewEvent {
                name: "Roka".into(),
                date: date(today - Duration::days(30)),
                ..Default::default()
            })
            .await
            .unwrap();
        store
            .add_event(NewEvent {
                name: "Engagement".into(),
                date: date(today),
                ..Default::default()
            })
            .await
            .unwrap();
        store
            .add_event(NewEvent {
                name: "Sagan".into(),
                date: date(today + Duration::days(10)),
                ..Default::default()
            })
            .await
            .unwrap();
        store
            .add_event(NewEvent {
                name: "Afterparty".into(),
                date: "sometime soon".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        // Today and +10 days count; the past and the unparseable do not.
        assert_eq!(store.summary().upcoming_events, 2);
    }

    #[tokio::test]
    async fn test_pending_tasks_track_completion() {
        let mut store = test_store().await;

        store.set_task_done(1, true).await.unwrap();
        store.set_task_done(2, true).await.unwrap();

        assert_eq!(store.summary().pending_tasks, 2);
    }
}
