//! Budget, category, and expense operations
//!
//! A category's stored `spent` figure and the sum of its expenses are
//! separate records; nothing reconciles them. The derived view lives in
//! [`PlanStore::category_breakdown`].

use crate::error::{PlanError, Result};
use crate::plan::{next_id, BudgetCategory, Expense, WeddingPlan};

use super::{require, today, PlanStore};

/// Input for [`PlanStore::add_expense`].
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub item: String,
    pub category: String,
    pub amount: f64,
    pub payment_type: String,
    pub vendor: String,
}

/// Per-category spend derived from the expense ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub name: String,
    pub allocated: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
}

impl PlanStore {
    /// Record an expense, dated today and unpaid until marked otherwise.
    pub async fn add_expense(&mut self, new: NewExpense) -> Result<i64> {
        require("expense item", &new.item)?;
        if new.amount <= 0.0 {
            return Err(PlanError::Validation(
                "expense amount must be positive".into(),
            ));
        }

        let mut next = self.plan.clone();
        let id = next_id(next.budget.expenses.iter().map(|e| e.id));
        next.budget.expenses.push(Expense {
            id,
            item: new.item,
            category: new.category,
            amount: new.amount,
            payment_type: new.payment_type,
            date: today(),
            vendor: new.vendor,
            paid: false,
        });
        self.replace(next).await;

        tracing::debug!("Added expense {}", id);
        Ok(id)
    }

    /// Replace an expense record wholesale, matched by id.
    pub async fn update_expense(&mut self, expense: Expense) -> Result<()> {
        require("expense item", &expense.item)?;
        if expense.amount <= 0.0 {
            return Err(PlanError::Validation(
                "expense amount must be positive".into(),
            ));
        }

        let mut next = self.plan.clone();
        let id = expense.id;
        *expense_mut(&mut next, id)? = expense;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_expense(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        expense_mut(&mut next, id)?;
        next.budget.expenses.retain(|e| e.id != id);
        self.replace(next).await;
        Ok(())
    }

    pub async fn set_expense_paid(&mut self, id: i64, paid: bool) -> Result<()> {
        let mut next = self.plan.clone();
        expense_mut(&mut next, id)?.paid = paid;
        self.replace(next).await;
        Ok(())
    }

    /// Add a budget category. Names are unique; spend starts at zero.
    pub async fn add_category(&mut self, name: String, allocated: f64) -> Result<()> {
        require("category name", &name)?;

        let mut next = self.plan.clone();
        if next.budget.categories.iter().any(|c| c.name == name) {
            return Err(PlanError::DuplicateCategory(name));
        }
        next.budget.categories.push(BudgetCategory {
            name,
            allocated,
            spent: 0.0,
        });
        self.replace(next).await;
        Ok(())
    }

    pub async fn set_category_allocation(&mut self, name: &str, allocated: f64) -> Result<()> {
        let mut next = self.plan.clone();
        let category = next
            .budget
            .categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| PlanError::UnknownCategory(name.to_string()))?;
        category.allocated = allocated;
        self.replace(next).await;
        Ok(())
    }

    pub async fn set_budget_total(&mut self, total: f64) {
        let mut next = self.plan.clone();
        next.budget.total = total;
        self.replace(next).await;
    }

    /// Per-category totals derived from the expense ledger. The stored
    /// `spent` fields are not consulted and not rewritten.
    pub fn category_breakdown(&self) -> Vec<CategoryBreakdown> {
        self.plan
            .budget
            .categories
            .iter()
            .map(|category| {
                let spent: f64 = self
                    .plan
                    .budget
                    .expenses
                    .iter()
                    .filter(|e| e.category == category.name)
                    .map(|e| e.amount)
                    .sum();
                let percent_used = if category.allocated > 0.0 {
                    spent / category.allocated * 100.0
                } else {
                    0.0
                };
                CategoryBreakdown {
                    name: category.name.clone(),
                    allocated: category.allocated,
                    spent,
                    remaining: category.allocated - spent,
                    percent_used,
                }
            })
            .collect()
    }
}

fn expense_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Expense> {
    plan.budget
        .expenses
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(PlanError::NotFound {
            collection: "expenses",
            id,
        })
}
