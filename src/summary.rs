// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the current store state. Nothing here is cached:
//! every call recomputes from a fresh read, so the result is exactly as
//! stale as the store itself.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::StoreResult;
use crate::models::{Debt, DebtDirection, Reminder, ReminderStatus, Transaction, TxnKind};
use crate::store::{Store, TxnFilter};

/// How many reminders, transactions and debts the single-call bundle keeps.
const BUNDLE_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct NetDebt {
    pub total_owed: Decimal,
    pub total_owed_to_user: Decimal,
}

/// Everything a dashboard (or the assistant) needs in one read.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryBundle {
    pub total_balance: Decimal,
    pub monthly_spent: Decimal,
    pub category_spending: BTreeMap<String, Decimal>,
    pub net_debt: NetDebt,
    pub upcoming_reminders: Vec<Reminder>,
    pub recent_transactions: Vec<Transaction>,
    pub active_debts: Vec<Debt>,
}

/// Sum of all account balances.
pub fn total_balance(store: &Store) -> StoreResult<Decimal> {
    let mut total = Decimal::ZERO;
    for account in store.list_accounts()? {
        total += account.balance;
    }
    Ok(total)
}

/// Expense total for the calendar month/year of `reference` (local time).
pub fn monthly_spent(store: &Store, reference: NaiveDate) -> StoreResult<Decimal> {
    let mut total = Decimal::ZERO;
    for txn in store.list_transactions(&TxnFilter::default())? {
        if txn.kind == TxnKind::Expense && same_month(txn.created_at, reference) {
            total += txn.amount;
        }
    }
    Ok(total)
}

/// Expense totals for the month of `reference`, grouped by category.
pub fn category_spending(
    store: &Store,
    reference: NaiveDate,
) -> StoreResult<BTreeMap<String, Decimal>> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for txn in store.list_transactions(&TxnFilter::default())? {
        if txn.kind == TxnKind::Expense && same_month(txn.created_at, reference) {
            *agg.entry(txn.category.as_str().to_string())
                .or_insert(Decimal::ZERO) += txn.amount;
        }
    }
    Ok(agg)
}

/// Sums of unsettled debts, split by direction.
pub fn net_debt(store: &Store) -> StoreResult<NetDebt> {
    let mut total_owed = Decimal::ZERO;
    let mut total_owed_to_user = Decimal::ZERO;
    for debt in store.list_debts()? {
        if debt.settled {
            continue;
        }
        match debt.direction {
            DebtDirection::Owe => total_owed += debt.amount,
            DebtDirection::Owed => total_owed_to_user += debt.amount,
        }
    }
    Ok(NetDebt {
        total_owed,
        total_owed_to_user,
    })
}

/// Pending reminders due strictly after `reference`, soonest first.
pub fn upcoming_reminders(
    store: &Store,
    limit: usize,
    reference: NaiveDateTime,
) -> StoreResult<Vec<Reminder>> {
    Ok(store
        .list_reminders()?
        .into_iter()
        .filter(|r| r.status == ReminderStatus::Pending && r.due_date > reference)
        .take(limit)
        .collect())
}

/// Most recent transactions across all accounts.
pub fn recent_transactions(store: &Store, limit: usize) -> StoreResult<Vec<Transaction>> {
    Ok(store
        .list_transactions(&TxnFilter::default())?
        .into_iter()
        .take(limit)
        .collect())
}

/// Unsettled debts, newest first.
pub fn active_debts(store: &Store, limit: usize) -> StoreResult<Vec<Debt>> {
    Ok(store
        .list_debts()?
        .into_iter()
        .filter(|d| !d.settled)
        .take(limit)
        .collect())
}

/// The full aggregate read used by the summary screen and as the
/// assistant's context snapshot.
pub fn bundle(store: &Store, reference: NaiveDateTime) -> StoreResult<SummaryBundle> {
    Ok(SummaryBundle {
        total_balance: total_balance(store)?,
        monthly_spent: monthly_spent(store, reference.date())?,
        category_spending: category_spending(store, reference.date())?,
        net_debt: net_debt(store)?,
        upcoming_reminders: upcoming_reminders(store, BUNDLE_LIMIT, reference)?,
        recent_transactions: recent_transactions(store, BUNDLE_LIMIT)?,
        active_debts: active_debts(store, BUNDLE_LIMIT)?,
    })
}

fn same_month(ts: NaiveDateTime, reference: NaiveDate) -> bool {
    ts.year() == reference.year() && ts.month() == reference.month()
}
