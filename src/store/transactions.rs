// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Category, Transaction, TxnKind};

use super::{format_amount, format_ts, parse_stored_decimal, parse_ts, Store};

/// Optional filters for listing transactions. Date bounds are inclusive and
/// compared against the local calendar date of `created_at`.
#[derive(Debug, Clone, Default)]
pub struct TxnFilter {
    pub account_id: Option<String>,
    pub category: Option<Category>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

type TxnRow = (String, String, String, String, String, String, String);

impl Store {
    /// Posts a transaction and adjusts the owning account's balance in the
    /// same database transaction: income adds the amount, expense subtracts
    /// it. An unknown account fails the whole operation before any mutation.
    ///
    /// Deleting a transaction later does NOT reverse the adjustment.
    pub fn create_transaction(
        &mut self,
        account_id: &str,
        kind: TxnKind,
        amount: Decimal,
        description: &str,
        category: Category,
    ) -> StoreResult<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::Invariant(format!(
                "transaction amount must be positive, got {}",
                amount
            )));
        }
        let id = Store::new_id();
        let created_at = self.next_created_at();

        let tx = self.conn.transaction()?;
        let balance_s: Option<String> = tx
            .query_row(
                "SELECT balance FROM accounts WHERE id=?1",
                params![account_id],
                |r| r.get(0),
            )
            .optional()?;
        let Some(balance_s) = balance_s else {
            return Err(StoreError::not_found("account", account_id));
        };
        let balance = parse_stored_decimal(&balance_s, "account balance")?;
        let delta = match kind {
            TxnKind::Income => amount,
            TxnKind::Expense => -amount,
        };
        tx.execute(
            "INSERT INTO transactions(id, account_id, kind, amount, description, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                account_id,
                kind.as_str(),
                format_amount(amount),
                description,
                category.as_str(),
                format_ts(created_at)
            ],
        )?;
        tx.execute(
            "UPDATE accounts SET balance=?1 WHERE id=?2",
            params![format_amount(balance + delta), account_id],
        )?;
        tx.commit()?;
        debug!(txn = %id, account = %account_id, kind = kind.as_str(), %amount, "transaction posted");

        Ok(Transaction {
            id,
            account_id: account_id.to_string(),
            kind,
            amount,
            description: description.to_string(),
            category,
            created_at,
        })
    }

    pub fn get_transaction(&self, id: &str) -> StoreResult<Transaction> {
        let row: Option<TxnRow> = self
            .conn
            .query_row(
                "SELECT id, account_id, kind, amount, description, category, created_at
                 FROM transactions WHERE id=?1",
                params![id],
                |r| {
                    Ok((
                        r.get(0)?,
                        r.get(1)?,
                        r.get(2)?,
                        r.get(3)?,
                        r.get(4)?,
                        r.get(5)?,
                        r.get(6)?,
                    ))
                },
            )
            .optional()?;
        match row {
            Some(raw) => txn_from_row(raw),
            None => Err(StoreError::not_found("transaction", id)),
        }
    }

    /// Transactions in descending `created_at` order, optionally filtered.
    pub fn list_transactions(&self, filter: &TxnFilter) -> StoreResult<Vec<Transaction>> {
        let mut sql = String::from(
            "SELECT id, account_id, kind, amount, description, category, created_at
             FROM transactions WHERE 1=1",
        );
        let mut params_vec: Vec<String> = Vec::new();
        if let Some(acct) = &filter.account_id {
            sql.push_str(" AND account_id=?");
            params_vec.push(acct.clone());
        }
        if let Some(cat) = filter.category {
            sql.push_str(" AND category=?");
            params_vec.push(cat.as_str().to_string());
        }
        if let Some(from) = filter.from {
            sql.push_str(" AND substr(created_at,1,10)>=?");
            params_vec.push(from.to_string());
        }
        if let Some(to) = filter.to {
            sql.push_str(" AND substr(created_at,1,10)<=?");
            params_vec.push(to.to_string());
        }
        sql.push_str(" ORDER BY created_at DESC, rowid DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        let rows = stmt.query_map(rusqlite::params_from_iter(params), |r| {
            Ok((
                r.get(0)?,
                r.get(1)?,
                r.get(2)?,
                r.get(3)?,
                r.get(4)?,
                r.get(5)?,
                r.get(6)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(txn_from_row(row?)?);
        }
        Ok(out)
    }

    /// Idempotent: deleting an absent id is a no-op. The owning account's
    /// balance keeps the adjustment made at creation time.
    pub fn delete_transaction(&mut self, id: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(())
    }
}

fn txn_from_row(
    (id, account_id, kind, amount, description, category, created_at): TxnRow,
) -> StoreResult<Transaction> {
    let kind = TxnKind::parse(&kind)
        .ok_or_else(|| StoreError::Invariant(format!("unknown transaction kind '{}'", kind)))?;
    let category = Category::parse(&category)
        .ok_or_else(|| StoreError::Invariant(format!("unknown category '{}'", category)))?;
    Ok(Transaction {
        amount: parse_stored_decimal(&amount, "transaction amount")?,
        created_at: parse_ts(&created_at)?,
        id,
        account_id,
        kind,
        description,
        category,
    })
}
