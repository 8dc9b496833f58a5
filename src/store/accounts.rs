// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Account, AccountKind};

use super::{format_amount, format_ts, parse_stored_decimal, parse_ts, Store};

type AccountRow = (String, String, String, String, String);

impl Store {
    /// Creates an account with an opening balance. The balance is only ever
    /// changed afterwards by posting transactions against the account.
    pub fn create_account(
        &mut self,
        name: &str,
        kind: AccountKind,
        opening_balance: Decimal,
    ) -> StoreResult<Account> {
        let id = Store::new_id();
        let created_at = self.next_created_at();
        self.conn.execute(
            "INSERT INTO accounts(id, name, kind, balance, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                name,
                kind.as_str(),
                format_amount(opening_balance),
                format_ts(created_at)
            ],
        )?;
        debug!(account = %id, name, "account created");
        Ok(Account {
            id,
            name: name.to_string(),
            kind,
            balance: opening_balance,
            created_at,
        })
    }

    pub fn get_account(&self, id: &str) -> StoreResult<Account> {
        let row: Option<AccountRow> = self
            .conn
            .query_row(
                "SELECT id, name, kind, balance, created_at FROM accounts WHERE id=?1",
                params![id],
                |r| {
                    Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?))
                },
            )
            .optional()?;
        match row {
            Some(raw) => account_from_row(raw),
            None => Err(StoreError::not_found("account", id)),
        }
    }

    pub fn account_id_by_name(&self, name: &str) -> StoreResult<String> {
        let id: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM accounts WHERE name=?1",
                params![name],
                |r| r.get(0),
            )
            .optional()?;
        id.ok_or_else(|| StoreError::not_found("account", name))
    }

    /// Accounts in insertion order.
    pub fn list_accounts(&self) -> StoreResult<Vec<Account>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, kind, balance, created_at FROM accounts ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?))
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(account_from_row(row?)?);
        }
        Ok(out)
    }
}

fn account_from_row((id, name, kind, balance, created_at): AccountRow) -> StoreResult<Account> {
    let kind = AccountKind::parse(&kind)
        .ok_or_else(|| StoreError::Invariant(format!("unknown account kind '{}'", kind)))?;
    Ok(Account {
        balance: parse_stored_decimal(&balance, "account balance")?,
        created_at: parse_ts(&created_at)?,
        id,
        name,
        kind,
    })
}
