// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Debt, DebtDirection};

use super::{format_amount, format_ts, parse_stored_decimal, parse_ts, Store};

/// One mutable field per variant, so a partial update can never merge an
/// illegal combination of fields.
#[derive(Debug, Clone)]
pub enum DebtUpdate {
    SetFriendName(String),
    SetDirection(DebtDirection),
    SetAmount(Decimal),
    SetDescription(String),
    SetSettled(bool),
}

type DebtRow = (String, String, String, String, String, bool, String);

impl Store {
    pub fn create_debt(
        &mut self,
        friend_name: &str,
        direction: DebtDirection,
        amount: Decimal,
        description: &str,
    ) -> StoreResult<Debt> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::Invariant(format!(
                "debt amount must be positive, got {}",
                amount
            )));
        }
        let id = Store::new_id();
        let created_at = self.next_created_at();
        self.conn.execute(
            "INSERT INTO debts(id, friend_name, direction, amount, description, settled, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)",
            params![
                id,
                friend_name,
                direction.as_str(),
                format_amount(amount),
                description,
                format_ts(created_at)
            ],
        )?;
        debug!(debt = %id, friend = friend_name, "debt recorded");
        Ok(Debt {
            id,
            friend_name: friend_name.to_string(),
            direction,
            amount,
            description: description.to_string(),
            settled: false,
            created_at,
        })
    }

    pub fn get_debt(&self, id: &str) -> StoreResult<Debt> {
        let row: Option<DebtRow> = self
            .conn
            .query_row(
                "SELECT id, friend_name, direction, amount, description, settled, created_at
                 FROM debts WHERE id=?1",
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
            Some(raw) => debt_from_row(raw),
            None => Err(StoreError::not_found("debt", id)),
        }
    }

    /// Debts in descending `created_at` order, settled ones included.
    pub fn list_debts(&self) -> StoreResult<Vec<Debt>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, friend_name, direction, amount, description, settled, created_at
             FROM debts ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt.query_map([], |r| {
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
            out.push(debt_from_row(row?)?);
        }
        Ok(out)
    }

    pub fn update_debt(&mut self, id: &str, update: DebtUpdate) -> StoreResult<()> {
        let affected = match update {
            DebtUpdate::SetFriendName(name) => self.conn.execute(
                "UPDATE debts SET friend_name=?1 WHERE id=?2",
                params![name, id],
            )?,
            DebtUpdate::SetDirection(direction) => self.conn.execute(
                "UPDATE debts SET direction=?1 WHERE id=?2",
                params![direction.as_str(), id],
            )?,
            DebtUpdate::SetAmount(amount) => {
                if amount <= Decimal::ZERO {
                    return Err(StoreError::Invariant(format!(
                        "debt amount must be positive, got {}",
                        amount
                    )));
                }
                self.conn.execute(
                    "UPDATE debts SET amount=?1 WHERE id=?2",
                    params![format_amount(amount), id],
                )?
            }
            DebtUpdate::SetDescription(description) => self.conn.execute(
                "UPDATE debts SET description=?1 WHERE id=?2",
                params![description, id],
            )?,
            DebtUpdate::SetSettled(settled) => self.conn.execute(
                "UPDATE debts SET settled=?1 WHERE id=?2",
                params![settled, id],
            )?,
        };
        if affected == 0 {
            return Err(StoreError::not_found("debt", id));
        }
        Ok(())
    }

    /// Idempotent: deleting an absent id is a no-op.
    pub fn delete_debt(&mut self, id: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM debts WHERE id=?1", params![id])?;
        Ok(())
    }
}

fn debt_from_row(
    (id, friend_name, direction, amount, description, settled, created_at): DebtRow,
) -> StoreResult<Debt> {
    let direction = DebtDirection::parse(&direction)
        .ok_or_else(|| StoreError::Invariant(format!("unknown debt direction '{}'", direction)))?;
    Ok(Debt {
        amount: parse_stored_decimal(&amount, "debt amount")?,
        created_at: parse_ts(&created_at)?,
        id,
        friend_name,
        direction,
        description,
        settled,
    })
}
