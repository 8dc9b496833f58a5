// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Reminder, ReminderStatus};

use super::{format_amount, format_ts, parse_stored_decimal, parse_ts, Store};

#[derive(Debug, Clone)]
pub enum ReminderUpdate {
    SetStatus(ReminderStatus),
    SetDueDate(NaiveDateTime),
    SetRecurring(bool),
}

type ReminderRow = (
    String,
    String,
    Option<String>,
    String,
    String,
    String,
    bool,
    String,
);

impl Store {
    pub fn create_reminder(
        &mut self,
        title: &str,
        description: Option<&str>,
        amount: Decimal,
        due_date: NaiveDateTime,
        recurring: bool,
    ) -> StoreResult<Reminder> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::Invariant(format!(
                "reminder amount must be positive, got {}",
                amount
            )));
        }
        let id = Store::new_id();
        let created_at = self.next_created_at();
        self.conn.execute(
            "INSERT INTO reminders(id, title, description, amount, due_date, status, recurring, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 'pending', ?6, ?7)",
            params![
                id,
                title,
                description,
                format_amount(amount),
                format_ts(due_date),
                recurring,
                format_ts(created_at)
            ],
        )?;
        debug!(reminder = %id, title, "reminder created");
        Ok(Reminder {
            id,
            title: title.to_string(),
            description: description.map(|s| s.to_string()),
            amount,
            due_date,
            status: ReminderStatus::Pending,
            recurring,
            created_at,
        })
    }

    pub fn get_reminder(&self, id: &str) -> StoreResult<Reminder> {
        let row: Option<ReminderRow> = self
            .conn
            .query_row(
                "SELECT id, title, description, amount, due_date, status, recurring, created_at
                 FROM reminders WHERE id=?1",
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
                        r.get(7)?,
                    ))
                },
            )
            .optional()?;
        match row {
            Some(raw) => reminder_from_row(raw),
            None => Err(StoreError::not_found("reminder", id)),
        }
    }

    /// Reminders in ascending `due_date` order.
    pub fn list_reminders(&self) -> StoreResult<Vec<Reminder>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, amount, due_date, status, recurring, created_at
             FROM reminders ORDER BY due_date ASC, rowid ASC",
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
                r.get(7)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(reminder_from_row(row?)?);
        }
        Ok(out)
    }

    pub fn update_reminder(&mut self, id: &str, update: ReminderUpdate) -> StoreResult<()> {
        let affected = match update {
            ReminderUpdate::SetStatus(status) => self.conn.execute(
                "UPDATE reminders SET status=?1 WHERE id=?2",
                params![status.as_str(), id],
            )?,
            ReminderUpdate::SetDueDate(due_date) => self.conn.execute(
                "UPDATE reminders SET due_date=?1 WHERE id=?2",
                params![format_ts(due_date), id],
            )?,
            ReminderUpdate::SetRecurring(recurring) => self.conn.execute(
                "UPDATE reminders SET recurring=?1 WHERE id=?2",
                params![recurring, id],
            )?,
        };
        if affected == 0 {
            return Err(StoreError::not_found("reminder", id));
        }
        Ok(())
    }

    /// Idempotent: deleting an absent id is a no-op.
    pub fn delete_reminder(&mut self, id: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM reminders WHERE id=?1", params![id])?;
        Ok(())
    }
}

fn reminder_from_row(
    (id, title, description, amount, due_date, status, recurring, created_at): ReminderRow,
) -> StoreResult<Reminder> {
    let status = ReminderStatus::parse(&status)
        .ok_or_else(|| StoreError::Invariant(format!("unknown reminder status '{}'", status)))?;
    Ok(Reminder {
        amount: parse_stored_decimal(&amount, "reminder amount")?,
        due_date: parse_ts(&due_date)?,
        created_at: parse_ts(&created_at)?,
        id,
        title,
        description,
        status,
        recurring,
    })
}
