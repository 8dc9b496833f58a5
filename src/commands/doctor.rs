// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{AccountKind, Category, DebtDirection, ReminderStatus, TxnKind};
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &Store) -> Result<()> {
    let conn = store.conn();
    let mut rows = Vec::new();

    // 1) Transactions pointing at accounts that no longer exist
    let mut stmt = conn.prepare(
        "SELECT t.id FROM transactions t LEFT JOIN accounts a ON t.account_id=a.id
         WHERE a.id IS NULL",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: String = r.get(0)?;
        rows.push(vec!["orphaned_transaction".into(), id]);
    }

    // 2) Stored decimals that no longer parse, and non-positive amounts
    let amount_columns: [(&str, &str, bool); 4] = [
        ("accounts", "balance", false),
        ("transactions", "amount", true),
        ("debts", "amount", true),
        ("reminders", "amount", true),
    ];
    for (table, column, must_be_positive) in amount_columns {
        let mut stmt = conn.prepare(&format!("SELECT id, {} FROM {}", column, table))?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let id: String = r.get(0)?;
            let raw: String = r.get(1)?;
            match raw.parse::<Decimal>() {
                Err(_) => rows.push(vec![
                    "bad_decimal".into(),
                    format!("{}.{} {} = '{}'", table, column, id, raw),
                ]),
                Ok(d) if must_be_positive && d <= Decimal::ZERO => rows.push(vec![
                    "nonpositive_amount".into(),
                    format!("{} {} = {}", table, id, raw),
                ]),
                Ok(_) => {}
            }
        }
    }

    // 3) Enumerated columns holding values this build does not know
    let enum_columns: [(&str, &str, fn(&str) -> bool); 5] = [
        ("accounts", "kind", |s| AccountKind::parse(s).is_some()),
        ("transactions", "kind", |s| TxnKind::parse(s).is_some()),
        ("transactions", "category", |s| Category::parse(s).is_some()),
        ("debts", "direction", |s| DebtDirection::parse(s).is_some()),
        ("reminders", "status", |s| ReminderStatus::parse(s).is_some()),
    ];
    for (table, column, known) in enum_columns {
        let mut stmt = conn.prepare(&format!("SELECT id, {} FROM {}", column, table))?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let id: String = r.get(0)?;
            let raw: String = r.get(1)?;
            if !known(&raw) {
                rows.push(vec![
                    "unknown_enum".into(),
                    format!("{}.{} {} = '{}'", table, column, id, raw),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
