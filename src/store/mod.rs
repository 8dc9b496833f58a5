// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Authoritative keyed collections for the five entity kinds. The store is
//! an explicitly constructed handle passed by reference to all consumers;
//! every identifier and `created_at` is store-assigned.

use chrono::{Local, NaiveDateTime};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::path::Path;
use uuid::Uuid;

use crate::db;
use crate::error::{StoreError, StoreResult};
use crate::models::AccountKind;

pub mod accounts;
pub mod chat;
pub mod debts;
pub mod reminders;
pub mod transactions;

pub use debts::DebtUpdate;
pub use reminders::ReminderUpdate;
pub use transactions::TxnFilter;

const SEED_ACCOUNTS: &[(&str, AccountKind, &str)] = &[
    ("Main Account", AccountKind::Main, "2450.00"),
    ("Savings Account", AccountKind::Savings, "8750.00"),
];

pub(crate) const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub struct Store {
    conn: Connection,
    last_ts: NaiveDateTime,
}

impl Store {
    pub fn open(path: &Path) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        db::init_schema(&conn)?;
        let mut store = Self {
            conn,
            last_ts: NaiveDateTime::MIN,
        };
        store.seed_accounts()?;
        Ok(store)
    }

    /// Inserts the two default accounts the first time a database is opened.
    fn seed_accounts(&mut self) -> StoreResult<()> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))?;
        if count > 0 {
            return Ok(());
        }
        for (name, kind, balance) in SEED_ACCOUNTS {
            let opening = parse_stored_decimal(balance, "seed balance")?;
            self.create_account(name, *kind, opening)?;
        }
        Ok(())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Wall-clock creation time, clamped so it never decreases within this
    /// store handle. Ties are broken by insertion order when listing.
    pub(crate) fn next_created_at(&mut self) -> NaiveDateTime {
        let mut now = Local::now().naive_local();
        if now < self.last_ts {
            now = self.last_ts;
        }
        self.last_ts = now;
        now
    }
}

pub(crate) fn format_ts(ts: NaiveDateTime) -> String {
    ts.format(TS_FORMAT).to_string()
}

pub(crate) fn parse_ts(s: &str) -> StoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| StoreError::Invariant(format!("malformed timestamp '{}'", s)))
}

pub(crate) fn format_amount(d: Decimal) -> String {
    format!("{:.2}", d)
}

pub(crate) fn parse_stored_decimal(s: &str, what: &str) -> StoreResult<Decimal> {
    s.parse::<Decimal>()
        .map_err(|_| StoreError::Invariant(format!("malformed {} '{}'", what, s)))
}
