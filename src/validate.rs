// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Payload validation at the boundary. The store itself does not re-check
//! field shapes; callers run these before handing payloads over.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{StoreError, StoreResult};
use crate::models::{AccountKind, Category, DebtDirection, TxnKind};

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").unwrap());

pub fn require(field: &'static str, value: &str) -> StoreResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(StoreError::Validation(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(v.to_string())
}

/// Amounts are positive decimal magnitudes with at most 2 decimal places;
/// direction is carried by the kind enum, never by a sign.
pub fn amount(field: &'static str, raw: &str) -> StoreResult<Decimal> {
    let raw = raw.trim();
    if !AMOUNT_RE.is_match(raw) {
        return Err(StoreError::Validation(format!(
            "'{}' must be a positive amount with at most 2 decimal places, got '{}'",
            field, raw
        )));
    }
    let d: Decimal = raw
        .parse()
        .map_err(|_| StoreError::Validation(format!("invalid amount '{}'", raw)))?;
    if d <= Decimal::ZERO {
        return Err(StoreError::Validation(format!(
            "'{}' must be greater than zero",
            field
        )));
    }
    Ok(d)
}

/// Opening balances may be zero, unlike transaction/debt/reminder amounts.
pub fn opening_balance(raw: &str) -> StoreResult<Decimal> {
    let raw = raw.trim();
    if !AMOUNT_RE.is_match(raw) {
        return Err(StoreError::Validation(format!(
            "'balance' must be a non-negative amount with at most 2 decimal places, got '{}'",
            raw
        )));
    }
    raw.parse()
        .map_err(|_| StoreError::Validation(format!("invalid balance '{}'", raw)))
}

pub fn account_kind(raw: &str) -> StoreResult<AccountKind> {
    AccountKind::parse(raw.trim()).ok_or_else(|| {
        StoreError::Validation(format!(
            "'type' must be one of main, savings, other; got '{}'",
            raw
        ))
    })
}

pub fn txn_kind(raw: &str) -> StoreResult<TxnKind> {
    TxnKind::parse(raw.trim()).ok_or_else(|| {
        StoreError::Validation(format!(
            "'type' must be one of expense, income; got '{}'",
            raw
        ))
    })
}

pub fn category(raw: &str) -> StoreResult<Category> {
    Category::parse(raw.trim()).ok_or_else(|| {
        StoreError::Validation(format!(
            "'category' must be one of food, transport, entertainment, study, mess, other; got '{}'",
            raw
        ))
    })
}

pub fn debt_direction(raw: &str) -> StoreResult<DebtDirection> {
    DebtDirection::parse(raw.trim()).ok_or_else(|| {
        StoreError::Validation(format!("'type' must be one of owe, owed; got '{}'", raw))
    })
}
