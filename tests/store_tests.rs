// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::error::StoreError;
use fintrack::models::{AccountKind, DebtDirection};
use fintrack::store::Store;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[test]
fn fresh_store_has_seed_accounts_and_nothing_else() {
    let store = Store::open_in_memory().unwrap();

    let accounts = store.list_accounts().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].name, "Main Account");
    assert_eq!(accounts[0].kind, AccountKind::Main);
    assert_eq!(accounts[0].balance, dec("2450.00"));
    assert_eq!(accounts[1].name, "Savings Account");
    assert_eq!(accounts[1].kind, AccountKind::Savings);
    assert_eq!(accounts[1].balance, dec("8750.00"));

    assert!(store
        .list_transactions(&Default::default())
        .unwrap()
        .is_empty());
    assert!(store.list_debts().unwrap().is_empty());
    assert!(store.list_reminders().unwrap().is_empty());
    assert!(store.list_chat_messages().unwrap().is_empty());
}

#[test]
fn accounts_list_in_insertion_order() {
    let mut store = Store::open_in_memory().unwrap();
    store
        .create_account("Cash", AccountKind::Other, dec("0.00"))
        .unwrap();
    store
        .create_account("Emergency", AccountKind::Savings, dec("10.00"))
        .unwrap();

    let names: Vec<String> = store
        .list_accounts()
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(
        names,
        vec!["Main Account", "Savings Account", "Cash", "Emergency"]
    );
}

#[test]
fn get_account_unknown_id_is_not_found() {
    let store = Store::open_in_memory().unwrap();
    let err = store.get_account("missing").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn ids_are_assigned_by_the_store_and_unique() {
    let mut store = Store::open_in_memory().unwrap();
    let a = store
        .create_debt("Asha", DebtDirection::Owe, dec("5.00"), "lunch")
        .unwrap();
    let b = store
        .create_debt("Asha", DebtDirection::Owe, dec("5.00"), "lunch")
        .unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn reopened_database_keeps_entities_and_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fintrack.sqlite");

    let debt_id = {
        let mut store = Store::open(&path).unwrap();
        store
            .create_debt("Ravi", DebtDirection::Owed, dec("120.00"), "concert ticket")
            .unwrap()
            .id
    };

    let store = Store::open(&path).unwrap();
    assert_eq!(store.list_accounts().unwrap().len(), 2);
    let debt = store.get_debt(&debt_id).unwrap();
    assert_eq!(debt.friend_name, "Ravi");
    assert_eq!(debt.amount, dec("120.00"));
}
