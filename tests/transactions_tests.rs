// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Local};
use fintrack::cli;
use fintrack::commands::transactions;
use fintrack::error::StoreError;
use fintrack::models::{AccountKind, Category, TxnKind};
use fintrack::store::{Store, TxnFilter};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn setup() -> (Store, String) {
    let store = Store::open_in_memory().unwrap();
    let main_id = store.account_id_by_name("Main Account").unwrap();
    (store, main_id)
}

#[test]
fn income_adds_exactly_to_the_balance() {
    let mut store = Store::open_in_memory().unwrap();
    let acct = store
        .create_account("Wallet", AccountKind::Other, dec("100.00"))
        .unwrap();

    store
        .create_transaction(&acct.id, TxnKind::Income, dec("0.10"), "refund", Category::Other)
        .unwrap();

    let balance = store.get_account(&acct.id).unwrap().balance;
    assert_eq!(balance, dec("100.10"));
    assert_eq!(format!("{:.2}", balance), "100.10");
}

#[test]
fn expense_subtracts_exactly_from_the_balance() {
    let (mut store, main_id) = setup();
    store
        .create_transaction(&main_id, TxnKind::Expense, dec("50.00"), "groceries", Category::Food)
        .unwrap();
    assert_eq!(
        store.get_account(&main_id).unwrap().balance,
        dec("2400.00")
    );
}

#[test]
fn unknown_account_rejects_creation_without_side_effects() {
    let (mut store, _) = setup();
    let before: Vec<Decimal> = store
        .list_accounts()
        .unwrap()
        .into_iter()
        .map(|a| a.balance)
        .collect();

    let err = store
        .create_transaction("no-such-account", TxnKind::Income, dec("10.00"), "x", Category::Other)
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));

    let after: Vec<Decimal> = store
        .list_accounts()
        .unwrap()
        .into_iter()
        .map(|a| a.balance)
        .collect();
    assert_eq!(before, after);
    assert!(store
        .list_transactions(&TxnFilter::default())
        .unwrap()
        .is_empty());
}

#[test]
fn nonpositive_amount_is_rejected() {
    let (mut store, main_id) = setup();
    let err = store
        .create_transaction(&main_id, TxnKind::Expense, dec("0.00"), "x", Category::Other)
        .unwrap_err();
    assert!(matches!(err, StoreError::Invariant(_)));
}

#[test]
fn listing_is_newest_first() {
    let (mut store, main_id) = setup();
    let mut ids = Vec::new();
    for i in 1..=3 {
        ids.push(
            store
                .create_transaction(
                    &main_id,
                    TxnKind::Expense,
                    dec("1.00"),
                    &format!("item {}", i),
                    Category::Other,
                )
                .unwrap()
                .id,
        );
    }

    let listed = store.list_transactions(&TxnFilter::default()).unwrap();
    let listed_ids: Vec<String> = listed.iter().map(|t| t.id.clone()).collect();
    ids.reverse();
    assert_eq!(listed_ids, ids);
    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn filters_by_account_category_and_date_range() {
    let (mut store, main_id) = setup();
    let savings_id = store.account_id_by_name("Savings Account").unwrap();

    store
        .create_transaction(&main_id, TxnKind::Expense, dec("10.00"), "canteen", Category::Mess)
        .unwrap();
    store
        .create_transaction(&main_id, TxnKind::Expense, dec("20.00"), "bus pass", Category::Transport)
        .unwrap();
    store
        .create_transaction(&savings_id, TxnKind::Income, dec("500.00"), "stipend", Category::Other)
        .unwrap();

    let by_account = store
        .list_transactions(&TxnFilter {
            account_id: Some(savings_id.clone()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(by_account.len(), 1);
    assert_eq!(by_account[0].description, "stipend");

    let by_category = store
        .list_transactions(&TxnFilter {
            category: Some(Category::Mess),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].description, "canteen");

    let today = Local::now().date_naive();
    let whole_day = store
        .list_transactions(&TxnFilter {
            from: Some(today),
            to: Some(today),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(whole_day.len(), 3);

    let before_today = store
        .list_transactions(&TxnFilter {
            to: Some(today - Duration::days(1)),
            ..Default::default()
        })
        .unwrap();
    assert!(before_today.is_empty());
}

#[test]
fn delete_is_idempotent_and_does_not_restore_the_balance() {
    let (mut store, main_id) = setup();
    let txn = store
        .create_transaction(&main_id, TxnKind::Expense, dec("50.00"), "books", Category::Study)
        .unwrap();
    assert_eq!(store.get_account(&main_id).unwrap().balance, dec("2400.00"));

    store.delete_transaction(&txn.id).unwrap();
    assert!(matches!(
        store.get_transaction(&txn.id).unwrap_err(),
        StoreError::NotFound { .. }
    ));
    // the posted delta stays applied
    assert_eq!(store.get_account(&main_id).unwrap().balance, dec("2400.00"));

    // second delete of the same id is a no-op
    store.delete_transaction(&txn.id).unwrap();
}

#[test]
fn cli_add_posts_against_the_named_account() {
    let (mut store, main_id) = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "fintrack",
        "tx",
        "add",
        "--account",
        "Main Account",
        "--type",
        "expense",
        "--amount",
        "50.00",
        "--description",
        "mess bill",
        "--category",
        "mess",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(&mut store, tx_m).unwrap();
    } else {
        panic!("tx command not parsed");
    }

    assert_eq!(store.get_account(&main_id).unwrap().balance, dec("2400.00"));
    let listed = store.list_transactions(&TxnFilter::default()).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category, Category::Mess);
}
