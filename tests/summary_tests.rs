// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Local};
use fintrack::models::{Category, DebtDirection, TxnKind};
use fintrack::store::{DebtUpdate, Store};
use fintrack::summary;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[test]
fn total_balance_matches_the_account_list_after_every_step() {
    let mut store = Store::open_in_memory().unwrap();
    let main_id = store.account_id_by_name("Main Account").unwrap();

    let expect = |store: &Store| {
        let summed: Decimal = store
            .list_accounts()
            .unwrap()
            .into_iter()
            .map(|a| a.balance)
            .sum();
        assert_eq!(summary::total_balance(store).unwrap(), summed);
    };

    expect(&store);
    assert_eq!(summary::total_balance(&store).unwrap(), dec("11200.00"));

    store
        .create_transaction(&main_id, TxnKind::Income, dec("300.00"), "stipend", Category::Other)
        .unwrap();
    expect(&store);

    let txn = store
        .create_transaction(&main_id, TxnKind::Expense, dec("75.50"), "shoes", Category::Other)
        .unwrap();
    expect(&store);

    store.delete_transaction(&txn.id).unwrap();
    expect(&store);
    // the delete leaves the posted delta in place
    assert_eq!(summary::total_balance(&store).unwrap(), dec("11424.50"));
}

#[test]
fn seed_plus_food_expense_scenario() {
    let mut store = Store::open_in_memory().unwrap();
    let main_id = store.account_id_by_name("Main Account").unwrap();
    store
        .create_transaction(&main_id, TxnKind::Expense, dec("50.00"), "dinner", Category::Food)
        .unwrap();

    let today = Local::now().date_naive();
    assert_eq!(store.get_account(&main_id).unwrap().balance, dec("2400.00"));
    assert_eq!(summary::monthly_spent(&store, today).unwrap(), dec("50.00"));
    let by_category = summary::category_spending(&store, today).unwrap();
    assert_eq!(by_category.get("food"), Some(&dec("50.00")));
}

#[test]
fn monthly_spend_ignores_income_and_other_months() {
    let mut store = Store::open_in_memory().unwrap();
    let main_id = store.account_id_by_name("Main Account").unwrap();
    store
        .create_transaction(&main_id, TxnKind::Income, dec("900.00"), "stipend", Category::Other)
        .unwrap();
    store
        .create_transaction(&main_id, TxnKind::Expense, dec("40.00"), "metro card", Category::Transport)
        .unwrap();

    let today = Local::now().date_naive();
    assert_eq!(summary::monthly_spent(&store, today).unwrap(), dec("40.00"));

    // a reference in a different month sees none of it
    let far_away = today - Duration::days(400);
    assert_eq!(summary::monthly_spent(&store, far_away).unwrap(), dec("0.00"));
    assert!(summary::category_spending(&store, far_away)
        .unwrap()
        .is_empty());
}

#[test]
fn net_debt_drops_debts_once_settled() {
    let mut store = Store::open_in_memory().unwrap();
    let owed = store
        .create_debt("Meera", DebtDirection::Owed, dec("80.00"), "movie tickets")
        .unwrap();
    store
        .create_debt("Arjun", DebtDirection::Owe, dec("35.00"), "shared cab")
        .unwrap();

    let net = summary::net_debt(&store).unwrap();
    assert_eq!(net.total_owed, dec("35.00"));
    assert_eq!(net.total_owed_to_user, dec("80.00"));

    store
        .update_debt(&owed.id, DebtUpdate::SetSettled(true))
        .unwrap();
    let net = summary::net_debt(&store).unwrap();
    assert_eq!(net.total_owed, dec("35.00"));
    assert_eq!(net.total_owed_to_user, dec("0.00"));
}

#[test]
fn upcoming_reminders_are_pending_future_and_soonest_first() {
    let mut store = Store::open_in_memory().unwrap();
    let now = Local::now().naive_local();

    store
        .create_reminder("rent", None, dec("850.00"), now + Duration::days(3), true)
        .unwrap();
    store
        .create_reminder("phone bill", None, dec("20.00"), now + Duration::days(1), false)
        .unwrap();
    store
        .create_reminder("library fine", None, dec("2.50"), now - Duration::days(1), false)
        .unwrap();
    let paid = store
        .create_reminder("gym", None, dec("30.00"), now + Duration::days(2), false)
        .unwrap();
    store
        .update_reminder(
            &paid.id,
            fintrack::store::ReminderUpdate::SetStatus(fintrack::models::ReminderStatus::Paid),
        )
        .unwrap();

    let upcoming = summary::upcoming_reminders(&store, 10, now).unwrap();
    let titles: Vec<&str> = upcoming.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["phone bill", "rent"]);

    let only_one = summary::upcoming_reminders(&store, 1, now).unwrap();
    assert_eq!(only_one.len(), 1);
    assert_eq!(only_one[0].title, "phone bill");
}

#[test]
fn recent_transactions_and_active_debts_respect_limits() {
    let mut store = Store::open_in_memory().unwrap();
    let main_id = store.account_id_by_name("Main Account").unwrap();
    for i in 1..=4 {
        store
            .create_transaction(
                &main_id,
                TxnKind::Expense,
                dec("1.00"),
                &format!("snack {}", i),
                Category::Food,
            )
            .unwrap();
    }
    let recent = summary::recent_transactions(&store, 2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].description, "snack 4");
    assert_eq!(recent[1].description, "snack 3");

    let settled = store
        .create_debt("Sam", DebtDirection::Owe, dec("10.00"), "coffee")
        .unwrap();
    store
        .update_debt(&settled.id, DebtUpdate::SetSettled(true))
        .unwrap();
    store
        .create_debt("Lena", DebtDirection::Owed, dec("15.00"), "printout money")
        .unwrap();

    let active = summary::active_debts(&store, 5).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].friend_name, "Lena");
}

#[test]
fn bundle_reflects_the_store_at_the_instant_of_the_call() {
    let mut store = Store::open_in_memory().unwrap();
    let main_id = store.account_id_by_name("Main Account").unwrap();
    store
        .create_transaction(&main_id, TxnKind::Expense, dec("25.00"), "lab manual", Category::Study)
        .unwrap();
    store
        .create_debt("Nina", DebtDirection::Owe, dec("12.00"), "lunch")
        .unwrap();

    let bundle = summary::bundle(&store, Local::now().naive_local()).unwrap();
    assert_eq!(bundle.total_balance, dec("11175.00"));
    assert_eq!(bundle.monthly_spent, dec("25.00"));
    assert_eq!(bundle.category_spending.get("study"), Some(&dec("25.00")));
    assert_eq!(bundle.net_debt.total_owed, dec("12.00"));
    assert_eq!(bundle.recent_transactions.len(), 1);
    assert_eq!(bundle.active_debts.len(), 1);
    assert!(bundle.upcoming_reminders.is_empty());
}
