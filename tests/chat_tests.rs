// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use fintrack::assistant::{self, Assistant};
use fintrack::models::{Category, TxnKind};
use fintrack::store::Store;
use fintrack::summary::SummaryBundle;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

/// Echoes the balance it was shown, so tests can verify the context
/// snapshot the assistant received.
struct Canned;

impl Assistant for Canned {
    fn reply(&self, context: &SummaryBundle, user_text: &str) -> Result<String> {
        Ok(format!(
            "balance {:.2}; you asked: {}",
            context.total_balance, user_text
        ))
    }
}

struct Failing;

impl Assistant for Failing {
    fn reply(&self, _context: &SummaryBundle, _user_text: &str) -> Result<String> {
        anyhow::bail!("backend unreachable")
    }
}

#[test]
fn converse_persists_both_sides_in_order() {
    let mut store = Store::open_in_memory().unwrap();
    let (user, reply) = assistant::converse(&mut store, &Canned, "how am I doing?").unwrap();

    assert!(user.is_user);
    assert!(!reply.is_user);
    assert_eq!(reply.content, "balance 11200.00; you asked: how am I doing?");

    let history = store.list_chat_messages().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, user.id);
    assert_eq!(history[1].id, reply.id);
    assert!(history[0].created_at <= history[1].created_at);
}

#[test]
fn context_reflects_store_mutations() {
    let mut store = Store::open_in_memory().unwrap();
    let main_id = store.account_id_by_name("Main Account").unwrap();
    store
        .create_transaction(&main_id, TxnKind::Expense, dec("200.00"), "festival", Category::Entertainment)
        .unwrap();

    let (_, reply) = assistant::converse(&mut store, &Canned, "and now?").unwrap();
    assert!(reply.content.starts_with("balance 11000.00"));
}

#[test]
fn failed_assistant_call_keeps_the_user_message_only() {
    let mut store = Store::open_in_memory().unwrap();
    let err = assistant::converse(&mut store, &Failing, "hello?");
    assert!(err.is_err());

    let history = store.list_chat_messages().unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_user);
    assert_eq!(history[0].content, "hello?");
}

#[test]
fn clear_empties_the_history() {
    let mut store = Store::open_in_memory().unwrap();
    assistant::converse(&mut store, &Canned, "one").unwrap();
    assistant::converse(&mut store, &Canned, "two").unwrap();
    assert_eq!(store.list_chat_messages().unwrap().len(), 4);

    store.clear_chat().unwrap();
    assert!(store.list_chat_messages().unwrap().is_empty());
}
