// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::Result;

use crate::store::{Store, TxnFilter};
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use crate::validate;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.delete_transaction(id)?;
            println!("Removed transaction {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let account_name = sub.get_one::<String>("account").unwrap();
    let kind = validate::txn_kind(sub.get_one::<String>("type").unwrap())?;
    let amount = validate::amount("amount", sub.get_one::<String>("amount").unwrap())?;
    let description =
        validate::require("description", sub.get_one::<String>("description").unwrap())?;
    let category = validate::category(sub.get_one::<String>("category").unwrap())?;

    let account_id = store.account_id_by_name(account_name)?;
    let txn = store.create_transaction(&account_id, kind, amount, &description, category)?;
    let account = store.get_account(&account_id)?;
    println!(
        "Recorded {} {:.2} '{}' (acct: {}, balance: {:.2})",
        txn.kind.as_str(),
        txn.amount,
        txn.description,
        account.name,
        account.balance
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut filter = TxnFilter::default();
    if let Some(acct) = sub.get_one::<String>("account") {
        filter.account_id = Some(store.account_id_by_name(acct)?);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        filter.category = Some(validate::category(cat)?);
    }
    if let Some(from) = sub.get_one::<String>("from") {
        filter.from = Some(parse_date(from)?);
    }
    if let Some(to) = sub.get_one::<String>("to") {
        filter.to = Some(parse_date(to)?);
    }

    let mut txns = store.list_transactions(&filter)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txns.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &txns)? {
        let names: HashMap<String, String> = store
            .list_accounts()?
            .into_iter()
            .map(|a| (a.id, a.name))
            .collect();
        let rows: Vec<Vec<String>> = txns
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    names.get(&t.account_id).cloned().unwrap_or_default(),
                    t.kind.as_str().to_string(),
                    format!("{:.2}", t.amount),
                    t.category.as_str().to_string(),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Created", "Account", "Type", "Amount", "Category", "Description"],
                rows,
            )
        );
    }
    Ok(())
}
