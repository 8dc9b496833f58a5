// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = validate::require("name", sub.get_one::<String>("name").unwrap())?;
            let kind = validate::account_kind(sub.get_one::<String>("type").unwrap())?;
            let balance = validate::opening_balance(sub.get_one::<String>("balance").unwrap())?;
            let account = store.create_account(&name, kind, balance)?;
            println!(
                "Added account '{}' ({}, opening balance {:.2})",
                account.name,
                account.kind.as_str(),
                account.balance
            );
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let accounts = store.list_accounts()?;
            if !maybe_print_json(json_flag, jsonl_flag, &accounts)? {
                let rows: Vec<Vec<String>> = accounts
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.clone(),
                            a.name.clone(),
                            a.kind.as_str().to_string(),
                            format!("{:.2}", a.balance),
                            a.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Name", "Type", "Balance", "Created"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
