// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::{DebtUpdate, Store};
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let friend = validate::require("friend", sub.get_one::<String>("friend").unwrap())?;
            let direction = validate::debt_direction(sub.get_one::<String>("type").unwrap())?;
            let amount = validate::amount("amount", sub.get_one::<String>("amount").unwrap())?;
            let description =
                validate::require("description", sub.get_one::<String>("description").unwrap())?;
            let debt = store.create_debt(&friend, direction, amount, &description)?;
            println!(
                "Recorded debt: {} {:.2} ({})",
                debt.friend_name,
                debt.amount,
                debt.direction.as_str()
            );
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let debts = store.list_debts()?;
            if !maybe_print_json(json_flag, jsonl_flag, &debts)? {
                let rows: Vec<Vec<String>> = debts
                    .iter()
                    .map(|d| {
                        vec![
                            d.id.clone(),
                            d.friend_name.clone(),
                            d.direction.as_str().to_string(),
                            format!("{:.2}", d.amount),
                            d.description.clone(),
                            if d.settled { "yes".into() } else { "no".into() },
                            d.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &["Id", "Friend", "Type", "Amount", "Description", "Settled", "Created"],
                        rows,
                    )
                );
            }
        }
        Some(("settle", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.update_debt(id, DebtUpdate::SetSettled(true))?;
            println!("Debt {} settled", id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.delete_debt(id)?;
            println!("Removed debt {}", id);
        }
        _ => {}
    }
    Ok(())
}
