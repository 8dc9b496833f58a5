// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::Result;
use chrono::Local;

use crate::store::Store;
use crate::summary;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let bundle = summary::bundle(store, Local::now().naive_local())?;
    if maybe_print_json(json_flag, jsonl_flag, &bundle)? {
        return Ok(());
    }

    let overview = vec![
        vec!["Total balance".to_string(), format!("{:.2}", bundle.total_balance)],
        vec!["Spent this month".to_string(), format!("{:.2}", bundle.monthly_spent)],
        vec!["You owe".to_string(), format!("{:.2}", bundle.net_debt.total_owed)],
        vec![
            "Owed to you".to_string(),
            format!("{:.2}", bundle.net_debt.total_owed_to_user),
        ],
    ];
    println!("{}", pretty_table(&["Overview", "Amount"], overview));

    if !bundle.category_spending.is_empty() {
        let rows: Vec<Vec<String>> = bundle
            .category_spending
            .iter()
            .map(|(cat, amt)| vec![cat.clone(), format!("{:.2}", amt)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }

    if !bundle.upcoming_reminders.is_empty() {
        let rows: Vec<Vec<String>> = bundle
            .upcoming_reminders
            .iter()
            .map(|r| {
                vec![
                    r.title.clone(),
                    format!("{:.2}", r.amount),
                    r.due_date.format("%Y-%m-%d").to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Upcoming", "Amount", "Due"], rows));
    }

    if !bundle.recent_transactions.is_empty() {
        let names: HashMap<String, String> = store
            .list_accounts()?
            .into_iter()
            .map(|a| (a.id, a.name))
            .collect();
        let rows: Vec<Vec<String>> = bundle
            .recent_transactions
            .iter()
            .map(|t| {
                vec![
                    t.created_at.format("%Y-%m-%d").to_string(),
                    names.get(&t.account_id).cloned().unwrap_or_default(),
                    t.kind.as_str().to_string(),
                    format!("{:.2}", t.amount),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Recent", "Account", "Type", "Amount", "Description"], rows)
        );
    }

    if !bundle.active_debts.is_empty() {
        let rows: Vec<Vec<String>> = bundle
            .active_debts
            .iter()
            .map(|d| {
                vec![
                    d.friend_name.clone(),
                    d.direction.as_str().to_string(),
                    format!("{:.2}", d.amount),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Active debt", "Type", "Amount"], rows));
    }

    Ok(())
}
