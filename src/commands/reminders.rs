// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Duration, NaiveTime};

use crate::models::ReminderStatus;
use crate::store::{ReminderUpdate, Store};
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use crate::validate;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let title = validate::require("title", sub.get_one::<String>("title").unwrap())?;
            let amount = validate::amount("amount", sub.get_one::<String>("amount").unwrap())?;
            let due = parse_date(sub.get_one::<String>("due").unwrap())?.and_time(NaiveTime::MIN);
            let description = sub.get_one::<String>("description").map(|s| s.as_str());
            let recurring = sub.get_flag("recurring");
            let reminder = store.create_reminder(&title, description, amount, due, recurring)?;
            println!(
                "Reminder '{}' for {:.2} due {}",
                reminder.title,
                reminder.amount,
                reminder.due_date.format("%Y-%m-%d")
            );
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let reminders = store.list_reminders()?;
            if !maybe_print_json(json_flag, jsonl_flag, &reminders)? {
                let rows: Vec<Vec<String>> = reminders
                    .iter()
                    .map(|r| {
                        vec![
                            r.id.clone(),
                            r.title.clone(),
                            format!("{:.2}", r.amount),
                            r.due_date.format("%Y-%m-%d").to_string(),
                            r.status.as_str().to_string(),
                            if r.recurring { "yes".into() } else { "no".into() },
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Title", "Amount", "Due", "Status", "Recurring"], rows)
                );
            }
        }
        Some(("pay", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.update_reminder(id, ReminderUpdate::SetStatus(ReminderStatus::Paid))?;
            println!("Reminder {} marked paid", id);
        }
        Some(("snooze", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let days = *sub.get_one::<usize>("days").unwrap();
            let reminder = store.get_reminder(id)?;
            let due = reminder.due_date + Duration::days(days as i64);
            store.update_reminder(id, ReminderUpdate::SetDueDate(due))?;
            store.update_reminder(id, ReminderUpdate::SetStatus(ReminderStatus::Snoozed))?;
            println!(
                "Reminder '{}' snoozed until {}",
                reminder.title,
                due.format("%Y-%m-%d")
            );
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.delete_reminder(id)?;
            println!("Removed reminder {}", id);
        }
        _ => {}
    }
    Ok(())
}
