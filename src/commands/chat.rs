// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::assistant::{self, HttpAssistant};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("send", sub)) => {
            let message = validate::require("message", sub.get_one::<String>("message").unwrap())?;
            let backend = HttpAssistant::from_settings(store)?;
            let (_, reply) = assistant::converse(store, &backend, &message)?;
            println!("{}", reply.content);
        }
        Some(("history", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let messages = store.list_chat_messages()?;
            if !maybe_print_json(json_flag, jsonl_flag, &messages)? {
                let rows: Vec<Vec<String>> = messages
                    .iter()
                    .map(|msg| {
                        vec![
                            msg.created_at.format("%Y-%m-%d %H:%M").to_string(),
                            if msg.is_user { "You".into() } else { "Assistant".into() },
                            msg.content.clone(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["When", "Who", "Message"], rows));
            }
        }
        Some(("clear", _)) => {
            store.clear_chat()?;
            println!("Chat history cleared");
        }
        _ => {}
    }
    Ok(())
}
