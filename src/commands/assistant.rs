// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{get_assistant_endpoint, set_assistant_endpoint};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-endpoint", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            set_assistant_endpoint(store, url)?;
            println!("Assistant endpoint set to {}", url);
        }
        Some(("show", _)) => match get_assistant_endpoint(store)? {
            Some(url) => println!("Assistant endpoint: {}", url),
            None => println!("No assistant endpoint configured"),
        },
        _ => {}
    }
    Ok(())
}
