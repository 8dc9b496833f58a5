// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(crate_version!())
        .about("Personal finance tracker: accounts, friend debts, payment reminders, and an AI assistant")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("other")
                                .help("main | savings | other"),
                        )
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .default_value("0.00")
                                .help("Opening balance"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List accounts"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("account").long("account").required(true).help("Account name"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("expense | income"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("other")
                                .help("food | transport | entertainment | study | mess | other"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("account").long("account").help("Filter by account name"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("from").long("from").help("Inclusive start date YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").help("Inclusive end date YYYY-MM-DD"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction (the account balance is not readjusted)")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("debt")
                .about("Track informal debts with friends")
                .subcommand(
                    Command::new("add")
                        .about("Record a debt")
                        .arg(Arg::new("friend").long("friend").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("owe = you owe them, owed = they owe you"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List debts, newest first")))
                .subcommand(
                    Command::new("settle")
                        .about("Mark a debt settled")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a debt")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("reminder")
                .about("Payment reminders")
                .subcommand(
                    Command::new("add")
                        .about("Add a reminder")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("due").long("due").required(true).help("Due date YYYY-MM-DD"))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List reminders by due date"),
                ))
                .subcommand(
                    Command::new("pay")
                        .about("Mark a reminder paid")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("snooze")
                        .about("Push a reminder's due date forward")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("days")
                                .long("days")
                                .value_parser(value_parser!(usize))
                                .default_value("1"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a reminder")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("chat")
                .about("Talk to the AI assistant about your finances")
                .subcommand(
                    Command::new("send")
                        .about("Send a message and print the reply")
                        .arg(Arg::new("message").required(true)),
                )
                .subcommand(json_flags(Command::new("history").about("Show the conversation")))
                .subcommand(Command::new("clear").about("Delete the whole conversation")),
        )
        .subcommand(
            Command::new("assistant")
                .about("Configure the assistant backend")
                .subcommand(
                    Command::new("set-endpoint")
                        .about("Set the HTTP endpoint the assistant is reached at")
                        .arg(Arg::new("url").long("url").required(true)),
                )
                .subcommand(Command::new("show").about("Show the configured endpoint")),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Balances, monthly spending, debts and upcoming reminders"),
        ))
        .subcommand(Command::new("doctor").about("Scan the database for integrity issues"))
}
