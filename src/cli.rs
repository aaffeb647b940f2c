// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .value_name("YYYY-MM-DD")
        .help("Date of the record (defaults to today)")
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .about("Personal expense tracking, monthly budgets, and recurring charges")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the store and print its location"))
        .subcommand(
            Command::new("expense")
                .about("Manage expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(date_arg())
                        .arg(Arg::new("notes").long("notes"))
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .action(ArgAction::SetTrue)
                                .help("Also create a monthly recurring template"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses")
                        .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit an expense in place")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(date_arg())
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("rm").about("Remove an expense").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Manage income entries")
                .subcommand(
                    Command::new("add")
                        .about("Record income")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(date_arg())
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List income entries")
                        .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit an income entry in place")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("source").long("source"))
                        .arg(date_arg())
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("rm").about("Remove an income entry").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("recurring")
                .about("Manage recurring expense templates")
                .subcommand(json_flags(
                    Command::new("list").about("List recurring templates"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a template (past instances are kept)")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budget")
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly budget")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("show").about("Show budget consumption"),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Spending categories")
                .subcommand(json_flags(
                    Command::new("list").about("List the fixed categories"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Spending reports")
                .subcommand(json_flags(
                    Command::new("summary").about("Month and week totals against the budget"),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Current-month spend per category"),
                ))
                .subcommand(json_flags(
                    Command::new("trend").about("Daily spend over the last 7 days"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to CSV")
                .subcommand(
                    Command::new("transactions")
                        .about("All expenses and income as CSV rows")
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("summary")
                        .about("Two-column Metric,Value budget summary")
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Preferences")
                .subcommand(Command::new("show").about("Show current preferences"))
                .subcommand(
                    Command::new("theme")
                        .about("Set the theme preference")
                        .arg(
                            Arg::new("value")
                                .required(true)
                                .value_parser(["light", "dark"]),
                        ),
                )
                .subcommand(
                    Command::new("auto-backup")
                        .about("Toggle periodic CSV auto-backup")
                        .arg(Arg::new("value").required(true).value_parser(["on", "off"])),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete all data and restore defaults")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
        .subcommand(Command::new("doctor").about("Report stored-data drift"))
}
