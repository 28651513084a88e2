//! Clap command tree definition.
//!
//! The menu itself is interactive; the command line only picks the config,
//! the output format and the `init-config` helper.

use clap::{Arg, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("stockroom")
        .about("In-memory shelf and slot inventory tracker with a console menu")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: ./stockroom.toml, if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("human"),
        )
        .arg(
            Arg::new("human")
                .long("human")
                .help("Console text output, overriding the config file")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(build_init_config())
}

fn build_init_config() -> Command {
    Command::new("init-config")
        .about("Write a commented default config file and exit")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Where to write it (default: ./stockroom.toml)"),
        )
}
