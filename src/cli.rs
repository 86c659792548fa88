use std::env;
use std::path::PathBuf;

use crate::data::{load_reference_data, ReferenceData};
use crate::resolver::BotConfig;
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Validate) => handle_validate(),
        None => {
            eprintln!("usage: nekobot <serve|validate>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let data = match load_tables() {
        Ok(data) => data,
        Err(code) => return code,
    };

    let bind_addr = env::var("NEKOBOT_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr, &data, &BotConfig::default()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_validate() -> i32 {
    let data = match load_tables() {
        Ok(data) => data,
        Err(code) => return code,
    };

    println!("name directory: {} linked pairs", data.names.len());
    println!("alias table:    {} entries", data.aliases.len());
    println!("item catalog:   {} items", data.items.len());
    println!("wiki index:     {} page titles", data.wiki.len());
    println!("rule text:      {} bytes", data.rules.len());
    0
}

fn load_tables() -> Result<ReferenceData, i32> {
    let data_dir = data_dir();
    match load_reference_data(&data_dir) {
        Ok(data) => {
            println!("reference data loaded from {}", data_dir.display());
            Ok(data)
        }
        Err(err) => {
            eprintln!("reference data load failed: {err}");
            Err(1)
        }
    }
}

fn data_dir() -> PathBuf {
    env::var("NEKOBOT_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}
