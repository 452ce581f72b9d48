#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

mod checksum;
mod cli;
mod forge;
mod logging;
mod response;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    match args.command {
        Command::Checksum { text } => {
            println!("{}", checksum::compute_checksum(&text));
        }
        Command::Forge { target } => {
            let forged = checksum::minimal_string_for_checksum(target)?;
            info!(forge_target = target, length = forged.chars().count(), "forged string");
            println!("escaped: {}", forged.escape_default());
            println!("hex: {}", hex::encode(forged.as_bytes()));
        }
        Command::Password {
            known,
            reference,
            json,
        } => {
            let report = forge::forge_password(&known, reference)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("known checksum: {}", report.known_checksum);
                println!("difference: {}", report.difference);
                println!("password (escaped): {}", report.escaped_forged());
                println!("password (hex): {}", report.hex_forged());
            }
        }
        Command::Parse { data } => {
            let fields = response::parse_fields(&data);
            if let Ok(reference) = response::reference_checksum_from(&data) {
                info!(reference, "response carries a checksum");
            }
            for field in fields {
                println!("{}: {}", field.key, field.value);
            }
        }
    }

    Ok(())
}
