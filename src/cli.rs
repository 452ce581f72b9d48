use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "checksum-forge")]
#[command(version)]
#[command(about = "Offline checksum forgery for sum-of-codes password checks", long_about = None)]
pub struct Args {
    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the character-code checksum of TEXT
    Checksum { text: String },

    /// Print the shortest string whose checksum equals TARGET
    Forge {
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,
    },

    /// Forge the password that lifts a known string up to a reference checksum
    ///
    /// Example: checksum-forge password --known alice --reference 1500
    Password {
        /// Known part of the checksummed input, usually the username
        #[arg(short, long)]
        known: String,

        /// Reference checksum reported by the server
        #[arg(short, long, allow_negative_numbers = true)]
        reference: i64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the key/value fields of a server response body
    Parse { data: String },
}
