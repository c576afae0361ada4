use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wilaya-site", about = "Run the wilaya rankings page headlessly and print the result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Type this text into the search field after load
    #[arg(long)]
    pub query: Option<String>,

    /// Scroll the window to this offset after load
    #[arg(long)]
    pub scroll: Option<f64>,

    /// Click the in-page anchor pointing at this fragment (e.g. `#wilayas`)
    #[arg(long)]
    pub click: Option<String>,

    /// Drive stat counters with the wall clock instead of virtual time
    #[arg(long)]
    pub realtime: bool,

    /// JSON page config overriding element ids and timings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Date for the last-update stamp (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Indent the HTML output
    #[arg(long)]
    pub pretty: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the wilayas matching a search query as JSON
    List {
        /// Search query; all wilayas when omitted
        #[arg(default_value = "")]
        query: String,
    },
    /// Print the ranking page path of a wilaya by English name
    Lookup {
        /// Wilaya name, case-insensitive
        name: String,
    },
}
