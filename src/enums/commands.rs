use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::ui_language::UiLanguage;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the upload web server
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the upload page in the default browser
        #[clap(long)]
        open: bool,
    },
    /// Analyze a single local file and print the report
    Analyze {
        file: PathBuf,
        #[clap(short, long, value_enum, default_value_t = UiLanguage::Nl)]
        lang: UiLanguage,
        #[clap(short, long)]
        target: Option<String>,
        /// Print the raw result as JSON
        #[clap(long)]
        json: bool,
        /// Persist the report next to the ones created by the web server
        #[clap(long)]
        save: bool,
    },
    /// Print a stored report
    Show {
        id: String,
    },
    Init,
    Validate,
}
