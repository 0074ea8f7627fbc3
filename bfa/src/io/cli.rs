use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Best-fit bin allocation and truck load optimization on a JSON warehouse instance"
)]
pub struct Cli {
    /// Warehouse instance to process
    #[arg(short, long, value_name = "FILE")]
    pub instance_file: PathBuf,
    /// Folder the run report is written to
    #[arg(short, long, value_name = "FOLDER")]
    pub report_folder: PathBuf,
    /// Custom pipeline configuration, defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
