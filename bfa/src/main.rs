use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use bfa::config::BFAConfig;
use bfa::io::cli::Cli;
use bfa::{io, pipeline};
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BFAConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed BFAConfig: {config:?}");

    let instance_stem = args.instance_file.file_stem().unwrap().to_str().unwrap();

    if !args.report_folder.exists() {
        fs::create_dir_all(&args.report_folder).with_context(|| {
            format!("could not create report folder: {:?}", args.report_folder)
        })?;
    }

    let ext_instance = io::read_json_instance(args.instance_file.as_path())?;
    let output = pipeline::run(ext_instance, config)?;

    let report_path = args
        .report_folder
        .join(format!("report_{instance_stem}.json"));
    io::write_json(&output, &report_path)?;

    Ok(())
}
