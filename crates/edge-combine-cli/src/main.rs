use std::path::PathBuf;

use anyhow::Result;
use log::LevelFilter;

use edge_combine::combine_with_options;
use edge_combine_cli::cli::build_cli;
use edge_combine_cli::input::CombineConfig;
use edge_combine_cli::summary::format_summary;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default().filter_or("EDGE_COMBINE_LOG", "error,edge_combine=info"),
        )
        .init();

    let matches = build_cli().get_matches();

    // `folder` is required by the CLI definition
    let folder: &PathBuf = matches.get_one("folder").unwrap();
    let config = CombineConfig::from_arguments(&matches)?;
    log::info!(
        "[combine-edges] Combining {} (sort: {}, precision: {})",
        folder.display(),
        config.options.sort_mode,
        config.options.precision
    );

    match combine_with_options(folder, &config.options) {
        Ok(report) => {
            if !config.quiet {
                println!("{}", format_summary(&report));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1)
        }
    }
}
