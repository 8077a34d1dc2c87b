use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

/// Argument definitions for the `combine-edges` binary.
pub fn build_cli() -> Command {
    Command::new("combine-edges")
        .version(clap::crate_version!())
        .about("Combine .edge adjacency matrices into one block-diagonal matrix")
        .arg(
            Arg::new("folder")
                .help("Folder containing the *.edge files to combine")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "Name of the combined file, written inside the folder [default: total.edge]. \
                     Overrides the output name in the configuration file.",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Decimal places written for every value [default: 5]")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("alphabetically")
                .short('a')
                .long("alphabetically")
                .visible_alias("alphabetical")
                .help("Place matrices in case-insensitive file name order")
                .action(ArgAction::SetTrue)
                .conflicts_with("size"),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .help("Place the largest matrices first (default)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print the combine summary")
                .action(ArgAction::SetTrue),
        )
}
