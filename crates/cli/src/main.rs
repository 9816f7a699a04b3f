use anyhow::Result;
use clap::{Parser, ValueEnum};
use mesh_renamer_core::{
    load_config, load_mapping, process_files, save_config, AppConfig, OverwritePolicy,
    ProcessOptions, RenameOutcome, RunReport,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mesh-renamer-cli")]
#[command(about = "マッピング表に従って .mesh ファイルを一括リネームします")]
struct Cli {
    folder: PathBuf,
    mapping_file: PathBuf,
    #[arg(long)]
    extension: Option<String>,
    #[arg(long, default_value_t = false)]
    fail_if_exists: bool,
    #[arg(long, default_value_t = false)]
    save_defaults: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config()?;
    let extension = cli.extension.unwrap_or(config.extension);
    let fail_if_exists = cli.fail_if_exists || config.fail_if_exists;

    if cli.save_defaults {
        save_config(&AppConfig {
            extension: extension.clone(),
            fail_if_exists,
        })?;
    }

    let mapping = load_mapping(&cli.mapping_file)?;

    let options = ProcessOptions {
        root: cli.folder,
        extension,
        overwrite: if fail_if_exists {
            OverwritePolicy::FailIfExists
        } else {
            OverwritePolicy::Overwrite
        },
        ..ProcessOptions::default()
    };

    let report = process_files(&options, &mapping)?;

    match cli.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            print_table(&report);
        }
    }

    eprintln!(
        "処理完了: リネーム {}件 / 値なし {}件 / 一致なし {}件 (ログ: {})",
        report.stats.renamed,
        report.stats.no_value,
        report.stats.no_match,
        report.log_path.display()
    );

    Ok(())
}

fn print_table(report: &RunReport) {
    for outcome in &report.outcomes {
        match outcome {
            RenameOutcome::Renamed { from, to, .. } => {
                println!("{} -> {}", from.display(), to.display());
            }
            RenameOutcome::NoValue { key } => println!("値なし: {}", key),
            RenameOutcome::NoMatch { key } => println!("一致なし: {}", key),
        }
    }

    println!(
        "\n集計: subdirs={} scanned={} candidates={} other_skip={} renamed={} no_value={} no_match={}",
        report.stats.subdirs,
        report.stats.scanned_files,
        report.stats.candidates,
        report.stats.skipped_other,
        report.stats.renamed,
        report.stats.no_value,
        report.stats.no_match
    );
}
