use crate::mapping::{MappingLookup, MappingTable};
use crate::run_log::RunLog;
use crate::{DEFAULT_EXTENSION, KEY_SEPARATOR};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub root: PathBuf,
    pub extension: String,
    pub overwrite: OverwritePolicy,
    pub log_dir: PathBuf,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            overwrite: OverwritePolicy::Overwrite,
            log_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OverwritePolicy {
    #[default]
    Overwrite,
    FailIfExists,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunStats {
    pub subdirs: usize,
    pub scanned_files: usize,
    pub candidates: usize,
    pub skipped_other: usize,
    pub renamed: usize,
    pub no_value: usize,
    pub no_match: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenameOutcome {
    Renamed {
        key: String,
        value: String,
        from: PathBuf,
        to: PathBuf,
    },
    NoValue {
        key: String,
    },
    NoMatch {
        key: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub log_path: PathBuf,
    pub outcomes: Vec<RenameOutcome>,
    pub stats: RunStats,
}

pub fn process_files(options: &ProcessOptions, mapping: &MappingTable) -> Result<RunReport> {
    if !options.root.exists() {
        anyhow::bail!("対象フォルダが存在しません: {}", options.root.display());
    }

    let mut log = RunLog::create(&options.log_dir, &options.extension)?;
    let mut stats = RunStats::default();
    let mut outcomes = Vec::new();

    for subdir in list_subdirs(&options.root)? {
        stats.subdirs += 1;
        let subdir_path = options.root.join(&subdir);

        for file_name in list_files(&subdir_path)? {
            stats.scanned_files += 1;
            let Some(base) = file_name.strip_suffix(options.extension.as_str()) else {
                stats.skipped_other += 1;
                continue;
            };
            stats.candidates += 1;

            let key = format!("{}{}{}", subdir, KEY_SEPARATOR, base);
            match mapping.lookup(&key) {
                MappingLookup::Missing => {
                    log.no_match(&key)?;
                    stats.no_match += 1;
                    outcomes.push(RenameOutcome::NoMatch { key });
                }
                MappingLookup::NoValue => {
                    log.no_value(&key)?;
                    stats.no_value += 1;
                    outcomes.push(RenameOutcome::NoValue { key });
                }
                MappingLookup::Value(value) => {
                    let from = subdir_path.join(&file_name);
                    let to = move_candidate(options, &from, value)?;
                    log.renamed(&key, value)?;
                    stats.renamed += 1;
                    outcomes.push(RenameOutcome::Renamed {
                        key,
                        value: value.to_string(),
                        from,
                        to,
                    });
                }
            }
        }
    }

    Ok(RunReport {
        root: options.root.clone(),
        log_path: log.into_path(),
        outcomes,
        stats,
    })
}

fn move_candidate(options: &ProcessOptions, from: &Path, value: &str) -> Result<PathBuf> {
    let (new_subdir, new_base) = split_value(value);
    let dest_dir = options.root.join(new_subdir);
    fs::create_dir_all(&dest_dir).with_context(|| {
        format!(
            "移動先フォルダを作成できませんでした: {}",
            dest_dir.display()
        )
    })?;

    let to = dest_dir.join(format!("{}{}", new_base, options.extension));
    if options.overwrite == OverwritePolicy::FailIfExists && to.exists() {
        anyhow::bail!("移動先が既に存在します: {}", to.display());
    }
    fs::rename(from, &to).with_context(|| {
        format!(
            "ファイル移動に失敗しました: {} -> {}",
            from.display(),
            to.display()
        )
    })?;
    Ok(to)
}

// 値は最後の '/' で新サブフォルダと新ベース名に分かれる。'/' なしならルート直下。
fn split_value(value: &str) -> (&str, &str) {
    value.rsplit_once('/').unwrap_or(("", value))
}

fn list_subdirs(root: &Path) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(root)
        .with_context(|| format!("フォルダを読めませんでした: {}", root.display()))?
    {
        let entry = entry.with_context(|| format!("エントリ読み取り失敗: {}", root.display()))?;
        if !entry.path().is_dir() {
            continue;
        }
        out.push(entry.file_name().to_string_lossy().to_string());
    }
    out.sort();
    Ok(out)
}

fn list_files(subdir: &Path) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(subdir)
        .with_context(|| format!("サブフォルダを読めませんでした: {}", subdir.display()))?
    {
        let entry = entry.with_context(|| format!("エントリ読み取り失敗: {}", subdir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        out.push(entry.file_name().to_string_lossy().to_string());
    }
    out.sort();
    Ok(out)
}
