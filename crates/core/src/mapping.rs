use crate::MAPPING_DELIMITER;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("区切り文字がありません (行{line}): {text}")]
    MissingDelimiter { line: usize, text: String },
    #[error("区切り文字が複数あります (行{line}): {text}")]
    ExtraDelimiter { line: usize, text: String },
}

/// キーごとの値は3状態: 置換値あり / 明示的に値なし / キー自体が存在しない。
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<String, Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingLookup<'a> {
    Missing,
    NoValue,
    Value(&'a str),
}

impl MappingTable {
    pub fn lookup(&self, key: &str) -> MappingLookup<'_> {
        match self.entries.get(key) {
            None => MappingLookup::Missing,
            Some(None) => MappingLookup::NoValue,
            Some(Some(value)) => MappingLookup::Value(value),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn load_mapping(path: &Path) -> Result<MappingTable> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("マッピングファイルを読めませんでした: {}", path.display()))?;
    let table = parse_mapping(&raw).with_context(|| {
        format!(
            "マッピングファイルのパースに失敗しました: {}",
            path.display()
        )
    })?;
    Ok(table)
}

fn parse_mapping(raw: &str) -> Result<MappingTable, MappingError> {
    let mut entries = HashMap::new();

    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        let mut pieces = line.split(MAPPING_DELIMITER);
        let key = pieces.next().unwrap_or_default();
        let Some(value) = pieces.next() else {
            return Err(MappingError::MissingDelimiter {
                line: index + 1,
                text: line.to_string(),
            });
        };
        if pieces.next().is_some() {
            return Err(MappingError::ExtraDelimiter {
                line: index + 1,
                text: line.to_string(),
            });
        }

        // 重複キーは後の行が勝つ
        entries.insert(
            key.to_string(),
            (!value.is_empty()).then(|| value.to_string()),
        );
    }

    Ok(MappingTable { entries })
}
