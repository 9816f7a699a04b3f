use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct RunLog {
    path: PathBuf,
    file: File,
    extension: String,
}

impl RunLog {
    pub fn create(dir: &Path, extension: &str) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("rename_log_{}.txt", timestamp));
        let file = File::create(&path)
            .with_context(|| format!("ログファイルを作成できませんでした: {}", path.display()))?;
        Ok(Self {
            path,
            file,
            extension: extension.to_string(),
        })
    }

    pub fn renamed(&mut self, key: &str, value: &str) -> Result<()> {
        let line = format!(
            "Renamed: {}{} to {}{}",
            key, self.extension, value, self.extension
        );
        self.write_line(&line)
    }

    pub fn no_value(&mut self, key: &str) -> Result<()> {
        let line = format!("No value for: {}{}", key, self.extension);
        self.write_line(&line)
    }

    pub fn no_match(&mut self, key: &str) -> Result<()> {
        let line = format!("No match for: {}{}", key, self.extension);
        self.write_line(&line)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{}", line)
            .with_context(|| format!("ログ書き込みに失敗しました: {}", self.path.display()))
    }
}
