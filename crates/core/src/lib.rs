mod config;
mod mapping;
mod processor;
mod run_log;

pub use config::{app_paths, load_config, save_config, AppConfig, AppPaths};
pub use mapping::{load_mapping, MappingError, MappingLookup, MappingTable};
pub use processor::{
    process_files, OverwritePolicy, ProcessOptions, RenameOutcome, RunReport, RunStats,
};
pub use run_log::RunLog;

pub const DEFAULT_EXTENSION: &str = ".mesh";
pub const KEY_SEPARATOR: char = '\\';
pub const MAPPING_DELIMITER: char = ':';
