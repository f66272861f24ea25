use std::path::{Path, PathBuf};
use crate::record::DEFAULT_DELIMITER;

pub const SALES_DIR: &str = "sales";
pub const PRODUCTS_FILE: &str = "products.txt";
pub const SALESMEN_FILE: &str = "salesmen.txt";
pub const SALES_REPORT_FILE: &str = "sales_report.txt";
pub const PRODUCTS_REPORT_FILE: &str = "products_report.txt";
pub const SALES_FILE_EXTENSION: &str = "txt";

/// Where a run reads its inputs and writes its reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_dir: PathBuf,
    pub sales_dir: PathBuf,
    pub products_file: PathBuf,
    pub salesmen_file: PathBuf,
    pub sales_report_file: PathBuf,
    pub products_report_file: PathBuf,
    pub sales_file_extension: String,
    pub delimiter: u8,
}

impl Config {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Config {
            base_dir: base_dir.to_path_buf(),
            sales_dir: base_dir.join(SALES_DIR),
            products_file: base_dir.join(PRODUCTS_FILE),
            salesmen_file: base_dir.join(SALESMEN_FILE),
            sales_report_file: base_dir.join(SALES_REPORT_FILE),
            products_report_file: base_dir.join(PRODUCTS_REPORT_FILE),
            sales_file_extension: SALES_FILE_EXTENSION.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(".")
    }
}
