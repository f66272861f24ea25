//! Random sample inputs in the same formats the loaders and aggregator read.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use log::info;
use rand::Rng;
use crate::config::Config;
use crate::error::{Result, SalesError};
use crate::record;

const FIRST_NAMES: [&str; 15] = [
    "John", "Jane", "Michael", "Sarah", "David", "Emma", "James", "Olivia",
    "William", "Sophia", "Robert", "Isabella", "Joseph", "Mia", "Thomas",
];

const LAST_NAMES: [&str; 13] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
    "Davis", "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez",
];

const DOCUMENT_TYPE: &str = "CC";
const FIRST_DOCUMENT_NUMBER: u64 = 1000;
const PRODUCT_ID_RANGE: std::ops::RangeInclusive<u64> = 1..=10;
const QUANTITY_RANGE: std::ops::RangeInclusive<u64> = 1..=10;

pub const SAMPLE_PRODUCTS: u64 = 10;
pub const SAMPLE_SALESMEN: u64 = 5;
pub const SAMPLE_SALES_PER_FILE: u64 = 3;

fn require_positive(value: u64, field: &str) -> Result<()> {
    if value == 0 {
        return Err(SalesError::validation(format!("{} must be positive", field)));
    }
    Ok(())
}

fn write_lines(path: &Path, delimiter: u8, lines: impl Iterator<Item = Vec<String>>) -> Result<()> {
    let file = File::create(path).map_err(|e| SalesError::file_access(path, e))?;
    let mut wrt = record::writer_builder(delimiter).from_writer(file);
    for (i, line) in lines.enumerate() {
        wrt.write_record(&line)
            .map_err(|e| SalesError::from_csv(path, i as u64 + 1, e))?;
    }
    wrt.flush().map_err(|e| SalesError::file_access(path, e))
}

/// Writes `count` products with ids `1..=count` and prices in `[100, 1100)`.
pub fn create_products_file<R: Rng + ?Sized>(path: &Path, count: u64, delimiter: u8, rng: &mut R) -> Result<()> {
    require_positive(count, "Products count")?;
    let lines = (1..=count).map(|i| {
        let price: f64 = rng.random_range(100.0..1100.0);
        vec![i.to_string(), format!("Product{}", i), format!("{:.2}", price)]
    });
    write_lines(path, delimiter, lines)
}

/// Writes `count` salesmen with document numbers `1001..=1000 + count`.
pub fn create_salesmen_file<R: Rng + ?Sized>(path: &Path, count: u64, delimiter: u8, rng: &mut R) -> Result<()> {
    require_positive(count, "Salesman count")?;
    let lines = (1..=count).map(|i| {
        let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        vec![
            DOCUMENT_TYPE.to_string(),
            (FIRST_DOCUMENT_NUMBER + i).to_string(),
            first.to_string(),
            last.to_string(),
        ]
    });
    write_lines(path, delimiter, lines)
}

/// Writes `<dir>/<name>_<id>.txt` holding `count` random sales for salesman `id`.
pub fn create_sales_file<R: Rng + ?Sized>(
    dir: &Path,
    count: u64,
    name: &str,
    id: u64,
    delimiter: u8,
    rng: &mut R,
) -> Result<PathBuf> {
    require_positive(count, "Sales count")?;
    require_positive(id, "ID")?;
    if name.trim().is_empty() {
        return Err(SalesError::validation("Name cannot be empty"));
    }

    let path = dir.join(format!("{}_{}.txt", name, id));
    let header = vec![DOCUMENT_TYPE.to_string(), id.to_string()];
    let sales = (0..count).map(|_| {
        vec![
            rng.random_range(PRODUCT_ID_RANGE).to_string(),
            rng.random_range(QUANTITY_RANGE).to_string(),
            String::new(),
        ]
    });
    write_lines(&path, delimiter, std::iter::once(header).chain(sales))?;
    Ok(path)
}

/// Lays out a complete sample input set under the paths in `config`.
pub fn generate_sample_data<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<()> {
    fs::create_dir_all(&config.sales_dir).map_err(|e| SalesError::file_access(&config.sales_dir, e))?;
    create_products_file(&config.products_file, SAMPLE_PRODUCTS, config.delimiter, rng)?;
    create_salesmen_file(&config.salesmen_file, SAMPLE_SALESMEN, config.delimiter, rng)?;
    for i in 1..=SAMPLE_SALESMEN {
        create_sales_file(
            &config.sales_dir,
            SAMPLE_SALES_PER_FILE,
            &format!("Salesman{}", i),
            FIRST_DOCUMENT_NUMBER + i,
            config.delimiter,
            rng,
        )?;
    }
    info!("Generated sample data under {}", config.base_dir.display());
    Ok(())
}
