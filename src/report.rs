use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use log::debug;
use serde::Serialize;
use crate::error::{Result, SalesError};
use crate::record;
use crate::reference::{Product, Salesman};

#[derive(Debug, Serialize)]
struct ReportRow {
    label: String,
    amount: String,
}

/// Salesmen ordered by total sales, highest first. Ties come out by document number.
pub fn rank_salesmen(salesmen: &HashMap<String, Salesman>) -> Vec<&Salesman> {
    let mut ranked: Vec<&Salesman> = salesmen.values().collect();
    ranked.sort_by(|a, b| a.document_number.cmp(&b.document_number));
    ranked.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    ranked
}

/// Products ordered by units sold, highest first. Ties come out by product id.
pub fn rank_products(products: &HashMap<String, Product>) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.values().collect();
    ranked.sort_by(|a, b| a.id.cmp(&b.id));
    ranked.sort_by(|a, b| b.quantity_sold.cmp(&a.quantity_sold));
    ranked
}

/// Writes `<first> <last>;<total sales>` per salesman, replacing any existing file.
pub fn write_sales_report(path: &Path, salesmen: &HashMap<String, Salesman>, delimiter: u8) -> Result<()> {
    let rows = rank_salesmen(salesmen).into_iter().map(|salesman| ReportRow {
        label: salesman.full_name(),
        amount: format!("{:.2}", salesman.total_sales),
    });
    write_rows(path, rows, delimiter)
}

/// Writes `<name>;<unit price>` per product, ordered by units sold, replacing any existing file.
pub fn write_products_report(path: &Path, products: &HashMap<String, Product>, delimiter: u8) -> Result<()> {
    let rows = rank_products(products).into_iter().map(|product| ReportRow {
        label: product.name.clone(),
        amount: format!("{:.2}", product.price),
    });
    write_rows(path, rows, delimiter)
}

fn write_rows(path: &Path, rows: impl Iterator<Item = ReportRow>, delimiter: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| SalesError::file_access(path, e))?;
    let mut wrt = record::writer_builder(delimiter).from_writer(file);
    let mut count = 0;
    for row in rows {
        wrt.serialize(row).map_err(|e| SalesError::from_csv(path, count + 1, e))?;
        count += 1;
    }
    wrt.flush().map_err(|e| SalesError::file_access(path, e))?;
    debug!("Wrote {} report lines to {}", count, path.display());
    Ok(())
}
