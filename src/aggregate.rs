use std::collections::HashMap;
use std::path::Path;
use log::{debug, info, trace, warn};
use walkdir::WalkDir;
use crate::error::{Result, SalesError};
use crate::record::{self, SaleHeaderRaw, SaleLineRaw};
use crate::reference::{DocumentNumber, Product, ProductID, Salesman};

/// What happened to a single sales file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Applied { lines_applied: usize, lines_skipped: usize },
    Empty,
    UnknownSalesman(DocumentNumber),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateSummary {
    pub files_applied: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub lines_applied: usize,
    pub lines_skipped: usize,
}

impl AggregateSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Applied { lines_applied, lines_skipped } => {
                self.files_applied += 1;
                self.lines_applied += lines_applied;
                self.lines_skipped += lines_skipped;
            }
            FileOutcome::Empty | FileOutcome::UnknownSalesman(_) => self.files_skipped += 1,
        }
    }
}

/// Walks `root` depth-first and folds every sales file ending in `.<extension>`
/// into the product and salesman totals.
///
/// Only entries below `root` are visited, so a root that is not a directory
/// yields nothing. Unreadable entries and a missing root are ignored. A file
/// that fails to parse is logged and left out entirely; the walk carries on.
pub fn aggregate(
    root: &Path,
    extension: &str,
    delimiter: u8,
    products: &mut HashMap<ProductID, Product>,
    salesmen: &mut HashMap<DocumentNumber, Salesman>,
) -> AggregateSummary {
    let suffix = format!(".{}", extension);
    let mut summary = AggregateSummary::default();

    let entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        });

    for entry in entries {
        if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }
        match process_sales_file(entry.path(), delimiter, products, salesmen) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                warn!("Failed to process sales file: {}. Skipping the whole file.", e);
                summary.files_failed += 1;
            }
        }
    }

    info!(
        "Aggregated {} sales files under {} ({} skipped, {} failed, {} lines applied)",
        summary.files_applied,
        root.display(),
        summary.files_skipped,
        summary.files_failed,
        summary.lines_applied
    );
    summary
}

/// Applies one sales file to the totals.
///
/// Every line is decoded before any total changes, so an `Err` leaves both maps untouched.
pub fn process_sales_file(
    path: &Path,
    delimiter: u8,
    products: &mut HashMap<ProductID, Product>,
    salesmen: &mut HashMap<DocumentNumber, Salesman>,
) -> Result<FileOutcome> {
    let mut records = record::read_records(path, delimiter)?;

    let Some(first) = records.next() else {
        debug!("Sales file {} is empty.", path.display());
        return Ok(FileOutcome::Empty);
    };
    let first = first.map_err(|e| SalesError::from_csv(path, 1, e))?;
    let header: SaleHeaderRaw = record::decode(path, &first)?;

    let Some(salesman) = salesmen.get_mut(&header.document_number) else {
        debug!(
            "Salesman {} {} from {} not found. Ignoring the file.",
            header.document_type,
            header.document_number,
            path.display()
        );
        return Ok(FileOutcome::UnknownSalesman(header.document_number));
    };

    let sales = records
        .map(|result| {
            let record = result.map_err(|e| SalesError::from_csv(path, 0, e))?;
            record::decode::<SaleLineRaw>(path, &record)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut lines_applied = 0;
    let mut lines_skipped = 0;
    for sale in sales {
        match products.get_mut(&sale.product_id) {
            Some(product) => {
                salesman.add_sale(product.record_sale(sale.quantity));
                lines_applied += 1;
            }
            None => {
                trace!("Product {} in {} not found. Skipping line.", sale.product_id, path.display());
                lines_skipped += 1;
            }
        }
    }

    Ok(FileOutcome::Applied { lines_applied, lines_skipped })
}
