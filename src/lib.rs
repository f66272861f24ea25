pub mod aggregate;
pub mod config;
pub mod error;
pub mod generator;
pub mod record;
pub mod reference;
pub mod report;

pub use self::{
    aggregate::{AggregateSummary, FileOutcome, aggregate, process_sales_file},
    config::Config,
    error::{Result, SalesError},
    reference::{Product, Salesman, load_products, load_salesmen},
    report::{write_products_report, write_sales_report},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub products: usize,
    pub salesmen: usize,
    pub aggregate: AggregateSummary,
}

/// Loads the reference files, folds in every sales file and writes both reports.
pub fn run(config: &Config) -> Result<RunSummary> {
    let mut products = load_products(&config.products_file, config.delimiter)?;
    let mut salesmen = load_salesmen(&config.salesmen_file, config.delimiter)?;

    let aggregate = aggregate(
        &config.sales_dir,
        &config.sales_file_extension,
        config.delimiter,
        &mut products,
        &mut salesmen,
    );

    write_sales_report(&config.sales_report_file, &salesmen, config.delimiter)?;
    write_products_report(&config.products_report_file, &products, config.delimiter)?;

    Ok(RunSummary {
        products: products.len(),
        salesmen: salesmen.len(),
        aggregate,
    })
}
