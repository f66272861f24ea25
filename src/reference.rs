use std::collections::HashMap;
use std::path::Path;
use log::{debug, trace};
use crate::error::{Result, SalesError};
use crate::record::{self, ProductRaw, RawRecord, SalesmanRaw};

pub type ProductID = String;
pub type DocumentNumber = String;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductID,
    pub name: String,
    pub price: f64,
    pub quantity_sold: i64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            quantity_sold: 0,
        }
    }

    /// Records `quantity` units sold and returns the revenue they represent.
    #[inline]
    pub fn record_sale(&mut self, quantity: i64) -> f64 {
        self.quantity_sold += quantity;
        self.price * quantity as f64
    }
}

impl From<ProductRaw> for Product {
    fn from(raw: ProductRaw) -> Self {
        Product::new(raw.id, raw.name, raw.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Salesman {
    pub document_type: String,
    pub document_number: DocumentNumber,
    pub first_name: String,
    pub last_name: String,
    pub total_sales: f64,
}

impl Salesman {
    pub fn new(
        document_type: impl Into<String>,
        document_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Salesman {
            document_type: document_type.into(),
            document_number: document_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            total_sales: 0.0,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn add_sale(&mut self, amount: f64) {
        self.total_sales += amount;
    }
}

impl From<SalesmanRaw> for Salesman {
    fn from(raw: SalesmanRaw) -> Self {
        Salesman::new(raw.document_type, raw.document_number, raw.first_name, raw.last_name)
    }
}

/// Loads the product catalog, keyed by product id.
pub fn load_products(path: &Path, delimiter: u8) -> Result<HashMap<ProductID, Product>> {
    load_keyed::<ProductRaw, Product>(path, delimiter, |product| product.id.clone())
}

/// Loads the salesman roster, keyed by document number.
pub fn load_salesmen(path: &Path, delimiter: u8) -> Result<HashMap<DocumentNumber, Salesman>> {
    load_keyed::<SalesmanRaw, Salesman>(path, delimiter, |salesman| salesman.document_number.clone())
}

fn load_keyed<R, T>(path: &Path, delimiter: u8, key: impl Fn(&T) -> String) -> Result<HashMap<String, T>>
where
    R: RawRecord,
    T: From<R>,
{
    let mut entries = HashMap::new();
    for result in record::read_records(path, delimiter)? {
        let record = result.map_err(|e| SalesError::from_csv(path, 0, e))?;
        let entry = T::from(record::decode::<R>(path, &record)?);
        let id = key(&entry);
        if entries.insert(id.clone(), entry).is_some() {
            trace!("Duplicate {} {} in {}. Keeping the later line.", R::KIND, id, path.display());
        }
    }
    debug!("Loaded {} {} records from {}", entries.len(), R::KIND, path.display());
    Ok(entries)
}
