use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use csv::StringRecord;
use crate::error::{Result, SalesError};

pub const DEFAULT_DELIMITER: u8 = b';';

/// Reader settings shared by every input file: no header row, no quoting,
/// no trimming, and records of any length.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None);
    builder
}

/// Writer settings mirroring `reader_builder`, so anything written can be read back.
pub fn writer_builder(delimiter: u8) -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

/// Splits one line into its fields. A trailing delimiter produces a trailing empty field;
/// an empty line has no fields.
pub fn split_record(line: &str, delimiter: u8) -> Result<Vec<String>> {
    let mut record = StringRecord::new();
    let found = reader_builder(delimiter)
        .from_reader(line.as_bytes())
        .read_record(&mut record)
        .map_err(|e| SalesError::from_csv(Path::new("<line>"), 1, e))?;
    if !found {
        return Ok(Vec::new());
    }
    Ok(record.iter().map(str::to_owned).collect())
}

/// Opens `path` and yields its non-empty lines as records.
pub fn read_records(path: &Path, delimiter: u8) -> Result<csv::StringRecordsIntoIter<File>> {
    let file = File::open(path).map_err(|e| SalesError::file_access(path, e))?;
    Ok(reader_builder(delimiter).from_reader(file).into_records())
}

/// A record shape decoded positionally from a split line.
pub trait RawRecord: DeserializeOwned {
    const KIND: &'static str;
    /// Number of leading fields the shape consumes.
    const FIELDS: usize;
    /// Whether the line must have exactly `FIELDS` fields, rather than at least that many.
    const EXACT: bool;
}

#[derive(Debug, Deserialize)]
pub struct ProductRaw {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl RawRecord for ProductRaw {
    const KIND: &'static str = "product";
    const FIELDS: usize = 3;
    const EXACT: bool = true;
}

#[derive(Debug, Deserialize)]
pub struct SalesmanRaw {
    pub document_type: String,
    pub document_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl RawRecord for SalesmanRaw {
    const KIND: &'static str = "salesman";
    const FIELDS: usize = 4;
    const EXACT: bool = true;
}

/// First line of a sales file: who logged the sales.
#[derive(Debug, Deserialize)]
pub struct SaleHeaderRaw {
    pub document_type: String,
    pub document_number: String,
}

impl RawRecord for SaleHeaderRaw {
    const KIND: &'static str = "sales header";
    const FIELDS: usize = 2;
    const EXACT: bool = false;
}

/// `<productId>;<quantity>;` — the trailing empty field is ignored.
#[derive(Debug, Deserialize)]
pub struct SaleLineRaw {
    pub product_id: String,
    pub quantity: i64,
}

impl RawRecord for SaleLineRaw {
    const KIND: &'static str = "sale";
    const FIELDS: usize = 2;
    const EXACT: bool = false;
}

/// Decodes `record` as `T`, reporting failures against `path` and the record's line.
pub fn decode<T: RawRecord>(path: &Path, record: &StringRecord) -> Result<T> {
    let line = record.position().map_or(0, |p| p.line());
    let arity_ok = if T::EXACT {
        record.len() == T::FIELDS
    } else {
        record.len() >= T::FIELDS
    };
    if !arity_ok {
        return Err(SalesError::parse(
            path,
            line,
            format!("expected {} fields for a {} record, found {}", T::FIELDS, T::KIND, record.len()),
        ));
    }

    let fields: StringRecord = record.iter().take(T::FIELDS).collect();
    fields
        .deserialize(None)
        .map_err(|e| SalesError::parse(path, line, format!("malformed {} record: {}", T::KIND, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> StringRecord {
        StringRecord::from(split_record(line, DEFAULT_DELIMITER).unwrap())
    }

    #[test]
    fn test_split_keeps_fields_untrimmed() {
        assert_eq!(split_record("1; Widget ;9.50", b';').unwrap(), vec!["1", " Widget ", "9.50"]);
    }

    #[test]
    fn test_split_trailing_delimiter() {
        assert_eq!(split_record("3;7;", b';').unwrap(), vec!["3", "7", ""]);
    }

    #[test]
    fn test_split_ignores_quotes() {
        assert_eq!(split_record("1;\"Big;Box\";2", b';').unwrap(), vec!["1", "\"Big", "Box\"", "2"]);
    }

    #[test]
    fn test_split_empty_line() {
        assert!(split_record("", b';').unwrap().is_empty());
    }

    #[test]
    fn test_split_other_delimiter() {
        assert_eq!(split_record("CC,1001", b',').unwrap(), vec!["CC", "1001"]);
    }

    #[test]
    fn test_decode_product() {
        let product: ProductRaw = decode(Path::new("p.txt"), &record("1;Product1;543.21")).unwrap();
        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Product1");
        assert_eq!(product.price, 543.21);
    }

    #[test]
    fn test_decode_product_wrong_arity() {
        let result = decode::<ProductRaw>(Path::new("p.txt"), &record("1;Product1"));
        assert!(matches!(result, Err(SalesError::Parse { .. })));

        let result = decode::<ProductRaw>(Path::new("p.txt"), &record("1;Product1;2.0;extra"));
        assert!(matches!(result, Err(SalesError::Parse { .. })));
    }

    #[test]
    fn test_decode_product_bad_price() {
        let result = decode::<ProductRaw>(Path::new("p.txt"), &record("1;Product1;cheap"));
        assert!(matches!(result, Err(SalesError::Parse { .. })));
    }

    #[test]
    fn test_decode_sale_line_with_trailing_field() {
        let sale: SaleLineRaw = decode(Path::new("s.txt"), &record("3;7;")).unwrap();
        assert_eq!(sale.product_id, "3");
        assert_eq!(sale.quantity, 7);
    }

    #[test]
    fn test_decode_sale_line_bad_quantity() {
        let result = decode::<SaleLineRaw>(Path::new("s.txt"), &record("3;seven;"));
        assert!(matches!(result, Err(SalesError::Parse { .. })));
    }

    #[test]
    fn test_decode_header() {
        let header: SaleHeaderRaw = decode(Path::new("s.txt"), &record("CC;1001")).unwrap();
        assert_eq!(header.document_type, "CC");
        assert_eq!(header.document_number, "1001");
    }
}
