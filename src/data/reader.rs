//! Reading training data from delimited text.
//!
//! The first row names the feature columns (its last cell, naming the label
//! column, is ignored); every following row holds the feature values with
//! the label in the last column. Blank lines are skipped and cells are trimmed.
use crate::data::dataset::Dataset;
use crate::data::instance::Instance;
use csv::{ReaderBuilder, Trim};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Reads a dataset from any reader, parsing every feature cell as `T`.
///
/// # Errors
///
/// Fails on I/O or csv errors, on rows with a different width than the header,
/// on headers with fewer than two columns, and on cells that don't parse as `T`.
pub fn read_delimited<T, R>(reader: R, delimiter: u8) -> Result<Dataset<T>, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err("At least one feature column and one label column are required.".into());
    }
    let dimension = headers.len() - 1;
    let attributes = headers
        .iter()
        .take(dimension)
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut instances = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        if record.len() != headers.len() {
            let line = record.position().map_or(0, |position| position.line());
            return Err(format!(
                "Line {} has {} columns, expected {}.",
                line,
                record.len(),
                headers.len()
            )
            .into());
        }

        let mut features = Vec::with_capacity(dimension);
        for feature in record.iter().take(dimension) {
            features.push(feature.parse::<T>()?);
        }

        let label = record.get(dimension).unwrap_or_default();
        if label.is_empty() {
            let line = record.position().map_or(0, |position| position.line());
            return Err(format!("Empty label on line {}.", line).into());
        }
        instances.push(Instance::labeled(features, label));
    }

    Ok(Dataset::new(attributes, instances))
}

/// Reads a dataset from a file.
pub fn read_file<T, P>(path: P, delimiter: u8) -> Result<Dataset<T>, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
    P: AsRef<Path>,
{
    read_delimited(File::open(path)?, delimiter)
}

/// Reads a tab-delimited dataset from a file.
pub fn read_tsv<T, P>(path: P) -> Result<Dataset<T>, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
    P: AsRef<Path>,
{
    read_file(path, b'\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_categorical() {
        let text = "age\ttearRate\tclass\nyoung\treduced\tno lenses\npre\tnormal\tsoft\n";
        let dataset = read_delimited::<String, _>(text.as_bytes(), b'\t').unwrap();

        assert_eq!(dataset.attributes(), &["age", "tearRate"]);
        assert_eq!(dataset.nrows(), 2);
        assert_eq!(dataset.instances()[0].features(), &["young", "reduced"]);
        assert_eq!(dataset.labels(), vec!["no lenses", "soft"]);
    }

    #[test]
    fn test_read_numeric_with_comma() {
        let text = "x,y,class\n1.0, 1.1,A\n0,0,B\n";
        let dataset = read_delimited::<f64, _>(text.as_bytes(), b',').unwrap();

        assert_eq!(dataset.instances()[0].features(), &[1.0, 1.1]);
        assert_eq!(dataset.instances()[1].label(), Some("B"));
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let text = "x\tclass\n1\ta\n\n2\tb\n";
        let dataset = read_delimited::<i32, _>(text.as_bytes(), b'\t').unwrap();
        assert_eq!(dataset.nrows(), 2);
    }

    #[test]
    fn test_read_rejects_unparsable_value() {
        let text = "x\tclass\nabc\ta\n";
        assert!(read_delimited::<f64, _>(text.as_bytes(), b'\t').is_err());
    }

    #[test]
    fn test_read_rejects_ragged_rows() {
        let text = "x\ty\tclass\n1\t2\ta\n1\tb\n";
        assert!(read_delimited::<f64, _>(text.as_bytes(), b'\t').is_err());
    }

    #[test]
    fn test_read_rejects_label_only_header() {
        let text = "class\na\n";
        assert!(read_delimited::<String, _>(text.as_bytes(), b'\t').is_err());
    }

    #[test]
    fn test_read_lenses_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("datasets/lenses.txt");
        let dataset = read_tsv::<String, _>(path).unwrap();
        assert_eq!(dataset.nrows(), 24);
        assert_eq!(dataset.nfeatures(), 4);
        assert!(dataset.validate().is_ok());
    }
}
