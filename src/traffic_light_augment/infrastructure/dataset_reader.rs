use super::error::InfrastructureError;
use crate::domain::dataset::{Dataset, DatasetRow};
use std::io::Read;
use std::path::Path;

/// Reads a label table with a `path,class` header. Other columns are ignored and
/// lines starting with `#` are skipped.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, InfrastructureError> {
    let rows: Vec<DatasetRow> = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(::csv::Trim::Headers)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<_, ::csv::Error>>()?;
    Ok(Dataset::new(rows))
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, InfrastructureError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    read_dataset(file).map_err(|err| match err {
        InfrastructureError::CsvError(source) => InfrastructureError::DatasetRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
