use crate::error::ReportError;

use std::path::Path;

/// The input must be an existing `.json` file.
pub fn validate_source(path: &Path) -> Result<(), ReportError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if !is_json {
        return Err(ReportError::InvalidSource(format!(
            "'{}' is not a JSON file",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(ReportError::InvalidSource(format!(
            "'{}' does not exist",
            path.display()
        )));
    }

    Ok(())
}

pub async fn read_source(path: &Path) -> Result<Vec<u8>, ReportError> {
    validate_source(path)?;
    Ok(tokio::fs::read(path).await?)
}
