//! Byte and JSON input/output for command handlers.

use serde::Serialize;
use std::path::Path;
use strata::{JsonError, StorageError, StorageErrorKind, StrataResult};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Read a command's payload from `file`, or from stdin when absent.
pub async fn read_input(file: Option<&Path>) -> StrataResult<Vec<u8>> {
    match file {
        Some(path) => tokio::fs::read(path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Read(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
            .into()
        }),
        None => {
            let mut data = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut data)
                .await
                .map_err(|e| StorageError::new(StorageErrorKind::Read(format!("stdin: {}", e))))?;
            Ok(data)
        }
    }
}

/// Write bytes to `out`, or to stdout when absent.
pub async fn write_output(out: Option<&Path>, data: &[u8]) -> StrataResult<()> {
    match out {
        Some(path) => tokio::fs::write(path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "Failed to write {}: {}",
                path.display(),
                e
            )))
            .into()
        }),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(data)
                .await
                .map_err(|e| StorageError::new(StorageErrorKind::Write(format!("stdout: {}", e))))?;
            stdout
                .flush()
                .await
                .map_err(|e| StorageError::new(StorageErrorKind::Write(format!("stdout: {}", e))))?;
            Ok(())
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> StrataResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
