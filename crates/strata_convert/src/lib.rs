//! Read-time content conversion for Strata fragments.
//!
//! Stored bytes are never rewritten; conversion happens when a caller asks for
//! a fragment in a different representation. Dispatch is by [`FormatFamily`]:
//! one handler per family, with unknown types passed through untouched.
//!
//! # Example
//!
//! ```rust
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let html = strata_convert::convert(b"# Title".to_vec(), "text/markdown", "html").await?;
//! assert_eq!(String::from_utf8(html)?, "<h1>Title</h1>\n");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod csv;
mod markup;
mod raster;
mod structured;

use strata_error::{ConversionError, StrataResult};
use strata_formats::{FormatFamily, MediaType, normalize_extension};

/// Convert `data` of `source_type` into the representation named by `extension`.
///
/// MIME parameters on `source_type` are ignored. Targets a family does not
/// handle, and source types outside the registry, return `data` unchanged.
///
/// # Errors
///
/// Every parse or codec failure is reported as a [`ConversionError`] carrying
/// the underlying message.
#[tracing::instrument(skip(data), fields(size = data.len()))]
pub async fn convert(data: Vec<u8>, source_type: &str, extension: &str) -> StrataResult<Vec<u8>> {
    let ext = normalize_extension(extension);
    let Some((base, family)) = MediaType::parse(source_type)
        .ok()
        .and_then(|mt| FormatFamily::from_base_type(mt.essence()).map(|f| (mt, f)))
    else {
        tracing::debug!("No converter for source type, passing through");
        return Ok(data);
    };
    let base = base.essence();

    let converted = match family {
        FormatFamily::PlainText => Ok(data),
        FormatFamily::Markdown => markup::markdown(data, &ext),
        FormatFamily::Html => markup::html(data, &ext),
        FormatFamily::Csv => csv::csv(data, &ext),
        FormatFamily::Json => structured::json(data, &ext),
        FormatFamily::Yaml => structured::yaml(data, &ext),
        FormatFamily::Image => raster::raster(data, base, &ext).await,
    };

    let converted =
        converted.map_err(|message| ConversionError::new(base, ext.as_str(), message))?;
    tracing::debug!(family = %family, output_size = converted.len(), "Converted content");
    Ok(converted)
}
