//! Reading command line amounts and JSON documents.

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tally_core::amount::parse_decimal_text;
use tally_shared::{AppError, AppResult};

/// Strict amount parser for arguments; unlike form fields, garbage is an error.
pub fn parse_decimal_arg(raw: &str) -> Result<Decimal, String> {
    parse_decimal_text(raw).ok_or_else(|| format!("not an amount: {raw}"))
}

/// Parser for an allocated amount. `NaN` means nothing is allocated yet and
/// is read as zero; anything else must be a real amount.
pub fn parse_allocated_arg(raw: &str) -> Result<Decimal, String> {
    if raw.trim().eq_ignore_ascii_case("nan") {
        return Ok(Decimal::ZERO);
    }
    parse_decimal_arg(raw)
}

/// Reads a file, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|err| AppError::Io(format!("{}: {err}", path.display())))
}

/// Reads and deserializes a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let text = read_source(path)?;
    serde_json::from_str(&text)
        .map_err(|err| AppError::InvalidInput(format!("{}: {err}", path.display())))
}
