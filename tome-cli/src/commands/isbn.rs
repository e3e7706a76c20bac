//! ISBN command implementation

use anyhow::{bail, Result};
use tome_core::identifiers;

/// Print the validated identifier, failing when it is not a valid ISBN
pub fn isbn(value: &str) -> Result<()> {
    let validated = identifiers::validate(value.trim());
    if validated.is_empty() {
        bail!("Invalid ISBN: {}", value);
    }

    println!("{}", validated);
    Ok(())
}
