//! Sort-title command implementation

use anyhow::Result;

/// Print the sortable form of a title
pub fn sort_title(title: &str) -> Result<()> {
    println!("{}", tome_core::sort_title(title));
    Ok(())
}
