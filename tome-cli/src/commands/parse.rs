//! Parse command implementation

use super::{display_number, parse_file, ScanOptions};
use anyhow::{bail, Result};
use std::path::Path;

/// Parse a single library file and print the result
pub fn parse(input: &str, options: &ScanOptions, json: bool) -> Result<()> {
    let input_path = Path::new(input);
    if !input_path.is_file() {
        bail!("File not found: {}", input);
    }

    let parser = options.parser();
    let Some(info) = parse_file(&parser, input_path, options) else {
        bail!("{}: unparseable", input);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Series:      {}", info.series);
    if info.series_sort != info.series {
        println!("Sort as:     {}", info.series_sort);
    }
    if !info.localized_series.is_empty() {
        println!("Localized:   {}", info.localized_series);
    }
    println!("Volume:      {}", display_number(&info.volumes));
    println!("Chapter:     {}", display_number(&info.chapters));
    println!("Title:       {}", info.title);
    if !info.edition.is_empty() {
        println!("Edition:     {}", info.edition);
    }
    println!("Format:      {:?}", info.format);
    println!("Special:     {}", if info.is_special { "yes" } else { "no" });

    if let Some(meta) = &info.comic_info {
        if !meta.isbn.is_empty() {
            println!("ISBN:        {}", meta.isbn);
        }
        println!("Age rating:  {}", meta.age_rating.label());
        if let Some(date) = meta.release_date {
            println!("Released:    {}", date);
        }
        if !meta.people.is_empty() {
            let names: Vec<_> = meta.people.iter().map(|p| p.name.as_str()).collect();
            println!("People:      {}", names.join(", "));
        }
    }

    Ok(())
}
