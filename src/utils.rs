use crate::error::{HarvestError, Result};
use std::fs;
use std::path::Path;
use url::Url;

/// Reads a list with one item per line and no header
pub fn read_plain_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| HarvestError::io(path, e))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads the `column` values of a CSV file with a header row
pub fn read_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let file = fs::File::open(path).map_err(|e| HarvestError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let index = reader
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| {
            HarvestError::Config(format!("{} has no `{}` column", path.display(), column))
        })?;

    let mut values = Vec::new();
    for row in reader.records() {
        if let Some(value) = row?.get(index).filter(|v| !v.is_empty()) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

/// Sorts `items` and keeps the `[begin, end)` slice, clamped to the list length
pub fn select_range(mut items: Vec<String>, begin: usize, end: usize) -> Result<Vec<String>> {
    if begin > end {
        return Err(HarvestError::InvalidRange { begin, end });
    }
    items.sort();
    let end = end.min(items.len());
    let begin = begin.min(end);
    Ok(items.drain(begin..end).collect())
}

/// Resolves a possibly relative link against the site base
pub fn absolutize(base: &str, link: &str) -> String {
    match Url::parse(base).and_then(|b| b.join(link)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            ::log::warn!("Could not resolve {} against {}: {}", link, base, e);
            link.to_string()
        }
    }
}
