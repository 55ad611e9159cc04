use crate::config::Resource;
use crate::error::Result;
use crate::source;
use log::debug;
use std::path::Path;

fn is_header(line: &str) -> bool {
  line.starts_with('"') || line.starts_with("Character")
}

/// Returns the first column of a SUBTLEX-CH table, most frequent first.
pub fn parse_frequency_list(text: &str) -> Vec<String> {
  text
    .lines()
    .filter(|line| !line.is_empty() && !is_header(line))
    .map(|line| line.split('\t').next().unwrap_or(line).to_string())
    .collect()
}

pub fn load(resource: &Resource, data_dir: &Path) -> Result<Vec<String>> {
  let rv = parse_frequency_list(&source::read_text(resource, data_dir)?);
  debug!("Parsed {} frequency list entries from [{}]", rv.len(), resource.file_name);
  Ok(rv)
}
