use crate::config::Resource;
use crate::error::{Error, Result};
use crate::source;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// Ideographic description sequences keyed by character. The sequences are
/// opaque here and passed through as written.
#[derive(Debug, Default)]
pub struct Decompositions {
  map: HashMap<char, String>,
}

impl Decompositions {
  pub fn get(&self, character: char) -> Option<&str> {
    self.map.get(&character).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }
}

/// Converts a `U+XXXX` reference into the character it names.
pub fn parse_code_point(s: &str) -> Result<char> {
  s.strip_prefix("U+")
    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
    .and_then(char::from_u32)
    .ok_or_else(|| Error::InvalidCodePoint(s.to_string()))
}

pub fn parse_decompositions(text: &str) -> Result<Decompositions> {
  let mut rv = Decompositions::default();
  for (i, line) in text.lines().enumerate() {
    if line.starts_with('#') {
      continue;
    }
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let fields: Vec<&str> = line.split('\t').collect();
    let (code_point, decomposition) = match (fields.first(), fields.get(2)) {
      (Some(code_point), Some(decomposition)) => (code_point, decomposition),
      _ => {
        return Err(Error::MalformedDecompositionLine {
          line_no: i + 1,
          line: line.to_string(),
        })
      }
    };
    rv.map.insert(parse_code_point(code_point)?, decomposition.to_string());
  }
  Ok(rv)
}

pub fn load(resource: &Resource, data_dir: &Path) -> Result<Decompositions> {
  let rv = parse_decompositions(&source::read_text(resource, data_dir)?)?;
  debug!("Parsed {} decompositions from [{}]", rv.len(), resource.file_name);
  Ok(rv)
}
