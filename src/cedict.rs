use crate::config::Resource;
use crate::error::{Error, Result};
use crate::source;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

// Anchored at the start only, anything after the last slash is ignored.
static ENTRY_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([^\s]+?) ([^\s]+?) \[([^\]]+)\] /(.+)/").expect("entry regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  simplified: String,
  traditional: String,
  pronunciation: String,
  meaning: String,
}

impl Entry {
  pub fn simplified(&self) -> &str {
    &self.simplified
  }

  pub fn traditional(&self) -> &str {
    &self.traditional
  }

  /// Numbered pinyin as written in CEDICT, e.g. `ni3 hao3`.
  pub fn pronunciation(&self) -> &str {
    &self.pronunciation
  }

  /// Every definition, still joined by `/`.
  pub fn meaning(&self) -> &str {
    &self.meaning
  }
}

fn parse_entry(line: &str) -> Option<Entry> {
  ENTRY_RE.captures(line).map(|cap| Entry {
    traditional: cap[1].trim().to_string(),
    simplified: cap[2].trim().to_string(),
    pronunciation: cap[3].trim().to_string(),
    meaning: cap[4].trim().to_string(),
  })
}

/// CEDICT entries keyed by simplified form. When several entries share a
/// simplified form, the one listed last wins.
#[derive(Debug, Default)]
pub struct Dict {
  entries: HashMap<String, Entry>,
}

impl Dict {
  pub fn get(&self, simplified: &str) -> Option<&Entry> {
    self.entries.get(simplified)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

pub fn parse_dict(text: &str) -> Result<Dict> {
  let mut rv = Dict::default();
  for (i, line) in text.lines().enumerate() {
    if line.starts_with('#') {
      continue;
    }
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let entry = parse_entry(line).ok_or_else(|| Error::MalformedDictionaryLine {
      line_no: i + 1,
      line: line.to_string(),
    })?;
    rv.entries.insert(entry.simplified().to_string(), entry);
  }
  Ok(rv)
}

pub fn load(resource: &Resource, data_dir: &Path) -> Result<Dict> {
  let rv = parse_dict(&source::read_text(resource, data_dir)?)?;
  debug!("Parsed {} dictionary entries from [{}]", rv.len(), resource.file_name);
  Ok(rv)
}
