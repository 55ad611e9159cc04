use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("download failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("archive error: {0}")]
  Archive(#[from] zip::result::ZipError),

  #[error("[{resource}] is not valid {encoding}")]
  Decode { resource: String, encoding: &'static str },

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("line {line_no}: not a dictionary entry: {line:?}")]
  MalformedDictionaryLine { line_no: usize, line: String },

  #[error("line {line_no}: expected at least 3 tab-separated fields: {line:?}")]
  MalformedDecompositionLine { line_no: usize, line: String },

  #[error("invalid code point reference {0:?}")]
  InvalidCodePoint(String),

  /// The character has a dictionary entry but no decomposition.
  #[error("character {0:?} is in the dictionary but has no decomposition")]
  MissingDecomposition(String),
}

pub type Result<T> = std::result::Result<T, Error>;
