use encoding_rs::{Encoding, GBK, UTF_8};
use std::path::{Path, PathBuf};

pub const CHARACTER_CARDS_FILE: &str = "character_cards.csv";
pub const WORD_CARDS_FILE: &str = "word_cards.csv";

const CEDICT_URL: &str = "https://www.mdbg.net/chinese/export/cedict/cedict_1_0_ts_utf-8_mdbg.zip";
const IDS_URL: &str = "https://raw.githubusercontent.com/cjkvi/cjkvi-ids/master/ids.txt";
const SUBTLEX_CHR_URL: &str =
  "https://www.ugent.be/pp/experimentele-psychologie/en/research/documents/subtlexch/subtlexchchr.zip/at_download/file";
const SUBTLEX_WF_URL: &str =
  "https://www.ugent.be/pp/experimentele-psychologie/en/research/documents/subtlexch/subtlexchwf.zip/at_download/file";

/// A remote file that gets cached under the data directory.
///
/// `member` is set for zip archives and names the file to read inside the
/// archive. `encoding` is how that file's bytes are decoded.
#[derive(Debug, Clone)]
pub struct Resource {
  pub url: String,
  pub file_name: String,
  pub member: Option<String>,
  pub encoding: &'static Encoding,
}

impl Resource {
  pub fn file(url: &str, file_name: &str, encoding: &'static Encoding) -> Resource {
    Resource {
      url: url.to_string(),
      file_name: file_name.to_string(),
      member: None,
      encoding,
    }
  }

  pub fn archive(url: &str, file_name: &str, member: &str, encoding: &'static Encoding) -> Resource {
    Resource {
      url: url.to_string(),
      file_name: file_name.to_string(),
      member: Some(member.to_string()),
      encoding,
    }
  }

  pub fn local_path(&self, data_dir: &Path) -> PathBuf {
    data_dir.join(&self.file_name)
  }
}

/// What to do with a character that has a dictionary entry but no
/// decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDecompositionPolicy {
  #[default]
  Fail,
  Skip,
}

#[derive(Debug, Clone)]
pub struct Config {
  pub data_dir: PathBuf,
  pub output_dir: PathBuf,
  pub dictionary: Resource,
  pub decompositions: Resource,
  pub characters: Resource,
  pub words: Resource,
  pub missing_decomposition: MissingDecompositionPolicy,
}

impl Config {
  pub fn character_cards_path(&self) -> PathBuf {
    self.output_dir.join(CHARACTER_CARDS_FILE)
  }

  pub fn word_cards_path(&self) -> PathBuf {
    self.output_dir.join(WORD_CARDS_FILE)
  }

  /// Resources in the order they are fetched.
  pub fn resources(&self) -> [&Resource; 4] {
    [&self.dictionary, &self.decompositions, &self.characters, &self.words]
  }
}

impl Default for Config {
  fn default() -> Config {
    Config {
      data_dir: PathBuf::from("data"),
      output_dir: PathBuf::from("."),
      dictionary: Resource::archive(CEDICT_URL, "cedict.zip", "cedict_ts.u8", UTF_8),
      decompositions: Resource::file(IDS_URL, "ids.txt", UTF_8),
      // the SUBTLEX-CH tables are GBK, unlike everything else
      characters: Resource::archive(SUBTLEX_CHR_URL, "subtlexchchr.zip", "SUBTLEX-CH-CHR", GBK),
      words: Resource::archive(SUBTLEX_WF_URL, "subtlexchwf.zip", "SUBTLEX-CH-WF", GBK),
      missing_decomposition: MissingDecompositionPolicy::default(),
    }
  }
}
