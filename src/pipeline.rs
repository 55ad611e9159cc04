use crate::cards;
use crate::cedict;
use crate::config::Config;
use crate::decomposition;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::frequency;
use log::{info, warn};
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
  pub character_cards: usize,
  pub skipped_characters: usize,
  pub word_cards: usize,
  pub skipped_words: usize,
}

/// Fetches anything missing from the cache, then rebuilds both decks.
pub fn run(config: &Config, fetcher: &Fetcher) -> Result<Summary> {
  fetcher.ensure_all(config)?;
  build(config)
}

/// Builds both decks from resources that are already cached.
pub fn build(config: &Config) -> Result<Summary> {
  info!("Parsing dictionary");
  let dict = cedict::load(&config.dictionary, &config.data_dir)?;
  if dict.is_empty() {
    warn!("Dictionary [{}] has no entries, every card will be skipped", config.dictionary.file_name);
  }
  info!("Parsing decompositions");
  let decompositions = decomposition::load(&config.decompositions, &config.data_dir)?;
  info!("Parsing frequency lists");
  let characters = frequency::load(&config.characters, &config.data_dir)?;
  let words = frequency::load(&config.words, &config.data_dir)?;

  let character_cards =
    cards::build_character_cards(&dict, &characters, &decompositions, config.missing_decomposition)?;
  let word_cards = cards::build_word_cards(&dict, &words);

  fs::create_dir_all(&config.output_dir)?;
  let path = config.character_cards_path();
  info!("Writing {} character cards to [{}]", character_cards.len(), path.display());
  cards::write_cards(&character_cards, &path)?;
  let path = config.word_cards_path();
  info!("Writing {} word cards to [{}]", word_cards.len(), path.display());
  cards::write_cards(&word_cards, &path)?;

  Ok(Summary {
    character_cards: character_cards.len(),
    skipped_characters: characters.len() - character_cards.len(),
    word_cards: word_cards.len(),
    skipped_words: words.len() - word_cards.len(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::MissingDecompositionPolicy;
  use crate::source::tests::write_zip;
  use encoding_rs::GBK;
  use std::path::Path;

  fn seed(data_dir: &Path, config: &Config) {
    fs::create_dir_all(data_dir).unwrap();
    write_zip(
      &config.dictionary.local_path(data_dir),
      "cedict_ts.u8",
      "\
# CC-CEDICT
你 你 [ni3] /you (informal)/
好 好 [hao3] /good/well/
你好 你好 [ni3 hao3] /hello, hi/
我們 我们 [wo3 men5] /we/us/
"
      .as_bytes(),
    );
    fs::write(
      config.decompositions.local_path(data_dir),
      "#\tcjkvi-ids\nU+4F60\t你\t⿰亻尔\nU+597D\t好\t⿰女子\n",
    )
    .unwrap();
    let (chr, _, _) = GBK.encode("\"Total\"\nCharacter\tCHRCount\n的\t10\n好\t9\n你\t8\n");
    write_zip(&config.characters.local_path(data_dir), "SUBTLEX-CH-CHR", &chr);
    let (wf, _, _) = GBK.encode("\"Total\"\nWord\tLength\n我们\t8\n你好\t7\n谢谢\t6\n");
    write_zip(&config.words.local_path(data_dir), "SUBTLEX-CH-WF", &wf);
  }

  #[test]
  fn builds_both_decks() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.data_dir = dir.path().join("data");
    config.output_dir = dir.path().join("out");
    seed(&config.data_dir, &config);

    let summary = build(&config).unwrap();
    assert_eq!(
      summary,
      Summary { character_cards: 2, skipped_characters: 1, word_cards: 2, skipped_words: 2 }
    );
    assert_eq!(
      fs::read_to_string(config.character_cards_path()).unwrap(),
      "好,好,good/well,hao3,⿰女子\n你,你,you (informal),ni3,⿰亻尔\n"
    );
    assert_eq!(
      fs::read_to_string(config.word_cards_path()).unwrap(),
      "我们,我們,we/us,wo3 men5\n你好,你好,\"hello, hi\",ni3 hao3\n"
    );
  }

  #[test]
  fn missing_decomposition_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.data_dir = dir.path().join("data");
    config.output_dir = dir.path().join("out");
    seed(&config.data_dir, &config);
    fs::write(config.decompositions.local_path(&config.data_dir), "U+4F60\t你\t⿰亻尔\n").unwrap();

    assert!(build(&config).is_err());
    assert!(!config.character_cards_path().exists());

    config.missing_decomposition = MissingDecompositionPolicy::Skip;
    let summary = build(&config).unwrap();
    assert_eq!(summary.character_cards, 1);
    assert_eq!(summary.skipped_characters, 2);
  }
}
