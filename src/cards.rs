use crate::cedict::Dict;
use crate::config::MissingDecompositionPolicy;
use crate::decomposition::Decompositions;
use crate::error::{Error, Result};
use log::{info, warn};
use serde::Serialize;
use std::io;
use std::path::Path;

// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterCard {
  character: String,
  traditional: String,
  meaning: String,
  pronunciation: String,
  decomposition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCard {
  word: String,
  traditional: String,
  meaning: String,
  pronunciation: String,
}

fn single_char(s: &str) -> Option<char> {
  let mut chars = s.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) => Some(c),
    _ => None,
  }
}

pub fn build_character_cards(
  dict: &Dict,
  characters: &[String],
  decompositions: &Decompositions,
  policy: MissingDecompositionPolicy,
) -> Result<Vec<CharacterCard>> {
  let mut rv = Vec::new();
  for character in characters {
    let entry = match dict.get(character) {
      Some(entry) => entry,
      None => {
        info!("Character not in dictionary: [{}]", character);
        continue;
      }
    };
    let decomposition = match single_char(character).and_then(|c| decompositions.get(c)) {
      Some(decomposition) => decomposition,
      None => match policy {
        MissingDecompositionPolicy::Fail => {
          return Err(Error::MissingDecomposition(character.clone()));
        }
        MissingDecompositionPolicy::Skip => {
          warn!("Character has no decomposition: [{}]", character);
          continue;
        }
      },
    };
    rv.push(CharacterCard {
      character: character.clone(),
      traditional: entry.traditional().to_string(),
      meaning: entry.meaning().to_string(),
      pronunciation: entry.pronunciation().to_string(),
      decomposition: decomposition.to_string(),
    });
  }
  Ok(rv)
}

pub fn build_word_cards(dict: &Dict, words: &[String]) -> Vec<WordCard> {
  let mut rv = Vec::new();
  for word in words {
    let entry = match dict.get(word) {
      Some(entry) => entry,
      None => {
        info!("Word not in dictionary: [{}]", word);
        continue;
      }
    };
    rv.push(WordCard {
      word: word.clone(),
      traditional: entry.traditional().to_string(),
      meaning: entry.meaning().to_string(),
      pronunciation: entry.pronunciation().to_string(),
    });
  }
  rv
}

/// Writes one headerless CSV row per card. Fields are quoted only when they
/// need to be.
pub fn write_cards_to<W: io::Write, T: Serialize>(cards: &[T], writer: W) -> Result<()> {
  let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
  for card in cards {
    wtr.serialize(card)?;
  }
  wtr.flush()?;
  Ok(())
}

/// Same as `write_cards_to`, but replaces the file at `path`.
pub fn write_cards<T: Serialize>(cards: &[T], path: &Path) -> Result<()> {
  write_cards_to(cards, std::fs::File::create(path)?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cedict::parse_dict;
  use crate::decomposition::parse_decompositions;

  fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  fn csv_of<T: Serialize>(cards: &[T]) -> String {
    let mut buf = Vec::new();
    write_cards_to(cards, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn character_missing_from_dict_is_skipped() {
    let dict = parse_dict("你 你 [ni3] /you/\n").unwrap();
    let decompositions = parse_decompositions("U+4F60\t你\t⿰亻尔\n").unwrap();
    let cards = build_character_cards(
      &dict,
      &strings(&["你", "X"]),
      &decompositions,
      MissingDecompositionPolicy::Fail,
    )
    .unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(csv_of(&cards), "你,你,you,ni3,⿰亻尔\n");
  }

  #[test]
  fn character_cards_keep_input_order() {
    let dict = parse_dict("一 一 [yi1] /one/\n是 是 [shi4] /is/\n的 的 [de5] /of/\n").unwrap();
    let decompositions = parse_decompositions("U+4E00\t一\t一\nU+662F\t是\t⿱日疋\nU+7684\t的\t⿰白勺\n").unwrap();
    let input = strings(&["的", "missing", "一", "是", "另"]);
    let cards = build_character_cards(&dict, &input, &decompositions, MissingDecompositionPolicy::Fail).unwrap();
    let characters: Vec<&str> = cards.iter().map(|c| c.character.as_str()).collect();
    assert_eq!(characters, vec!["的", "一", "是"]);
    assert_eq!(cards[2].decomposition, "⿱日疋");
  }

  #[test]
  fn missing_decomposition_fails_by_default() {
    let dict = parse_dict("你 你 [ni3] /you/\n好 好 [hao3] /good/\n").unwrap();
    let decompositions = parse_decompositions("U+4F60\t你\t⿰亻尔\n").unwrap();
    let err = build_character_cards(&dict, &strings(&["你", "好"]), &decompositions, MissingDecompositionPolicy::Fail)
      .unwrap_err();
    assert!(matches!(err, Error::MissingDecomposition(ref c) if c == "好"));
  }

  #[test]
  fn missing_decomposition_can_be_skipped() {
    let dict = parse_dict("你 你 [ni3] /you/\n好 好 [hao3] /good/\n").unwrap();
    let decompositions = parse_decompositions("U+597D\t好\t⿰女子\n").unwrap();
    let cards = build_character_cards(&dict, &strings(&["你", "好"]), &decompositions, MissingDecompositionPolicy::Skip)
      .unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].character, "好");
  }

  #[test]
  fn multi_char_entry_has_no_decomposition() {
    let dict = parse_dict("你好 你好 [ni3 hao3] /hello/\n").unwrap();
    let decompositions = parse_decompositions("U+4F60\t你\t⿰亻尔\n").unwrap();
    let cards = build_character_cards(&dict, &strings(&["你好"]), &decompositions, MissingDecompositionPolicy::Skip)
      .unwrap();
    assert!(cards.is_empty());
  }

  #[test]
  fn word_cards_use_dictionary_fields() {
    let dict = parse_dict("記錄 记录 [ji4 lu4] /to record/record/\n我們 我们 [wo3 men5] /we; us/\n").unwrap();
    let cards = build_word_cards(&dict, &strings(&["我们", "Word", "记录"]));
    assert_eq!(
      csv_of(&cards),
      "我们,我們,we; us,wo3 men5\n记录,記錄,to record/record,ji4 lu4\n"
    );
  }

  #[test]
  fn comma_in_meaning_is_quoted_and_round_trips() {
    let dict = parse_dict("你好 你好 [ni3 hao3] /hello, hi/\n").unwrap();
    let cards = build_word_cards(&dict, &strings(&["你好"]));
    let out = csv_of(&cards);
    assert_eq!(out, "你好,你好,\"hello, hi\",ni3 hao3\n");

    let mut rdr = csv::ReaderBuilder::new().has_headers(false).from_reader(out.as_bytes());
    let record = rdr.records().next().unwrap().unwrap();
    assert_eq!(&record[2], "hello, hi");
  }

  #[test]
  fn quotes_are_doubled() {
    let dict = parse_dict("說 说 [shuo1] /to say \"hi\"/\n").unwrap();
    let cards = build_word_cards(&dict, &strings(&["说"]));
    assert_eq!(csv_of(&cards), "说,說,\"to say \"\"hi\"\"\",shuo1\n");
  }

  #[test]
  fn write_cards_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("word_cards.csv");
    std::fs::write(&path, "stale contents\nmore\n").unwrap();
    let dict = parse_dict("你 你 [ni3] /you/\n").unwrap();
    write_cards(&build_word_cards(&dict, &strings(&["你"])), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "你,你,you,ni3\n");
  }
}
