mod cards;
mod cedict;
mod config;
mod decomposition;
mod error;
mod fetch;
mod frequency;
mod pipeline;
mod source;

use anyhow::Context;
use config::{Config, MissingDecompositionPolicy};
use getopts::Options;
use log::info;
use std::path::PathBuf;

fn print_usage(program: &str, opts: &Options) {
  let brief = format!(
    "Usage: {} [options]\n\nDownloads CC-CEDICT, cjkvi-ids and SUBTLEX-CH, then writes {} and {}.",
    program,
    config::CHARACTER_CARDS_FILE,
    config::WORD_CARDS_FILE
  );
  print!("{}", opts.usage(&brief));
}

fn options() -> Options {
  let mut rv = Options::new();
  rv.optopt("d", "data-dir", "where downloads are cached (default: data)", "DIR");
  rv.optopt("o", "output-dir", "where the CSV files are written (default: .)", "DIR");
  rv.optflag(
    "",
    "skip-missing-decompositions",
    "skip characters with no decomposition instead of failing",
  );
  rv.optflag("h", "help", "print this help menu");
  rv
}

// Returns None when only help was asked for. No arguments means the defaults.
fn config_from_args(opts: &Options, args: &[String]) -> anyhow::Result<Option<Config>> {
  let matches = opts.parse(args).context("bad arguments")?;
  if matches.opt_present("h") {
    return Ok(None);
  }

  let mut rv = Config::default();
  if let Some(dir) = matches.opt_str("d") {
    rv.data_dir = PathBuf::from(dir);
  }
  if let Some(dir) = matches.opt_str("o") {
    rv.output_dir = PathBuf::from(dir);
  }
  if matches.opt_present("skip-missing-decompositions") {
    rv.missing_decomposition = MissingDecompositionPolicy::Skip;
  }
  Ok(Some(rv))
}

fn main() -> anyhow::Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args: Vec<String> = std::env::args().collect();
  let program = args.first().map(String::as_str).unwrap_or("hanzi_cards");
  let opts = options();
  let config = match config_from_args(&opts, args.get(1..).unwrap_or_default())? {
    Some(config) => config,
    None => {
      print_usage(program, &opts);
      return Ok(());
    }
  };

  let fetcher = fetch::Fetcher::new().context("could not set up HTTP client")?;
  let summary = pipeline::run(&config, &fetcher).context("could not build flashcards")?;

  info!(
    "Done: {} character cards ({} skipped), {} word cards ({} skipped)",
    summary.character_cards, summary.skipped_characters, summary.word_cards, summary.skipped_words
  );
  Ok(())
}
