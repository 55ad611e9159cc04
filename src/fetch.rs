use crate::config::{Config, Resource};
use crate::error::Result;
use log::info;
use reqwest::blocking::{Client, ClientBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Fetcher {
  client: Client,
}

// No total timeout: a download blocks until the body is complete.
fn client_builder() -> ClientBuilder {
  Client::builder().timeout(None)
}

impl Fetcher {
  pub fn new() -> Result<Fetcher> {
    Ok(Fetcher::with_client(client_builder().build()?))
  }

  pub fn with_client(client: Client) -> Fetcher {
    Fetcher { client }
  }

  /// Makes sure `resource` is cached in `data_dir` and returns its path.
  ///
  /// A file that is already present is trusted as-is. Otherwise the whole body
  /// is downloaded into a temporary file next to the target and renamed into
  /// place, so an interrupted download never looks cached.
  pub fn ensure_local(&self, resource: &Resource, data_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let target = resource.local_path(data_dir);
    if target.exists() {
      info!("File already exists: [{}], skipping!", resource.file_name);
      return Ok(target);
    }

    info!("Downloading [{}] to [{}]", resource.url, resource.file_name);
    let body = self.client.get(&resource.url).send()?.error_for_status()?.bytes()?;

    let mut tmp = tempfile::NamedTempFile::new_in(data_dir)?;
    tmp.write_all(&body)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(target)
  }

  pub fn ensure_all(&self, config: &Config) -> Result<()> {
    for resource in config.resources() {
      self.ensure_local(resource, &config.data_dir)?;
    }
    Ok(())
  }
}
