use crate::config::Resource;
use crate::error::{Error, Result};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a cached resource and decodes it with the resource's encoding. For
/// archives, only the configured member is read.
pub fn read_text(resource: &Resource, data_dir: &Path) -> Result<String> {
  let path = resource.local_path(data_dir);
  let bytes = match resource.member {
    Some(ref member) => read_member(&path, member)?,
    None => std::fs::read(&path)?,
  };
  decode(&bytes, resource.encoding, &resource.file_name)
}

fn read_member(path: &Path, member: &str) -> Result<Vec<u8>> {
  let mut archive = zip::ZipArchive::new(File::open(path)?)?;
  let mut file = archive.by_name(member)?;
  let mut rv = Vec::new();
  file.read_to_end(&mut rv)?;
  Ok(rv)
}

// A BOM never overrides the configured encoding, and malformed bytes are fatal.
fn decode(bytes: &[u8], encoding: &'static Encoding, name: &str) -> Result<String> {
  encoding
    .decode_without_bom_handling_and_without_replacement(bytes)
    .map(|text| text.into_owned())
    .ok_or_else(|| Error::Decode {
      resource: name.to_string(),
      encoding: encoding.name(),
    })
}
