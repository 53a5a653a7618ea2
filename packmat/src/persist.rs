//! Text-layout persistence
//!
//! Files hold exactly the `Display` text of a store. Saving never inspects
//! the content; loading parses the whole file or nothing.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::{debug, warn};
use packmat_core::TextLayout;

use crate::error::{PersistError, Result};

/// Write `store` to any byte sink in its text layout
pub fn save_to<M: TextLayout, W: Write>(store: &M, writer: W) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    write!(writer, "{store}")?;
    writer.flush()
}

/// Read a whole byte source and parse it as a store
pub fn load_from<M: TextLayout, R: Read>(mut reader: R) -> Result<M> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(PersistError::Stream)?;
    Ok(M::parse_text(&text)?)
}

/// Create or truncate `path` and write `store` into it
pub fn save<M: TextLayout>(store: &M, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!("saving store to {}", path.display());
    let file = File::create(path).map_err(|e| PersistError::io(path, e))?;
    save_to(store, file).map_err(|e| PersistError::io(path, e))
}

/// Load a store previously written by [`save`]
pub fn load<M: TextLayout>(path: impl AsRef<Path>) -> Result<M> {
    let path = path.as_ref();
    debug!("loading store from {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|e| PersistError::io(path, e))?;
    M::parse_text(&text).map_err(|e| {
        warn!("malformed store file {}: {e}", path.display());
        PersistError::Store(e)
    })
}
