//! Image and symbol loading.
//!
//! This module reads program files from the host. It performs:
//! 1. **Binary loading:** Reads a raw image from disk into a byte buffer.
//! 2. **Image placement:** Copies the image to the base of guest memory.
//! 3. **Symbol extraction:** Collects the function symbols of an ELF file for ftrace.

use std::fs;
use std::path::Path;

use object::{Object, ObjectSymbol, SymbolKind};
use tracing::info;

use crate::common::SimError;
use crate::sim::symbols::{Symbol, SymbolTable};
use crate::soc::Memory;

/// Loads a file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the file.
///
/// # Errors
///
/// Returns `SimError::EmptyImagePath` for an empty path and
/// `SimError::ImageRead` if the file cannot be read.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, SimError> {
    if path.as_os_str().is_empty() {
        return Err(SimError::EmptyImagePath);
    }
    fs::read(path).map_err(|source| SimError::ImageRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a raw binary image at the base of `mem`.
///
/// # Returns
///
/// The image size in bytes.
///
/// # Errors
///
/// Fails if the file cannot be read or does not fit in the memory window.
pub fn load_image(mem: &mut Memory, path: &Path) -> Result<usize, SimError> {
    let image = load_binary(path)?;
    mem.load_image(&image)?;
    info!(
        path = %path.display(),
        size = image.len(),
        base = format_args!("{:#010x}", mem.base()),
        "image loaded"
    );
    Ok(image.len())
}

/// Extracts the function symbols of an ELF file.
///
/// Only symbols of type `STT_FUNC` with a non-empty name are kept.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a valid ELF object.
pub fn load_elf_symbols(path: &Path) -> Result<SymbolTable, SimError> {
    let data = load_binary(path)?;
    let file = object::File::parse(&*data)?;
    let symbols: Vec<Symbol> = file
        .symbols()
        .filter(|sym| sym.kind() == SymbolKind::Text)
        .filter_map(|sym| {
            let name = sym.name().ok().filter(|n| !n.is_empty())?;
            Some(Symbol {
                addr: sym.address(),
                name: name.to_owned(),
            })
        })
        .collect();
    info!(path = %path.display(), count = symbols.len(), "function symbols loaded");
    Ok(SymbolTable::new(symbols))
}
