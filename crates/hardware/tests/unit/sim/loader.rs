//! Image and symbol loading.

use std::io::Write;
use std::path::Path;

use rv64im_core::common::SimError;
use rv64im_core::config::Model;
use rv64im_core::sim::loader::{load_binary, load_elf_symbols};

use crate::common::TestContext;
use crate::common::builder::*;

#[test]
fn empty_path_is_rejected() {
    assert!(matches!(load_binary(Path::new("")), Err(SimError::EmptyImagePath)));
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");
    match load_binary(&path) {
        Err(SimError::ImageRead { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn raw_image_is_loaded_at_the_base() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in [addi(10, 0, 4), ebreak()] {
        file.write_all(&word.to_le_bytes()).unwrap();
    }
    file.flush().unwrap();

    let mut ctx = TestContext::new(Model::Iss);
    assert_eq!(ctx.sim.load_image(file.path()).unwrap(), 8);
    let status = ctx.run();
    assert_eq!(status.code, 4);
}

#[test]
fn non_elf_symbol_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"definitely not an object file").unwrap();
    assert!(matches!(load_elf_symbols(file.path()), Err(SimError::Elf(_))));
}
