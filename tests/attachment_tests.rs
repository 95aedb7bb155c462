// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;
use tempfile::tempdir;

use tripclip::attachments;

#[test]
fn save_load_delete_roundtrip() {
    let dir = tempdir().unwrap();
    let path = attachments::save_in(dir.path(), b"jpeg bytes", Some("receipt.jpg")).unwrap();
    assert!(path.ends_with("receipt.jpg"));
    assert!(path.exists());

    let bytes = attachments::load(&path).unwrap();
    assert_eq!(bytes, b"jpeg bytes");

    attachments::delete(path.to_str());
    assert!(!path.exists());

    // deleting again (or a path that never existed) is a no-op
    attachments::delete(path.to_str());
    attachments::delete(Some("/nonexistent/file.jpg"));
    attachments::delete(None);
}

#[test]
fn generated_name_when_none_given() {
    let dir = tempdir().unwrap();
    let path = attachments::save_in(dir.path(), b"data", None).unwrap();
    assert!(path.exists());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("att-"));
}

#[test]
fn load_missing_file_is_none() {
    assert!(attachments::load(Path::new("/nonexistent/file.jpg")).is_none());
}

#[test]
fn no_temp_file_left_behind() {
    let dir = tempdir().unwrap();
    attachments::save_in(dir.path(), b"data", Some("a.jpg")).unwrap();
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
