// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for Lau Trie.
//! Loads word lists from disk and drives the trie through the public API.

use std::fs;

use lau_trie_lib::config::{DictionaryConfig, OutputFormat};
use lau_trie_lib::dictionary;
use lau_trie_lib::error::{DictionaryError, LauError};
use lau_trie_lib::session::Session;
use lau_trie_lib::LauTrie;

#[test]
fn test_fresh_trie() {
    let trie = LauTrie::new();
    assert!(trie.search("foo").is_empty());
    assert!(!trie.exists("foo"));
    assert!(trie.is_empty());
}

#[test]
fn test_load_dictionaries_and_search() {
    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("names.txt");
    let drinks = dir.path().join("drinks.txt");
    fs::write(&names, "# names\nan\nanna\nannabelle\nanna\n").unwrap();
    fs::write(&drinks, "tea\n\nteapot\n  teavana  \n").unwrap();

    let config = DictionaryConfig {
        paths: vec![names, drinks],
        ..Default::default()
    };
    let mut trie = LauTrie::new();
    let read = dictionary::load_all(&mut trie, &config).unwrap();

    assert_eq!(read, 7);
    assert_eq!(trie.len(), 6);
    assert_eq!(trie.search("an"), vec!["an", "anna", "annabelle"]);
    assert_eq!(trie.search("te"), vec!["tea", "teapot", "teavana"]);
    assert!(!trie.exists("# names"));
}

#[test]
fn test_load_missing_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let config = DictionaryConfig {
        paths: vec![missing.clone()],
        ..Default::default()
    };

    let mut trie = LauTrie::new();
    let err = dictionary::load_all(&mut trie, &config).unwrap_err();
    assert!(matches!(
        err,
        LauError::Dictionary(DictionaryError::NotFound(path)) if path == missing
    ));
}

#[test]
fn test_load_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, [b'o', b'k', b'\n', 0xff, 0xfe, b'\n']).unwrap();

    let mut trie = LauTrie::new();
    let err = dictionary::load_file(&path, &mut trie, &DictionaryConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        LauError::Dictionary(DictionaryError::Read { line: 2, .. })
    ));
    assert!(trie.is_empty());
}

#[test]
fn test_delete_lifecycle() {
    let mut trie: LauTrie = ["an", "anna"].into_iter().collect();

    assert!(!trie.delete("ann"));
    assert!(trie.delete("an"));
    assert!(!trie.delete("an"));
    assert!(!trie.exists("an"));
    assert!(trie.exists("anna"));

    trie.insert("an");
    assert_eq!(trie.search("an"), vec!["an", "anna"]);
}

#[test]
fn test_session_over_loaded_trie() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "tea\nteapot\n").unwrap();

    let mut trie = LauTrie::new();
    dictionary::load_file(&words, &mut trie, &DictionaryConfig::default()).unwrap();

    let mut out = Vec::new();
    let mut session = Session::new(trie, &mut out, OutputFormat::Plain);
    let executed = session
        .run("search tea\ninsert teavana\nsearch teav\nquit\nlen\n".as_bytes())
        .unwrap();
    let trie = session.into_trie();

    assert_eq!(executed, 4);
    assert_eq!(trie.len(), 3);
    assert_eq!(String::from_utf8(out).unwrap(), "tea\nteapot\nteavana\n");
}
