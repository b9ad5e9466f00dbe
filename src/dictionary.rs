// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list loading.
//!
//! Dictionaries are plain text files holding one word per line. Lines are
//! interpreted according to [`DictionaryConfig`]: optionally trimmed, with
//! blank lines and comment lines skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::DictionaryConfig;
use crate::data_structures::LauTrie;
use crate::error::{DictionaryError, LauResult};

/// Turns a raw line into a word, or `None` if the line should be skipped.
fn parse_line<'a>(line: &'a str, config: &DictionaryConfig) -> Option<&'a str> {
    let word = if config.trim { line.trim() } else { line };

    if config.skip_blank && word.trim().is_empty() {
        return None;
    }
    if let Some(prefix) = config.comment_prefix() {
        if word.starts_with(prefix) {
            return None;
        }
    }
    Some(word)
}

/// Reads the words of a dictionary from `reader`.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The words in file order, duplicates included.
/// * `Err(DictionaryError::Line)` - If reading failed, with the 1-based line.
pub fn read_words<R: BufRead>(
    reader: R,
    config: &DictionaryConfig,
) -> Result<Vec<String>, DictionaryError> {
    let mut words = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Line {
            line: index + 1,
            source,
        })?;
        if let Some(word) = parse_line(&line, config) {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Inserts every word of the dictionary at `path` into `trie`.
///
/// The file is read in full before anything is inserted, so a failed load
/// leaves `trie` untouched.
///
/// # Returns
///
/// * `Ok(usize)` - The number of words read from the file.
/// * `Err(LauError)` - If the file is missing or could not be read.
pub fn load_file<P: AsRef<Path>>(
    path: P,
    trie: &mut LauTrie,
    config: &DictionaryConfig,
) -> LauResult<usize> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DictionaryError::NotFound(path.to_path_buf()).into());
    }

    let file = File::open(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        line: 0,
        source,
    })?;

    let words = read_words(BufReader::new(file), config).map_err(|e| e.at_path(path))?;
    let count = words.len();
    trie.extend(words);

    debug!(path = %path.display(), words = count, "loaded dictionary");
    Ok(count)
}

/// Loads every dictionary listed in `config` into `trie`, in order.
///
/// # Returns
///
/// * `Ok(usize)` - The total number of words read across all files.
/// * `Err(LauError)` - On the first file that fails to load.
pub fn load_all(trie: &mut LauTrie, config: &DictionaryConfig) -> LauResult<usize> {
    let mut total = 0;
    for path in &config.paths {
        total += load_file(path, trie, config)?;
    }
    if !config.paths.is_empty() {
        info!(
            files = config.paths.len(),
            words = total,
            stored = trie.len(),
            "dictionaries loaded"
        );
    }
    Ok(total)
}
