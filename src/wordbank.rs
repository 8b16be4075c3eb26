use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Where a loaded word bank came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordbankSource {
    File(PathBuf),
    UserConfig(PathBuf),
    Embedded,
}

fn normalize(line: &str, word_size: usize) -> Option<String> {
    let word = line.trim().to_lowercase();
    (!word.is_empty()
        && word.chars().count() == word_size
        && word.chars().all(|c| c.is_ascii_alphabetic()))
    .then_some(word)
}

pub fn load_wordbank_from_str(data: &str, word_size: usize) -> Vec<String> {
    data.lines().filter_map(|line| normalize(line, word_size)).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(
    path: P,
    word_size: usize,
) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?, word_size) {
            words.push(word);
        }
    }
    Ok(words)
}

/// `<config dir>/wordlerer/wordbank.txt`, if the platform has a config dir.
#[must_use]
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordlerer").join("wordbank.txt"))
}

/// Load the explicit `path` if given, else the per-user word bank if it
/// exists, else the embedded list.
pub fn resolve_wordbank(
    path: Option<&Path>,
    word_size: usize,
) -> io::Result<(Vec<String>, WordbankSource)> {
    if let Some(path) = path {
        let words = load_wordbank_from_file(path, word_size)?;
        return Ok((words, WordbankSource::File(path.to_path_buf())));
    }
    if let Some(user_path) = default_wordbank_path()
        && user_path.is_file()
    {
        let words = load_wordbank_from_file(&user_path, word_size)?;
        return Ok((words, WordbankSource::UserConfig(user_path)));
    }
    Ok((
        load_wordbank_from_str(EMBEDDED_WORDBANK, word_size),
        WordbankSource::Embedded,
    ))
}
