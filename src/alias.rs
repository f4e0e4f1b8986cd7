use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ShellError;

// Skeleton written on first run, mirrors the file users get on a fresh setup.
const SKELETON: &str = "###\n#\n# nsh aliases\n#\n###\n#\n\nalias ll='ls -lAh'\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub expansion: String,
}

/// Insertion-ordered alias collection, loaded once at startup and
/// append-only afterwards. Duplicate names are legal; lookups return the
/// first match, so only the earliest entry per name is active.
#[derive(Debug, Default)]
pub struct AliasTable {
    entries: Vec<Alias>,
}

impl AliasTable {
    /// Load aliases from `path`, creating a skeleton file first if it
    /// does not exist yet.
    ///
    /// Fails only when the file can neither be created nor opened. A read
    /// error halfway through keeps whatever parsed so far.
    pub fn load(path: &Path) -> Result<Self, ShellError> {
        if !path.exists() {
            fs::write(path, SKELETON).map_err(|e| ShellError::ConfigUnavailable {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let file = File::open(path).map_err(|e| ShellError::ConfigUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut table = Self::default();
        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => {
                    if let Some(alias) = parse_alias_line(&line) {
                        table.insert(alias);
                    }
                }
                // best effort: keep the partial table
                Err(_) => break,
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, alias: Alias) {
        self.entries.push(alias);
    }

    /// First alias whose name equals `name`.
    pub fn find_exact(&self, name: &str) -> Option<&Alias> {
        self.entries.iter().find(|a| a.name == name)
    }

    /// First alias whose name equals the entire trimmed line. Aliases only
    /// fire on whole-line matches, never on the command word alone.
    pub fn find_full_line(&self, line: &str) -> Option<&Alias> {
        let line = line.trim();
        self.entries.iter().find(|a| a.name == line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.entries.iter()
    }
}

/// Parse one config line of the shape `alias NAME='VALUE'`.
///
/// Lines not starting with `alias ` are ignored (comments, blanks).
/// Malformed candidates are skipped rather than failing the load.
fn parse_alias_line(line: &str) -> Option<Alias> {
    let (head, value) = line.split_once('=')?;
    let name = head.strip_prefix("alias ")?;
    if name.is_empty() {
        return None;
    }
    let expansion = trim_quotes(value);
    if expansion.is_empty() {
        return None;
    }
    Some(Alias {
        name: name.to_string(),
        expansion: expansion.to_string(),
    })
}

// A leading quote is dropped even when the closing one is missing,
// matching the original's unconditional strip.
fn trim_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(rest) = value.strip_prefix(quote) {
            return rest.strip_suffix(quote).unwrap_or(rest);
        }
    }
    value
}
