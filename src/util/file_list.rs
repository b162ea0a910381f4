//! `@listfile` expansion.
//!
//! A command-line token `@path` names a text file holding one input filename
//! per line.  With `@@path` every entry is taken relative to the directory of
//! the list file itself instead of the working directory.
//!
//! Each line has leading spaces and trailing spaces, carriage returns and
//! newlines removed; lines left empty are skipped.  Lines have no length
//! limit.
//!
//! The relative prefix is the list path up to and including its last `/`.
//! A list path without `/` already lives in the working directory, so its
//! entries are used as written.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileListError {
    #[error("failed opening filename list: \"{path}\": {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed reading filename list: \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Splits a `@`/`@@` token into the list path and whether to relativize.
///
/// Returns `None` when `token` does not start with `@`.
pub fn parse_list_token(token: &str) -> Option<(&str, bool)> {
    if let Some(path) = token.strip_prefix("@@") {
        Some((path, true))
    } else {
        token.strip_prefix('@').map(|path| (path, false))
    }
}

/// Expands `token` into the filenames listed in the file it names.
pub fn load_file_list(token: &str) -> Result<Vec<String>, FileListError> {
    let mut filenames = Vec::new();
    load_file_list_into(token, &mut filenames)?;
    Ok(filenames)
}

/// Like [`load_file_list`], appending to `filenames`.
///
/// On error, entries read before the failure stay appended.
pub fn load_file_list_into(
    token: &str,
    filenames: &mut Vec<String>,
) -> Result<(), FileListError> {
    let (list_name, relativize) = parse_list_token(token).unwrap_or((token, false));

    let file = File::open(list_name).map_err(|source| FileListError::Open {
        path: list_name.to_owned(),
        source,
    })?;

    let dirname = if relativize {
        list_name.rfind('/').map(|end| &list_name[..=end])
    } else {
        None
    };

    let before = filenames.len();
    read_names(BufReader::new(file), dirname, filenames).map_err(|source| {
        FileListError::Read {
            path: list_name.to_owned(),
            source,
        }
    })?;

    debug!(
        "loaded {} filename(s) from \"{}\"{}",
        filenames.len() - before,
        list_name,
        if dirname.is_some() { " (relative)" } else { "" }
    );
    Ok(())
}

fn read_names<R: BufRead>(
    mut reader: R,
    dirname: Option<&str>,
    filenames: &mut Vec<String>,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let name = trim_entry(&line);
        if name.is_empty() {
            continue;
        }
        match dirname {
            Some(dir) => filenames.push(format!("{dir}{name}")),
            None => filenames.push(name.to_owned()),
        }
    }
}

fn trim_entry(line: &str) -> &str {
    line.trim_start_matches(' ')
        .trim_end_matches([' ', '\r', '\n'])
}
