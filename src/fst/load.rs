use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use super::error::LoadError;
use super::fsa::{Fsa, FsaBuilder};
use super::fst::{Fst, FstBuilder};
use super::output::Output;

/// Builds a minimal automaton from a file with one key per line.
///
/// Keys must be in sorted order. Lines starting with `#` are treated as
/// comments and ignored, trailing whitespace is trimmed, and empty lines are
/// skipped.
///
/// # Examples
///
/// ```no_run
/// use libfst::build_fsa_from_file;
///
/// let fsa = build_fsa_from_file("dictionary.txt").unwrap();
/// println!("{} nodes", fsa.node_count());
/// ```
pub fn build_fsa_from_file(path: impl AsRef<Path>) -> Result<Fsa<char>, LoadError> {
    let mut builder = FsaBuilder::<char>::new();
    for_each_line(path.as_ref(), |_, line| {
        builder.insert(line)?;
        Ok(())
    })?;
    Ok(builder.finish())
}

/// Builds a minimal transducer from a file of `key<TAB>value` lines.
///
/// Follows the same conventions as [`build_fsa_from_file`]. Values are parsed
/// with [`FromStr`]; a line without a tab or with a value that does not parse
/// is reported as [`LoadError::Parse`].
pub fn build_fst_from_file<O>(path: impl AsRef<Path>) -> Result<Fst<char, O>, LoadError>
where
    O: Output + FromStr,
{
    let mut builder = FstBuilder::<char, O>::new();
    for_each_line(path.as_ref(), |number, line| {
        let parse_error = || LoadError::Parse {
            line: number,
            text: line.to_owned(),
        };
        let (key, value) = line.split_once('\t').ok_or_else(parse_error)?;
        let value = value.parse::<O>().map_err(|_| parse_error())?;
        builder.insert(key, value)?;
        Ok(())
    })?;
    Ok(builder.finish())
}

/// Calls `f` with the one-based number and trimmed text of every line that is
/// neither blank nor a comment.
fn for_each_line(
    path: &Path,
    mut f: impl FnMut(usize, &str) -> Result<(), LoadError>,
) -> Result<(), LoadError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    // read_line into one buffer instead of lines() so every line reuses the
    // same allocation.
    let mut buf = String::with_capacity(80);
    let mut number = 0;
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        number += 1;
        let line = buf.trim_end();
        if !line.is_empty() && !is_comment(line) {
            f(number, line)?;
        }
        buf.clear();
    }
    log::debug!("read {number} lines from {}", path.display());
    Ok(())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
