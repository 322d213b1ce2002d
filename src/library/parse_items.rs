//! Functions for parsing a flat list of line-separated items

use std::{error::Error, iter::FromIterator, str::FromStr};

use thiserror::Error;

/// Error from `parse_items`. Contains the parse error as well as the line
/// number (1-indexed) of the failed parse.
#[derive(Debug, Clone, Error)]
#[error("error parsing {input:?} on line {line}")]
pub struct ParseItemsError<E: Error + 'static> {
    line: usize,
    input: String,

    #[source]
    error: E,
}

/// `parse_items`, but it specifically parses all non-blank lines of the
/// input. Both `\n` and `\r\n` line endings are accepted.
pub fn parse_items_lines<T, C>(input: &str) -> Result<C, ParseItemsError<T::Err>>
where
    T: FromStr,
    C: FromIterator<T>,
    T::Err: Error,
{
    parse_items(input.lines())
}

/// Puzzle input commonly comes as a uniform list of separated items. This
/// parses such a list by taking an iterator of those items and then parsing
/// each individual element with FromStr; blank items are skipped. Any errors
/// are wrapped, indicating which item failed to parse.
pub fn parse_items<'a, I, T, C>(input: I) -> Result<C, ParseItemsError<T::Err>>
where
    I: IntoIterator<Item = &'a str>,
    T: FromStr,
    C: FromIterator<T>,
    T::Err: Error,
{
    input
        .into_iter()
        .enumerate()
        .map(|(index, value)| (index + 1, value))
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(line, value)| {
            value.parse().map_err(|error| ParseItemsError {
                line,
                error,
                input: value.to_owned(),
            })
        })
        .collect()
}
