//! Splits an input line into an argument vector.
//!
//! A token is a maximal run of bytes other than space, tab, carriage return
//! and newline. There is no quoting or escaping, and tokens are passed on
//! byte-for-byte whether or not they are UTF-8.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

const DELIMITERS: [u8; 4] = [b' ', b'\t', b'\r', b'\n'];

pub fn is_delimiter(b: &u8) -> bool {
    DELIMITERS.contains(b)
}

pub fn split_line(line: &OsStr) -> Vec<OsString> {
    line.as_bytes()
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(|token| OsString::from_vec(token.to_vec()))
        .collect()
}
