//! Route template parsing.
//!
//! Splits a template like `/users/:id/posts/:post_id?page&sort` into path
//! segments (literal runs and named parameters) and the list of declared
//! query keys.
//!
//! # Template Grammar
//!
//! ```text
//! template    := path ["?" query-keys]
//! path        := (literal | variable)*
//! variable    := ":" name            ; name = 1+ chars excluding ':' '/' '?'
//! query-keys  := key ("&" key)*
//! ```
//!
//! The grammar is lenient: every string is a valid template. A `:` not
//! followed by at least one name character is plain literal text, and names
//! are not restricted beyond the three excluded characters, so `/:id.json`
//! declares a single parameter called `id.json`.

use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

// ============ Data Types ============

/// A piece of a path template - either literal text or a named parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text that must match exactly.
    Literal(String),
    /// A named parameter like `:id`, matching one non-empty path segment.
    Param(String),
}

/// A parsed template: path segments plus declared query keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub path: Vec<Segment>,
    pub query_keys: Vec<String>,
}

// ============ Public API ============

/// Parse a full template into path segments and query keys.
///
/// The template is split once on the first `?`; everything after it is the
/// query spec, which splits on `&` with duplicates and empty pieces kept.
/// No query portion, or an empty one (a trailing `?`), declares no keys.
/// Parsing cannot fail.
pub fn parse_template(template: &str) -> Template {
    let (path, query) = match template.split_once('?') {
        Some((path, query)) => (path, query),
        None => (template, ""),
    };

    let query_keys = if query.is_empty() {
        Vec::new()
    } else {
        query.split('&').map(str::to_string).collect()
    };

    Template {
        path: parse_path(path),
        query_keys,
    }
}

/// Scan a path (no query portion) into literal and parameter segments.
pub fn parse_path(path: &str) -> Vec<Segment> {
    let mut input = path;
    // Every byte lands in one of the three pieces below, so the scan
    // consumes the whole path and cannot fail.
    path_segments.parse_next(&mut input).unwrap_or_default()
}

// ============ Winnow Parsers ============

/// Zero-copy intermediate piece; adjacent literals get merged while folding
/// into owned [`Segment`]s.
enum Piece<'a> {
    Literal(&'a str),
    Param(&'a str),
}

fn path_segments(input: &mut &str) -> ModalResult<Vec<Segment>> {
    repeat(0.., piece)
        .fold(Vec::new, |mut segments: Vec<Segment>, piece| {
            match piece {
                Piece::Literal(text) => {
                    if let Some(Segment::Literal(last)) = segments.last_mut() {
                        last.push_str(text);
                    } else {
                        segments.push(Segment::Literal(text.to_string()));
                    }
                }
                Piece::Param(name) => segments.push(Segment::Param(name.to_string())),
            }
            segments
        })
        .parse_next(input)
}

fn piece<'a>(input: &mut &'a str) -> ModalResult<Piece<'a>> {
    alt((param, literal_run, lone_colon)).parse_next(input)
}

/// `:` followed by a maximal run of one or more name characters.
fn param<'a>(input: &mut &'a str) -> ModalResult<Piece<'a>> {
    preceded(':', take_while(1.., |c: char| !matches!(c, ':' | '/' | '?')))
        .map(Piece::Param)
        .parse_next(input)
}

/// Literal text up to the next `:` or end of input.
fn literal_run<'a>(input: &mut &'a str) -> ModalResult<Piece<'a>> {
    take_till(1.., ':').map(Piece::Literal).parse_next(input)
}

/// A `:` with no name character after it stays literal.
fn lone_colon<'a>(input: &mut &'a str) -> ModalResult<Piece<'a>> {
    ":".map(Piece::Literal).parse_next(input)
}
