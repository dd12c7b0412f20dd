//! Selector text parsing.
//!
//! The grammar is intentionally small and forgiving:
//!
//! ```text
//! selector := clause ( combinator clause )*
//! combinator := ws+ | ws* '>' ws*
//! clause := '#' name? ( '.' name? )*
//!         | ( '.' name? )+
//!         | any other token          (glob)
//! ```
//!
//! A token that does not start with `#` or `.` (for example `*`, `button` or
//! `Button.primary`) is read as a glob clause. Empty class segments are
//! dropped. The only input that fails to parse is a `>` without a clause on
//! both sides.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt},
    multi::many1,
    sequence::{delimited, pair, preceded},
};

use crate::error::WcssError;
use crate::selector::{Combinator, Selector};

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && c != '.' && c != '>'
}

fn is_token_char(c: char) -> bool {
    !c.is_whitespace() && c != '>'
}

fn parse_name(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char)(input)
}

/// Parses one or more `.class` segments, dropping empty ones.
fn parse_class_segments(input: &str) -> IResult<&str, Vec<String>> {
    map(
        many1(preceded(char('.'), opt(parse_name))),
        |segments: Vec<Option<&str>>| {
            segments
                .into_iter()
                .flatten()
                .map(str::to_string)
                .collect()
        },
    )(input)
}

/// `#id.class.class`
fn parse_id_clause(input: &str) -> IResult<&str, Selector> {
    map(
        preceded(char('#'), pair(opt(parse_name), opt(parse_class_segments))),
        |(id, classes)| {
            Selector::clause(
                Some(id.unwrap_or_default().to_string()),
                classes.unwrap_or_default(),
            )
        },
    )(input)
}

/// `.class.class`
fn parse_class_clause(input: &str) -> IResult<&str, Selector> {
    map(parse_class_segments, |classes| Selector::clause(None, classes))(input)
}

/// `*` or anything else we do not understand.
fn parse_glob_clause(input: &str) -> IResult<&str, Selector> {
    map(take_while1(is_token_char), |_| Selector::glob())(input)
}

pub(crate) fn parse_clause(input: &str) -> IResult<&str, Selector> {
    alt((parse_id_clause, parse_class_clause, parse_glob_clause))(input)
}

fn parse_combinator(input: &str) -> IResult<&str, Combinator> {
    alt((
        map(delimited(multispace0, char('>'), multispace0), |_| {
            Combinator::DirectChild
        }),
        map(multispace1, |_| Combinator::Descendant),
    ))(input)
}

/// Parses a full selector into its leftward-linked form.
pub(crate) fn parse_selector(text: &str) -> Result<Selector, WcssError> {
    let malformed = |reason: &'static str| WcssError::MalformedSelector {
        selector: text.to_string(),
        reason,
    };

    let input = text.trim();
    if input.is_empty() {
        return Ok(Selector::glob());
    }
    if input.starts_with('>') {
        return Err(malformed("`>` has no clause before it"));
    }

    let (mut rest, mut current) =
        parse_clause(input).map_err(|_| malformed("unrecognized clause"))?;

    while !rest.is_empty() {
        let (after, combinator) = parse_combinator(rest)
            .map_err(|_| malformed("expected whitespace or `>` between clauses"))?;

        if after.is_empty() {
            // Input is trimmed, so only a dangling `>` can end up here.
            return Err(malformed("`>` has no clause after it"));
        }
        if after.starts_with('>') {
            return Err(malformed("`>` has no clause before it"));
        }

        let (next, clause) =
            parse_clause(after).map_err(|_| malformed("unrecognized clause"))?;
        current = clause.with_parent(combinator, current);
        rest = next;
    }

    log::trace!("parsed selector `{text}` as `{current}`");
    Ok(current)
}
