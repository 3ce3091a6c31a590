//! Textual reader: turns source text into `Value` trees (§4.6).
//!
//! The reader is a collaborator, not the core: it knows nothing about
//! special forms. A list is read into a genuine chain of `Pair`s terminated
//! by `EmptyList` — the same shape `quote`, `lambda`, and application all
//! consume — and `'datum` is expanded to `(quote datum)` at read time.
//! Failures here are a distinct `ReadError`, never an `EvalError`: the core
//! never parses text and the type system keeps it that way.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace1, none_of, one_of},
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

use crate::value::Value;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("parse error: unexpected trailing input: '{0}'")]
    TrailingInput(String),
    #[error("parse error: {0}")]
    Malformed(String),
    #[error("parse error: unexpected end of input")]
    UnexpectedEof,
}

fn skip_ws_and_comments(input: &str) -> IResult<&str, ()> {
    many0(alt((value((), multispace1), value((), preceded(char(';'), take_while(|c| c != '\n'))))))
        .map(|_| ())
        .parse(input)
}

fn parse_number(input: &str) -> IResult<&str, Value> {
    recognize((
        opt(char('-')),
        alt((
            recognize((digit1, opt((char('.'), opt(digit1))))),
            recognize((char('.'), digit1)),
        )),
    ))
    .map(|text: &str| Value::Number(text.parse().expect("matched by grammar")))
    .parse(input)
}

fn parse_bool(input: &str) -> IResult<&str, Value> {
    alt((value(Value::Bool(true), tag("#t")), value(Value::Bool(false), tag("#f")))).parse(input)
}

const SYMBOL_PUNCTUATION: &str = "+-*/%<>=!?";

fn parse_symbol(input: &str) -> IResult<&str, Value> {
    let letters = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let (input, first) = one_of(format!("{letters}{SYMBOL_PUNCTUATION}").as_str())(input)?;
    let (input, rest) = take_while(|c: char| c.is_alphanumeric() || c == '-' || c == '_' || SYMBOL_PUNCTUATION.contains(c))(input)?;
    let mut name = String::new();
    name.push(first);
    name.push_str(rest);
    Ok((input, Value::symbol(&name)))
}

fn parse_string(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('"')(input)?;
    let mut result = String::new();
    let mut remaining = input;
    loop {
        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>('"')(remaining) {
            return Ok((rest, Value::string(result)));
        }
        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>('\\')(remaining) {
            let (rest, escaped) = one_of::<_, _, nom::error::Error<_>>("\"\\nt")(rest)?;
            result.push(match escaped {
                'n' => '\n',
                't' => '\t',
                other => other,
            });
            remaining = rest;
            continue;
        }
        let (rest, chunk) = take_while1::<_, _, nom::error::Error<_>>(|c| c != '"' && c != '\\')(remaining)?;
        result.push_str(chunk);
        remaining = rest;
    }
}

fn parse_quote(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('\'')(input)?;
    let (input, datum) = parse_expr(input)?;
    Ok((input, Value::list_from([Value::symbol("quote"), datum].into_iter())))
}

fn parse_list(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('(')(input)?;
    let (mut input, _) = skip_ws_and_comments(input)?;
    let mut items = Vec::new();
    loop {
        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>(')')(input) {
            return Ok((rest, Value::list_from(items.into_iter())));
        }
        let (rest, item) = parse_expr(input)?;
        items.push(item);
        let (rest, _) = skip_ws_and_comments(rest)?;
        input = rest;
    }
}

fn parse_expr(input: &str) -> IResult<&str, Value> {
    let (input, _) = skip_ws_and_comments(input)?;
    alt((parse_quote, parse_list, parse_bool, parse_number, parse_string, parse_symbol)).parse(input)
}

/// Converts a failed `nom` parse into a `ReadError`, distinguishing a form
/// that simply ran out of input (e.g. an unclosed list) from one that hit
/// text that doesn't match the grammar at all.
fn classify_parse_failure(err: nom::Err<nom::error::Error<&str>>) -> ReadError {
    match err {
        nom::Err::Incomplete(_) => ReadError::UnexpectedEof,
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            if e.input.is_empty() {
                ReadError::UnexpectedEof
            } else {
                ReadError::Malformed(format!("unexpected input near '{}'", e.input))
            }
        }
    }
}

/// Parses exactly one datum from `input`, erroring on leftover trailing text.
pub fn read_one(input: &str) -> Result<Value, ReadError> {
    let (rest, value) = parse_expr(input).map_err(classify_parse_failure)?;
    let (rest, _) = skip_ws_and_comments(rest).unwrap_or((rest, ()));
    if !rest.is_empty() {
        return Err(ReadError::TrailingInput(rest.to_string()));
    }
    Ok(value)
}

/// Parses every top-level datum in `input` in order. Used by the driver to
/// run a whole script as a sequence of forms (§4.8).
pub fn read_all(input: &str) -> Result<Vec<Value>, ReadError> {
    let mut forms = Vec::new();
    let (mut remaining, _) = skip_ws_and_comments(input).unwrap_or((input, ()));
    while !remaining.is_empty() {
        let (rest, form) = parse_expr(remaining).map_err(classify_parse_failure)?;
        forms.push(form);
        let (rest, _) = skip_ws_and_comments(rest).unwrap_or((rest, ()));
        remaining = rest;
    }
    Ok(forms)
}
