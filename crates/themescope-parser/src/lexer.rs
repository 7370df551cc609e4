//! Low-level scanning of stylesheet text.

use nom::{
    bytes::complete::{tag, take_till, take_till1, take_until},
    character::complete::char,
    sequence::{delimited, preceded, separated_pair, terminated},
    IResult,
};

/// What ended a rule prelude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `{`: the prelude is a selector and a block follows.
    Open,
    /// `;`: a statement such as `@import`.
    Semicolon,
    /// `}`: a stray closing brace.
    Close,
    /// End of input.
    Eof,
}

/// The text before a block or statement, with comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prelude {
    pub text: String,
    pub terminator: Terminator,
}

/// Parse a `/* ... */` comment.
pub fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Skip a comment starting at `input`. An unterminated comment runs to the end.
fn skip_comment(input: &str) -> &str {
    match comment(input) {
        Ok((rest, _)) => rest,
        Err(_) => "",
    }
}

/// Skip a quoted string starting at `input`.
///
/// A backslash escapes the next character. An unterminated string ends at the
/// line break, or at the end of input.
fn skip_string(input: &str) -> &str {
    let mut chars = input.char_indices();
    let Some((_, quote)) = chars.next() else {
        return input;
    };

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return &input[i..],
            c if c == quote => return &input[i + 1..],
            _ => {}
        }
    }

    ""
}

/// Read up to the next `{`, `;` or `}` outside comments and strings.
///
/// Returns the prelude and the input after its terminator.
pub fn scan_prelude(input: &str) -> (Prelude, &str) {
    let mut text = String::new();
    let mut rest = input;

    loop {
        let Some(i) = rest.find(|c: char| matches!(c, '{' | ';' | '}' | '/' | '"' | '\'')) else {
            text.push_str(rest);
            return (Prelude { text, terminator: Terminator::Eof }, "");
        };

        text.push_str(&rest[..i]);
        let at = &rest[i..];

        let terminator = match at.as_bytes()[0] {
            b'{' => Terminator::Open,
            b';' => Terminator::Semicolon,
            b'}' => Terminator::Close,
            b'"' | b'\'' => {
                rest = skip_string(at);
                text.push_str(&at[..at.len() - rest.len()]);
                continue;
            }
            _ => {
                if at.starts_with("/*") {
                    text.push(' ');
                    rest = skip_comment(at);
                } else {
                    text.push('/');
                    rest = &at[1..];
                }
                continue;
            }
        };

        return (Prelude { text, terminator }, &at[1..]);
    }
}

/// Skip the rest of a block whose `{` was already consumed, honoring nested
/// braces. Braces inside comments and strings are not counted.
pub fn skip_block(input: &str) -> &str {
    let mut depth = 1usize;
    let mut rest = input;

    while let Some(i) = rest.find(|c: char| matches!(c, '{' | '}' | '/' | '"' | '\'')) {
        let at = &rest[i..];
        match at.as_bytes()[0] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return &at[1..];
                }
            }
            b'"' | b'\'' => {
                rest = skip_string(at);
                continue;
            }
            _ => {
                rest = if at.starts_with("/*") { skip_comment(at) } else { &at[1..] };
                continue;
            }
        }
        rest = &at[1..];
    }

    ""
}

/// Parse a `:root` body up to the first `}`. Nested braces truncate the body.
pub fn root_body(input: &str) -> IResult<&str, &str> {
    terminated(take_till(|c: char| c == '}'), char('}'))(input)
}

/// Parse `--<name>:<value>;`, returning the untrimmed name and value.
///
/// The name runs up to the first `:` and the value up to the next `;`;
/// both must be non-empty.
pub fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(
        tag("--"),
        separated_pair(
            take_till1(|c: char| c == ':'),
            char(':'),
            terminated(take_till1(|c: char| c == ';'), char(';')),
        ),
    )(input)
}
