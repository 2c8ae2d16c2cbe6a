//! Conversion of VML path data (`m0,0 l100,200 x e`) into target lengths

use crate::markup::{convert_length, LengthUsage};

/// One lexical unit of VML path data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathToken<'a> {
    /// Optionally negative integer coordinate
    Number(&'a str),
    /// `m`, `l` or `,`, copied to the output
    Command(char),
    /// `x` (close) or `e` (end), which produce no output
    Terminator(char),
    /// Any other character, dropped
    Other(char),
}

/// Iterator over the tokens of a path string
#[derive(Debug, Clone)]
pub struct PathTokens<'a> {
    rest: &'a str,
}

/// Tokenize VML path data
pub fn tokenize_path(path: &str) -> PathTokens<'_> {
    PathTokens { rest: path }
}

impl<'a> Iterator for PathTokens<'a> {
    type Item = PathToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.rest.chars().next()?;

        // Numbers first: a leading '-' belongs to the coordinate it signs
        if let Some(len) = number_len(self.rest) {
            let (number, rest) = self.rest.split_at(len);
            self.rest = rest;
            return Some(PathToken::Number(number));
        }

        self.rest = &self.rest[c.len_utf8()..];
        let token = match c {
            'm' | 'l' | ',' => PathToken::Command(c),
            'x' | 'e' => PathToken::Terminator(c),
            _ => PathToken::Other(c),
        };
        Some(token)
    }
}

fn number_len(input: &str) -> Option<usize> {
    let sign = usize::from(input.starts_with('-'));
    let digits = input[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    (digits > 0).then_some(sign + digits)
}

/// Convert every coordinate of a VML path from EMU into unitless lengths
pub fn convert_path(path: &str) -> String {
    convert_path_with(path, |number| convert_length(number, LengthUsage::VmlEmu))
}

/// Rewrite a VML path, converting coordinates with `convert`
///
/// Commands and commas are kept verbatim; terminators and unknown
/// characters are removed. A coordinate the converter rejects is dropped.
pub fn convert_path_with<F>(path: &str, mut convert: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(path.len());
    for token in tokenize_path(path) {
        match token {
            PathToken::Number(number) => {
                if let Some(converted) = convert(number) {
                    out.push_str(&converted);
                }
            }
            PathToken::Command(c) => out.push(c),
            PathToken::Terminator(_) | PathToken::Other(_) => {}
        }
    }
    out
}
