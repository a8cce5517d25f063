//! Tokenizer and parser for the `rgb(...)` / `rgba(...)` functional form
//!
//! Grammar, over input that is already lower-cased with spaces and tabs
//! removed:
//!
//! ```text
//! color   := ("rgb" | "rgba") "(" channel "," channel "," channel ["," alpha] ")"
//! channel := digit{1,3}
//! alpha   := digit{1,3} "." digit*
//!          | digit+
//! ```
//!
//! The form may appear anywhere in the input; the first occurrence that
//! parses wins and anything after the closing parenthesis is ignored.

use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Rgb,
    Rgba,
}

/// Numeric literal split at the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberLit<'a> {
    int: &'a str,
    frac: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Keyword(Keyword),
    LParen,
    RParen,
    Comma,
    Number(NumberLit<'a>),
    Unexpected(char),
}

/// Lazy lexer; tokens past the closing parenthesis are never produced
struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn digits(&mut self) -> &'a str {
        let rest = &self.src[self.pos..];
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        self.pos += len;
        &rest[..len]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.src[self.pos..];
        let ch = rest.chars().next()?;

        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            '0'..='9' => {
                let int = self.digits();
                let frac = if self.src[self.pos..].starts_with('.') {
                    self.pos += 1;
                    Some(self.digits())
                } else {
                    None
                };
                return Some(Token::Number(NumberLit { int, frac }));
            }
            'r' if rest.starts_with("rgba") => {
                self.pos += 4;
                return Some(Token::Keyword(Keyword::Rgba));
            }
            'r' if rest.starts_with("rgb") => {
                self.pos += 3;
                return Some(Token::Keyword(Keyword::Rgb));
            }
            other => Token::Unexpected(other),
        };

        self.pos += ch.len_utf8();
        Some(token)
    }
}

/// Alpha channel convention
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// No alpha component given
    Opaque,
    /// Alpha written with a decimal point, normalized to [0, 1]
    Fraction(f64),
    /// Alpha written as a plain integer channel value
    Direct(u32),
}

impl Alpha {
    pub fn to_channel(self) -> u8 {
        match self {
            Alpha::Opaque => 255,
            Alpha::Fraction(f) => (255.0 * f).round().clamp(0.0, 255.0) as u8,
            Alpha::Direct(v) => v.min(255) as u8,
        }
    }
}

/// A parsed functional color before channel conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionalColor {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub alpha: Alpha,
}

impl FunctionalColor {
    pub fn to_rgba(self) -> Rgba {
        let clamp = |v: u32| v.min(255) as u8;
        Rgba::new(clamp(self.r), clamp(self.g), clamp(self.b), self.alpha.to_channel())
    }
}

struct Parser<'a> {
    tokens: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            tokens: Lexer::new(src),
        }
    }

    fn expect(&mut self, expected: Token<'a>) -> Option<()> {
        (self.tokens.next()? == expected).then_some(())
    }

    fn channel(&mut self) -> Option<u32> {
        match self.tokens.next()? {
            Token::Number(NumberLit { int, frac: None }) if (1..=3).contains(&int.len()) => {
                int.parse().ok()
            }
            _ => None,
        }
    }

    fn alpha(&mut self) -> Option<Alpha> {
        match self.tokens.next()? {
            Token::Number(NumberLit { int, frac: Some(frac) }) if (1..=3).contains(&int.len()) => {
                let value = if frac.is_empty() {
                    int.parse::<f64>().ok()?
                } else {
                    format!("{int}.{frac}").parse::<f64>().ok()?
                };
                Some(Alpha::Fraction(value))
            }
            // Overflowing digit runs saturate like any other out-of-range value
            Token::Number(NumberLit { int, frac: None }) => {
                Some(Alpha::Direct(int.parse().unwrap_or(u32::MAX)))
            }
            _ => None,
        }
    }

    fn parse(mut self) -> Option<FunctionalColor> {
        match self.tokens.next()? {
            Token::Keyword(Keyword::Rgb | Keyword::Rgba) => {}
            _ => return None,
        }
        self.expect(Token::LParen)?;
        let r = self.channel()?;
        self.expect(Token::Comma)?;
        let g = self.channel()?;
        self.expect(Token::Comma)?;
        let b = self.channel()?;

        let alpha = match self.tokens.next()? {
            Token::RParen => Alpha::Opaque,
            Token::Comma => {
                let alpha = self.alpha()?;
                self.expect(Token::RParen)?;
                alpha
            }
            _ => return None,
        };

        Some(FunctionalColor { r, g, b, alpha })
    }
}

/// Parse the first well-formed functional color in `src`
pub fn parse_functional_parts(src: &str) -> Option<FunctionalColor> {
    let mut start = 0;
    while let Some(offset) = src[start..].find("rgb") {
        let at = start + offset;
        if let Some(color) = Parser::new(&src[at..]).parse() {
            return Some(color);
        }
        start = at + 1;
    }
    None
}

/// Parse the first well-formed functional color in `src` into RGBA
pub fn parse_functional(src: &str) -> Option<Rgba> {
    parse_functional_parts(src).map(FunctionalColor::to_rgba)
}
