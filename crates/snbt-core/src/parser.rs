//! SNBT and component-data parser.
//!
//! A single-pass recursive descent over the input text. Two entry points
//! share the grammar:
//!
//! - [`parse`]: general SNBT. Bracketed `key=value` pairs are rejected
//!   anywhere in the input.
//! - [`parse_component`]: the top-level value may be component data
//!   (`[key=value,...]`); nested values follow the general grammar.
//!
//! # Token disambiguation
//!
//! An unquoted token is a number only when, after stripping one optional
//! suffix, the rest is an integer (`[+-]?digit+`, suffixes `b`/`s`/`l`) or
//! a decimal (`[+-]?(digit+.digit*|.digit+)` with an optional exponent,
//! suffixes `f`/`d`). `true` and `false` are booleans. Every other token
//! is a string, so `1f`, `1.5b` and `1e5` stay strings.
//!
//! Error positions are byte offsets into the input.

use tracing::{debug, trace};

use crate::compound::{ComponentData, Compound};
use crate::error::{Result, SnbtError};
use crate::list::{ByteArray, IntArray, List, LongArray, Sequence};
use crate::number::{Byte, Int, Long};
use crate::tag::{is_bareword_char, Kind, Tag};

/// Containers nested deeper than this are rejected.
pub const MAX_DEPTH: usize = 512;

/// Parse general SNBT text into a tag.
pub fn parse(text: &str) -> Result<Tag> {
    Parser::new(text)
        .document(false)
        .inspect_err(|err| debug!(error = %err, "failed to parse SNBT"))
}

/// Parse component data such as `[count=1,name="x"]`. The empty list `[]`
/// is read as empty component data; any other kind of value is a
/// [`SnbtError::TypeMismatch`].
pub fn parse_component(text: &str) -> Result<ComponentData> {
    let tag = Parser::new(text)
        .document(true)
        .inspect_err(|err| debug!(error = %err, "failed to parse component data"))?;
    match tag {
        Tag::Component(data) => Ok(data),
        Tag::List(list) if list.is_empty() => {
            trace!("read empty list as empty component data");
            Ok(ComponentData::new())
        }
        other => Err(SnbtError::mismatch(Kind::Component, other.kind())),
    }
}

/// Parse SNBT text that must be a compound.
pub fn parse_compound(text: &str) -> Result<Compound> {
    match parse(text)? {
        Tag::Compound(map) => Ok(map),
        other => Err(SnbtError::mismatch(Kind::Compound, other.kind())),
    }
}

pub fn try_parse(text: &str) -> Option<Tag> {
    parse(text).ok()
}

pub fn try_parse_component(text: &str) -> Option<ComponentData> {
    parse_component(text).ok()
}

/// The number or boolean `text` denotes, if it denotes one.
pub fn try_parse_number(text: &str) -> Option<Tag> {
    if text.is_empty() {
        return None;
    }
    try_parse(text).filter(|tag| {
        let kind = tag.kind();
        kind == Kind::Bool || kind.is_integer() || kind.is_float()
    })
}

/// Classify one unquoted token. `None` means it is a plain string; `Some`
/// holds the boolean or number it spells, or the range error if the number
/// does not fit its kind.
pub(crate) fn classify_literal(token: &str) -> Option<Result<Tag>> {
    match token {
        "true" => return Some(Ok(Tag::Bool(true))),
        "false" => return Some(Ok(Tag::Bool(false))),
        _ => {}
    }
    let (body, suffix) = match token.chars().last() {
        Some(c) if matches!(c.to_ascii_lowercase(), 'b' | 's' | 'l' | 'f' | 'd') => {
            (&token[..token.len() - 1], Some(c.to_ascii_lowercase()))
        }
        _ => (token, None),
    };
    if is_integer(body) {
        return match suffix {
            None => Some(token.parse().map(Tag::Int)),
            Some('b') => Some(token.parse().map(Tag::Byte)),
            Some('s') => Some(token.parse().map(Tag::Short)),
            Some('l') => Some(token.parse().map(Tag::Long)),
            _ => None,
        };
    }
    if is_decimal(body) {
        return match suffix {
            None | Some('d') => Some(token.parse().map(Tag::Double)),
            Some('f') => Some(token.parse().map(Tag::Float)),
            _ => None,
        };
    }
    None
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}

fn is_integer(text: &str) -> bool {
    let digits = strip_sign(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(text: &str) -> bool {
    let text = strip_sign(text);
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };
    let Some((whole, frac)) = mantissa.split_once('.') else {
        return false;
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = all_digits(whole) && all_digits(frac) && !(whole.is_empty() && frac.is_empty());
    let exponent_ok = exponent.is_none_or(is_integer);
    mantissa_ok && exponent_ok
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser {
            text,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse one value and require that nothing but whitespace follows.
    fn document(&mut self, component: bool) -> Result<Tag> {
        let tag = self.value(component)?;
        self.skip_ws();
        if self.pos < self.text.len() {
            return Err(self.grammar("unexpected trailing input"));
        }
        Ok(tag)
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
    }

    fn grammar(&self, message: impl Into<String>) -> SnbtError {
        SnbtError::Grammar {
            pos: self.pos,
            message: message.into(),
        }
    }

    fn lexical(&self, message: impl Into<String>) -> SnbtError {
        SnbtError::Lexical {
            pos: self.pos,
            message: message.into(),
        }
    }

    /// Consume `expected` after optional whitespace.
    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(self.grammar(format!("expected '{expected}', found '{c}'"))),
            None => Err(self.grammar(format!("expected '{expected}', found end of input"))),
        }
    }

    /// After an element: `true` if another one follows, `false` at `close`.
    fn next_separator(&mut self, close: char) -> Result<bool> {
        self.skip_ws();
        match self.peek() {
            Some(',') => {
                self.pos += 1;
                Ok(true)
            }
            Some(c) if c == close => {
                self.pos += 1;
                Ok(false)
            }
            Some(c) => Err(self.grammar(format!("expected ',' or '{close}', found '{c}'"))),
            None => Err(self.grammar(format!("expected ',' or '{close}', found end of input"))),
        }
    }

    fn value(&mut self, component: bool) -> Result<Tag> {
        self.skip_ws();
        match self.peek() {
            None => Err(self.grammar("expected a value, found end of input")),
            Some('{') => self.nested(|p| p.compound().map(Tag::Compound)),
            Some('[') => self.nested(|p| p.bracketed(component)),
            Some(quote @ ('"' | '\'')) => self.quoted(quote).map(Tag::String),
            Some(c) if is_bareword_char(c) => {
                let token = self.bareword();
                match classify_literal(token) {
                    Some(literal) => literal,
                    None => Ok(Tag::String(token.to_string())),
                }
            }
            Some(c @ (']' | '}' | ',' | ':' | '=' | ';')) => {
                Err(self.grammar(format!("expected a value, found '{c}'")))
            }
            Some(c) => Err(self.lexical(format!("unexpected character '{c}'"))),
        }
    }

    fn nested(&mut self, parse: impl FnOnce(&mut Self) -> Result<Tag>) -> Result<Tag> {
        if self.depth >= MAX_DEPTH {
            return Err(self.grammar(format!("nesting deeper than {MAX_DEPTH} levels")));
        }
        self.depth += 1;
        let tag = parse(self);
        self.depth -= 1;
        tag
    }

    fn bareword(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.len() - rest.trim_start_matches(is_bareword_char).len();
        self.pos += len;
        &rest[..len]
    }

    /// A string delimited by `quote`. Only `\\` and an escaped `quote` are
    /// valid escapes.
    fn quoted(&mut self, quote: char) -> Result<String> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((offset, ch)) = chars.next() {
            if ch == quote {
                self.pos += offset + 1;
                return Ok(out);
            }
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some((_, escaped)) if escaped == quote || escaped == '\\' => out.push(escaped),
                Some((at, escaped)) => {
                    return Err(SnbtError::Lexical {
                        pos: self.pos + at,
                        message: format!("invalid escape '\\{escaped}'"),
                    });
                }
                None => break,
            }
        }
        Err(SnbtError::Lexical {
            pos: start,
            message: "unterminated string".into(),
        })
    }

    fn compound(&mut self) -> Result<Compound> {
        self.pos += 1;
        let mut map = Compound::new();
        self.skip_ws();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(map);
        }
        loop {
            let key = self.key()?;
            self.expect(':')?;
            let value = self.value(false)?;
            map.insert_tag(key, value)?;
            if !self.next_separator('}')? {
                return Ok(map);
            }
        }
    }

    fn key(&mut self) -> Result<String> {
        self.skip_ws();
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.quoted(quote),
            Some(c) if is_bareword_char(c) => Ok(self.bareword().to_string()),
            Some(c) => Err(self.grammar(format!("expected a key, found '{c}'"))),
            None => Err(self.grammar("expected a key, found end of input")),
        }
    }

    /// Everything that starts with `[`: arrays, component data and lists.
    fn bracketed(&mut self, component: bool) -> Result<Tag> {
        let open = self.pos;
        self.pos += 1;
        self.skip_ws();
        let rest = self.rest();
        for prefix in ['B', 'I', 'L'] {
            if rest.starts_with(prefix) && rest[1..].trim_start().starts_with(';') {
                self.pos += 1;
                self.expect(';')?;
                return self.array(prefix);
            }
        }
        if self.at_component_pair() {
            if !component {
                self.pos = open;
                return Err(self.grammar("cannot parse data component in regular SNBT"));
            }
            return self.component().map(Tag::Component);
        }
        self.list().map(Tag::List)
    }

    /// Whether the input continues with `bareword =`.
    fn at_component_pair(&self) -> bool {
        let rest = self.rest();
        let after = rest.trim_start_matches(is_bareword_char);
        after.len() < rest.len() && after.trim_start().starts_with('=')
    }

    fn component(&mut self) -> Result<ComponentData> {
        let mut data = ComponentData::new();
        loop {
            self.skip_ws();
            let key = self.bareword();
            if key.is_empty() {
                return Err(self.grammar("expected a component key"));
            }
            self.expect('=')?;
            let value = self.value(false)?;
            data.insert_tag(key, value)?;
            if !self.next_separator(']')? {
                return Ok(data);
            }
        }
    }

    fn elements(&mut self) -> Result<Vec<Tag>> {
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(']') {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            items.push(self.value(false)?);
            if !self.next_separator(']')? {
                return Ok(items);
            }
        }
    }

    fn list(&mut self) -> Result<List> {
        let mut list = List::new();
        for tag in self.elements()? {
            list.push_tag(tag)?;
        }
        Ok(list)
    }

    fn array(&mut self, prefix: char) -> Result<Tag> {
        let element = match prefix {
            'B' => Kind::Byte,
            'I' => Kind::Int,
            _ => Kind::Long,
        };
        let mut tags = Vec::new();
        for tag in self.elements()? {
            let kind = tag.kind();
            if kind == Kind::Bool && element == Kind::Byte {
                tags.push(tag);
                continue;
            }
            if !kind.is_integer() {
                return Err(SnbtError::mismatch(element, kind));
            }
            let value = i128::from(tag.as_i64().unwrap_or_default());
            tags.push(match element {
                Kind::Byte => Tag::Byte(Byte::new(value)?),
                Kind::Int => Tag::Int(Int::new(value)?),
                _ => Tag::Long(Long::new(value)?),
            });
        }
        Ok(match element {
            Kind::Byte => Tag::ByteArray(ByteArray::from_values(tags)?),
            Kind::Int => Tag::IntArray(IntArray::from_values(tags)?),
            _ => Tag::LongArray(LongArray::from_values(tags)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Double, Float, Short};

    #[test]
    fn integer_grammar() {
        assert!(is_integer("12"));
        assert!(is_integer("-12"));
        assert!(is_integer("+0"));
        assert!(!is_integer("-"));
        assert!(!is_integer("1.0"));
        assert!(!is_integer(""));
    }

    #[test]
    fn decimal_grammar() {
        assert!(is_decimal("1.5"));
        assert!(is_decimal("1."));
        assert!(is_decimal(".5"));
        assert!(is_decimal("-1.0e16"));
        assert!(is_decimal("1.5E-7"));
        assert!(!is_decimal("."));
        assert!(!is_decimal("1e5"));
        assert!(!is_decimal("1.5e"));
        assert!(!is_decimal("1.2.3"));
    }

    #[test]
    fn literal_classification() {
        assert_eq!(classify_literal("3"), Some(Ok(Tag::Int(Int::from(3)))));
        assert_eq!(classify_literal("3B"), Some(Ok(Tag::Byte(Byte::from(3)))));
        assert_eq!(classify_literal("-3s"), Some(Ok(Tag::Short(Short::from(-3)))));
        assert_eq!(
            classify_literal("1.5f"),
            Some(Ok(Tag::Float(Float::new(1.5).unwrap())))
        );
        assert_eq!(
            classify_literal("2.0D"),
            Some(Ok(Tag::Double(Double::new(2.0).unwrap())))
        );
        assert_eq!(classify_literal("1f"), None);
        assert_eq!(classify_literal("1.5b"), None);
        assert_eq!(classify_literal("abc"), None);
        assert!(matches!(classify_literal("128b"), Some(Err(SnbtError::Range { .. }))));
    }
}
