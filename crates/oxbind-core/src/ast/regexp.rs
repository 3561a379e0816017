use std::fmt::{self, Write as _};
use std::iter::Peekable;
use std::str::Chars;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Source form of a regular expression literal, as sent by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexSource {
    pub pattern: String,
    pub flags: String,
}

/// Flags of a regular expression literal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegExpFlags {
    pub has_indices: bool,
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
}

impl RegExpFlags {
    /// Parse a flag string. Unknown or repeated flags are rejected, and so is
    /// `v`: its set notation has no counterpart in the `regex` crate.
    pub fn parse(flags: &str) -> Option<Self> {
        let mut parsed = Self::default();
        for flag in flags.chars() {
            let slot = match flag {
                'd' => &mut parsed.has_indices,
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multiline,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                _ => return None,
            };
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(parsed)
    }
}

impl fmt::Display for RegExpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.has_indices, 'd'),
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ];
        for (set, flag) in flags {
            if set {
                write!(f, "{flag}")?;
            }
        }
        Ok(())
    }
}

/// A compiled regular expression literal
#[derive(Debug, Clone)]
pub struct RegExpValue {
    pub pattern: String,
    pub flags: RegExpFlags,
    regex: Regex,
}

impl RegExpValue {
    /// Compile `source`, or `None` when the runtime cannot express it.
    ///
    /// `g`, `y` and `d` change how matching is driven, not what the pattern
    /// means, so they are recorded but do not reach the compiler.
    pub fn compile(source: &RegexSource) -> Option<Self> {
        let flags = RegExpFlags::parse(&source.flags)?;
        let translated = translate(&source.pattern, flags)?;
        let regex = RegexBuilder::new(&translated)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .ok()?;
        Some(Self {
            pattern: source.pattern.clone(),
            flags,
            regex,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    pub fn source(&self) -> RegexSource {
        RegexSource {
            pattern: self.pattern.clone(),
            flags: self.flags.to_string(),
        }
    }
}

impl PartialEq for RegExpValue {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

const DIGIT: &str = "0-9";
const WORD: &str = "0-9A-Za-z_";
const SPACE: &str = r"\t\n\v\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";
const LINE_TERMINATORS: &str = r"\n\r\x{2028}\x{2029}";

/// One decoded escape sequence
enum Escape {
    Char(char),
    Set { members: &'static str, negated: bool },
    Boundary { negated: bool },
}

/// Rewrite an ECMAScript pattern into `regex` syntax with the same meaning.
///
/// Shorthand classes and word boundaries are ASCII-only, `.` stops at every
/// line terminator, and `&&`, `--`, `~~` and `[` inside a class are literal.
/// Returns `None` for anything that cannot be carried over exactly.
fn translate(pattern: &str, flags: RegExpFlags) -> Option<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match escape(&mut chars, flags.unicode)? {
                Escape::Char(c) => push_char(&mut out, c),
                Escape::Set { members, negated } => {
                    let _ = write!(out, "[{}{members}]", if negated { "^" } else { "" });
                }
                Escape::Boundary { negated: false } => out.push_str(r"(?-u:\b)"),
                Escape::Boundary { negated: true } => out.push_str(r"(?-u:\B)"),
            },
            '[' => translate_class(&mut chars, flags.unicode, &mut out)?,
            '.' if !flags.dot_all => {
                let _ = write!(out, "[^{LINE_TERMINATORS}]");
            }
            _ => out.push(c),
        }
    }
    Some(out)
}

fn translate_class(
    chars: &mut Peekable<Chars<'_>>,
    unicode: bool,
    out: &mut String,
) -> Option<()> {
    let negated = chars.next_if_eq(&'^').is_some();
    // `[]` never matches, `[^]` matches anything
    if chars.next_if_eq(&']').is_some() {
        out.push_str(if negated { r"[\x00-\x{10FFFF}]" } else { r"[^\x00-\x{10FFFF}]" });
        return Some(());
    }

    out.push('[');
    if negated {
        out.push('^');
    }
    loop {
        let low = match class_atom(chars, unicode)? {
            None => break,
            Some(Escape::Char(c)) => c,
            Some(Escape::Set { members, negated }) => {
                push_set(out, members, negated);
                continue;
            }
            Some(Escape::Boundary { .. }) => return None,
        };

        let mut lookahead = chars.clone();
        let is_range =
            lookahead.next() == Some('-') && !matches!(lookahead.peek(), Some(&']') | None);
        if !is_range {
            push_char(out, low);
            continue;
        }
        chars.next();
        match class_atom(chars, unicode)? {
            Some(Escape::Char(high)) => {
                if high < low {
                    return None;
                }
                push_char(out, low);
                out.push('-');
                push_char(out, high);
            }
            // A set cannot bound a range; both sides and the dash are members
            Some(Escape::Set { members, negated }) => {
                push_char(out, low);
                push_char(out, '-');
                push_set(out, members, negated);
            }
            _ => return None,
        }
    }
    out.push(']');
    Some(())
}

/// Next member of a class, `None` at the closing bracket
fn class_atom(chars: &mut Peekable<Chars<'_>>, unicode: bool) -> Option<Option<Escape>> {
    match chars.next()? {
        ']' => Some(None),
        '\\' => match escape(chars, unicode)? {
            Escape::Boundary { negated: false } => Some(Some(Escape::Char('\u{8}'))),
            Escape::Boundary { negated: true } => None,
            other => Some(Some(other)),
        },
        c => Some(Some(Escape::Char(c))),
    }
}

fn escape(chars: &mut Peekable<Chars<'_>>, unicode: bool) -> Option<Escape> {
    let c = chars.next()?;
    let set = |members, negated| Escape::Set { members, negated };
    let escape = match c {
        'd' => set(DIGIT, false),
        'D' => set(DIGIT, true),
        'w' => set(WORD, false),
        'W' => set(WORD, true),
        's' => set(SPACE, false),
        'S' => set(SPACE, true),
        'b' => Escape::Boundary { negated: false },
        'B' => Escape::Boundary { negated: true },
        't' => Escape::Char('\t'),
        'n' => Escape::Char('\n'),
        'v' => Escape::Char('\u{B}'),
        'f' => Escape::Char('\u{C}'),
        'r' => Escape::Char('\r'),
        '0' if !chars.peek().is_some_and(char::is_ascii_digit) => Escape::Char('\0'),
        'c' => {
            let letter = chars.next_if(char::is_ascii_alphabetic)?;
            Escape::Char(char::from(letter as u8 % 32))
        }
        'x' => Escape::Char(hex_digits(chars, 2)?),
        'u' if unicode && chars.next_if_eq(&'{').is_some() => {
            let mut digits = String::new();
            while let Some(digit) = chars.next_if(char::is_ascii_hexdigit) {
                digits.push(digit);
            }
            chars.next_if_eq(&'}')?;
            Escape::Char(char::from_u32(u32::from_str_radix(&digits, 16).ok()?)?)
        }
        'u' => Escape::Char(hex_digits(chars, 4)?),
        // Back-references, named references and property escapes
        _ if c.is_ascii_alphanumeric() => return None,
        _ => Escape::Char(c),
    };
    Some(escape)
}

fn hex_digits(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<char> {
    let mut value = 0;
    for _ in 0..count {
        value = value * 16 + chars.next_if(char::is_ascii_hexdigit)?.to_digit(16)?;
    }
    char::from_u32(value)
}

fn push_char(out: &mut String, c: char) {
    if c.is_ascii_punctuation() && c != '<' && c != '>' {
        out.push('\\');
        out.push(c);
    } else if c.is_control() || c.is_whitespace() {
        let _ = write!(out, r"\x{{{:X}}}", u32::from(c));
    } else {
        out.push(c);
    }
}

/// Inside a class a negated set is nested, which `regex` reads as a union
fn push_set(out: &mut String, members: &str, negated: bool) {
    if negated {
        let _ = write!(out, "[^{members}]");
    } else {
        out.push_str(members);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pattern: &str, flags: &str) -> RegexSource {
        RegexSource {
            pattern: pattern.to_string(),
            flags: flags.to_string(),
        }
    }

    #[test]
    fn parses_flags() {
        let flags = RegExpFlags::parse("gimsuyd").unwrap();
        assert!(flags.global && flags.ignore_case && flags.multiline);
        assert!(flags.dot_all && flags.unicode && flags.sticky && flags.has_indices);
        assert_eq!(flags.to_string(), "dgimsuy");
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(RegExpFlags::parse("gg").is_none());
        assert!(RegExpFlags::parse("x").is_none());
        assert!(RegExpFlags::parse("v").is_none());
    }

    #[test]
    fn case_insensitive_flag_reaches_the_compiler() {
        let value = RegExpValue::compile(&source("abc", "i")).unwrap();
        assert!(value.is_match("ABC"));
        let value = RegExpValue::compile(&source("abc", "")).unwrap();
        assert!(!value.is_match("ABC"));
    }

    #[test]
    fn multiline_and_dot_all() {
        let value = RegExpValue::compile(&source("^b$", "m")).unwrap();
        assert!(value.is_match("a\nb\nc"));
        let value = RegExpValue::compile(&source("a.c", "s")).unwrap();
        assert!(value.is_match("a\nc"));
    }

    #[test]
    fn unsupported_syntax_does_not_compile() {
        assert!(RegExpValue::compile(&source("(?<=a)b", "")).is_none());
        assert!(RegExpValue::compile(&source("(a)\\1", "")).is_none());
        assert!(RegExpValue::compile(&source("(", "")).is_none());
    }

    #[test]
    fn shorthand_classes_are_ascii() {
        let digits = RegExpValue::compile(&source(r"^\d+$", "")).unwrap();
        assert!(digits.is_match("123"));
        assert!(!digits.is_match("١٢٣"));

        let word = RegExpValue::compile(&source(r"^\w+$", "u")).unwrap();
        assert!(word.is_match("snake_case_9"));
        assert!(!word.is_match("été"));

        let not_digit = RegExpValue::compile(&source(r"^\D$", "")).unwrap();
        assert!(not_digit.is_match("٣"));
    }

    #[test]
    fn word_boundary_is_ascii() {
        let value = RegExpValue::compile(&source(r"\bb", "")).unwrap();
        assert!(value.is_match("a b"));
        // `é` is not a word character, so there is a boundary before `b`
        assert!(value.is_match("éb"));
        assert!(!value.is_match("ab"));

        // Inside a class `\b` is a backspace
        let backspace = RegExpValue::compile(&source(r"[\b]", "")).unwrap();
        assert!(backspace.is_match("\u{8}"));
        assert!(!backspace.is_match("b"));
    }

    #[test]
    fn space_class_follows_line_terminators_and_bom() {
        let value = RegExpValue::compile(&source(r"^\s$", "")).unwrap();
        assert!(value.is_match("\u{FEFF}"));
        assert!(value.is_match("\u{A0}"));
        assert!(!value.is_match("\u{85}"));
    }

    #[test]
    fn dot_stops_at_every_line_terminator() {
        let value = RegExpValue::compile(&source("^a.b$", "")).unwrap();
        assert!(value.is_match("a-b"));
        assert!(!value.is_match("a\rb"));
        assert!(!value.is_match("a\u{2028}b"));
        let value = RegExpValue::compile(&source("^a.b$", "s")).unwrap();
        assert!(value.is_match("a\rb"));
    }

    #[test]
    fn set_operators_are_literal_in_classes() {
        let and = RegExpValue::compile(&source("[a&&b]", "")).unwrap();
        assert!(and.is_match("a"));
        assert!(and.is_match("&"));

        let tilde = RegExpValue::compile(&source("^[a~~b]$", "")).unwrap();
        assert!(tilde.is_match("~"));

        let nested = RegExpValue::compile(&source("^[[a]$", "")).unwrap();
        assert!(nested.is_match("["));
        assert!(nested.is_match("a"));

        // `+--` is the range from `+` to `-`, which includes `,`
        let range = RegExpValue::compile(&source("^[+--]$", "")).unwrap();
        assert!(range.is_match(","));
        assert!(!range.is_match("a"));
    }

    #[test]
    fn class_ranges_and_escapes() {
        let value = RegExpValue::compile(&source(r"^[\x41-\u005A\d-]+$", "")).unwrap();
        assert!(value.is_match("AZ09-"));
        assert!(!value.is_match("a"));

        let anything = RegExpValue::compile(&source("^[^]$", "")).unwrap();
        assert!(anything.is_match("\n"));
        let nothing = RegExpValue::compile(&source("[]", "")).unwrap();
        assert!(!nothing.is_match("a"));

        assert!(RegExpValue::compile(&source("[z-a]", "")).is_none());
    }

    #[test]
    fn escapes_without_a_counterpart_do_not_compile() {
        assert!(RegExpValue::compile(&source(r"\p{L}", "u")).is_none());
        assert!(RegExpValue::compile(&source(r"(?<x>a)\k<x>", "")).is_none());
        assert!(RegExpValue::compile(&source(r"[\B]", "")).is_none());
    }

    #[test]
    fn displays_as_literal() {
        let value = RegExpValue::compile(&source("a+", "gi")).unwrap();
        assert_eq!(value.to_string(), "/a+/gi");
        assert_eq!(value.source(), source("a+", "gi"));
    }
}
