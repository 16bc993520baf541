//! Minimal compound selectors for querying element trees.
//!
//! Supports a single compound selector: an optional tag (or `*`) followed by
//! any number of `.class`, `#id`, `[attr]` and `[attr=value]` parts. Values
//! may be quoted with `"` or `'`. Combinators are not supported.
//! `[class=...]` compares against the full space-joined class list, as it
//! appears in rendered HTML.
//!
//! ```
//! use formdom::Selector;
//!
//! let sel: Selector = "input.form-check-input[type=checkbox]".parse().unwrap();
//! assert_eq!(sel.tag(), Some("input"));
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::Element;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("missing name at position {pos}")]
    MissingName { pos: usize },
    #[error("unterminated attribute selector starting at position {pos}")]
    UnterminatedAttribute { pos: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Class(String),
    Id(String),
    Attr { name: String, value: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    parts: Vec<Part>,
}

impl Selector {
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag
            && !tag.eq_ignore_ascii_case(&el.tag)
        {
            return false;
        }

        self.parts.iter().all(|part| match part {
            Part::Class(class) => el.has_class(class),
            Part::Id(id) => el.id.as_deref() == Some(id.as_str()),
            Part::Attr { name, value: None } if name == "class" => !el.classes.is_empty(),
            Part::Attr {
                name,
                value: Some(expected),
            } if name == "class" => el.class_attribute().as_deref() == Some(expected.as_str()),
            Part::Attr { name, value: None } => el.has_attribute(name),
            Part::Attr {
                name,
                value: Some(expected),
            } => el.attribute(name) == Some(expected.as_str()),
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')
}

/// Read a run of name characters starting at `start`.
fn read_name(chars: &[char], start: usize) -> (String, usize) {
    let mut end = start;
    while end < chars.len() && is_name_char(chars[end]) {
        end += 1;
    }
    (chars[start..end].iter().collect(), end)
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = input.trim().chars().collect();
        if chars.is_empty() {
            return Err(SelectorError::Empty);
        }

        let (tag, mut pos) = if chars[0] == '*' {
            (None, 1)
        } else {
            let (name, end) = read_name(&chars, 0);
            ((!name.is_empty()).then_some(name), end)
        };

        let mut parts = Vec::new();
        while pos < chars.len() {
            match chars[pos] {
                '.' | '#' => {
                    let marker = chars[pos];
                    let (name, end) = read_name(&chars, pos + 1);
                    if name.is_empty() {
                        return Err(SelectorError::MissingName { pos: pos + 1 });
                    }
                    parts.push(if marker == '.' {
                        Part::Class(name)
                    } else {
                        Part::Id(name)
                    });
                    pos = end;
                }
                '[' => {
                    let open = pos;
                    let close = chars[open..]
                        .iter()
                        .position(|&c| c == ']')
                        .map(|offset| open + offset)
                        .ok_or(SelectorError::UnterminatedAttribute { pos: open })?;
                    let body: String = chars[open + 1..close].iter().collect();
                    let (name, value) = match body.split_once('=') {
                        Some((name, value)) => {
                            let value = value.trim();
                            let value = value
                                .strip_prefix('"')
                                .and_then(|v| v.strip_suffix('"'))
                                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                                .unwrap_or(value);
                            (name.trim().to_string(), Some(value.to_string()))
                        }
                        None => (body.trim().to_string(), None),
                    };
                    if name.is_empty() || !name.chars().all(is_name_char) {
                        return Err(SelectorError::MissingName { pos: open + 1 });
                    }
                    parts.push(Part::Attr { name, value });
                    pos = close + 1;
                }
                ch => return Err(SelectorError::UnexpectedChar { ch, pos }),
            }
        }

        Ok(Self { tag, parts })
    }
}

impl Element {
    /// Find all descendants (and self) matching a selector string.
    pub fn select(&self, selector: &str) -> Result<Vec<&Element>, SelectorError> {
        let selector: Selector = selector.parse()?;
        Ok(crate::element::find_all(self, &selector))
    }
}
