//! Choice sections embedded in YAMLDoc blocks.
//!
//! A docblock may constrain its key's value with a `Choose` directive. The
//! first docblock line is always the description and is never scanned.
//!
//! ```yaml
//! # Fruit served at breakfast
//! # Choose: ['oranges', 'bananas']
//! fruit: oranges
//!
//! # Fruit served at lunch
//! # Choose (1..2):
//! # - oranges
//! # - bananas
//! lunch: [oranges]
//! ```
//!
//! Parsing is two-staged: [`match_directive`] finds the directive line and
//! splits it into cardinality and remainder, then the value list is decoded
//! either inline (the remainder) or from the block of comment lines below it.
//!
//! Only digits and dots are accepted between the parentheses, so prose such
//! as `Choose (one or two):` is not a directive at all. A directive that does
//! match but cannot be decoded yields a [`ChoiceSectionError`], which the
//! validator reports as a finding.

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_yaml::Value;
use std::fmt;
use thiserror::Error;

use crate::constants::{CHOOSE_KEYWORD, RANGE_SEPARATOR};
use crate::parser::uncomment;
use crate::yaml::node_kind;

/// How many of the listed choices may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceRange {
    /// Exactly this many choices (`Choose (2):`, or `Choose:` for one).
    Exactly(usize),
    /// Any count within the inclusive bounds (`Choose (1..3):`).
    Between {
        /// Lower bound, inclusive
        min: usize,
        /// Upper bound, inclusive
        max: usize,
    },
}

impl ChoiceRange {
    /// Smallest number of selections allowed.
    pub const fn min(&self) -> usize {
        match self {
            Self::Exactly(n) => *n,
            Self::Between {
                min, ..
            } => *min,
        }
    }

    /// Largest number of selections allowed.
    pub const fn max(&self) -> usize {
        match self {
            Self::Exactly(n) => *n,
            Self::Between {
                max, ..
            } => *max,
        }
    }

    /// Whether selecting `count` choices satisfies this range.
    pub const fn contains(&self, count: usize) -> bool {
        count >= self.min() && count <= self.max()
    }
}

impl Default for ChoiceRange {
    fn default() -> Self {
        Self::Exactly(1)
    }
}

impl fmt::Display for ChoiceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::Between {
                min,
                max,
            } => write!(f, "{min}{RANGE_SEPARATOR}{max}"),
        }
    }
}

impl Serialize for ChoiceRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The choices and cardinality derived from one `Choose` directive.
///
/// Keeping both in one value means a mapping can never carry choices without
/// a range, or a range without choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceSection {
    /// How many of `choices` may be selected
    pub range: ChoiceRange,
    /// Allowed values, in source order
    pub choices: Vec<Value>,
}

/// A `Choose` directive that was found but could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid choice section on line {line} of YAMLDoc block: {reason}")]
pub struct ChoiceSectionError {
    /// 1-based line of the docblock holding the directive
    pub line: usize,
    /// Why the directive was rejected
    pub reason: String,
}

impl ChoiceSectionError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// A `Choose` directive line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Text between the parentheses, if any
    pub cardinality: Option<&'a str>,
    /// Text after the colon, trimmed
    pub remainder: &'a str,
}

/// Matches a single docblock line against the `Choose` directive.
///
/// Returns `None` when the line holds no directive. The first occurrence of
/// the keyword on the line wins.
pub fn match_directive(line: &str) -> Result<Option<Directive<'_>>, regex::Error> {
    let pattern = Regex::new(&format!(r"\b{CHOOSE_KEYWORD}\s*(?:\(([\d.]+)\))?\s*:(.*)$"))?;

    Ok(pattern.captures(line).map(|captures| Directive {
        cardinality: captures.get(1).map(|m| m.as_str()),
        remainder: captures.get(2).map_or("", |m| m.as_str().trim()),
    }))
}

/// Parses the parenthesized cardinality of a directive.
///
/// `None` means the parentheses were omitted, which allows exactly one choice.
/// `line` is the 1-based docblock line used in error messages.
pub fn parse_cardinality(
    cardinality: Option<&str>,
    line: usize,
) -> Result<ChoiceRange, ChoiceSectionError> {
    let Some(text) = cardinality.map(str::trim) else {
        return Ok(ChoiceRange::default());
    };

    let parse_count = |s: &str| {
        s.trim().parse::<usize>().map_err(|_| {
            ChoiceSectionError::new(line, format!("'{text}' is not a count or a range like 1..3"))
        })
    };

    match text.split_once(RANGE_SEPARATOR) {
        Some((lower, upper)) => {
            let min = parse_count(lower)?;
            let max = parse_count(upper)?;
            if min > max {
                return Err(ChoiceSectionError::new(line, format!("range {min}..{max} is empty")));
            }
            Ok(ChoiceRange::Between {
                min,
                max,
            })
        }
        None => Ok(ChoiceRange::Exactly(parse_count(text)?)),
    }
}

/// Decodes a YAML sequence of choices. An empty (null) document is an empty list.
fn decode_choices(text: &str, line: usize) -> Result<Vec<Value>, ChoiceSectionError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_yaml::from_str(text).map_err(|e| {
        ChoiceSectionError::new(line, format!("choices are not valid YAML: {e}"))
    })?;

    match value {
        Value::Sequence(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(ChoiceSectionError::new(
            line,
            format!("choices must be a YAML list, found {}", node_kind(&other)),
        )),
    }
}

/// Scans a docblock for a `Choose` directive.
///
/// Scanning starts at the second line; the first is the description. Only the
/// first directive counts. Inline choices are taken from the rest of the
/// directive line; otherwise every following docblock line is uncommented and
/// the joined text is decoded as one YAML list.
///
/// Returns `Ok(None)` when no directive is present and an error when the
/// directive's cardinality or choice list cannot be decoded.
///
/// # Examples
///
/// ```rust
/// use yamldoc_cli::choices::{parse_choices, ChoiceRange};
///
/// let section = parse_choices(&["# Description", "# Choose (2):", "# - oranges", "# - bananas"])
///     .unwrap()
///     .unwrap();
/// assert_eq!(section.range, ChoiceRange::Exactly(2));
/// assert_eq!(section.choices.len(), 2);
/// ```
pub fn parse_choices<S: AsRef<str>>(
    docblock: &[S],
) -> Result<Option<ChoiceSection>, ChoiceSectionError> {
    for (index, line) in docblock.iter().enumerate().skip(1) {
        let line_number = index + 1;
        let directive = match_directive(line.as_ref())
            .map_err(|e| ChoiceSectionError::new(line_number, e.to_string()))?;
        let Some(directive) = directive else {
            continue;
        };

        let range = parse_cardinality(directive.cardinality, line_number)?;
        let choices = if directive.remainder.is_empty() {
            let block: Vec<&str> =
                docblock[index + 1..].iter().map(|l| uncomment(l.as_ref())).collect();
            decode_choices(&block.join("\n"), line_number)?
        } else {
            decode_choices(directive.remainder, line_number)?
        };

        tracing::trace!("Found choice section on docblock line {line_number}: {range} of {} choices", choices.len());
        return Ok(Some(ChoiceSection {
            range,
            choices,
        }));
    }

    Ok(None)
}

/// Derives the choice section of an optional docblock.
///
/// This is the pure derivation a [`Mapping`](crate::mapping::Mapping) runs
/// whenever its docblock is assigned. An absent docblock has no choices.
pub fn derive_choices(
    docblock: Option<&[String]>,
) -> Result<Option<ChoiceSection>, ChoiceSectionError> {
    match docblock {
        Some(lines) => parse_choices(lines),
        None => Ok(None),
    }
}
