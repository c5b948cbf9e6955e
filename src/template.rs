//! Template-literal pattern engine.
//!
//! A [`Template`] is a union of template literals: literal text interleaved
//! with typed holes. Holes whose type is a union of literals are distributed
//! up front, so matching only ever deals with `${string}` and `${number}`.
//!
//! Matching follows the host checker's inference rule:
//! - the candidate must carry the leading and trailing text;
//! - a hole followed by delimiter text captures up to the *first* occurrence
//!   of that delimiter;
//! - a hole directly followed by another hole captures exactly one character;
//! - the last hole captures whatever is left.
//!
//! Each capture is then checked against its hole type.
use std::fmt;

use crate::number::is_number_string;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Placeholder type inside a template literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hole {
    /// `${string}`: any text, including empty.
    String,
    /// `${number}`: text that converts to a finite number.
    Number,
}

/// One piece of a template literal as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Hole(Hole),
    /// `${'a' | 'b' | 8}`: a hole restricted to literal alternatives.
    OneOf(Vec<String>),
}

/// A template literal with every literal-union hole distributed away.
///
/// Invariant: `texts.len() == holes.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    texts: Vec<String>,
    holes: Vec<Hole>,
}

/// A union of template literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    written: Vec<Vec<Part>>,
    members: Vec<Literal>,
}

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTION
// ————————————————————————————————————————————————————————————————————————————

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }
    pub fn string() -> Self {
        Part::Hole(Hole::String)
    }
    pub fn number() -> Self {
        Part::Hole(Hole::Number)
    }
    pub fn one_of<I>(choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Part::OneOf(choices.into_iter().map(Into::into).collect())
    }
}

impl Literal {
    fn empty() -> Self {
        Literal { texts: vec![String::new()], holes: Vec::new() }
    }

    fn push_text(&mut self, text: &str) {
        // `texts` is never empty, see the invariant above
        if let Some(last) = self.texts.last_mut() {
            last.push_str(text);
        }
    }

    fn push_hole(&mut self, hole: Hole) {
        self.holes.push(hole);
        self.texts.push(String::new());
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Split `candidate` into one capture per hole, or `None` when the
    /// literal text does not line up.
    pub fn capture<'s>(&self, candidate: &'s str) -> Option<Vec<&'s str>> {
        let start = self.texts.first()?.as_str();
        let end = self.texts.last()?.as_str();

        if self.holes.is_empty() {
            return (candidate == start).then(Vec::new);
        }
        if candidate.len() < start.len() + end.len()
            || !candidate.starts_with(start)
            || !candidate.ends_with(end)
        {
            return None;
        }

        let body_end = candidate.len() - end.len();
        let mut pos = start.len();
        let mut captures = Vec::with_capacity(self.holes.len());

        for delim in &self.texts[1..self.texts.len() - 1] {
            if delim.is_empty() {
                let ch = candidate[pos..body_end].chars().next()?;
                captures.push(&candidate[pos..pos + ch.len_utf8()]);
                pos += ch.len_utf8();
            } else {
                let found = pos + candidate[pos..body_end].find(delim.as_str())?;
                captures.push(&candidate[pos..found]);
                pos = found + delim.len();
            }
        }
        captures.push(&candidate[pos..body_end]);
        Some(captures)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self.capture(candidate) {
            None => false,
            Some(captures) => self
                .holes
                .iter()
                .zip(captures)
                .all(|(hole, text)| hole.accepts(text)),
        }
    }
}

impl Hole {
    pub fn accepts(self, text: &str) -> bool {
        match self {
            Hole::String => true,
            Hole::Number => is_number_string(text),
        }
    }
}

impl Template {
    /// A template made of a single template literal.
    pub fn new(parts: Vec<Part>) -> Self {
        Self::union(vec![parts])
    }

    /// A union of template literals. Literal-union holes are distributed, so
    /// `a${'1' | '2'}${string}` contributes `a1${string}` and `a2${string}`.
    pub fn union(alternatives: Vec<Vec<Part>>) -> Self {
        let members = alternatives.iter().flat_map(|parts| distribute(parts)).collect();
        Template { written: alternatives, members }
    }

    pub fn members(&self) -> &[Literal] {
        &self.members
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let matched = self.members.iter().any(|member| member.matches(candidate));
        tracing::trace!(template = %self, candidate, matched, "template match");
        matched
    }

    /// Captures from the first member that matches `candidate`.
    pub fn captures<'s>(&self, candidate: &'s str) -> Option<Vec<&'s str>> {
        self.members
            .iter()
            .find(|member| member.matches(candidate))
            .and_then(|member| member.capture(candidate))
    }
}

fn distribute(parts: &[Part]) -> Vec<Literal> {
    let mut out = vec![Literal::empty()];
    for part in parts {
        match part {
            Part::Text(text) => out.iter_mut().for_each(|lit| lit.push_text(text)),
            Part::Hole(hole) => out.iter_mut().for_each(|lit| lit.push_hole(*hole)),
            Part::OneOf(choices) => {
                out = out
                    .into_iter()
                    .flat_map(|lit| {
                        choices.iter().map(move |choice| {
                            let mut next = lit.clone();
                            next.push_text(choice);
                            next
                        })
                    })
                    .collect();
            }
        }
    }
    out
}

// ————————————————————————————————————————————————————————————————————————————
// RENDERING
// ————————————————————————————————————————————————————————————————————————————

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hole::String => f.write_str("${string}"),
            Hole::Number => f.write_str("${number}"),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Text(text) => f.write_str(text),
            Part::Hole(hole) => write!(f, "{hole}"),
            Part::OneOf(choices) => {
                f.write_str("${")?;
                for (i, choice) in choices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    // numeric literals render bare, text literals quoted
                    if choice.parse::<i64>().is_ok() {
                        f.write_str(choice)?;
                    } else {
                        write!(f, "'{choice}'")?;
                    }
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, parts) in self.written.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str("`")?;
            for part in parts {
                write!(f, "{part}")?;
            }
            f.write_str("`")?;
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
