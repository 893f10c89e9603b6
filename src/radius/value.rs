//! Value types for border radii: lengths, scalars, unresolved terms and the
//! resolved 1–4 value and 4-corner forms.

use std::fmt;
use std::str::FromStr;

use super::error::{RadiusError, RadiusResult};

/// Most values a `border-radius` shorthand may carry.
pub const MAX_CORNERS: usize = 4;

const DEFERRED_MARKERS: [&str; 2] = ["var(", "calc("];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Unitless,
    Px,
    Percent,
    Rem,
    Em,
}

impl Unit {
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Unitless => "",
            Self::Px => "px",
            Self::Percent => "%",
            Self::Rem => "rem",
            Self::Em => "em",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "" => Some(Self::Unitless),
            "px" => Some(Self::Px),
            "%" => Some(Self::Percent),
            "rem" => Some(Self::Rem),
            "em" => Some(Self::Em),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const ZERO: Self = Self::new(0.0, Unit::Unitless);

    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    pub fn is_percent(&self) -> bool {
        self.unit == Unit::Percent
    }

    /// Parses `<number><unit>` where the unit is one of the supported suffixes.
    fn parse(token: &str) -> Option<Self> {
        let (number, suffix) = token.split_at(number_end(token));
        if number.is_empty() {
            return None;
        }
        let value = number.parse::<f64>().ok().filter(|value| value.is_finite())?;
        let unit = Unit::from_suffix(suffix)?;
        Some(Self::new(value, unit))
    }
}

/// Byte length of the leading `<number>`: optional sign, digits and dot, then
/// an exponent only when a digit follows `e`/`E`, so `2em` stops before `em`.
fn number_end(token: &str) -> usize {
    let bytes = token.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    while bytes
        .get(end)
        .is_some_and(|byte| byte.is_ascii_digit() || *byte == b'.')
    {
        end += 1;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        if bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
            end = exponent;
            while bytes.get(end).is_some_and(u8::is_ascii_digit) {
                end += 1;
            }
        }
    }
    end
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0.0 && self.value.abs() < 1e15 {
            write!(f, "{}{}", self.value as i64, self.unit.suffix())
        } else {
            write!(f, "{}{}", self.value, self.unit.suffix())
        }
    }
}

/// A single corner radius: a concrete length, or an expression the
/// stylesheet evaluates later.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(Length),
    Deferred(String),
}

impl Scalar {
    pub const fn zero() -> Self {
        Self::Number(Length::ZERO)
    }

    pub const fn px(value: f64) -> Self {
        Self::Number(Length::px(value))
    }

    pub const fn percent(value: f64) -> Self {
        Self::Number(Length::percent(value))
    }

    pub fn deferred(expression: impl Into<String>) -> Self {
        Self::Deferred(expression.into())
    }

    pub fn as_length(&self) -> Option<Length> {
        match self {
            Self::Number(length) => Some(*length),
            Self::Deferred(_) => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl From<Length> for Scalar {
    fn from(length: Length) -> Self {
        Self::Number(length)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(length) => length.fmt(f),
            Self::Deferred(expression) => f.write_str(expression),
        }
    }
}

/// One position of a radius before category resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Scalar(Scalar),
    Keyword(String),
}

impl Term {
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::Keyword(name.into())
    }

    pub fn parse(token: &str) -> Self {
        if is_deferred_expression(token) {
            return Self::Scalar(Scalar::deferred(token));
        }
        match Length::parse(token) {
            Some(length) => Self::Scalar(Scalar::Number(length)),
            None => Self::keyword(token),
        }
    }
}

impl From<Scalar> for Term {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Length> for Term {
    fn from(length: Length) -> Self {
        Self::Scalar(Scalar::Number(length))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => scalar.fmt(f),
            Self::Keyword(name) => f.write_str(name),
        }
    }
}

/// An unresolved radius as written by a style rule, e.g. `small small 0 0`.
///
/// Any number of terms is representable so that oversized shorthands can be
/// reported instead of silently truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusValue(Vec<Term>);

impl RadiusValue {
    pub fn new(terms: Vec<Term>) -> Self {
        Self(terms)
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        Self(vec![Term::keyword(name)])
    }

    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Term> for RadiusValue {
    fn from(term: Term) -> Self {
        Self(vec![term])
    }
}

impl From<Scalar> for RadiusValue {
    fn from(scalar: Scalar) -> Self {
        Self(vec![Term::Scalar(scalar)])
    }
}

impl From<Vec<Scalar>> for RadiusValue {
    fn from(scalars: Vec<Scalar>) -> Self {
        Self(scalars.into_iter().map(Term::Scalar).collect())
    }
}

impl FromStr for RadiusValue {
    type Err = RadiusError;

    fn from_str(input: &str) -> RadiusResult<Self> {
        let tokens = split_tokens(input)?;
        if tokens.is_empty() {
            return Err(RadiusError::invalid_radius(input));
        }
        Ok(Self(tokens.into_iter().map(Term::parse).collect()))
    }
}

impl fmt::Display for RadiusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_css(&self.0))
    }
}

/// A resolved radius of one to four scalars, still in shorthand form.
#[derive(Debug, Clone, PartialEq)]
pub struct Radius(Vec<Scalar>);

impl Radius {
    pub fn new(scalars: Vec<Scalar>) -> RadiusResult<Self> {
        if scalars.is_empty() || scalars.len() > MAX_CORNERS {
            return Err(RadiusError::invalid_radius(join_css(&scalars)));
        }
        Ok(Self(scalars))
    }

    pub fn single(scalar: Scalar) -> Self {
        Self(vec![scalar])
    }

    pub fn scalars(&self) -> &[Scalar] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_scalars(self) -> Vec<Scalar> {
        self.0
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_css(&self.0))
    }
}

/// Four corner radii in CSS order: top-left, top-right, bottom-right,
/// bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Corners([Scalar; MAX_CORNERS]);

impl Corners {
    pub const fn new(corners: [Scalar; MAX_CORNERS]) -> Self {
        Self(corners)
    }

    pub fn top_left(&self) -> &Scalar {
        &self.0[0]
    }

    pub fn top_right(&self) -> &Scalar {
        &self.0[1]
    }

    pub fn bottom_right(&self) -> &Scalar {
        &self.0[2]
    }

    pub fn bottom_left(&self) -> &Scalar {
        &self.0[3]
    }

    pub fn as_array(&self) -> &[Scalar; MAX_CORNERS] {
        &self.0
    }

    pub fn into_array(self) -> [Scalar; MAX_CORNERS] {
        self.0
    }

    /// Mirrors left and right corners for right-to-left layouts.
    pub fn flipped(&self) -> Self {
        let [top_left, top_right, bottom_right, bottom_left] = self.0.clone();
        Self([top_right, top_left, bottom_left, bottom_right])
    }
}

impl From<[Scalar; MAX_CORNERS]> for Corners {
    fn from(corners: [Scalar; MAX_CORNERS]) -> Self {
        Self(corners)
    }
}

impl fmt::Display for Corners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_css(&self.0))
    }
}

pub(crate) fn is_deferred_expression(token: &str) -> bool {
    DEFERRED_MARKERS.iter().any(|marker| token.contains(marker))
}

pub(crate) fn join_css<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits on whitespace outside parentheses so `calc(100% - 4px)` stays whole.
fn split_tokens(input: &str) -> RadiusResult<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (idx, ch) in input.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                start.get_or_insert(idx);
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| RadiusError::invalid_radius(input))?;
                start.get_or_insert(idx);
            }
            ch if ch.is_ascii_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(&input[begin..idx]);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
    }

    if depth != 0 {
        return Err(RadiusError::invalid_radius(input));
    }
    if let Some(begin) = start {
        tokens.push(&input[begin..]);
    }
    Ok(tokens)
}
