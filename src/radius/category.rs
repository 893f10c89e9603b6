use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::error::RadiusResult;
use super::ops::unpack;
use super::value::{Corners, Radius, Scalar};
use crate::tokens::{RadiusTokens, RADIUS_TOKENS};

pub const SMALL: &str = "small";
pub const MEDIUM: &str = "medium";
pub const LARGE: &str = "large";

static GLOBAL_TABLE: OnceLock<CategoryTable> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
struct Category {
    radius: Radius,
    corners: Corners,
}

impl Category {
    fn uniform(scalar: Scalar) -> Self {
        Self {
            radius: Radius::single(scalar.clone()),
            corners: Corners::new([scalar.clone(), scalar.clone(), scalar.clone(), scalar]),
        }
    }
}

/// Named preset radii. Built once and read-only afterwards; overrides
/// produce a new table instead of mutating a shared one.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    entries: BTreeMap<String, Category>,
}

impl CategoryTable {
    pub fn from_tokens(tokens: RadiusTokens) -> Self {
        let entries = [
            (SMALL, tokens.small),
            (MEDIUM, tokens.medium),
            (LARGE, tokens.large),
        ]
        .into_iter()
        .map(|(name, px)| {
            (
                name.to_string(),
                Category::uniform(Scalar::px(f64::from(px))),
            )
        })
        .collect();
        Self { entries }
    }

    /// Returns a table with `name` bound to `radius`, replacing any
    /// existing category of that name.
    pub fn with_category(mut self, name: impl Into<String>, radius: Radius) -> RadiusResult<Self> {
        let corners = Corners::from(unpack(radius.scalars())?);
        self.entries.insert(name.into(), Category { radius, corners });
        Ok(self)
    }

    /// The category's configured value, in the shorthand form it was defined with.
    pub fn get(&self, name: &str) -> Option<&Radius> {
        self.entries.get(name).map(|category| &category.radius)
    }

    pub fn corners(&self, name: &str) -> Option<&Corners> {
        self.entries.get(name).map(|category| &category.corners)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Process-wide table: defaults merged with the user's `radius.json`,
    /// loaded on first use.
    pub fn global() -> &'static Self {
        GLOBAL_TABLE.get_or_init(crate::theme::load_category_table)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::from_tokens(RADIUS_TOKENS)
    }
}
