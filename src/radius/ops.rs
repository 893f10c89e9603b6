//! The radius operations used by component style rules.
//!
//! `unpack` and `flip_radius` work directly on shorthand lists of any element
//! type. The remaining operations resolve category names against a
//! [`CategoryTable`] before doing any geometry.

use std::fmt;

use super::category::CategoryTable;
use super::error::{RadiusError, RadiusResult};
use super::mask::Mask;
use super::value::{
    is_deferred_expression, join_css, Corners, Length, Radius, RadiusValue, Scalar, Term,
    MAX_CORNERS,
};

/// Expands a 1–4 value shorthand to explicit corners following the CSS
/// `border-radius` rule.
pub fn unpack<T: Clone + fmt::Display>(values: &[T]) -> RadiusResult<[T; MAX_CORNERS]> {
    match values {
        [a] => Ok([a.clone(), a.clone(), a.clone(), a.clone()]),
        [a, b] => Ok([a.clone(), b.clone(), a.clone(), b.clone()]),
        [a, b, c] => Ok([a.clone(), b.clone(), c.clone(), b.clone()]),
        [a, b, c, d] => Ok([a.clone(), b.clone(), c.clone(), d.clone()]),
        _ => Err(RadiusError::invalid_radius(join_css(values))),
    }
}

/// Swaps left and right corners for right-to-left layouts.
///
/// Works on the shorthand as written: a 2-value list swaps its pair and a
/// 3-value list becomes `b a b c`, which is not the same as unpacking first.
pub fn flip_radius<T: Clone + fmt::Display>(values: &[T]) -> RadiusResult<Vec<T>> {
    match values {
        [top_left, top_right, bottom_right, bottom_left] => Ok(vec![
            top_right.clone(),
            top_left.clone(),
            bottom_left.clone(),
            bottom_right.clone(),
        ]),
        [a, b, c] => Ok(vec![b.clone(), a.clone(), b.clone(), c.clone()]),
        [a, b] => Ok(vec![b.clone(), a.clone()]),
        _ if values.len() > MAX_CORNERS => Err(RadiusError::invalid_radius(join_css(values))),
        _ => Ok(values.to_vec()),
    }
}

/// Accepts numbers and `var(`/`calc(` expressions; the latter pass through
/// unevaluated.
pub fn validate_radius_value(term: &Term) -> RadiusResult<Scalar> {
    match term {
        Term::Scalar(scalar) => Ok(scalar.clone()),
        Term::Keyword(text) if is_deferred_expression(text) => Ok(Scalar::deferred(text.as_str())),
        Term::Keyword(text) => Err(RadiusError::invalid_radius(text.as_str())),
    }
}

/// Resolves category names and validates literals.
///
/// A lone category name yields the category's own value. In a list, a
/// category name at position `i` contributes corner `i` of that category.
pub fn prop_value(table: &CategoryTable, value: &RadiusValue) -> RadiusResult<Radius> {
    let terms = value.terms();
    if terms.is_empty() || terms.len() > MAX_CORNERS {
        return Err(RadiusError::invalid_radius(value.to_string()));
    }

    if let [Term::Keyword(name)] = terms {
        if let Some(radius) = table.get(name) {
            tracing::debug!(category = %name, %radius, "resolved radius category");
            return Ok(radius.clone());
        }
    }

    let scalars = terms
        .iter()
        .enumerate()
        .map(|(position, term)| match term {
            Term::Keyword(name) => match table.corners(name) {
                Some(corners) => Ok(corners.as_array()[position].clone()),
                None => validate_radius_value(term),
            },
            Term::Scalar(_) => validate_radius_value(term),
        })
        .collect::<RadiusResult<Vec<_>>>()?;
    Radius::new(scalars)
}

/// Converts percentage corners to absolute lengths against a fixed component
/// height. Only meaningful for components whose height never changes.
pub fn resolve_percentage_radius(
    table: &CategoryTable,
    height: Length,
    value: &RadiusValue,
) -> RadiusResult<Radius> {
    let resolved = prop_value(table, value)?;
    let scalars = resolved
        .into_scalars()
        .into_iter()
        .map(|scalar| match scalar {
            Scalar::Number(length) if length.is_percent() => {
                Scalar::Number(Length::new(height.value * (length.value / 100.0), height.unit))
            }
            other => other,
        })
        .collect();
    let radius = Radius::new(scalars)?;
    tracing::debug!(%height, %value, %radius, "resolved percentage radius");
    Ok(radius)
}

/// Resolves `value` to four corners and zeroes the ones `mask` drops.
pub fn mask_radius(table: &CategoryTable, value: &RadiusValue, mask: &[u8]) -> RadiusResult<Corners> {
    if value.len() > MAX_CORNERS {
        return Err(RadiusError::invalid_radius(value.to_string()));
    }
    let mask = Mask::try_from(mask)?;
    let radius = prop_value(table, value)?;
    let corners = Corners::from(unpack(radius.scalars())?);
    Ok(mask.apply(corners))
}

/// Bundles a category table so style rules can call the operations as
/// methods.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a CategoryTable,
}

impl<'a> Resolver<'a> {
    pub const fn new(table: &'a CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CategoryTable {
        self.table
    }

    pub fn prop_value(&self, value: &RadiusValue) -> RadiusResult<Radius> {
        prop_value(self.table, value)
    }

    pub fn resolve_percentage_radius(
        &self,
        height: Length,
        value: &RadiusValue,
    ) -> RadiusResult<Radius> {
        resolve_percentage_radius(self.table, height, value)
    }

    pub fn mask_radius(&self, value: &RadiusValue, mask: &[u8]) -> RadiusResult<Corners> {
        mask_radius(self.table, value, mask)
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(CategoryTable::global())
    }
}
