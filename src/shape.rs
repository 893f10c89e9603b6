//! Component shapes: the radius, mask and optional fixed height a component
//! declares, rendered to `border-radius` CSS for either writing direction.

use serde::{Deserialize, Serialize};

use crate::radius::{
    prop_value, resolve_percentage_radius, unpack, CategoryTable, Corners, Length, Mask,
    RadiusResult, RadiusValue,
};
use crate::tokens::RADIUS_TOKENS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentShape {
    pub radius: RadiusValue,
    pub mask: Mask,
    pub fixed_height: Option<Length>,
}

impl ComponentShape {
    pub fn new(radius: RadiusValue) -> Self {
        Self {
            radius,
            mask: Mask::ALL,
            fixed_height: None,
        }
    }

    /// A button-sized component at the fixed control height.
    pub fn control(radius: RadiusValue) -> Self {
        Self::new(radius).with_fixed_height(Length::px(f64::from(RADIUS_TOKENS.control_height)))
    }

    /// A text-field-sized component at the fixed field height.
    pub fn field(radius: RadiusValue) -> Self {
        Self::new(radius).with_fixed_height(Length::px(f64::from(RADIUS_TOKENS.field_height)))
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = mask;
        self
    }

    /// Percentages are resolved against `height`, so only use this for
    /// components that never change height.
    pub fn with_fixed_height(mut self, height: Length) -> Self {
        self.fixed_height = Some(height);
        self
    }

    /// Masks in logical (left-to-right) order, then mirrors for RTL.
    pub fn corners(&self, table: &CategoryTable, direction: Direction) -> RadiusResult<Corners> {
        let radius = match self.fixed_height {
            Some(height) => resolve_percentage_radius(table, height, &self.radius)?,
            None => prop_value(table, &self.radius)?,
        };
        let corners = self.mask.apply(Corners::from(unpack(radius.scalars())?));
        Ok(match direction {
            Direction::Ltr => corners,
            Direction::Rtl => corners.flipped(),
        })
    }

    pub fn declaration(&self, table: &CategoryTable, direction: Direction) -> RadiusResult<String> {
        Ok(format!("border-radius: {};", self.corners(table, direction)?))
    }

    /// A rule for `selector`, plus a `[dir="rtl"]` override when mirroring
    /// changes the corners.
    pub fn rule(&self, selector: &str, table: &CategoryTable) -> RadiusResult<String> {
        let ltr = self.corners(table, Direction::Ltr)?;
        let rtl = self.corners(table, Direction::Rtl)?;
        let mut css = format!(
            "{selector} {{
  border-radius: {ltr};
}}
"
        );
        if rtl != ltr {
            css.push_str(&format!(
                "[dir=\"rtl\"] {selector} {{
  border-radius: {rtl};
}}
"
            ));
        }
        tracing::debug!(selector, "rendered border-radius rule");
        Ok(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radius::RadiusError;

    fn shape(text: &str) -> ComponentShape {
        ComponentShape::new(text.parse().unwrap())
    }

    #[test]
    fn declaration_resolves_categories() {
        let table = CategoryTable::default();
        assert_eq!(
            shape("medium").declaration(&table, Direction::Ltr).unwrap(),
            "border-radius: 8px 8px 8px 8px;"
        );
    }

    #[test]
    fn masked_start_corners_mirror_in_rtl() {
        let table = CategoryTable::default();
        let tab = shape("small").with_mask(Mask::LEFT);
        assert_eq!(
            tab.declaration(&table, Direction::Ltr).unwrap(),
            "border-radius: 4px 0 0 4px;"
        );
        assert_eq!(
            tab.declaration(&table, Direction::Rtl).unwrap(),
            "border-radius: 0 4px 4px 0;"
        );
    }

    #[test]
    fn fixed_height_resolves_percentages() {
        let table = CategoryTable::default();
        let pill = shape("50%").with_fixed_height(Length::px(36.0));
        assert_eq!(
            pill.declaration(&table, Direction::Ltr).unwrap(),
            "border-radius: 18px 18px 18px 18px;"
        );
    }

    #[test]
    fn control_and_field_shapes_resolve_against_token_heights() {
        let table = CategoryTable::default();
        let half: RadiusValue = "50%".parse().unwrap();
        assert_eq!(
            ComponentShape::control(half.clone())
                .corners(&table, Direction::Ltr)
                .unwrap()
                .to_string(),
            "18px 18px 18px 18px"
        );
        assert_eq!(
            ComponentShape::field(half)
                .with_mask(Mask::LEFT)
                .declaration(&table, Direction::Rtl)
                .unwrap(),
            "border-radius: 0 20px 20px 0;"
        );
    }

    #[test]
    fn percentages_stay_relative_without_fixed_height() {
        let table = CategoryTable::default();
        assert_eq!(
            shape("50%").declaration(&table, Direction::Ltr).unwrap(),
            "border-radius: 50% 50% 50% 50%;"
        );
    }

    #[test]
    fn rule_adds_rtl_override_only_when_corners_differ() {
        let table = CategoryTable::default();
        assert_eq!(
            shape("large").rule(".card", &table).unwrap(),
            ".card {\n  border-radius: 16px 16px 16px 16px;\n}\n"
        );
        assert_eq!(
            shape("large 0").with_mask(Mask::TOP).rule(".tab", &table).unwrap(),
            ".tab {\n  border-radius: 16px 0 0 0;\n}\n[dir=\"rtl\"] .tab {\n  border-radius: 0 16px 0 0;\n}\n"
        );
    }

    #[test]
    fn rule_surfaces_invalid_radius() {
        let table = CategoryTable::default();
        assert!(matches!(
            shape("round").rule(".chip", &table),
            Err(RadiusError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn direction_deserializes_lowercase() {
        let direction: Direction = serde_json::from_str("\"rtl\"").unwrap();
        assert_eq!(direction, Direction::Rtl);
    }
}
