//! Border-radius resolution for component style authoring.
//!
//! Resolves named radius categories, expands shorthands to four corners,
//! mirrors corners for right-to-left layouts, masks corners per component
//! shape and resolves percentages against a fixed component height.

mod config;
pub mod error;
pub mod logging;
pub mod radius;
pub mod shape;
pub mod theme;
pub mod tokens;

pub use error::{AppError, AppResult};
pub use radius::{
    flip_radius, mask_radius, prop_value, resolve_percentage_radius, unpack,
    validate_radius_value, CategoryTable, Corners, Length, Mask, Radius, RadiusError,
    RadiusResult, RadiusValue, Resolver, Scalar, Term, Unit,
};
pub use shape::{ComponentShape, Direction};
pub use theme::{load_radius_config, CategorySetting, ConfigError, ConfigResult, RadiusConfig};
pub use tokens::{RadiusTokens, RADIUS_TOKENS};
