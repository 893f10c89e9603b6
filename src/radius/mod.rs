pub mod category;
pub mod error;
pub mod mask;
pub mod ops;
pub mod value;

pub use category::{CategoryTable, LARGE, MEDIUM, SMALL};
pub use error::{RadiusError, RadiusResult};
pub use mask::Mask;
pub use ops::{
    flip_radius, mask_radius, prop_value, resolve_percentage_radius, unpack,
    validate_radius_value, Resolver,
};
pub use value::{Corners, Length, Radius, RadiusValue, Scalar, Term, Unit, MAX_CORNERS};
