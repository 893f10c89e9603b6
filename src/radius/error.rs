use thiserror::Error;

pub type RadiusResult<T> = std::result::Result<T, RadiusError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadiusError {
    #[error("invalid radius value: {value}")]
    InvalidRadius { value: String },
    #[error("invalid radius mask: {mask} (expected 4 flags of 0 or 1)")]
    InvalidMask { mask: String },
}

impl RadiusError {
    pub(crate) fn invalid_radius(value: impl Into<String>) -> Self {
        Self::InvalidRadius {
            value: value.into(),
        }
    }

    pub(crate) fn invalid_mask(mask: impl Into<String>) -> Self {
        Self::InvalidMask { mask: mask.into() }
    }
}
