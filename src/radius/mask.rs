use super::error::{RadiusError, RadiusResult};
use super::value::{Corners, Scalar, MAX_CORNERS};

/// Per-corner keep flags, in the same order as [`Corners`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask([bool; MAX_CORNERS]);

impl Mask {
    pub const ALL: Self = Self([true, true, true, true]);
    pub const NONE: Self = Self([false, false, false, false]);
    pub const TOP: Self = Self([true, true, false, false]);
    pub const BOTTOM: Self = Self([false, false, true, true]);
    pub const LEFT: Self = Self([true, false, false, true]);
    pub const RIGHT: Self = Self([false, true, true, false]);

    pub const fn new(flags: [bool; MAX_CORNERS]) -> Self {
        Self(flags)
    }

    pub const fn flags(self) -> [bool; MAX_CORNERS] {
        self.0
    }

    /// Forces masked-out corners to a literal `0`.
    pub fn apply(self, corners: Corners) -> Corners {
        let mut scalars = corners.into_array();
        for (scalar, keep) in scalars.iter_mut().zip(self.0) {
            if !keep {
                *scalar = Scalar::zero();
            }
        }
        Corners::new(scalars)
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self::ALL
    }
}

impl TryFrom<&[u8]> for Mask {
    type Error = RadiusError;

    fn try_from(values: &[u8]) -> RadiusResult<Self> {
        let invalid = || RadiusError::invalid_mask(format!("{values:?}"));
        let flags: [u8; MAX_CORNERS] = values.try_into().map_err(|_| invalid())?;
        let mut mask = [false; MAX_CORNERS];
        for (slot, flag) in mask.iter_mut().zip(flags) {
            *slot = match flag {
                0 => false,
                1 => true,
                _ => return Err(invalid()),
            };
        }
        Ok(Self(mask))
    }
}

impl TryFrom<[u8; MAX_CORNERS]> for Mask {
    type Error = RadiusError;

    fn try_from(values: [u8; MAX_CORNERS]) -> RadiusResult<Self> {
        Self::try_from(values.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_from_flags_accepts_binary_quads() {
        assert_eq!(Mask::try_from([1u8, 1, 0, 0]).unwrap(), Mask::TOP);
        assert_eq!(Mask::try_from([0u8, 1, 1, 0]).unwrap(), Mask::RIGHT);
    }

    #[test]
    fn mask_from_flags_rejects_wrong_length() {
        let error = Mask::try_from([1u8, 1, 0].as_slice()).unwrap_err();
        assert_eq!(
            error,
            RadiusError::InvalidMask {
                mask: "[1, 1, 0]".to_string()
            }
        );
        assert!(Mask::try_from([1u8, 1, 0, 0, 1].as_slice()).is_err());
    }

    #[test]
    fn mask_from_flags_rejects_non_binary_values() {
        assert!(matches!(
            Mask::try_from([1u8, 2, 0, 0]),
            Err(RadiusError::InvalidMask { .. })
        ));
    }

    #[test]
    fn named_masks_match_their_flags() {
        assert_eq!(Mask::NONE.flags(), [false; 4]);
        assert_eq!(Mask::BOTTOM, Mask::new([false, false, true, true]));
        assert_eq!(Mask::default(), Mask::ALL);
    }

    #[test]
    fn none_mask_zeroes_every_corner() {
        let corners = Corners::new([
            Scalar::px(4.0),
            Scalar::px(4.0),
            Scalar::px(4.0),
            Scalar::px(4.0),
        ]);
        assert_eq!(Mask::NONE.apply(corners).to_string(), "0 0 0 0");
    }

    #[test]
    fn apply_zeroes_masked_out_corners() {
        let corners = Corners::new([
            Scalar::px(4.0),
            Scalar::px(4.0),
            Scalar::deferred("var(--r)"),
            Scalar::px(4.0),
        ]);
        let masked = Mask::LEFT.apply(corners);
        assert_eq!(masked.to_string(), "4px 0 0 4px");
    }
}
