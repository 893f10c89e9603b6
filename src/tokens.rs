/// Compile-time radius tokens backing the built-in categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusTokens {
    pub small: u16,
    pub medium: u16,
    pub large: u16,
    pub control_height: u16,
    pub field_height: u16,
}

pub const RADIUS_TOKENS: RadiusTokens = RadiusTokens {
    small: 4,
    medium: 8,
    large: 16,
    control_height: 36,
    field_height: 40,
};

#[cfg(test)]
mod tests {
    use super::RADIUS_TOKENS;

    #[test]
    fn radius_tokens_grow_with_category_size() {
        let tokens = RADIUS_TOKENS;
        assert!(tokens.small < tokens.medium);
        assert!(tokens.medium < tokens.large);
    }
}
