use crate::radius::RadiusError;
use crate::theme::ConfigError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Radius(#[from] RadiusError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radius::{prop_value, CategoryTable, RadiusValue};

    fn resolve(text: &str) -> AppResult<String> {
        let value: RadiusValue = text.parse()?;
        Ok(prop_value(&CategoryTable::default(), &value)?.to_string())
    }

    #[test]
    fn radius_errors_convert_into_app_error() {
        assert_eq!(resolve("small 2px").unwrap(), "4px 2px");
        let error = resolve("round").unwrap_err();
        assert!(matches!(error, AppError::Radius(RadiusError::InvalidRadius { .. })));
        assert_eq!(error.to_string(), "invalid radius value: round");
    }
}
