//! Rules for accepting incoming currency codes.

use std::collections::BTreeSet;

use cambio_shared::{AppError, CodePolicy, CurrenciesConfig, CurrencyCode, ValidationError};

/// Which well-formed codes the application accepts from callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CodeRules {
    /// Any three-letter code.
    #[default]
    FreeForm,
    /// Only the listed codes; anything else is rejected before the kernel runs.
    Closed(BTreeSet<CurrencyCode>),
}

impl CodeRules {
    /// Builds the rules from configuration.
    pub fn from_config(config: &CurrenciesConfig) -> Result<Self, ValidationError> {
        match config.code_policy {
            CodePolicy::FreeForm => Ok(Self::FreeForm),
            CodePolicy::Closed => Self::closed(config.allowed_codes.iter().map(String::as_str)),
        }
    }

    /// Closed rules over the given raw codes.
    pub fn closed<'a>(codes: impl IntoIterator<Item = &'a str>) -> Result<Self, ValidationError> {
        let set = codes
            .into_iter()
            .map(CurrencyCode::parse)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self::Closed(set))
    }

    /// Parses a raw code and applies the rules.
    pub fn check(&self, raw: &str) -> Result<CurrencyCode, AppError> {
        let code = CurrencyCode::parse(raw)?;
        match self {
            Self::Closed(allowed) if !allowed.contains(&code) => Err(AppError::Validation(
                format!("The currency {code} is not supported"),
            )),
            _ => Ok(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_form_accepts_any_well_formed_code() {
        let rules = CodeRules::FreeForm;
        assert_eq!(rules.check("cad").unwrap().as_str(), "CAD");
        assert!(matches!(rules.check("CA1"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_closed_rejects_unlisted_code() {
        let rules = CodeRules::closed(["USD", "brl"]).unwrap();
        assert_eq!(rules.check("BRL").unwrap().as_str(), "BRL");
        let err = rules.check("CAD").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: The currency CAD is not supported");
    }

    #[test]
    fn test_from_config() {
        let mut config = CurrenciesConfig::default();
        assert_eq!(CodeRules::from_config(&config).unwrap(), CodeRules::FreeForm);

        config.code_policy = CodePolicy::Closed;
        config.allowed_codes = vec!["USD".into(), "PEN".into()];
        let rules = CodeRules::from_config(&config).unwrap();
        assert!(rules.check("PEN").is_ok());
        assert!(rules.check("ARS").is_err());

        config.allowed_codes.push("P3N".into());
        assert!(CodeRules::from_config(&config).is_err());
    }
}
