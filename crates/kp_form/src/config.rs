//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// What derivations do with answers whose questions are currently hidden.
///
/// Clearing a prerequisite never deletes dependent answers from the answer
/// set, so switching back restores them. The policy only decides whether
/// derivations may read them meanwhile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Hidden answers still count, gated only by planet-list length.
    #[default]
    Retain,
    /// Hidden answers are ignored until their question is shown again.
    Mask,
}

impl StalePolicy {
    pub fn from_name(name: &str) -> Option<StalePolicy> {
        match name {
            "retain" => Some(Self::Retain),
            "mask" => Some(Self::Mask),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Mask => "mask",
        }
    }
}

/// Configuration of a form session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub stale_policy: StalePolicy,
    /// Reject writes outside each question's vocabulary (house 1-12, planet
    /// and star names, Retrograde/Direct, Yes/No).
    pub strict_vocabulary: bool,
    /// Maximum planets accepted by a multi-select write. Zero means the
    /// full planet list.
    pub max_related_planets: usize,
}

impl FormConfig {
    pub fn with_policy(stale_policy: StalePolicy) -> Self {
        Self {
            stale_policy,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.max_related_planets > kp_vedic_base::ALL_GRAHAS.len() {
            return Err(FormError::InvalidConfig(
                "max_related_planets cannot exceed the number of planets",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_retains_stale_answers() {
        let c = FormConfig::default();
        assert_eq!(c.stale_policy, StalePolicy::Retain);
        assert!(!c.strict_vocabulary);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn json_partial_document() {
        let c = FormConfig::from_json(r#"{"stale_policy": "mask"}"#).unwrap();
        assert_eq!(c, FormConfig::with_policy(StalePolicy::Mask));
    }

    #[test]
    fn json_rejects_unknown_fields() {
        assert!(matches!(
            FormConfig::from_json(r#"{"stale": "mask"}"#),
            Err(FormError::Json(_))
        ));
    }

    #[test]
    fn validate_caps_planet_limit() {
        let c = FormConfig {
            max_related_planets: 10,
            ..FormConfig::default()
        };
        assert!(matches!(c.validate(), Err(FormError::InvalidConfig(_))));
    }

    #[test]
    fn policy_names_round_trip() {
        for p in [StalePolicy::Retain, StalePolicy::Mask] {
            assert_eq!(StalePolicy::from_name(p.name()), Some(p));
        }
        assert_eq!(StalePolicy::from_name("keep"), None);
    }
}
