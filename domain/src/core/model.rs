//! Model selector value object

/// Which backend adapter the gateway invokes (Value Object)
///
/// The HTML form submits one of two wire values. Anything else parses to
/// [`ModelSelector::Unknown`], which is a named outcome rather than an error:
/// the gateway answers it with a fixed sentinel and never contacts a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelSelector {
    /// Anthropic Messages API
    Primary,
    /// DeepSeek chat completions API
    Secondary,
    /// Any unrecognized form value
    Unknown(String),
}

impl ModelSelector {
    /// Form value selecting the primary backend
    pub const PRIMARY_WIRE: &'static str = "claude";
    /// Form value selecting the secondary backend
    pub const SECONDARY_WIRE: &'static str = "deepseek";

    /// Get the wire identifier for this selector
    pub fn as_str(&self) -> &str {
        match self {
            ModelSelector::Primary => Self::PRIMARY_WIRE,
            ModelSelector::Secondary => Self::SECONDARY_WIRE,
            ModelSelector::Unknown(s) => s,
        }
    }

    /// Human-readable backend label used in logs and diagnostics
    pub fn label(&self) -> &str {
        match self {
            ModelSelector::Primary => "Claude",
            ModelSelector::Secondary => "DeepSeek",
            ModelSelector::Unknown(s) => s,
        }
    }
}

impl std::fmt::Display for ModelSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            Self::PRIMARY_WIRE => ModelSelector::Primary,
            Self::SECONDARY_WIRE => ModelSelector::Secondary,
            other => ModelSelector::Unknown(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("claude".parse::<ModelSelector>().unwrap(), ModelSelector::Primary);
        assert_eq!(
            "deepseek".parse::<ModelSelector>().unwrap(),
            ModelSelector::Secondary
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            "  claude \n".parse::<ModelSelector>().unwrap(),
            ModelSelector::Primary
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let selector: ModelSelector = "Claude".parse().unwrap();
        assert_eq!(selector, ModelSelector::Unknown("Claude".to_string()));
    }

    #[test]
    fn test_unknown_keeps_value() {
        let selector: ModelSelector = "gpt-5".parse().unwrap();
        assert_eq!(selector.as_str(), "gpt-5");
        assert_eq!(selector.to_string(), "gpt-5");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ModelSelector::Primary.label(), "Claude");
        assert_eq!(ModelSelector::Secondary.label(), "DeepSeek");
    }
}
