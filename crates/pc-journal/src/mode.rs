//! Dump-mode selection.

use serde::{Deserialize, Serialize};

/// Which non-mandatory problem elements are mirrored into the entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DumpMode {
    /// Mandatory records plus the default field set.
    #[default]
    None,

    /// Default set plus the essential diagnostic fields.
    Essential,

    /// Every textual element in the store.
    Full,
}

impl std::str::FromStr for DumpMode {
    type Err = String;

    /// Selector literals are case-sensitive; they are a wire contract, not
    /// user convenience.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(DumpMode::None),
            "ESSENTIAL" => Ok(DumpMode::Essential),
            "FULL" => Ok(DumpMode::Full),
            _ => Err(format!(
                "invalid dump mode '{s}' (expected NONE, ESSENTIAL, or FULL)"
            )),
        }
    }
}

impl std::fmt::Display for DumpMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DumpMode::None => write!(f, "NONE"),
            DumpMode::Essential => write!(f, "ESSENTIAL"),
            DumpMode::Full => write!(f, "FULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_exact_literals() {
        assert_eq!("NONE".parse::<DumpMode>().unwrap(), DumpMode::None);
        assert_eq!("ESSENTIAL".parse::<DumpMode>().unwrap(), DumpMode::Essential);
        assert_eq!("FULL".parse::<DumpMode>().unwrap(), DumpMode::Full);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("none".parse::<DumpMode>().is_err());
        assert!("Full".parse::<DumpMode>().is_err());
        assert!("essential".parse::<DumpMode>().is_err());
        assert!("".parse::<DumpMode>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [DumpMode::None, DumpMode::Essential, DumpMode::Full] {
            assert_eq!(mode.to_string().parse::<DumpMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(DumpMode::default(), DumpMode::None);
    }
}
