//! Classification enums and literal advisory records.

use serde::{Deserialize, Serialize};

/// Severity band of a structural risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "BAIXO",
            Severity::Medium => "MEDIO",
            Severity::High => "ALTO",
            Severity::Critical => "CRÍTICO",
        }
    }

    /// Marker glyph printed in front of each risk-factor line.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Low => "📊",
            Severity::Medium => "⚡",
            Severity::High => "⚠",
            Severity::Critical => "🔴",
        }
    }
}

/// Time frame a recommendation should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Immediate => "IMEDIATA",
            Priority::ShortTerm => "CURTO PRAZO",
            Priority::MediumTerm => "MEDIO PRAZO",
            Priority::LongTerm => "LONGO PRAZO",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Priority::Immediate => "🔴",
            Priority::ShortTerm => "⚠",
            Priority::MediumTerm | Priority::LongTerm => "📋",
        }
    }
}

/// A structural weakness called out in the sustainability section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskFactor {
    pub factor: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

/// A follow-up action listed in the conclusions section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Critical.as_str(), "CRÍTICO");
        assert_eq!(Severity::Critical.marker(), "🔴");
        assert_eq!(Severity::Low.as_str(), "BAIXO");
        assert_eq!(Severity::Low.marker(), "📊");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn priority_markers_collapse_beyond_short_term() {
        assert_eq!(Priority::Immediate.marker(), "🔴");
        assert_eq!(Priority::ShortTerm.marker(), "⚠");
        assert_eq!(Priority::MediumTerm.marker(), "📋");
        assert_eq!(Priority::LongTerm.marker(), "📋");
    }
}
