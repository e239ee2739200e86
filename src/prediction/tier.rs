//! Qualitative bands derived from a predicted chance.

/// One of the four result bands, ordered from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    Moderate,
    Lower,
}

/// Inclusive lower bounds, checked top-down. Anything below the last bound
/// (including NaN) is `Tier::Lower`.
const THRESHOLDS: &[(f64, Tier)] = &[
    (0.8, Tier::Excellent),
    (0.6, Tier::Good),
    (0.4, Tier::Moderate),
];

impl Tier {
    pub fn for_chance(chance: f64) -> Tier {
        THRESHOLDS
            .iter()
            .find(|(bound, _)| chance >= *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Lower)
    }

    /// Stylesheet color token, e.g. `success`.
    pub fn color_token(self) -> &'static str {
        match self {
            Tier::Excellent => "success",
            Tier::Good => "primary",
            Tier::Moderate => "secondary",
            Tier::Lower => "error",
        }
    }

    /// CSS value resolving the token through the host stylesheet.
    pub fn css_color(self) -> String {
        format!("var(--{}-color)", self.color_token())
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent Chance! Your profile is highly competitive.",
            Tier::Good => "Good Chance. Strong application required.",
            Tier::Moderate => "Moderate Chance. Focus on strengthening areas.",
            Tier::Lower => "Lower Chance. Consider improvements or backup options.",
        }
    }
}
