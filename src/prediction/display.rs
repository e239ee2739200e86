//! Turns a service result into the text, color and bar width the page shows.

use crate::error::PredictorError;

use super::fields::to_fixed;
use super::tier::Tier;

/// Output sentinel for a rejected request.
pub const REJECTED_OUTPUT: &str = "N/A";
/// Output sentinel for a request that never completed.
pub const TRANSPORT_OUTPUT: &str = "Error";

/// Rendered form of a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDisplay {
    pub chance: f64,
    pub tier: Tier,
    /// `chance * 100` with exactly two decimals and a `%` suffix.
    pub percentage_text: String,
    /// Status bar width in percent, always within `0..=100`.
    pub bar_width: u8,
}

impl ResultDisplay {
    pub fn from_chance(chance: f64) -> Self {
        let percentage = chance * 100.0;
        Self {
            chance,
            tier: Tier::for_chance(chance),
            percentage_text: format!("{}%", to_fixed(percentage, 2)),
            bar_width: bar_width(percentage),
        }
    }

    pub fn color(&self) -> String {
        self.tier.css_color()
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

/// Rounds to the nearest whole percent and clamps into `0..=100`.
/// NaN collapses to an empty bar.
pub fn bar_width(percentage: f64) -> u8 {
    if percentage.is_nan() {
        return 0;
    }
    percentage.round().clamp(0.0, 100.0) as u8
}

/// What the result area shows after a submission settles.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Predicted(ResultDisplay),
    Failed {
        output: &'static str,
        message: String,
        /// Diagnostic detail to log, never displayed.
        detail: Option<String>,
    },
}

impl Outcome {
    pub fn from_result(result: Result<f64, PredictorError>) -> Self {
        match result {
            Ok(chance) => Outcome::Predicted(ResultDisplay::from_chance(chance)),
            Err(err @ PredictorError::Rejected(_)) => Outcome::Failed {
                output: REJECTED_OUTPUT,
                message: err.to_string(),
                detail: None,
            },
            Err(PredictorError::Transport { detail }) => Outcome::Failed {
                output: TRANSPORT_OUTPUT,
                message: PredictorError::transport("").to_string(),
                detail: Some(detail),
            },
            Err(err) => Outcome::Failed {
                output: TRANSPORT_OUTPUT,
                message: err.to_string(),
                detail: None,
            },
        }
    }

    pub fn output_text(&self) -> String {
        match self {
            Outcome::Predicted(display) => display.percentage_text.clone(),
            Outcome::Failed { output, .. } => output.to_string(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Predicted(display) => display.message().to_string(),
            Outcome::Failed { message, .. } => message.clone(),
        }
    }

    /// Output text color. Failures always use the error token.
    pub fn color(&self) -> String {
        match self {
            Outcome::Predicted(display) => display.color(),
            Outcome::Failed { .. } => Tier::Lower.css_color(),
        }
    }

    pub fn display(&self) -> Option<&ResultDisplay> {
        match self {
            Outcome::Predicted(display) => Some(display),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Outcome::Failed { detail, .. } => detail.as_deref(),
            Outcome::Predicted(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_text_has_two_decimals() {
        assert_eq!(ResultDisplay::from_chance(0.9234).percentage_text, "92.34%");
        assert_eq!(ResultDisplay::from_chance(0.5).percentage_text, "50.00%");
        assert_eq!(ResultDisplay::from_chance(0.0).percentage_text, "0.00%");
        assert_eq!(ResultDisplay::from_chance(1.0).percentage_text, "100.00%");
    }

    #[test]
    fn test_percentage_text_rounds_ties_up() {
        assert_eq!(ResultDisplay::from_chance(0.62125).percentage_text, "62.13%");
        assert_eq!(ResultDisplay::from_chance(0.00125).percentage_text, "0.13%");
        assert_eq!(ResultDisplay::from_chance(0.15625).percentage_text, "15.63%");
    }

    #[test]
    fn test_negative_zero_prints_unsigned() {
        let display = ResultDisplay::from_chance(-0.0);
        assert_eq!(display.percentage_text, "0.00%");
        assert_eq!(display.bar_width, 0);
    }

    #[test]
    fn test_bar_width_rounds_and_caps() {
        assert_eq!(ResultDisplay::from_chance(0.5).bar_width, 50);
        assert_eq!(ResultDisplay::from_chance(1.2).bar_width, 100);
        assert_eq!(ResultDisplay::from_chance(0.9234).bar_width, 92);
        assert_eq!(ResultDisplay::from_chance(0.716).bar_width, 72);
    }

    #[test]
    fn test_bar_width_floors_at_zero() {
        assert_eq!(ResultDisplay::from_chance(-0.25).bar_width, 0);
        assert_eq!(bar_width(f64::NAN), 0);
    }

    #[test]
    fn test_out_of_range_text_is_not_clamped() {
        let display = ResultDisplay::from_chance(1.2);
        assert_eq!(display.percentage_text, "120.00%");
        assert_eq!(display.tier, Tier::Excellent);

        let nan = ResultDisplay::from_chance(f64::NAN);
        assert_eq!(nan.percentage_text, "NaN%");
        assert_eq!(nan.tier, Tier::Lower);
    }

    #[test]
    fn test_success_outcome_uses_tier() {
        let outcome = Outcome::from_result(Ok(0.65));
        assert_eq!(outcome.output_text(), "65.00%");
        assert_eq!(outcome.message(), "Good Chance. Strong application required.");
        assert_eq!(outcome.color(), "var(--primary-color)");
        assert_eq!(outcome.display().map(|d| d.bar_width), Some(65));
        assert_eq!(outcome.diagnostic(), None);
    }

    #[test]
    fn test_rejection_outcome() {
        let outcome = Outcome::from_result(Err(PredictorError::rejected(Some("bad input".into()))));
        assert_eq!(outcome.output_text(), "N/A");
        assert_eq!(outcome.message(), "Error: bad input");
        assert_eq!(outcome.color(), "var(--error-color)");
        assert!(outcome.display().is_none());
        assert_eq!(outcome.diagnostic(), None);
    }

    #[test]
    fn test_transport_outcome_keeps_detail_for_logging() {
        let outcome = Outcome::from_result(Err(PredictorError::transport("connection refused")));
        assert_eq!(outcome.output_text(), "Error");
        assert_eq!(outcome.message(), "A network error occurred. Please try again.");
        assert_eq!(outcome.color(), "var(--error-color)");
        assert_eq!(outcome.diagnostic(), Some("connection refused"));
    }
}
