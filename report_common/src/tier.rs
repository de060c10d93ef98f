//! Severity tiers for the change from the 52-week high.
//!
//! A `Tier` is derived from `change_percent` alone and recomputed every time a report is
//! rendered. Renderers use [`Tier::style`] to pick an emphasis colour; the tier itself
//! knows nothing about HTML or terminals.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Visual-severity bucket for a row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Tier {
    /// Change of 50% or more.
    Severe,
    /// Change in `[40, 50)`.
    High,
    /// Change in `[30, 40)`.
    Elevated,
    /// Change in `[20, 30)`.
    Moderate,
    /// Change in `[10, 20)`.
    Mild,
    /// Any other present change, including negative ones.
    None,
    /// No change could be derived.
    NoTier,
}

/// Colours a renderer should apply to a row's change cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    /// Background colour as a `#RRGGBB` hex string.
    pub background: &'static str,
    /// Foreground colour as a `#RRGGBB` hex string.
    pub text: &'static str,
}

/// Foreground used on top of every tier background.
const LIGHT_TEXT: &str = "#F2EFE9";

/// Lower bounds checked in order, first match wins.
const THRESHOLDS: [(f64, Tier); 5] = [
    (50.0, Tier::Severe),
    (40.0, Tier::High),
    (30.0, Tier::Elevated),
    (20.0, Tier::Moderate),
    (10.0, Tier::Mild),
];

/// Maps a change percentage to its tier.
pub struct TierClassifier;

impl TierClassifier {
    /// Classify an optional change. Absent (or NaN) maps to [`Tier::NoTier`].
    pub fn classify(change_percent: Option<f64>) -> Tier {
        let Some(change) = change_percent.filter(|c| !c.is_nan()) else {
            return Tier::NoTier;
        };

        THRESHOLDS
            .iter()
            .find(|(lower, _)| change >= *lower)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::None)
    }
}

impl Tier {
    /// Presentation hint, `None` for tiers rendered without emphasis.
    pub fn style(self) -> Option<TierStyle> {
        let background = match self {
            Tier::Severe => "#3E7C59",
            Tier::High => "#3E6F6B",
            Tier::Elevated => "#5D8679",
            Tier::Moderate => "#317A86",
            Tier::Mild => "#61727C",
            Tier::None | Tier::NoTier => return Option::None,
        };
        Some(TierStyle {
            background,
            text: LIGHT_TEXT,
        })
    }

    /// CSS class name for HTML output, e.g. `tier-severe`.
    pub fn css_class(self) -> String {
        format!("tier-{}", self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn absent_is_no_tier() {
        assert_eq!(TierClassifier::classify(Option::None), Tier::NoTier);
        assert_eq!(TierClassifier::classify(Some(f64::NAN)), Tier::NoTier);
    }

    #[test]
    fn boundaries_are_inclusive_below() {
        assert_eq!(TierClassifier::classify(Some(50.0)), Tier::Severe);
        assert_eq!(TierClassifier::classify(Some(49.999)), Tier::High);
        assert_eq!(TierClassifier::classify(Some(40.0)), Tier::High);
        assert_eq!(TierClassifier::classify(Some(39.99)), Tier::Elevated);
        assert_eq!(TierClassifier::classify(Some(30.0)), Tier::Elevated);
        assert_eq!(TierClassifier::classify(Some(20.0)), Tier::Moderate);
        assert_eq!(TierClassifier::classify(Some(10.0)), Tier::Mild);
        assert_eq!(TierClassifier::classify(Some(9.99)), Tier::None);
        assert_eq!(TierClassifier::classify(Some(0.0)), Tier::None);
    }

    #[test]
    fn extremes() {
        assert_eq!(TierClassifier::classify(Some(1_000.0)), Tier::Severe);
        assert_eq!(TierClassifier::classify(Some(f64::INFINITY)), Tier::Severe);
        assert_eq!(TierClassifier::classify(Some(-10.0)), Tier::None);
        assert_eq!(TierClassifier::classify(Some(-99.0)), Tier::None);
        assert_eq!(TierClassifier::classify(Some(f64::NEG_INFINITY)), Tier::None);
    }

    #[test]
    fn only_emphasised_tiers_have_style() {
        for tier in Tier::iter() {
            let styled = tier.style().is_some();
            assert_eq!(styled, !matches!(tier, Tier::None | Tier::NoTier), "{tier}");
        }
        assert_eq!(Tier::Severe.style().unwrap().background, "#3E7C59");
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(Tier::NoTier.to_string(), "no-tier");
        assert_eq!(Tier::Severe.css_class(), "tier-severe");
        assert_eq!("ELEVATED".parse::<Tier>().unwrap(), Tier::Elevated);
    }
}
