use crate::error::{PodiumError, PodiumResult};
use crate::schema::{medals, methodology, season};

/// Scoring scheme used to compare the two gender sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Methodology {
    Gold,
    Total,
    WeightedTotal,
}

impl Methodology {
    /// Parse a UI key. Unknown keys fail loudly so a bad dropdown value can
    /// never turn into a garbled column lookup.
    pub fn parse(key: &str) -> PodiumResult<Self> {
        match key {
            methodology::GOLD => Ok(Self::Gold),
            methodology::TOTAL => Ok(Self::Total),
            methodology::WEIGHTED_TOTAL => Ok(Self::WeightedTotal),
            other => Err(PodiumError::UnknownMethodology(other.to_string())),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Gold => methodology::GOLD,
            Self::Total => methodology::TOTAL,
            Self::WeightedTotal => methodology::WEIGHTED_TOTAL,
        }
    }

    /// Human label, e.g. "Weighted total".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Total => "Total",
            Self::WeightedTotal => "Weighted total",
        }
    }

    /// The (men, women) source-column pair for this methodology.
    pub fn columns(&self) -> (&'static str, &'static str) {
        match self {
            Self::Gold => (medals::MEN_GOLD, medals::WOMEN_GOLD),
            Self::Total => (medals::MEN_TOTAL, medals::WOMEN_TOTAL),
            Self::WeightedTotal => (medals::MEN_WEIGHTED_TOTAL, medals::WOMEN_WEIGHTED_TOTAL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn parse(value: &str) -> PodiumResult<Self> {
        match value {
            season::SUMMER => Ok(Self::Summer),
            season::WINTER => Ok(Self::Winter),
            other => Err(PodiumError::UnknownSeason(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => season::SUMMER,
            Self::Winter => season::WINTER,
        }
    }

    /// Glyph used in the map title.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Summer => "☀",
            Self::Winter => "❄",
        }
    }
}

/// Year refinement for the totals summary. A hovered point on the timeline
/// narrows the aggregation to one year; no hover means all years for the
/// selected season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    AllYears,
    Year(i64),
}

impl Scope {
    pub fn from_hover(hovered_year: Option<i64>) -> Self {
        match hovered_year {
            Some(year) => Self::Year(year),
            None => Self::AllYears,
        }
    }
}

/// Resolved parameters for the map surface.
#[derive(Debug, Clone)]
pub struct MapSelection {
    pub edition: String,
    pub methodology: Methodology,
}

impl MapSelection {
    pub fn resolve(edition: &str, methodology: &str) -> PodiumResult<Self> {
        Ok(Self {
            edition: edition.to_string(),
            methodology: Methodology::parse(methodology)?,
        })
    }
}

/// Resolved parameters for the per-country timeline chart.
#[derive(Debug, Clone)]
pub struct TimelineSelection {
    pub country: String,
    pub methodology: Methodology,
    pub season: Season,
}

impl TimelineSelection {
    pub fn resolve(country: &str, methodology: &str, season: &str) -> PodiumResult<Self> {
        Ok(Self {
            country: country.to_string(),
            methodology: Methodology::parse(methodology)?,
            season: Season::parse(season)?,
        })
    }
}

/// Resolved parameters for the totals text block.
#[derive(Debug, Clone)]
pub struct SummarySelection {
    pub country: String,
    pub season: Season,
    pub scope: Scope,
}

impl SummarySelection {
    pub fn resolve(country: &str, season: &str, hovered_year: Option<i64>) -> PodiumResult<Self> {
        Ok(Self {
            country: country.to_string(),
            season: Season::parse(season)?,
            scope: Scope::from_hover(hovered_year),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methodology_parses_known_keys() {
        assert_eq!(Methodology::parse("gold").unwrap(), Methodology::Gold);
        assert_eq!(Methodology::parse("total").unwrap(), Methodology::Total);
        assert_eq!(
            Methodology::parse("weighted_total").unwrap(),
            Methodology::WeightedTotal
        );
    }

    #[test]
    fn methodology_rejects_unknown_key() {
        let err = Methodology::parse("silver").unwrap_err();
        assert!(matches!(err, PodiumError::UnknownMethodology(_)));
    }

    #[test]
    fn methodology_columns_are_fixed_pairs() {
        assert_eq!(
            Methodology::WeightedTotal.columns(),
            ("men_weighted_total", "women_weighted_total")
        );
        assert_eq!(Methodology::Gold.columns(), ("men_gold", "women_gold"));
    }

    #[test]
    fn season_rejects_unknown_value() {
        assert!(matches!(
            Season::parse("Autumn").unwrap_err(),
            PodiumError::UnknownSeason(_)
        ));
    }

    #[test]
    fn hover_switches_summary_scope() {
        let all = SummarySelection::resolve("ITA", "Summer", None).unwrap();
        assert_eq!(all.scope, Scope::AllYears);

        let one = SummarySelection::resolve("ITA", "Summer", Some(2024)).unwrap();
        assert_eq!(one.scope, Scope::Year(2024));
    }

    #[test]
    fn invalid_season_fails_at_resolve_boundary() {
        assert!(TimelineSelection::resolve("ITA", "gold", "spring").is_err());
        assert!(SummarySelection::resolve("ITA", "spring", Some(2024)).is_err());
    }
}
