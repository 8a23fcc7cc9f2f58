use std::collections::BTreeSet;

use polars::prelude::*;
use tracing::warn;

use crate::dataset::MedalDataset;
use crate::error::PodiumResult;
use crate::schema::{country, game, map_output, medals, palette, timeline_output};
use crate::selection::{MapSelection, Scope, Season, SummarySelection, TimelineSelection};

/// Three-way gender-dominance label derived by comparing the two sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Men,
    Women,
    Even,
}

impl Category {
    /// The single comparison both visual surfaces rely on.
    pub fn of(male: i64, female: i64) -> Self {
        if male > female {
            Self::Men
        } else if female > male {
            Self::Women
        } else {
            Self::Even
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Even => "Even",
        }
    }

    /// Fixed palette shared by the map and the legend.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Men => palette::MEN,
            Self::Women => palette::WOMEN,
            Self::Even => palette::EVEN,
        }
    }
}

/// One map row: summed gender metrics for a country within one edition.
#[derive(Debug, Clone)]
pub struct CountryAggregate {
    pub code: String,
    pub name: String,
    pub male: i64,
    pub female: i64,
    pub category: Category,
}

impl CountryAggregate {
    pub fn color_hex(&self) -> &'static str {
        self.category.hex()
    }
}

/// Result of `map_aggregate`. `season` is `None` when the edition matched no
/// rows; callers use that to render their own empty state.
#[derive(Debug, Clone)]
pub struct MapAggregate {
    pub season: Option<Season>,
    pub rows: Vec<CountryAggregate>,
}

impl MapAggregate {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn male_total(&self) -> i64 {
        self.rows.iter().map(|row| row.male).sum()
    }

    pub fn female_total(&self) -> i64 {
        self.rows.iter().map(|row| row.female).sum()
    }
}

/// One point of the per-country timeline, chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    pub year: i64,
    pub male: i64,
    pub female: i64,
}

/// Per-gender medal counts across all five metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedalTally {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub total: i64,
    pub weighted_total: i64,
}

impl MedalTally {
    pub fn fields(&self) -> [(&'static str, i64); 5] {
        [
            ("Gold", self.gold),
            ("Silver", self.silver),
            ("Bronze", self.bronze),
            ("Total", self.total),
            ("Weighted total", self.weighted_total),
        ]
    }
}

/// All ten summed fields for the totals text block. Always numeric: an empty
/// selection is "zero medals", not "no data".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryTotals {
    pub men: MedalTally,
    pub women: MedalTally,
}

impl MedalDataset {
    /// Sum the selected methodology per country for one edition and derive
    /// each country's category. An edition absent from the table yields an
    /// empty row set, not an error.
    pub fn map_aggregate(&self, selection: &MapSelection) -> PodiumResult<MapAggregate> {
        let (men_col, women_col) = selection.methodology.columns();

        let filtered = self
            .frame()
            .clone()
            .lazy()
            .filter(col(game::SLUG).eq(lit(selection.edition.as_str())))
            .collect()?;

        let season = edition_season(&filtered)?;

        let grouped = filtered
            .lazy()
            .group_by([col(country::CODE), col(country::NAME)])
            .agg([
                col(men_col).sum().alias(map_output::MEN),
                col(women_col).sum().alias(map_output::WOMEN),
            ])
            .sort(
                [country::CODE, country::NAME],
                SortMultipleOptions::default(),
            )
            .collect()?;

        let codes = grouped.column(country::CODE)?.str()?;
        let names = grouped.column(country::NAME)?.str()?;
        let men_sums = grouped.column(map_output::MEN)?.i64()?;
        let women_sums = grouped.column(map_output::WOMEN)?.i64()?;

        let mut rows = Vec::with_capacity(grouped.height());
        for i in 0..grouped.height() {
            let male = men_sums.get(i).unwrap_or(0);
            let female = women_sums.get(i).unwrap_or(0);
            rows.push(CountryAggregate {
                code: codes.get(i).unwrap_or("").to_string(),
                name: names.get(i).unwrap_or("").to_string(),
                male,
                female,
                category: Category::of(male, female),
            });
        }

        Ok(MapAggregate { season, rows })
    }

    /// Per-year gender sums for one country and season, sorted ascending by
    /// year regardless of source row order. An empty series is valid output.
    pub fn timeline_aggregate(
        &self,
        selection: &TimelineSelection,
    ) -> PodiumResult<Vec<TimelinePoint>> {
        let (men_col, women_col) = selection.methodology.columns();

        let grouped = self
            .frame()
            .clone()
            .lazy()
            .filter(
                col(country::CODE)
                    .eq(lit(selection.country.as_str()))
                    .and(col(game::SEASON).eq(lit(selection.season.as_str()))),
            )
            .group_by([col(game::YEAR)])
            .agg([
                col(men_col).sum().alias(timeline_output::MEN),
                col(women_col).sum().alias(timeline_output::WOMEN),
            ])
            .sort([game::YEAR], SortMultipleOptions::default())
            .collect()?;

        let years = grouped.column(game::YEAR)?.i64()?;
        let men_sums = grouped.column(timeline_output::MEN)?.i64()?;
        let women_sums = grouped.column(timeline_output::WOMEN)?.i64()?;

        let mut points = Vec::with_capacity(grouped.height());
        for i in 0..grouped.height() {
            points.push(TimelinePoint {
                year: years.get(i).unwrap_or(0),
                male: men_sums.get(i).unwrap_or(0),
                female: women_sums.get(i).unwrap_or(0),
            });
        }
        Ok(points)
    }

    /// Sum all ten gender × metric fields for one country and season, over
    /// all years or one hovered year. An empty filter yields all zeroes.
    pub fn totals_summary(&self, selection: &SummarySelection) -> PodiumResult<SummaryTotals> {
        let mut predicate = col(country::CODE)
            .eq(lit(selection.country.as_str()))
            .and(col(game::SEASON).eq(lit(selection.season.as_str())));
        if let Scope::Year(year) = selection.scope {
            predicate = predicate.and(col(game::YEAR).eq(lit(year)));
        }

        let sums = self
            .frame()
            .clone()
            .lazy()
            .filter(predicate)
            .select(
                medals::ALL
                    .iter()
                    .map(|name| col(*name).sum().alias(*name))
                    .collect::<Vec<_>>(),
            )
            .collect()?;

        let value = |name: &str| -> PodiumResult<i64> {
            Ok(sums.column(name)?.i64()?.get(0).unwrap_or(0))
        };

        Ok(SummaryTotals {
            men: MedalTally {
                gold: value(medals::MEN_GOLD)?,
                silver: value(medals::MEN_SILVER)?,
                bronze: value(medals::MEN_BRONZE)?,
                total: value(medals::MEN_TOTAL)?,
                weighted_total: value(medals::MEN_WEIGHTED_TOTAL)?,
            },
            women: MedalTally {
                gold: value(medals::WOMEN_GOLD)?,
                silver: value(medals::WOMEN_SILVER)?,
                bronze: value(medals::WOMEN_BRONZE)?,
                total: value(medals::WOMEN_TOTAL)?,
                weighted_total: value(medals::WOMEN_WEIGHTED_TOTAL)?,
            },
        })
    }
}

/// The unique season of the filtered rows; `None` for an empty filter.
fn edition_season(filtered: &DataFrame) -> PodiumResult<Option<Season>> {
    if filtered.height() == 0 {
        return Ok(None);
    }

    let seasons = filtered.column(game::SEASON)?.str()?;
    let distinct: BTreeSet<&str> = seasons.into_iter().flatten().collect();
    if distinct.len() > 1 {
        warn!(seasons = ?distinct, "edition rows disagree on season; using the first");
    }

    match seasons.get(0) {
        Some(value) => Ok(Some(Season::parse(value)?)),
        None => Ok(None),
    }
}
