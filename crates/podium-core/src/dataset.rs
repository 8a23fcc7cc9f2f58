use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{PodiumError, PodiumResult};
use crate::schema::{country, game, medals};
use crate::selection::Season;

/// External list of valid 3-letter country codes, used only to compute the
/// missing-code set. Loading it is best-effort: an unreadable source degrades
/// to an empty list instead of failing startup.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCodes(BTreeSet<String>);

impl ReferenceCodes {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Read codes from a local file, one code per line (first field if the
    /// line is comma-separated). Anything that is not three ASCII letters is
    /// ignored, which also skips headers and stray punctuation.
    pub fn from_csv(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                let codes: BTreeSet<String> = text
                    .lines()
                    .filter_map(|line| line.split(',').next())
                    .map(|field| field.trim().trim_matches('"').to_uppercase())
                    .filter(|code| {
                        code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
                    })
                    .collect();
                if codes.is_empty() {
                    warn!(
                        path = %path.display(),
                        "reference country-code list contained no usable codes"
                    );
                }
                Self(codes)
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "could not read reference country-code list; missing-country check disabled"
                );
                Self::empty()
            }
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<String> for ReferenceCodes {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|code| code.trim().to_uppercase())
                .collect(),
        )
    }
}

/// The loaded medal table plus the lookup structures derived from it.
/// Built once at startup and read-only afterwards; safe to share across
/// concurrent readers.
#[derive(Debug)]
pub struct MedalDataset {
    frame: DataFrame,
    editions: Vec<String>,
    countries: BTreeMap<String, String>,
    missing_codes: BTreeSet<String>,
}

impl MedalDataset {
    /// Load the medal table CSV. A missing file or a schema violation
    /// (missing column, non-numeric or negative medal count, unknown season)
    /// is fatal: the process cannot start without a valid table.
    pub fn load(path: impl AsRef<Path>, reference: &ReferenceCodes) -> PodiumResult<Self> {
        let path = path.as_ref();
        let mut df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0)) // all columns as String
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        // Trim whitespace from column names
        let trimmed: Vec<String> = df
            .get_column_names_str()
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        df.set_column_names(trimmed.as_slice())?;

        debug!(rows = df.height(), path = %path.display(), "loaded medal table");
        Self::from_frame(df, reference)
    }

    /// Normalize and validate an in-memory frame, then build the indexes.
    pub fn from_frame(frame: DataFrame, reference: &ReferenceCodes) -> PodiumResult<Self> {
        Self::require_columns(
            &frame,
            &[
                game::SLUG,
                country::CODE,
                country::NAME,
                game::YEAR,
                game::SEASON,
            ],
        )?;
        Self::require_columns(&frame, &medals::ALL)?;

        let frame = Self::normalize_numeric(frame)?;
        Self::validate(&frame)?;

        let editions = Self::build_edition_index(&frame)?;
        let countries = Self::build_country_index(&frame)?;
        let missing_codes = Self::build_missing_codes(&frame, reference)?;

        Ok(Self {
            frame,
            editions,
            countries,
            missing_codes,
        })
    }

    // ── Read-only views ─────────────────────────────────────────────────────

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Distinct edition slugs, ordered by game year descending.
    pub fn editions(&self) -> &[String] {
        &self.editions
    }

    /// Country code → display name; first-seen name wins on disagreement.
    pub fn countries(&self) -> &BTreeMap<String, String> {
        &self.countries
    }

    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.countries.get(code).map(String::as_str)
    }

    /// Codes present in the table but absent from the reference list.
    /// Static for the process lifetime.
    pub fn missing_codes(&self) -> &BTreeSet<String> {
        &self.missing_codes
    }

    // ── Private helpers ─────────────────────────────────────────────────────

    fn require_columns(df: &DataFrame, required: &[&str]) -> PodiumResult<()> {
        for &col_name in required {
            if df.column(col_name).is_err() {
                return Err(PodiumError::MissingColumn(col_name.to_string()));
            }
        }
        Ok(())
    }

    /// Cast the year and the ten medal columns to Int64. String columns
    /// are stripped first; a value that does not parse becomes null and is
    /// rejected by `validate`.
    fn normalize_numeric(frame: DataFrame) -> PodiumResult<DataFrame> {
        let mut exprs = Vec::with_capacity(medals::ALL.len() + 1);
        for name in std::iter::once(game::YEAR).chain(medals::ALL) {
            let expr = if matches!(frame.column(name)?.dtype(), DataType::String) {
                col(name)
                    .str()
                    .strip_chars(lit(" \t\r\n"))
                    .cast(DataType::Int64)
            } else {
                col(name).cast(DataType::Int64)
            };
            exprs.push(expr);
        }
        Ok(frame.lazy().with_columns(exprs).collect()?)
    }

    fn validate(frame: &DataFrame) -> PodiumResult<()> {
        for name in [game::SLUG, country::CODE, country::NAME, game::SEASON] {
            let nulls = frame.column(name)?.null_count();
            if nulls > 0 {
                return Err(PodiumError::InvalidData(format!(
                    "Column '{name}' has {nulls} missing values"
                )));
            }
        }

        for name in std::iter::once(game::YEAR).chain(medals::ALL) {
            let column = frame.column(name)?;
            let nulls = column.null_count();
            if nulls > 0 {
                return Err(PodiumError::InvalidData(format!(
                    "Column '{name}' has {nulls} missing or non-numeric values"
                )));
            }
            if name != game::YEAR {
                if let Some(min) = column.i64()?.min() {
                    if min < 0 {
                        return Err(PodiumError::InvalidData(format!(
                            "Column '{name}' contains negative medal counts"
                        )));
                    }
                }
            }
        }

        let seasons = frame.column(game::SEASON)?.str()?;
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for value in seasons.into_iter().flatten() {
            if seen.insert(value) {
                Season::parse(value).map_err(|_| {
                    PodiumError::InvalidData(format!("Unknown game_season value '{value}'"))
                })?;
            }
        }

        Ok(())
    }

    /// Distinct slugs ordered by year descending; ties keep source order.
    fn build_edition_index(frame: &DataFrame) -> PodiumResult<Vec<String>> {
        let sorted = frame
            .clone()
            .lazy()
            .select([col(game::SLUG), col(game::YEAR)])
            .sort(
                [game::YEAR],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        let slugs = sorted.column(game::SLUG)?.str()?;
        let mut seen = HashSet::new();
        let mut editions = Vec::new();
        for slug in slugs.into_iter().flatten() {
            if seen.insert(slug.to_string()) {
                editions.push(slug.to_string());
            }
        }
        Ok(editions)
    }

    fn build_country_index(frame: &DataFrame) -> PodiumResult<BTreeMap<String, String>> {
        let codes = frame.column(country::CODE)?.str()?;
        let names = frame.column(country::NAME)?.str()?;

        let mut countries = BTreeMap::new();
        for i in 0..frame.height() {
            let (Some(code), Some(name)) = (codes.get(i), names.get(i)) else {
                continue;
            };
            countries
                .entry(code.to_string())
                .or_insert_with(|| name.to_string());
        }
        Ok(countries)
    }

    /// Dataset codes minus the reference list. An empty reference list means
    /// the source was unavailable: degrade to "no missing countries".
    fn build_missing_codes(
        frame: &DataFrame,
        reference: &ReferenceCodes,
    ) -> PodiumResult<BTreeSet<String>> {
        if reference.is_empty() {
            return Ok(BTreeSet::new());
        }

        let codes = frame.column(country::CODE)?.str()?;
        let mut missing = BTreeSet::new();
        for code in codes.into_iter().flatten() {
            if !reference.contains(code) {
                missing.insert(code.to_string());
            }
        }
        Ok(missing)
    }
}
