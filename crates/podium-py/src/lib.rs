//! Python extension module `_core`: the boundary between the Dash
//! presentation layer and the Rust aggregation core. Conversion and error
//! mapping only; all logic lives in `podium-core`.

use polars::prelude::*;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3_polars::PyDataFrame;

use podium_core::aggregate::{MapAggregate, TimelinePoint};
use podium_core::dataset::{MedalDataset, ReferenceCodes};
use podium_core::error::PodiumError;
use podium_core::render;
use podium_core::schema;
use podium_core::selection::{MapSelection, SummarySelection, TimelineSelection};

fn to_py_err(err: PodiumError) -> PyErr {
    match &err {
        PodiumError::UnknownMethodology(_) | PodiumError::UnknownSeason(_) => {
            PyValueError::new_err(err.to_string())
        }
        PodiumError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

// ── Frame shaping ───────────────────────────────────────────────────────────

fn map_frame(aggregate: &MapAggregate) -> Result<DataFrame, PodiumError> {
    let n = aggregate.rows.len();
    let mut codes = Vec::with_capacity(n);
    let mut names = Vec::with_capacity(n);
    let mut men = Vec::with_capacity(n);
    let mut women = Vec::with_capacity(n);
    let mut categories = Vec::with_capacity(n);
    let mut colors = Vec::with_capacity(n);

    for row in &aggregate.rows {
        codes.push(row.code.clone());
        names.push(row.name.clone());
        men.push(row.male);
        women.push(row.female);
        categories.push(row.category.label().to_string());
        colors.push(row.color_hex().to_string());
    }

    let df = DataFrame::new(vec![
        Column::new(schema::map_output::CODE.into(), &codes),
        Column::new(schema::map_output::NAME.into(), &names),
        Column::new(schema::map_output::MEN.into(), &men),
        Column::new(schema::map_output::WOMEN.into(), &women),
        Column::new(schema::map_output::CATEGORY.into(), &categories),
        Column::new(schema::map_output::COLOR_HEX.into(), &colors),
    ])?;
    Ok(df)
}

fn timeline_frame(points: &[TimelinePoint]) -> Result<DataFrame, PodiumError> {
    let years: Vec<i64> = points.iter().map(|p| p.year).collect();
    let men: Vec<i64> = points.iter().map(|p| p.male).collect();
    let women: Vec<i64> = points.iter().map(|p| p.female).collect();

    let df = DataFrame::new(vec![
        Column::new(schema::timeline_output::YEAR.into(), &years),
        Column::new(schema::timeline_output::MEN.into(), &men),
        Column::new(schema::timeline_output::WOMEN.into(), &women),
    ])?;
    Ok(df)
}

// ── Board ───────────────────────────────────────────────────────────────────

/// The loaded medal table plus its derived indexes, immutable after
/// construction. One instance serves every callback of the dashboard.
#[pyclass]
pub struct MedalBoard {
    dataset: MedalDataset,
}

#[pymethods]
impl MedalBoard {
    /// Load the medal table. `reference_codes` (an injected list of valid
    /// ISO-3166 alpha-3 codes) takes precedence over `reference_path` (a
    /// local file, read best-effort); with neither, the missing-country
    /// check is disabled.
    #[new]
    #[pyo3(signature = (path, reference_path=None, reference_codes=None))]
    fn new(
        path: String,
        reference_path: Option<String>,
        reference_codes: Option<Vec<String>>,
    ) -> PyResult<Self> {
        let reference = match (reference_codes, reference_path) {
            (Some(codes), _) => codes.into_iter().collect(),
            (None, Some(ref_path)) => ReferenceCodes::from_csv(ref_path),
            (None, None) => ReferenceCodes::empty(),
        };
        let dataset = MedalDataset::load(path, &reference).map_err(to_py_err)?;
        Ok(Self { dataset })
    }

    /// Edition slugs for the selector, newest games first.
    fn editions(&self) -> Vec<String> {
        self.dataset.editions().to_vec()
    }

    /// (code, display name) pairs for the country dropdown.
    fn country_options(&self) -> Vec<(String, String)> {
        render::country_options(&self.dataset)
    }

    /// Codes present in the table but absent from the reference list.
    fn missing_codes(&self) -> Vec<String> {
        self.dataset.missing_codes().iter().cloned().collect()
    }

    /// Everything the map tab renders for one (edition, methodology)
    /// selection: the aggregated frame (one row per country with category and
    /// color), the title, the gender-gap note, and the missing-country items
    /// as (name, colorhex) pairs.
    fn map_view(
        &self,
        edition: &str,
        methodology: &str,
    ) -> PyResult<(PyDataFrame, String, String, Vec<(String, String)>)> {
        let selection = MapSelection::resolve(edition, methodology).map_err(to_py_err)?;
        let aggregate = self.dataset.map_aggregate(&selection).map_err(to_py_err)?;

        let frame = map_frame(&aggregate).map_err(to_py_err)?;
        let title = render::map_title(edition, aggregate.season);
        let note = render::gender_gap_note(&aggregate, selection.methodology);
        let missing = render::missing_country_items(&aggregate, &self.dataset)
            .into_iter()
            .map(|item| (item.name, item.color_hex.to_string()))
            .collect();

        Ok((PyDataFrame(frame), title, note, missing))
    }

    /// Everything the country tab's chart renders: the per-year frame sorted
    /// chronologically, the country headline, the chart title, and the
    /// (y, x) axis titles.
    fn timeline_view(
        &self,
        country: &str,
        methodology: &str,
        season: &str,
    ) -> PyResult<(PyDataFrame, String, String, String, String)> {
        let selection =
            TimelineSelection::resolve(country, methodology, season).map_err(to_py_err)?;
        let points = self.dataset.timeline_aggregate(&selection).map_err(to_py_err)?;

        let frame = timeline_frame(&points).map_err(to_py_err)?;
        let title = render::country_title(&self.dataset, country);
        let chart_title = render::line_title(selection.methodology);
        let (y_axis, x_axis) = render::axis_titles(selection.methodology);

        Ok((
            PyDataFrame(frame),
            title,
            chart_title,
            y_axis.to_string(),
            x_axis.to_string(),
        ))
    }

    /// Markdown for the totals block. `year` is the hovered timeline year;
    /// without it the summary spans all years of the selected season.
    #[pyo3(signature = (country, season, year=None))]
    fn summary_markdown(&self, country: &str, season: &str, year: Option<i64>) -> PyResult<String> {
        let selection = SummarySelection::resolve(country, season, year).map_err(to_py_err)?;
        let totals = self.dataset.totals_summary(&selection).map_err(to_py_err)?;
        let heading = year.map(|y| (selection.season, y));
        Ok(render::summary_markdown(&totals, heading))
    }

    #[staticmethod]
    fn intro_note() -> &'static str {
        render::intro_note()
    }

    /// Legend entries as (label, colorhex) pairs, same palette as the map.
    #[staticmethod]
    fn legend() -> Vec<(String, String)> {
        render::legend()
            .iter()
            .map(|(label, hex)| (label.to_string(), hex.to_string()))
            .collect()
    }
}

// ── Schema exports ──────────────────────────────────────────────────────────

/// Export schema constants as Python submodules
fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Source table columns
    let columns = PyModule::new(m.py(), "columns")?;
    columns.add("SLUG_GAME", schema::game::SLUG)?;
    columns.add("GAME_YEAR", schema::game::YEAR)?;
    columns.add("GAME_SEASON", schema::game::SEASON)?;
    columns.add("COUNTRY_CODE", schema::country::CODE)?;
    columns.add("COUNTRY_NAME", schema::country::NAME)?;
    m.add_submodule(&columns)?;

    // Methodology keys
    let methodology = PyModule::new(m.py(), "methodology")?;
    methodology.add("GOLD", schema::methodology::GOLD)?;
    methodology.add("TOTAL", schema::methodology::TOTAL)?;
    methodology.add("WEIGHTED_TOTAL", schema::methodology::WEIGHTED_TOTAL)?;
    m.add_submodule(&methodology)?;

    // Season values
    let season = PyModule::new(m.py(), "season")?;
    season.add("SUMMER", schema::season::SUMMER)?;
    season.add("WINTER", schema::season::WINTER)?;
    m.add_submodule(&season)?;

    // Category palette
    let palette = PyModule::new(m.py(), "palette")?;
    palette.add("MEN", schema::palette::MEN)?;
    palette.add("WOMEN", schema::palette::WOMEN)?;
    palette.add("EVEN", schema::palette::EVEN)?;
    m.add_submodule(&palette)?;

    // Map frame columns
    let map_output = PyModule::new(m.py(), "map_output")?;
    map_output.add("CODE", schema::map_output::CODE)?;
    map_output.add("NAME", schema::map_output::NAME)?;
    map_output.add("MEN", schema::map_output::MEN)?;
    map_output.add("WOMEN", schema::map_output::WOMEN)?;
    map_output.add("CATEGORY", schema::map_output::CATEGORY)?;
    map_output.add("COLOR_HEX", schema::map_output::COLOR_HEX)?;
    m.add_submodule(&map_output)?;

    // Timeline frame columns
    let timeline_output = PyModule::new(m.py(), "timeline_output")?;
    timeline_output.add("YEAR", schema::timeline_output::YEAR)?;
    timeline_output.add("MEN", schema::timeline_output::MEN)?;
    timeline_output.add("WOMEN", schema::timeline_output::WOMEN)?;
    m.add_submodule(&timeline_output)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<MedalBoard>()?;
    add_schema_exports(m)?;
    Ok(())
}
