//! Presentation adapter: shapes engine output into the literal strings and
//! fields the map, the line chart and the text summary render. No aggregation
//! happens here.

use std::fmt::Write as FmtWrite;

use crate::aggregate::{Category, MapAggregate, SummaryTotals};
use crate::dataset::MedalDataset;
use crate::selection::{Methodology, Season};

/// Map headline, e.g. "TOKYO-2020 ☀". No glyph when the selection matched
/// nothing.
pub fn map_title(edition: &str, season: Option<Season>) -> String {
    match season {
        Some(season) => format!("{} {}", edition.to_uppercase(), season.glyph()),
        None => edition.to_uppercase(),
    }
}

pub fn intro_note() -> &'static str {
    "What gender is winning the most at the Olympics?"
}

/// Markdown line comparing the two gender totals under the map.
pub fn gender_gap_note(aggregate: &MapAggregate, methodology: Methodology) -> String {
    format!(
        "**{}** {} medals for **Men** & **{}** medals for **Women**",
        aggregate.male_total(),
        methodology.label().to_lowercase(),
        aggregate.female_total()
    )
}

pub fn line_title(methodology: Methodology) -> String {
    format!("Men & Women {} medals Over Time", methodology.label())
}

/// (y-axis, x-axis) titles for the timeline chart.
pub fn axis_titles(methodology: Methodology) -> (&'static str, &'static str) {
    (methodology.label(), "Year")
}

/// Headline of the country view: display name, falling back to the raw code
/// for a country the index does not know.
pub fn country_title(dataset: &MedalDataset, code: &str) -> String {
    dataset.country_name(code).unwrap_or(code).to_string()
}

/// A country shown on the map whose code is absent from the reference list,
/// listed beside the map in its category color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCountry {
    pub name: String,
    pub color_hex: &'static str,
}

pub fn missing_country_items(
    aggregate: &MapAggregate,
    dataset: &MedalDataset,
) -> Vec<MissingCountry> {
    aggregate
        .rows
        .iter()
        .filter(|row| dataset.missing_codes().contains(&row.code))
        .map(|row| MissingCountry {
            name: row.name.clone(),
            color_hex: row.color_hex(),
        })
        .collect()
}

/// The MEN/WOMEN ten-field markdown block. The heading line is present only
/// when the summary was narrowed to a hovered year.
pub fn summary_markdown(totals: &SummaryTotals, heading: Option<(Season, i64)>) -> String {
    let mut out = String::new();
    if let Some((season, year)) = heading {
        let _ = writeln!(out, "{} {} Olympics", season.as_str(), year);
    }
    for (gender, tally) in [("MEN", &totals.men), ("WOMEN", &totals.women)] {
        let _ = writeln!(out, "### **{gender}:**");
        for (label, value) in tally.fields() {
            let _ = writeln!(out, "- *{label}:* **{value}**");
        }
    }
    out
}

/// Legend entries in display order, colored from the one palette.
pub fn legend() -> [(&'static str, &'static str); 3] {
    [
        (Category::Women.label(), Category::Women.hex()),
        (Category::Men.label(), Category::Men.hex()),
        (Category::Even.label(), Category::Even.hex()),
    ]
}

/// (code, display name) pairs for the country dropdown, ordered by code.
pub fn country_options(dataset: &MedalDataset) -> Vec<(String, String)> {
    dataset
        .countries()
        .iter()
        .map(|(code, name)| (code.clone(), name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{MapSelection, SummarySelection};
    use crate::testdata;

    #[test]
    fn map_title_carries_season_glyph() {
        assert_eq!(map_title("tokyo-2020", Some(Season::Summer)), "TOKYO-2020 ☀");
        assert_eq!(
            map_title("beijing-2022", Some(Season::Winter)),
            "BEIJING-2022 ❄"
        );
        assert_eq!(map_title("atlantis-1900", None), "ATLANTIS-1900");
    }

    #[test]
    fn gender_gap_note_spells_out_both_totals() {
        let dataset = testdata::dataset();
        let map = dataset
            .map_aggregate(&MapSelection::resolve("tokyo-2020", "gold").unwrap())
            .unwrap();
        assert_eq!(
            gender_gap_note(&map, Methodology::Gold),
            "**41** gold medals for **Men** & **31** medals for **Women**"
        );
    }

    #[test]
    fn chart_labels_use_methodology_label() {
        assert_eq!(
            line_title(Methodology::WeightedTotal),
            "Men & Women Weighted total medals Over Time"
        );
        assert_eq!(axis_titles(Methodology::Gold), ("Gold", "Year"));
    }

    #[test]
    fn summary_markdown_layout() {
        let dataset = testdata::dataset();
        let totals = dataset
            .totals_summary(&SummarySelection::resolve("ITA", "Winter", Some(2022)).unwrap())
            .unwrap();

        let text = summary_markdown(&totals, Some((Season::Winter, 2022)));
        assert!(text.starts_with("Winter 2022 Olympics\n"));
        assert!(text.contains("### **MEN:**"));
        assert!(text.contains("### **WOMEN:**"));
        assert!(text.contains("- *Gold:* **1**"));
        assert!(text.contains("- *Weighted total:* **3**"));

        let unscoped = summary_markdown(&totals, None);
        assert!(!unscoped.contains("Olympics"));
        assert!(unscoped.starts_with("### **MEN:**"));
    }

    #[test]
    fn legend_matches_category_palette_everywhere() {
        let entries = legend();
        assert_eq!(entries[0], ("Women", "#FED9D7"));
        assert_eq!(entries[1], ("Men", "#16537e"));
        assert_eq!(entries[2], ("Even", "grey"));
        for (label, hex) in entries {
            let category = match label {
                "Men" => Category::Men,
                "Women" => Category::Women,
                _ => Category::Even,
            };
            assert_eq!(category.hex(), hex);
        }
    }

    #[test]
    fn missing_countries_listed_with_their_map_color() {
        let dataset = testdata::dataset();
        let map = dataset
            .map_aggregate(&MapSelection::resolve("tokyo-2020", "gold").unwrap())
            .unwrap();
        let items = missing_country_items(&map, &dataset);
        assert_eq!(
            items,
            [MissingCountry { name: "Kosovo".to_string(), color_hex: "#FED9D7" }]
        );
    }

    #[test]
    fn country_options_are_ordered_by_code() {
        let dataset = testdata::dataset();
        let options = country_options(&dataset);
        let codes: Vec<&str> = options.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, ["FRA", "GER", "ITA", "KOS", "USA"]);
    }

    #[test]
    fn country_title_falls_back_to_code() {
        let dataset = testdata::dataset();
        assert_eq!(country_title(&dataset, "ITA"), "Italy");
        assert_eq!(country_title(&dataset, "XYZ"), "XYZ");
    }
}
