//! Shared fixtures for the unit tests.

use polars::prelude::*;

use crate::dataset::{MedalDataset, ReferenceCodes};
use crate::schema::{country, game, medals};

pub struct RowSpec {
    pub slug: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub year: i64,
    pub season: &'static str,
    /// gold, silver, bronze, total, weighted_total
    pub men: [i64; 5],
    pub women: [i64; 5],
}

pub fn frame_of(rows: &[RowSpec]) -> DataFrame {
    let mut slugs = Vec::new();
    let mut codes = Vec::new();
    let mut names = Vec::new();
    let mut years = Vec::new();
    let mut seasons = Vec::new();
    let mut men_cols: [Vec<i64>; 5] = Default::default();
    let mut women_cols: [Vec<i64>; 5] = Default::default();

    for row in rows {
        slugs.push(row.slug);
        codes.push(row.code);
        names.push(row.name);
        years.push(row.year);
        seasons.push(row.season);
        for (i, v) in row.men.iter().enumerate() {
            men_cols[i].push(*v);
        }
        for (i, v) in row.women.iter().enumerate() {
            women_cols[i].push(*v);
        }
    }

    df!(
        game::SLUG => slugs,
        country::CODE => codes,
        country::NAME => names,
        game::YEAR => years,
        game::SEASON => seasons,
        medals::MEN_GOLD => &men_cols[0],
        medals::MEN_SILVER => &men_cols[1],
        medals::MEN_BRONZE => &men_cols[2],
        medals::MEN_TOTAL => &men_cols[3],
        medals::MEN_WEIGHTED_TOTAL => &men_cols[4],
        medals::WOMEN_GOLD => &women_cols[0],
        medals::WOMEN_SILVER => &women_cols[1],
        medals::WOMEN_BRONZE => &women_cols[2],
        medals::WOMEN_TOTAL => &women_cols[3],
        medals::WOMEN_WEIGHTED_TOTAL => &women_cols[4],
    )
    .expect("valid test frame")
}

/// Rows are intentionally not in chronological order so ordering guarantees
/// are exercised, not inherited from the source.
pub fn sample_frame() -> DataFrame {
    frame_of(&[
        RowSpec {
            slug: "paris-2024",
            code: "ITA",
            name: "Italy",
            year: 2024,
            season: "Summer",
            men: [5, 4, 3, 12, 26],
            women: [6, 5, 4, 15, 32],
        },
        RowSpec {
            slug: "tokyo-2020",
            code: "USA",
            name: "United States of America",
            year: 2020,
            season: "Summer",
            men: [39, 10, 5, 54, 142],
            women: [27, 20, 10, 57, 131],
        },
        RowSpec {
            slug: "tokyo-2020",
            code: "ITA",
            name: "Italy",
            year: 2020,
            season: "Summer",
            men: [2, 3, 4, 9, 16],
            women: [2, 3, 4, 9, 16],
        },
        RowSpec {
            slug: "tokyo-2020",
            code: "KOS",
            name: "Kosovo",
            year: 2020,
            season: "Summer",
            men: [0, 0, 0, 0, 0],
            women: [2, 0, 0, 2, 6],
        },
        RowSpec {
            slug: "beijing-2022",
            code: "ITA",
            name: "Italy",
            year: 2022,
            season: "Winter",
            men: [1, 0, 0, 1, 3],
            women: [2, 1, 0, 3, 8],
        },
        RowSpec {
            slug: "beijing-2022",
            code: "GER",
            name: "Germany",
            year: 2022,
            season: "Winter",
            men: [6, 3, 2, 11, 26],
            women: [6, 4, 3, 13, 29],
        },
        RowSpec {
            slug: "albertville-1992",
            code: "GER",
            name: "Federal Republic of Germany",
            year: 1992,
            season: "Winter",
            men: [2, 1, 1, 4, 9],
            women: [1, 2, 2, 5, 9],
        },
        RowSpec {
            slug: "paris-2024",
            code: "FRA",
            name: "France",
            year: 2024,
            season: "Summer",
            men: [7, 6, 5, 18, 38],
            women: [3, 2, 1, 6, 14],
        },
    ])
}

pub fn reference() -> ReferenceCodes {
    ["USA", "ITA", "FRA", "GER"]
        .iter()
        .map(|code| code.to_string())
        .collect()
}

pub fn dataset() -> MedalDataset {
    MedalDataset::from_frame(sample_frame(), &reference()).expect("valid fixture dataset")
}
