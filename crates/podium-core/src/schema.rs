/// Column-name and value constants for the medal table.
/// Single source of truth - exported to Python via the `_core` module.

// ── Game columns ────────────────────────────────────────────────────────────
pub mod game {
    pub const SLUG: &str = "slug_game";
    pub const YEAR: &str = "game_year";
    pub const SEASON: &str = "game_season";
}

// ── Country columns ─────────────────────────────────────────────────────────
pub mod country {
    pub const CODE: &str = "country_3_letter_code";
    pub const NAME: &str = "country_name";
}

// ── Medal-count columns (wide, per gender × metric) ─────────────────────────
pub mod medals {
    pub const MEN_GOLD: &str = "men_gold";
    pub const MEN_SILVER: &str = "men_silver";
    pub const MEN_BRONZE: &str = "men_bronze";
    pub const MEN_TOTAL: &str = "men_total";
    pub const MEN_WEIGHTED_TOTAL: &str = "men_weighted_total";

    pub const WOMEN_GOLD: &str = "women_gold";
    pub const WOMEN_SILVER: &str = "women_silver";
    pub const WOMEN_BRONZE: &str = "women_bronze";
    pub const WOMEN_TOTAL: &str = "women_total";
    pub const WOMEN_WEIGHTED_TOTAL: &str = "women_weighted_total";

    pub const ALL: [&str; 10] = [
        MEN_GOLD,
        MEN_SILVER,
        MEN_BRONZE,
        MEN_TOTAL,
        MEN_WEIGHTED_TOTAL,
        WOMEN_GOLD,
        WOMEN_SILVER,
        WOMEN_BRONZE,
        WOMEN_TOTAL,
        WOMEN_WEIGHTED_TOTAL,
    ];
}

// ── Season values ───────────────────────────────────────────────────────────
pub mod season {
    pub const SUMMER: &str = "Summer";
    pub const WINTER: &str = "Winter";
}

// ── Methodology keys ────────────────────────────────────────────────────────
pub mod methodology {
    pub const GOLD: &str = "gold";
    pub const TOTAL: &str = "total";
    pub const WEIGHTED_TOTAL: &str = "weighted_total";
}

// ── Category palette (shared by map and legend) ─────────────────────────────
pub mod palette {
    pub const MEN: &str = "#16537e";
    pub const WOMEN: &str = "#FED9D7";
    pub const EVEN: &str = "grey";
}

// ── Output columns of the aggregated map frame ──────────────────────────────
pub mod map_output {
    pub const CODE: &str = "country_3_letter_code";
    pub const NAME: &str = "country_name";
    pub const MEN: &str = "men_medals";
    pub const WOMEN: &str = "women_medals";
    pub const CATEGORY: &str = "category";
    pub const COLOR_HEX: &str = "colorhex";
}

// ── Output columns of the timeline frame ────────────────────────────────────
pub mod timeline_output {
    pub const YEAR: &str = "game_year";
    pub const MEN: &str = "men_medals";
    pub const WOMEN: &str = "women_medals";
}
