//! Aggregation core for the Olympic medal-balance dashboard.
//!
//! Loads the per-country/per-edition medal table once, then serves pure,
//! per-request aggregations: the per-edition gender map, the per-country
//! timeline and the totals text block. The Python presentation layer consumes
//! this crate through the `_core` extension module in `podium-py`.

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod render;
pub mod schema;
pub mod selection;

#[cfg(test)]
pub(crate) mod testdata;
