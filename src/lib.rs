// Byline: authorship screening and topic ranking for paper catalogs.
//
// This is the library root. Each module corresponds to a stage of the
// classify-and-rank flow: dataset loading, catalog state, scoring, and the
// pipeline that composes them.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod status;
