//! Output generation.
//!
//! One submodule for now:
//!
//! - [`json`]: writes each sitemap batch to an `articles_data_<N>.json`
//!   file, where `N` is the cumulative attempted-URL count at the start of
//!   the batch.

pub mod json;
