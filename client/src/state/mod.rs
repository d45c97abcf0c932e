//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`assistant` page, `summarize` button) so each
//! component depends on a small model that can be tested without a browser.

pub mod assistant;
pub mod summarize;
