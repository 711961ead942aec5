//! Field-matching filters over graph nodes and relationships, plus the preset catalog.

mod engine;
mod presets;
mod types;

#[cfg(test)]
mod tests;

pub use engine::apply_filters;
pub use presets::create_filter_presets;
pub use types::{Filter, FilterPreset};
