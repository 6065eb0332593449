// LogTranslator - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and regex only.
// Must NOT depend on: ui, platform, app.

pub mod model;
pub mod translate;
