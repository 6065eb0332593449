// LogTranslator - app/mod.rs
//
// Application layer: page state, translation orchestration.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod page;
pub mod state;
pub mod translation;
