// LogTranslator - ui/panels/mod.rs

pub mod about;
pub mod hero;
pub mod translator;
