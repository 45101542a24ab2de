//! Recipe file loading

mod loader;

pub use loader::load_recipe;
