//! Word list and usage frequency loading

pub mod loader;

pub use loader::{load_dictionary, load_frequencies, parse_dictionary, parse_frequencies};
