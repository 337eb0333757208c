//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_entropy_table, print_optimization_result, print_simulation_summary,
    print_solve_result,
};
