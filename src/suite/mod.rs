pub mod matrix;
mod runner;

pub use matrix::{Category, TestCase, all_cases, cases_in};
pub use runner::{CaseFailure, SuiteReport, SuiteRunner};
