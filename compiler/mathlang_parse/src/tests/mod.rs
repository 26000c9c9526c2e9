//! Parser test modules.

mod errors_tests;
mod parser_tests;
