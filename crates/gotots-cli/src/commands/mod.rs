pub mod ast;
pub mod generate;
pub mod input;

#[cfg(test)]
mod generate_tests;
