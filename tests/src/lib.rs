//! # Integration Tests
//!
//! Cross-module checks of the iprange core: worked scenarios and
//! randomized algebraic laws.

#[cfg(test)]
mod support;

mod properties;
mod scenarios;
