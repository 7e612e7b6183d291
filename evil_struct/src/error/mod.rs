//! Error types produced while declaring and building records.

mod constructors;
mod conversions;
mod types;

pub use types::StructError;

#[cfg(test)]
mod tests;
