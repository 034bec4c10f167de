//! Filter-accessor code generation
//!
//! Build-time generation of the `service_filters_gen.rs` source file:
//! sort the service list, render one accessor method per service from a
//! text template, format the result, write it out. Any failure along the
//! way is fatal to the run.

mod formatter;
mod generator;

pub use formatter::format_source;
pub use generator::{Generator, GENERATED_FILENAME};

#[cfg(test)]
mod tests;
