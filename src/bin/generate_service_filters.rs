//! Standalone filter-accessor generator
//!
//! Invoked with no arguments at build time. Writes the generated
//! `service_filters_gen.rs` into the current working directory,
//! overwriting any existing file. Any failure is fatal: a diagnostic is
//! written and the process exits nonzero.

use provider_toolkit::codegen::{Generator, GENERATED_FILENAME};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = Generator::builtin().write_to(".") {
        eprintln!("error generating {GENERATED_FILENAME}: {e}");
        std::process::exit(1);
    }
}
