//! CodeSheets binary entry point.
//!
//! All CLI logic lives in [`codesheets::cli`].

fn main() {
    codesheets::cli::run();
}
