//! CLI command implementations.
//!
//! Each command fetches from the catalog first and only then locks the shop
//! store, so no lock is held across an `.await`.

pub mod cart;
pub mod products;
pub mod wishlist;

/// Write a rendered block to stdout.
#[allow(clippy::print_stdout)]
fn emit(text: &str) {
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
}
