//! Shared code for the Nebulith CLI apps.

#![doc(html_favicon_url = "https://dev.nebulith.io/master/favicon.png")]
#![doc(html_logo_url = "https://dev.nebulith.io/master/rustdoc-logo.png")]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![warn(
    rust_2018_idioms,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::arithmetic_side_effects,
    clippy::dbg_macro
)]

pub mod cli;
pub mod client;
pub mod config;
pub mod logging;

/// Version of the whole Nebulith distribution.
pub fn nebulith_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
