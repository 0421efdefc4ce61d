//! The core public types shared by the Nebulith governance crates.

#![doc(html_favicon_url = "https://dev.nebulith.io/master/favicon.png")]
#![doc(html_logo_url = "https://dev.nebulith.io/master/rustdoc-logo.png")]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::arithmetic_side_effects,
    clippy::dbg_macro
)]

pub mod address;
pub mod arith;
pub mod chain;
pub mod io;
pub mod token;
