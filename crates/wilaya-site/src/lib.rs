//! Headless runner for the wilaya rankings page
//!
//! Builds the index markup in a [`wilaya_dom::Document`], runs the page
//! script from [`wilaya_page`] against it and hands back the result.

pub mod cli;
mod run;
pub mod skeleton;

pub use cli::{Cli, Command};
pub use run::{RunOptions, animation_length, run_page};
pub use skeleton::{Skeleton, build_index};
