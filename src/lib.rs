pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::CliConfig;
pub use core::{engine::GcdEngine, euclid::gcd, pipeline::StdioPipeline};
pub use utils::error::{GcdError, Result};
