pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{file::FileConfig, CliConfig};
pub use core::{client::HttpAdviceClient, engine::AdviceEngine, session::FormSession};
pub use utils::error::{AdviceError, Result};
