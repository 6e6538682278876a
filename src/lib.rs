pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ApiNinjasClient;
pub use app::{console::Console, menu::App};
pub use config::{toml_config::TomlConfig, ApiSettings};
pub use crate::core::{
    directory::{fetch_directory, found_message},
    fetcher::BreedRepository,
};
pub use domain::model::{BreedDetail, Directory, FieldValue, Species, SENTINEL};
pub use domain::preferences::PreferenceSet;
pub use utils::error::{PetMatchError, Result};
