use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::library::ExampleLibrary;

/// Everything a command needs, built once at startup and passed explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after construction.
    pub library: Arc<ExampleLibrary>,
}

impl AppState {
    /// Loads the library from `config.library_path`, or the built-in catalog.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let library = match &config.library_path {
            Some(path) => ExampleLibrary::from_json_file(path)?,
            None => {
                let library = ExampleLibrary::builtin()?;
                info!(
                    subjects = library.subject_count(),
                    examples = library.total_examples(),
                    "Using built-in example library"
                );
                library
            }
        };

        Ok(Self {
            config,
            library: Arc::new(library),
        })
    }
}
