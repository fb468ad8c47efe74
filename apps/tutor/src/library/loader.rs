//! JSON example-library loader.
//!
//! File shape:
//! ```json
//! { "mathematics": { "template": "...{EXAMPLES}...{query}...{level}", "examples": [ ... ] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::library::ExampleLibrary;
use crate::models::example::SubjectLibrary;

impl ExampleLibrary {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let raw: BTreeMap<String, SubjectLibrary> = serde_json::from_str(json)?;

        raw.into_iter()
            .fold(ExampleLibrary::builder(), |builder, (name, data)| {
                let builder = builder.subject(&name, data.template);
                data.examples
                    .into_iter()
                    .fold(builder, |b, example| b.example(&name, example))
            })
            .build()
    }

    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        let library = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            subjects = library.subject_count(),
            examples = library.total_examples(),
            "Loaded example library"
        );
        Ok(library)
    }
}
