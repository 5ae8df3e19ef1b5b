use thiserror::Error;

/// Problems with the compiled-in project catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    #[error("Project {0} has an empty tech stack")]
    EmptyTechStack(String),
}

/// Problems reading or writing the preference file.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PreferenceError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PreferenceError::NoHomeDirectory => {
                "No home directory; preferences will not be saved".to_string()
            }
            PreferenceError::Io(e) => format!("Could not access preferences: {}", e),
            PreferenceError::Json(e) => format!("Preference file is malformed: {}", e),
        }
    }
}

/// Top-level application error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Catalog(e) => format!("The built-in catalog is invalid: {}", e),
            AppError::Preference(e) => e.user_message(),
            AppError::UnknownProject(id) => {
                format!("No project with id \"{}\" (try `list`)", id)
            }
            AppError::Io(e) => format!("Terminal error: {}", e),
        }
    }
}
