use thiserror::Error;

pub use ecoscan_models::ids::ParseBarcodeError;

/// Error returned if config checking failed.
#[derive(Error, Debug)]
pub enum ConfigCheckError {
    #[error("Path '{0}' is not a file")]
    NotAFile(std::path::PathBuf),

    #[error("Path '{0}' is not a directory")]
    NotADir(std::path::PathBuf),

    #[error("Path '{0}' has no parent")]
    NoParent(std::path::PathBuf),
}

/// Error returned when a problem with processing.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("In file `{1}`.\nIO error: {0}")]
    Io(std::io::Error, std::path::PathBuf),

    #[error("JSON serialization error: {0}")]
    WriteJson(serde_json::Error),

    #[error("Barcode parsing: {0}")]
    Barcode(#[from] ParseBarcodeError),

    #[error("The barcode `{barcode}` has an invalid check digit")]
    Checksum { barcode: String },

    #[error("Config check: {0}")]
    ConfigCheck(#[from] ConfigCheckError),
}
