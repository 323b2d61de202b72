use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to read the resource...")]
    Io(#[from] std::io::Error),

    #[error("Unable to fetch {0}...")]
    Fetch(String),
}
