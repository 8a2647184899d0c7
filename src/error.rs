use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document format: expected two sections separated by ---, found {found}")]
    MalformedDocument { found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
