#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid max levels: {0}, a skip set needs at least one level")]
    InvalidMaxLevels(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
