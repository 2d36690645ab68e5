pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty Steam id input")]
    EmptyId,

    #[error("not a SteamID64 (expected 17 digits): {input}")]
    InvalidId64 { input: String },
}
