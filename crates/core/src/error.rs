/// Errors raised by the core crate.
///
/// Converting Markdown never fails; only turning the finished tree into JSON can.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to serialize ADF document: {0}")]
    Serialize(#[from] serde_json::Error),
}
