#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Failed to read input {0}")]
    ReadInput(String),

    #[error("Failed to write output {0}")]
    WriteOutput(String),

    #[error("Failed to serialize ADF: {0}")]
    Serialize(String),
}
