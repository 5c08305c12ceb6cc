use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampaignError {
    /// Returned by [`crate::provider::Provider`] implementations. The binary
    /// registers none, so only test providers build it there.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("provider error: {0}")] Provider(String),
    #[error("unusable provider reply: {0}")] Reply(String),
    #[error("config error: {0}")] Config(String),
    #[error("invalid form: {0}")] Validation(String),
    #[error("export failed: {0}")] Export(String),
}
