use thiserror::Error;

pub const LOAD_FAILED: &str = "Failed to load articles.";
pub const FIELDS_REQUIRED: &str = "Title and content are required.";
pub const SUBMIT_FAILED: &str = "Failed to submit article.";

/// A read against the Articles API failed. The store keeps its previous list.
#[derive(Error, Debug)]
#[error("Failed to load articles.")]
pub struct LoadError(#[source] pub fni_core::Error);

#[derive(Error, Debug)]
pub enum SubmitError {
    /// Blank title or content; nothing was sent.
    #[error("Title and content are required.")]
    Validation,

    /// The create call failed; the draft is untouched.
    #[error("Failed to submit article.")]
    Failed(#[source] fni_core::Error),
}
