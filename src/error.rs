use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
  #[error("no catalog item titled \"{0}\"")]
  NotFound(String)
}
