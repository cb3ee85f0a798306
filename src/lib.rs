pub mod catalog;
pub mod content_recommender;
pub mod error;
pub mod list;
pub mod similarity;
pub mod types;
pub mod vectorize;

#[macro_use]
extern crate derive_builder;

pub use catalog::{Catalog, CatalogItem, ItemRecord};
pub use content_recommender::ContentRecommender;
pub use list::RecommendationList;
pub use error::RecommendError;
pub use similarity::SimilarityMatrix;
pub use types::Recommendation;
pub use vectorize::CountVectorizer;

pub trait Recommender<K: ?Sized, R> {
  fn recommend(&self, item_id: &K, n_items: u16)
      -> Result<RecommendationList<R>, RecommendError>;
}
