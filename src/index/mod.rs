pub mod corpus;
pub mod searcher;
pub mod stats;
pub mod suffix_array;
pub mod types;

pub use searcher::Index;
pub use types::*;
