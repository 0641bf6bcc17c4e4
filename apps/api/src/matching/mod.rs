//! Multi-signal resume/job compatibility scoring.
//!
//! Four independent estimators (lexical TF-IDF cosine, semantic embedding
//! cosine, skill-set overlap, keyword coverage) feed a fixed weighted
//! combination producing a 0-100 score. Everything here is synchronous,
//! in-memory computation over two strings; the only long-lived state is
//! the embedding model handle loaded once at startup.

pub mod engine;
pub mod keywords;
pub mod lexical;
pub mod normalize;
pub mod semantic;
pub mod skills;
pub mod weights;
