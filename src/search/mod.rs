//! Substring search over the book collection.
//!
//! The collection is cut into contiguous chunks, one per worker. Workers run
//! on tokio's blocking pool, each producing its local matches, and the
//! dispatcher stitches the batches back together by chunk index so the result
//! keeps the original collection order.
//!
//! - [`engine`]: chunking, matching and the [`SearchEngine`] entry point
//! - [`pool`]: the index-tagged fan-out/fan-in [`WorkerPool`]

pub mod engine;
pub mod pool;

pub use engine::{chunk_ranges, matches, SearchEngine};
pub use pool::WorkerPool;
