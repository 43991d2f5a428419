//! # Sources Crate
//!
//! Candidate generation for sound acquisition: given a free-text query, this
//! crate produces the ordered sequence of raw search results the scorer will
//! evaluate.
//!
//! ## Components
//!
//! - [`Candidate`]: one search result (title, channel, follower count,
//!   duration, canonical URL)
//! - [`CandidateSearch`]: the trait the engine drives; implement it to swap
//!   in a different backend (or a test double)
//! - [`YtDlpSearch`]: the production backend, invoking `yt-dlp --dump-json`
//!   as a subprocess and parsing one JSON object per stdout line
//!
//! Results keep the backend's own relevance order; earlier results are
//! presumptively better-matched to the query, and downstream selection
//! relies on that for tie-breaking. A record that fails to parse is dropped
//! with a warning rather than failing the whole search.

// Public modules
pub mod parse;
pub mod search;
pub mod types;
pub mod ytdlp;

// Re-export commonly used types
pub use search::{CandidateSearch, SearchError};
pub use types::{Candidate, UNKNOWN_DURATION_SECS};
pub use ytdlp::YtDlpSearch;
