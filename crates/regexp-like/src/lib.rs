//! regexp-like: SQL `LIKE` patterns as regular expressions
//!
//! This crate translates `LIKE`-style patterns into [`regex::Regex`] values
//! and memoizes the results in a bounded cache with pinning.
//!
//! # Features
//!
//! - **Wildcards**: `%` matches any run of characters, `_` exactly one
//! - **Sets and ranges**: `[abc]`, `[a-e]` and their `[^...]` forms
//! - **Anchoring**: expressions are anchored unless a `%` opens that end
//! - **Memoization** with recency-based batch eviction and pinned entries
//!
//! Negated sets and ranges are accepted but translate to the same class as
//! their plain forms: `[^abc]` matches `a`, `b` or `c`.
//!
//! # Example
//!
//! ```
//! use regexp_like::prelude::*;
//!
//! let regex = translate("te[xs]ting($[1-5].25)", false)?;
//! assert!(regex.is_match("texting($3.25)"));
//!
//! let cache = LikeCache::bounded(100);
//! let regex = cache.lookup("%needle%", true, Some(true))?;
//! assert!(regex.is_match("haystack with a NEEDLE in it"));
//! # Ok::<(), LikeError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod pattern;
pub mod prelude;
pub mod translate;

pub use cache::{
    CacheStats, GLOBAL_CACHE, LikeCache, cache_size, cached, cached_keep, clear_cache,
};
pub use config::CacheConfig;
pub use error::{LikeError, Result};
pub use pattern::LikePattern;
pub use translate::{CaseSensitivity, Segment, Segments, Token, expression, segments, translate};
