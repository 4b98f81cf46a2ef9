//! Convenient re-exports for common regexp-like usage.
//!
//! # Example
//!
//! ```
//! use regexp_like::prelude::*;
//!
//! let pattern = LikePattern::new("_testing", false)?;
//! assert!(pattern.is_match("Xtesting"));
//! # Ok::<(), LikeError>(())
//! ```

// Translation
pub use crate::translate::{CaseSensitivity, translate};

// Caching
pub use crate::cache::{LikeCache, cache_size, cached, cached_keep, clear_cache};

// Configuration
pub use crate::config::CacheConfig;

// Error handling
pub use crate::error::{LikeError, Result};

// Compiled patterns
pub use crate::pattern::LikePattern;
