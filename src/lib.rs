//! URL path template matching with named parameters and query keys.
//!
//! This crate compiles templates like `/users/:id?tab` into anchored
//! regexes and matches URLs against them. A `:name` piece captures one
//! path segment, everything else must appear literally, and the keys
//! listed after `?` must be present in the URL's query string.
//!
//! # Example
//!
//! ```
//! use urlmatch::{MatchError, UrlPattern};
//! use url::Url;
//!
//! let pattern = UrlPattern::new("/:x/:y/:z?q").unwrap();
//! let url = Url::parse("https://example.com/1/2/3?q=0").unwrap();
//!
//! // Path matches and the declared query key is present
//! assert!(pattern.test(&url));
//!
//! let matched = pattern.parse(&url).unwrap();
//! assert_eq!(matched.params["x"], "1");
//! assert_eq!(matched.params["y"], "2");
//! assert_eq!(matched.params["z"], "3");
//! assert_eq!(matched.query["q"].as_deref(), Some("0"));
//!
//! // A path that doesn't fit the template fails test and errors in parse
//! let other = Url::parse("https://example.com/1/2").unwrap();
//! assert!(!pattern.test(&other));
//! assert!(matches!(
//!     pattern.parse(&other),
//!     Err(MatchError::NoMatch { .. })
//! ));
//! ```

mod matcher;
mod template;
mod url_like;

pub use matcher::{MatchError, UrlMatch, UrlPattern};
pub use template::{parse_path, parse_template, Segment, Template};
pub use url_like::UrlLike;
