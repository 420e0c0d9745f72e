//! The URL-side contract consumed by the matcher.

use std::borrow::Cow;
use url::Url;

/// What the matcher needs from a URL value: a pathname plus query-parameter
/// lookup. Implemented for [`url::Url`]; implement it yourself when URLs
/// arrive in another shape (only `pathname` and `query_param` are
/// required).
///
/// # Example
///
/// ```
/// use urlmatch::UrlLike;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/users/42?tab=posts").unwrap();
/// assert_eq!(url.pathname(), "/users/42");
/// assert!(url.has_query_param("tab"));
/// assert_eq!(url.query_param("tab").as_deref(), Some("posts"));
/// ```
pub trait UrlLike {
    /// The path portion of the URL, e.g. `/users/42`.
    fn pathname(&self) -> &str;

    /// Look up a query parameter's value; `None` when the key is absent.
    /// A key present without a value (`?q`) yields an empty string.
    fn query_param(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Whether a query parameter is present at all, value ignored.
    fn has_query_param(&self, key: &str) -> bool {
        self.query_param(key).is_some()
    }
}

impl UrlLike for Url {
    fn pathname(&self) -> &str {
        self.path()
    }

    fn query_param(&self, key: &str) -> Option<Cow<'_, str>> {
        // First occurrence wins for duplicate keys; values come back
        // form-urldecoded, like the pairs iterator itself.
        self.query_pairs()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, value)| value)
    }
}
