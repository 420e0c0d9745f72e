//! Compiled URL patterns: template-to-regex compilation plus the
//! `test`/`parse` operations on the result.

use crate::template::{parse_template, Segment, Template};
use crate::url_like::UrlLike;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("failed to build path regex: {0}")]
    RegexBuild(#[from] regex::Error),
    #[error("path '{path}' does not match template '{template}'")]
    NoMatch { template: String, path: String },
}

/// A URL template compiled into an anchored path regex plus the query keys
/// the URL must carry.
///
/// Compilation happens once in [`UrlPattern::new`]; [`test`](UrlPattern::test)
/// and [`parse`](UrlPattern::parse) only run the compiled regex, so a pattern
/// can be built up front and shared freely, including across threads.
///
/// # Example
///
/// ```
/// use urlmatch::UrlPattern;
/// use url::Url;
///
/// let pattern = UrlPattern::new("/users/:id?tab").unwrap();
/// let url = Url::parse("https://example.com/users/42?tab=posts").unwrap();
///
/// assert!(pattern.test(&url));
/// let matched = pattern.parse(&url).unwrap();
/// assert_eq!(matched.params["id"], "42");
/// assert_eq!(matched.query["tab"].as_deref(), Some("posts"));
/// ```
#[derive(Debug, Clone)]
pub struct UrlPattern {
    template: String,
    regex: Regex,
    params: Vec<String>,
    query_keys: Vec<String>,
}

impl UrlPattern {
    /// Compile a template like `/users/:id?tab` into a pattern.
    pub fn new(template: impl Into<String>) -> Result<Self, MatchError> {
        let template = template.into();
        let Template { path, query_keys } = parse_template(&template);
        let regex = build_regex(&path)?;
        let params = path
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name.clone()),
                Segment::Literal(_) => None,
            })
            .collect();
        Ok(Self {
            template,
            regex,
            params,
            query_keys,
        })
    }

    /// The template string this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in path order.
    pub fn param_names(&self) -> &[String] {
        &self.params
    }

    /// Query keys the template declares.
    pub fn query_keys(&self) -> &[String] {
        &self.query_keys
    }

    /// Whether the URL's path matches the template exactly and every declared
    /// query key is present.
    pub fn test(&self, url: &impl UrlLike) -> bool {
        self.regex.is_match(url.pathname())
            && self.query_keys.iter().all(|key| url.has_query_param(key))
    }

    /// Match the URL's path against the template and extract parameter and
    /// query values.
    ///
    /// Returns [`MatchError::NoMatch`] when the path does not match. Query
    /// keys do not gate this operation: a declared key absent from the URL
    /// comes back as `None`. Gate on [`UrlPattern::test`] first when the
    /// keys must be present.
    pub fn parse(&self, url: &impl UrlLike) -> Result<UrlMatch, MatchError> {
        let path = url.pathname();
        let Some(caps) = self.regex.captures(path) else {
            return Err(MatchError::NoMatch {
                template: self.template.clone(),
                path: path.to_string(),
            });
        };

        let mut params = HashMap::new();
        for (i, name) in self.params.iter().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                // Duplicate names: the later capture wins.
                params.insert(name.clone(), m.as_str().to_string());
            }
        }

        let mut query = HashMap::new();
        for key in &self.query_keys {
            let value = url.query_param(key).map(|v| v.into_owned());
            query.insert(key.clone(), value);
        }

        Ok(UrlMatch { params, query })
    }
}

/// Values extracted from a URL by [`UrlPattern::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMatch {
    /// Path parameter values, keyed by name, exactly as they appear in the
    /// path (no percent-decoding).
    pub params: HashMap<String, String>,
    /// Declared query keys with their values; `None` when a key was absent
    /// from the URL.
    pub query: HashMap<String, Option<String>>,
}

fn build_regex(segments: &[Segment]) -> Result<Regex, regex::Error> {
    let mut regex_str = String::from("^");
    for segment in segments {
        match segment {
            Segment::Literal(text) => regex_str.push_str(&regex::escape(text)),
            // One path segment: anything up to the next '/' or the query.
            Segment::Param(_) => regex_str.push_str("([^/?]+)"),
        }
    }
    regex_str.push('$');
    Regex::new(&regex_str)
}
