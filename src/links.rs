//! Request URL model used to derive navigation links.
//!
//! A [`RequestUrl`] keeps the request path and its decoded query pairs in
//! their original order. Deriving a link touches exactly one parameter and
//! leaves every other pair as it was.

use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestUrl {
    path: String,
    params: Vec<(String, String)>,
}

impl RequestUrl {
    /// Builds a URL from a request path and its raw query string.
    pub fn parse(path: impl Into<String>, query: &str) -> Self {
        let params = serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_else(
            |err| {
                log::warn!("Ignoring malformed query string {query:?}: {err}");
                Vec::new()
            },
        );

        Self {
            path: path.into(),
            params,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Last value given for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces every `key` pair with a single `key=value` appended last.
    #[must_use]
    pub fn include_param(&self, key: &str, value: impl ToString) -> Self {
        let mut params: Vec<_> = self
            .params
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();
        params.push((key.to_string(), value.to_string()));

        Self {
            path: self.path.clone(),
            params,
        }
    }

    #[must_use]
    pub fn remove_param(&self, key: &str) -> Self {
        let params = self
            .params
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();

        Self {
            path: self.path.clone(),
            params,
        }
    }
}

impl Display for RequestUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)?;
        if self.params.is_empty() {
            return Ok(());
        }
        let query = serde_urlencoded::to_string(&self.params).map_err(|_| std::fmt::Error)?;
        write!(f, "?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_pairs_in_order() {
        let url = RequestUrl::parse("/users", "search=larry&page=2&x=1");

        assert_eq!(url.get("search"), Some("larry"));
        assert_eq!(url.get("page"), Some("2"));
        assert_eq!(url.to_string(), "/users?search=larry&page=2&x=1");
    }

    #[test]
    fn last_value_wins_for_repeated_keys() {
        let url = RequestUrl::parse("/users", "page=2&page=3");

        assert_eq!(url.get("page"), Some("3"));
        assert_eq!(url.get("order"), None);
    }

    #[test]
    fn include_replaces_and_moves_param_last() {
        let url = RequestUrl::parse("/users", "page=2&search=tom&page=4");

        assert_eq!(
            url.include_param("page", 3).to_string(),
            "/users?search=tom&page=3"
        );
        assert_eq!(
            url.include_param("order", "-last").to_string(),
            "/users?page=2&search=tom&page=4&order=-last"
        );
    }

    #[test]
    fn remove_drops_every_occurrence_and_trailing_question_mark() {
        let url = RequestUrl::parse("/users", "page=2&page=5");

        assert_eq!(url.remove_param("page").to_string(), "/users");
        assert_eq!(url.remove_param("order").to_string(), "/users?page=2&page=5");
    }

    #[test]
    fn derivation_does_not_modify_source() {
        let url = RequestUrl::parse("/users", "order=first");
        let _ = url.include_param("page", 2);
        let _ = url.remove_param("order");

        assert_eq!(url.to_string(), "/users?order=first");
    }

    #[test]
    fn reencodes_decoded_values() {
        let url = RequestUrl::parse("/users", "search=the%20bird&blank=");

        assert_eq!(url.get("search"), Some("the bird"));
        assert_eq!(url.get("blank"), Some(""));
        assert_eq!(
            url.include_param("page", 2).to_string(),
            "/users?search=the+bird&blank=&page=2"
        );
    }
}
