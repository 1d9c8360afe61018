//! Submission targets: the HTTP verb and the action descriptor
//!
//! An [`Action`] describes where and how a form is submitted. Callers either
//! pass a plain URL string, which always submits with `POST`, or a structured
//! descriptor carrying an explicit [`Method`]. No URL validation happens here;
//! a malformed URL is forwarded to the dispatcher untouched and whatever error
//! it reports comes back through the normal error path.

use serde::{Deserialize, Serialize};

/// HTTP verb used for a form submission
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// The lowercase wire name of the verb
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how to submit a form
///
/// The untagged serde representation accepts both shapes route props commonly
/// arrive in: a bare string (`"/posts"`) or an object
/// (`{"url": "/posts/1", "method": "patch"}`, method defaulting to `post`).
///
/// ```rust
/// use dioxus_submit::action::{Action, Method};
///
/// let create: Action = "/posts".into();
/// assert_eq!(create.method(), Method::Post);
///
/// let update = Action::request("/posts/1", Method::Patch);
/// assert_eq!(update.into_parts(), ("/posts/1".to_string(), Method::Patch));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// A bare URL, submitted with `POST`
    Url(String),
    /// A URL with an explicit verb, both taken verbatim
    Request {
        url: String,
        #[serde(default)]
        method: Method,
    },
}

impl Action {
    /// Build a structured descriptor with an explicit verb
    pub fn request(url: impl Into<String>, method: Method) -> Self {
        Action::Request {
            url: url.into(),
            method,
        }
    }

    /// The target URL
    pub fn url(&self) -> &str {
        match self {
            Action::Url(url) => url,
            Action::Request { url, .. } => url,
        }
    }

    /// The resolved verb: `POST` for bare URLs, verbatim otherwise
    pub fn method(&self) -> Method {
        match self {
            Action::Url(_) => Method::Post,
            Action::Request { method, .. } => *method,
        }
    }

    /// Consume the descriptor into its `(url, method)` pair
    pub fn into_parts(self) -> (String, Method) {
        match self {
            Action::Url(url) => (url, Method::Post),
            Action::Request { url, method } => (url, method),
        }
    }
}

impl From<&str> for Action {
    fn from(url: &str) -> Self {
        Action::Url(url.to_string())
    }
}

impl From<String> for Action {
    fn from(url: String) -> Self {
        Action::Url(url)
    }
}

impl From<(String, Method)> for Action {
    fn from((url, method): (String, Method)) -> Self {
        Action::Request { url, method }
    }
}

impl From<(&str, Method)> for Action {
    fn from((url, method): (&str, Method)) -> Self {
        Action::request(url, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_urls_resolve_to_post() {
        let action: Action = "/posts".into();
        assert_eq!(action.url(), "/posts");
        assert_eq!(action.method(), Method::Post);
    }

    #[test]
    fn structured_descriptors_resolve_verbatim() {
        for method in [
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
        ] {
            let action = Action::request("/posts/1", method);
            assert_eq!(action.clone().into_parts(), ("/posts/1".to_string(), method));
        }
    }

    #[test]
    fn deserializes_both_shapes() {
        let bare: Action = serde_json::from_str("\"/posts\"").unwrap();
        assert_eq!(bare, Action::Url("/posts".to_string()));

        let structured: Action =
            serde_json::from_str(r#"{"url": "/posts/1", "method": "patch"}"#).unwrap();
        assert_eq!(structured, Action::request("/posts/1", Method::Patch));

        let defaulted: Action = serde_json::from_str(r#"{"url": "/posts"}"#).unwrap();
        assert_eq!(defaulted.method(), Method::Post);
    }

    #[test]
    fn method_wire_names_are_lowercase() {
        assert_eq!(Method::Patch.to_string(), "patch");
        assert_eq!(serde_json::to_string(&Method::Delete).unwrap(), "\"delete\"");
    }
}
