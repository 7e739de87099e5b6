//! Markup fragments with escaping at every substitution point.
//!
//! Nothing in here accepts pre-built HTML except `Markup` values produced by
//! these helpers, so untrusted text always passes through `escape_html`.
use std::fmt;
use url::form_urlencoded;

/// An HTML fragment that is safe to splice into output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    /// Escape untrusted text.
    pub fn text(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    /// Wrap a literal that is known to be safe (catalog templates, fixed tags).
    pub(crate) fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<strong>inner</strong>`
pub fn strong(inner: &Markup) -> Markup {
    Markup(format!("<strong>{}</strong>", inner.0))
}

/// Empty avatar element the display surface fills in for `user`.
pub fn avatar(user: &str) -> Markup {
    Markup(format!(
        "<div class=\"avatar\" data-user=\"{}\"></div>",
        escape_html(user)
    ))
}

/// Anchor with a fixed class list, an optional tooltip title, and an already
/// encoded target.
pub fn anchor(href: &LinkTarget, class: &str, title: Option<&Markup>, body: &Markup) -> Markup {
    let mut out = format!(
        "<a class=\"{}\" href=\"{}\"",
        escape_html(class),
        href.as_str()
    );
    if let Some(title) = title {
        out.push_str(&format!(" title=\"{}\"", title.0));
    }
    out.push('>');
    out.push_str(&body.0);
    out.push_str("</a>");
    Markup(out)
}

/// A link target ready for an `href` attribute: the base is HTML-escaped and
/// query values are form-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget(String);

impl LinkTarget {
    pub fn new(base: &str, query: &[(&str, &str)]) -> Self {
        let base = escape_html(base);
        if query.is_empty() {
            return Self(base);
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in query {
            serializer.append_pair(key, value);
        }
        Self(format!("{base}?{}", serializer.finish()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
