//! `Link` response header parsing (RFC 8288 subset).
//!
//! Canvas paginates with headers of the form
//! `<https://x/api/v1/users?page=2&per_page=10>; rel="next", <...>; rel="last"`.
//! Only the target URL and its `rel` values are kept.

/// One `<url>; rel="..."` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub rels: Vec<String>,
}

/// All links from one or more `Link` header values, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    /// Parse every value of a (possibly repeated) `Link` header.
    pub fn parse<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self(values.into_iter().flat_map(parse_link_header).collect())
    }

    /// URL of the first link carrying `rel` (compared case-insensitively).
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|link| link.rels.iter().any(|r| r.eq_ignore_ascii_case(rel)))
            .map(|link| link.url.as_str())
    }

    pub fn next(&self) -> Option<&str> {
        self.get("next")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parse a single `Link` header value.
///
/// Entries without an angle-bracketed target are skipped.
pub fn parse_link_header(value: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut rest = value;

    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('>') else {
            break;
        };
        let url = after_open[..close].trim();
        let tail = &after_open[close + 1..];

        // This entry's parameters end at the next comma; anything between
        // that comma and the next '<' is a malformed entry.
        let next_open = tail.find('<').unwrap_or(tail.len());
        let section = &tail[..next_open];
        let params = section.split(',').next().unwrap_or("");

        if !url.is_empty() {
            links.push(Link {
                url: url.to_string(),
                rels: parse_rels(params),
            });
        }
        rest = &tail[next_open..];
    }

    links
}

fn parse_rels(params: &str) -> Vec<String> {
    params
        .split(';')
        .filter_map(|param| {
            let (key, value) = param.split_once('=')?;
            if !key.trim().eq_ignore_ascii_case("rel") {
                return None;
            }
            Some(value.trim().trim_matches('"'))
        })
        .flat_map(str::split_whitespace)
        .map(str::to_ascii_lowercase)
        .collect()
}
