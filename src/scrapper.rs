use regex::Regex;
use std::sync::OnceLock;

use crate::data_models::SearchResult;

/// Class marker carried by result title anchors on the html endpoint.
pub const RESULT_LINK_CLASS: &str = "result__a";

static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();
static CLASS_RE: OnceLock<Regex> = OnceLock::new();
static HREF_RE: OnceLock<Regex> = OnceLock::new();
static TAG_RE: OnceLock<Regex> = OnceLock::new();
static ENTITY_RE: OnceLock<Regex> = OnceLock::new();
static REDIRECT_RE: OnceLock<Regex> = OnceLock::new();

fn anchor_re() -> &'static Regex {
    ANCHOR_RE.get_or_init(|| {
        Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("anchor regex")
    })
}

fn class_re() -> &'static Regex {
    CLASS_RE.get_or_init(|| {
        Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("class attribute regex")
    })
}

fn href_re() -> &'static Regex {
    HREF_RE.get_or_init(|| {
        Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("href attribute regex")
    })
}

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("tag regex"))
}

fn entity_re() -> &'static Regex {
    ENTITY_RE.get_or_init(|| {
        Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("entity regex")
    })
}

fn redirect_re() -> &'static Regex {
    REDIRECT_RE.get_or_init(|| Regex::new(r"[?&]uddg=([^&]+)").expect("redirect regex"))
}

/// Pulls result anchors out of a results page, in document order.
///
/// An anchor counts when its `class` attribute contains [`RESULT_LINK_CLASS`].
/// Nested markup is stripped from the title. Anchors missing an `href` or with
/// an empty title are skipped. Garbage in gives an empty vec, never an error.
pub fn extract_results(html: &str, limit: usize) -> Vec<SearchResult> {
    let mut results = Vec::new();
    if limit == 0 {
        return results;
    }

    for anchor in anchor_re().captures_iter(html) {
        let attrs = &anchor[1];
        let is_result = attr_value(class_re(), attrs)
            .map(|class| class.contains(RESULT_LINK_CLASS))
            .unwrap_or(false);
        if !is_result {
            continue;
        }

        let Some(href) = attr_value(href_re(), attrs) else {
            continue;
        };
        let link = decode_entities(href.trim());
        let title = clean_text(&anchor[2]);
        if link.is_empty() || title.is_empty() {
            continue;
        }

        results.push(SearchResult { title, link });
        if results.len() >= limit {
            break;
        }
    }

    results
}

/// Unwraps provider redirect links and fixes protocol-relative ones.
///
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=..` becomes
/// `https://example.com`, `//example.com/x` becomes `https://example.com/x`,
/// anything else is returned as is. A target that fails to decode leaves the
/// original href untouched.
pub fn normalize_link(href: &str) -> String {
    if let Some(caps) = redirect_re().captures(href) {
        return match urlencoding::decode(&caps[1]) {
            Ok(target) => target.into_owned(),
            Err(e) => {
                log::debug!("could not decode redirect target in {href}: {e}");
                href.to_string()
            }
        };
    }
    if href.starts_with("//") {
        return format!("https:{href}");
    }
    href.to_string()
}

fn attr_value<'a>(re: &Regex, attrs: &'a str) -> Option<&'a str> {
    let caps = re.captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

fn clean_text(inner_html: &str) -> String {
    let text = tag_re().replace_all(inner_html, "");
    let text = decode_entities(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    entity_re()
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => numeric_entity(entity),
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let hex = digits
        .strip_prefix('x')
        .or_else(|| digits.strip_prefix('X'));
    let code = match hex {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}
