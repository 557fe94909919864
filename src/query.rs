//! Query string helpers for the page URL.
//!
//! Parsing follows what browsers do for `URLSearchParams.get`:
//! - a leading `?` is ignored
//! - `+` decodes to a space, `%XX` sequences are percent-decoded
//! - the first occurrence of a key wins
//! - a key without `=` has an empty value

/// Name of the query parameter that carries the credential blob.
pub const TOKENS_PARAM: &str = "tokens";

/// Return the decoded value of `key`, or `None` when the key is absent.
pub fn param(search: &str, key: &str) -> Option<String> {
    let qs = search.strip_prefix('?').unwrap_or(search);
    for kv in qs.split('&').filter(|kv| !kv.is_empty()) {
        let mut it = kv.splitn(2, '=');
        let k = decode_component(it.next().unwrap_or_default());
        if k == key {
            return Some(decode_component(it.next().unwrap_or_default()));
        }
    }
    None
}

/// Return the `tokens` value if it is present and non-empty.
pub fn tokens(search: &str) -> Option<String> {
    param(search, TOKENS_PARAM).filter(|t| !t.is_empty())
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(s) => s.into_owned(),
        // Malformed UTF-8 after decoding: keep the raw text rather than drop it
        Err(_) => spaced,
    }
}
