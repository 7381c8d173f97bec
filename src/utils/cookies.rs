// ============================================================================
// COOKIES - token persistence in document.cookie
// ============================================================================

use chrono::{DateTime, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::error::ClientError;

/// Cookie storage seam. The browser implementation writes `document.cookie`;
/// tests use an in-memory jar.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) -> Result<(), ClientError>;
    fn remove(&self, name: &str) -> Result<(), ClientError>;
}

/// Finds `name` in a `document.cookie` string and returns its decoded value.
/// Empty values count as absent.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// Serializes a cookie assignment for `document.cookie`.
pub fn format_cookie(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{}={}; expires={}; path=/; SameSite=Lax",
        name,
        urlencoding::encode(value),
        expires.format("%a, %d %b %Y %H:%M:%S GMT"),
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserCookieJar;

impl BrowserCookieJar {
    fn document() -> Result<HtmlDocument, ClientError> {
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| ClientError::Cookie("document unavailable".to_string()))
    }

    fn write(raw: &str) -> Result<(), ClientError> {
        Self::document()?
            .set_cookie(raw)
            .map_err(|e| ClientError::Cookie(format!("{:?}", e)))
    }
}

impl CookieJar for BrowserCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document().ok()?.cookie().ok()?;
        parse_cookie(&header, name)
    }

    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) -> Result<(), ClientError> {
        Self::write(&format_cookie(name, value, expires))
    }

    fn remove(&self, name: &str) -> Result<(), ClientError> {
        Self::write(&format_cookie(name, "", DateTime::<Utc>::UNIX_EPOCH))
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory jar that also counts writes
    #[derive(Default)]
    pub struct MemoryCookieJar {
        pub cookies: RefCell<HashMap<String, (String, DateTime<Utc>)>>,
        pub writes: RefCell<usize>,
    }

    impl MemoryCookieJar {
        pub fn with_token(name: &str, value: &str) -> Self {
            let jar = Self::default();
            jar.cookies
                .borrow_mut()
                .insert(name.to_string(), (value.to_string(), DateTime::<Utc>::MAX_UTC));
            jar
        }

        pub fn entry(&self, name: &str) -> Option<(String, DateTime<Utc>)> {
            self.cookies.borrow().get(name).cloned()
        }
    }

    impl CookieJar for MemoryCookieJar {
        fn get(&self, name: &str) -> Option<String> {
            self.cookies.borrow().get(name).map(|(value, _)| value.clone())
        }

        fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) -> Result<(), ClientError> {
            *self.writes.borrow_mut() += 1;
            self.cookies
                .borrow_mut()
                .insert(name.to_string(), (value.to_string(), expires));
            Ok(())
        }

        fn remove(&self, name: &str) -> Result<(), ClientError> {
            *self.writes.borrow_mut() += 1;
            self.cookies.borrow_mut().remove(name);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn finds_named_cookie_among_others() {
        let header = "theme=dark; atkn=abc123; lang=en";
        assert_eq!(parse_cookie(header, "atkn").as_deref(), Some("abc123"));
        assert_eq!(parse_cookie(header, "lang").as_deref(), Some("en"));
    }

    #[test]
    fn missing_or_empty_cookie_is_none() {
        assert_eq!(parse_cookie("", "atkn"), None);
        assert_eq!(parse_cookie("theme=dark", "atkn"), None);
        assert_eq!(parse_cookie("atkn=; theme=dark", "atkn"), None);
    }

    #[test]
    fn name_match_is_exact() {
        assert_eq!(parse_cookie("xatkn=nope; atkn2=nope", "atkn"), None);
    }

    #[test]
    fn formatted_cookie_carries_gmt_expiry() {
        let expires = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
        assert_eq!(
            format_cookie("atkn", "xyz", expires),
            "atkn=xyz; expires=Wed, 21 Oct 2015 07:28:00 GMT; path=/; SameSite=Lax"
        );
    }

    #[test]
    fn reserved_characters_survive_a_write_and_read() {
        let expires = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let raw = format_cookie("atkn", "a; b=c", expires);
        let assignment = raw.split("; expires").next().unwrap();
        assert_eq!(parse_cookie(assignment, "atkn").as_deref(), Some("a; b=c"));
    }
}
