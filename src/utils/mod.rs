// Shared utilities

pub mod cookies;

pub use cookies::{format_cookie, parse_cookie, BrowserCookieJar, CookieJar};
