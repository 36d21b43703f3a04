use std::borrow::Cow;
use std::fmt;

use percent_encoding::percent_decode_str;

/// Reference to an uploaded document in blob storage.
///
/// Accepts either a plain object path (`client/plans/site.pdf`) or a full blob URL
/// (`https://account.blob.core.windows.net/container/client/plans/site.pdf`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobLocation(String);

impl BlobLocation {
    pub fn from_raw(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object key inside the configured container. For URLs the scheme, host and
    /// container segment are dropped, along with any query string, and the remaining
    /// path is percent-decoded. Plain paths are taken literally.
    pub fn object_path(&self) -> Cow<'_, str> {
        let raw = self.0.trim();

        let Some(after_scheme) = raw
            .strip_prefix("https://")
            .or_else(|| raw.strip_prefix("http://"))
        else {
            return Cow::Borrowed(raw.trim_start_matches('/'));
        };

        let without_query = after_scheme.split(['?', '#']).next().unwrap_or_default();

        let encoded = without_query
            .split_once('/')
            .and_then(|(_host, rest)| rest.split_once('/'))
            .map(|(_container, path)| path)
            .unwrap_or_default();

        percent_decode_str(encoded).decode_utf8_lossy()
    }
}

impl fmt::Display for BlobLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
