// src/fetch/sanitize.rs
// =============================================================================
// Percent-encodes a URL before it is handed to the HTTP client.
//
// Index pages often link with raw spaces or non-ASCII characters in the
// path. Everything outside the unreserved set is encoded, except the
// characters that give a URL its structure (scheme, path, query, fragment
// separators), which are left literal.
// =============================================================================

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Unreserved characters plus the URL syntax characters we must not touch.
// Note that '%' is not in the set: an already-encoded URL is encoded again.
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    // unreserved
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    // structural
    .remove(b'/')
    .remove(b':')
    .remove(b'=')
    .remove(b'&')
    .remove(b'?')
    .remove(b'#')
    .remove(b'+')
    .remove(b'!')
    .remove(b'$')
    .remove(b',')
    .remove(b';')
    .remove(b'\'')
    .remove(b'@')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'[')
    .remove(b']');

/// Returns `url` with every byte outside [`URL_SAFE`] percent-encoded.
///
/// Never fails; malformed input simply comes back encoded.
pub fn sanitize_url(url: &str) -> String {
    utf8_percent_encode(url, URL_SAFE).to_string()
}
