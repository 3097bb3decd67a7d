use crate::config::FingerprintKind;
use std::fmt;
use xxhash_rust::xxh3::xxh3_128;

/// Content digest used as an equality proxy between two files.
///
/// Fingerprints only compare equal when they are of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    /// Result of [`legacy_fingerprint`]
    Legacy(i32),
    /// Result of [`content_fingerprint`]
    Xxh3(u128),
}

impl Fingerprint {
    /// Fingerprint `content` with the requested algorithm
    #[must_use]
    pub fn of(kind: FingerprintKind, content: &str) -> Self {
        match kind {
            FingerprintKind::Legacy => Self::Legacy(legacy_fingerprint(content)),
            FingerprintKind::Xxh3 => Self::Xxh3(content_fingerprint(content)),
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(value) => write!(f, "{value}"),
            Self::Xxh3(value) => write!(f, "{value:032x}"),
        }
    }
}

/// Legacy rolling fingerprint: `acc = acc * 31 + unit` over the UTF-16 code
/// units of `content`, wrapping as a signed 32-bit integer.
///
/// For text in the Basic Multilingual Plane each code unit is the character's
/// code point. Characters outside it contribute their surrogate pair, which
/// keeps values identical to reports produced by earlier tooling.
///
/// Distinct contents can share a fingerprint; such files are reported as
/// identical.
#[must_use]
pub fn legacy_fingerprint(content: &str) -> i32 {
    content
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// 128-bit xxHash3 of the UTF-8 bytes of `content`
#[must_use]
pub fn content_fingerprint(content: &str) -> u128 {
    xxh3_128(content.as_bytes())
}
