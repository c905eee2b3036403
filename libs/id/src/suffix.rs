//! Suffix parsing and max-tracking.
//!
//! An identifier belongs to a prefix family when it is exactly one leading
//! occurrence of the prefix followed by a non-empty run of ASCII digits.
//! Anything else (missing prefix, empty remainder, non-digit remainder) is
//! ignored: the scan is best-effort, not a validator.

/// Largest suffix the allocator will track.
///
/// Suffixes beyond this clamp to it instead of wrapping, so `max + 1`
/// always fits in a `u64`.
pub const MAX_SUFFIX: u64 = u64::MAX - 1;

/// Parses the numeric suffix of `id` under `prefix`, if it has one.
///
/// Digit runs too long for a `u64` are all-digit by construction and clamp
/// to [`MAX_SUFFIX`].
pub(crate) fn parse_suffix(id: &str, prefix: &str) -> Option<u64> {
    let rest = id.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match rest.parse::<u64>() {
        Ok(n) => Some(n.min(MAX_SUFFIX)),
        Err(_) => Some(MAX_SUFFIX),
    }
}

/// Running maximum over the suffixes seen during a scan.
#[derive(Debug, Default)]
pub(crate) struct SuffixMax {
    max: u64,
}

impl SuffixMax {
    /// Folds one candidate identifier into the maximum.
    ///
    /// Absent identifiers and identifiers outside the prefix family are
    /// skipped.
    pub(crate) fn observe(&mut self, id: Option<&str>, prefix: &str) {
        let Some(id) = id else {
            return;
        };
        if let Some(suffix) = parse_suffix(id, prefix) {
            self.max = self.max.max(suffix);
        }
    }

    /// The next unused suffix: one past the maximum seen so far.
    pub(crate) fn next(&self) -> u64 {
        // max is clamped to MAX_SUFFIX, so this cannot wrap
        self.max + 1
    }
}
