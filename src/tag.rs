//! Best-effort splitting of IETF language tags.
//!
//! A tag is read as at most three `-`-separated subtags:
//!
//! - slot one is always the primary language (`en`, `zho`, `und`, `cn2`, ...)
//! - slot two is a script when it is exactly four bytes long, a region otherwise
//! - slot three is always a region and overrides a region taken from slot two
//!
//! Nothing is validated. Anything after the third subtag is ignored, and empty
//! subtags (`"zh--HK"`) contribute nothing.

use std::fmt;

use memchr::memchr_iter;
use smallvec::SmallVec;

const UNDETERMINED: &str = "und";
const MAX_SUBTAGS: usize = 3;

/// A lowercased `(primary, script, region)` triplet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    primary: String,
    script: Option<String>,
    region: Option<String>,
}

impl LanguageTag {
    /// Split `tag` into its subtags. Never fails.
    pub fn parse(tag: &str) -> Self {
        let parts = split_subtags(tag);

        let primary = parts
            .first()
            .map(|p| p.to_ascii_lowercase())
            .unwrap_or_default();

        let mut script = None;
        let mut region = None;
        if let Some(second) = parts.get(1).filter(|p| !p.is_empty()) {
            if second.len() == 4 {
                script = Some(second.to_ascii_lowercase());
            } else {
                region = Some(second.to_ascii_lowercase());
            }
        }
        if let Some(third) = parts.get(2).filter(|p| !p.is_empty()) {
            region = Some(third.to_ascii_lowercase());
        }

        Self {
            primary,
            script,
            region,
        }
    }

    #[inline(always)]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    #[inline(always)]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    #[inline(always)]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// `true` for the `und` (undetermined language) primary subtag.
    #[inline(always)]
    pub fn is_undetermined(&self) -> bool {
        self.primary == UNDETERMINED
    }
}

/// First [`MAX_SUBTAGS`] subtags of `tag`, without copying.
fn split_subtags(tag: &str) -> SmallVec<[&str; MAX_SUBTAGS]> {
    let mut parts = SmallVec::new();
    let mut start = 0;
    for pos in memchr_iter(b'-', tag.as_bytes()) {
        parts.push(&tag[start..pos]);
        if parts.len() == MAX_SUBTAGS {
            return parts;
        }
        start = pos + 1;
    }
    parts.push(&tag[start..]);
    parts
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

/// Registry casing: `und-Cyrl`, `zh-HK`, `sr-Latn-RS`.
impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary)?;
        if let Some(script) = &self.script {
            let mut chars = script.chars();
            f.write_str("-")?;
            if let Some(first) = chars.next() {
                write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
            }
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region.to_ascii_uppercase())?;
        }
        Ok(())
    }
}
