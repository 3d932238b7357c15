//! Language-tag to font-family classification.
//!
//! [`resolve`] maps an IETF-style tag such as `zh-HK`, `sd-PK` or `und-Cyrl`
//! to a [`FontDecision`]: whether a Latin-only core font is enough, and which
//! Unicode font family from the external catalog should be used otherwise.
//!
//! ```
//! let d = langfont::resolve("ko", true);
//! assert!(!d.core_font_suitable());
//! assert_eq!(d.font_family_id(), "uhc");
//!
//! assert_eq!(langfont::resolve("fr-CA", false).into_tuple(), (true, "dejavusanscondensed"));
//! assert_eq!(langfont::resolve("zz", false).into_tuple(), (false, ""));
//! ```

pub mod font;
pub mod resolver;
pub mod rule;
pub mod table;
pub mod tag;

pub use font::{FontFamily, FontFamilyError};
pub use resolver::{FontDecision, FontResolver, FontResolverBuilder, resolve, resolve_tag};
pub use rule::{Pick, RegionBranch, Rule};
pub use tag::LanguageTag;
