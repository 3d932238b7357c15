//! Static classification tables.
//!
//! Both tables are `phf` maps keyed by a lowercase subtag and built at compile
//! time by `define_table!`. Each row lists every code that shares a rule, so a
//! language's 2- and 3-letter codes always resolve identically.

use crate::{
    font::FontFamily,
    rule::{Pick, Rule},
};

pub use language::LANGUAGE_TABLE;
pub use script::SCRIPT_TABLE;

/// ---------------------------------------------------------------------------
///    Macro – one `phf` map plus the source-ordered list of its keys
/// ---------------------------------------------------------------------------
macro_rules! define_table {
    (
        $(#[$meta:meta])*
        $vis:vis static $name:ident;
        $( $($code:literal)|+ => $rule:expr ),* $(,)?
    ) => {
        $(#[$meta])*
        $vis static $name: ::phf::Map<&'static str, $crate::rule::Rule> = ::phf::phf_map! {
            $( $( $code => $rule, )+ )*
        };

        ::paste::paste! {
            /// Keys of the table in declaration order.
            $vis static [<$name _CODES>]: &[&str] = &[ $( $( $code, )+ )* ];
        }
    };
}

mod language;
mod script;

#[inline(always)]
pub(crate) const fn fixed(font: FontFamily) -> Rule {
    Rule::Fixed(font)
}

#[inline(always)]
pub(crate) const fn core_fixed(font: FontFamily) -> Rule {
    Rule::CoreFixed(font)
}

#[inline(always)]
pub(crate) const fn cjk(proprietary: FontFamily, open: FontFamily) -> Rule {
    Rule::CjkFlagConditioned { proprietary, open }
}

#[inline(always)]
pub(crate) const fn cjk_pick(proprietary: FontFamily, open: FontFamily) -> Pick {
    Pick::Cjk { proprietary, open }
}

/// Rule for a lowercase primary language subtag.
#[inline]
pub fn language_rule(primary: &str) -> Option<&'static Rule> {
    LANGUAGE_TABLE.get(primary)
}

/// Rule for a lowercase script subtag. Only consulted for `und`.
#[inline]
pub fn script_rule(script: &str) -> Option<&'static Rule> {
    SCRIPT_TABLE.get(script)
}

/// Every primary subtag with an entry, in table order.
pub fn language_codes() -> &'static [&'static str] {
    language::LANGUAGE_TABLE_CODES
}

/// Every script subtag with an entry, in table order.
pub fn script_codes() -> &'static [&'static str] {
    script::SCRIPT_TABLE_CODES
}
