use super::{cjk, fixed};
use crate::font::FontFamily::*;

define_table! {
    /// Rules keyed by lowercase script subtag, used for `und-<Script>` tags.
    pub static SCRIPT_TABLE;

    // European
    "latn" => fixed(DejaVuSansCondensed),       // Latin
    "cyrl" => fixed(DejaVuSansCondensed),       // Cyrillic
    "cprt" => fixed(Aegean),                    // Cypriot
    "glag" => fixed(Mph2bDamase),               // Glagolitic
    "linb" => fixed(Aegean),                    // Linear B
    "ogam" => fixed(DejaVuSans),                // Ogham
    "ital" => fixed(Aegean),                    // Old Italic
    "runr" => fixed(SunExtA),                   // Runic
    "shaw" => fixed(Mph2bDamase),               // Shavian

    // African; merc and mero (Meroitic) are unmapped
    "egyp" => fixed(Aegyptus),                  // Egyptian hieroglyphs
    "ethi" => fixed(AbyssinicaSil),             // Ethiopic
    "osma" => fixed(Mph2bDamase),               // Osmanya
    "tfng" => fixed(DejaVuSans),                // Tifinagh

    // Middle Eastern; sarb, prti and phli are unmapped
    "arab" => fixed(XbRiyaz),                   // Arabic
    "xsux" => fixed(Akkadian),                  // Cuneiform

    // Central Asian orkh and phag are unmapped.

    // South Asian; brah, kthi, shrd and sora are unmapped
    "khar" => fixed(Mph2bDamase),               // Kharoshthi
    "mtei" => fixed(EeyekUnicode),              // Meetei Mayek

    // South East Asian; rjng is unmapped
    "kali" => fixed(FreeMono),                  // Kayah Li
    "lana" => fixed(LannaAlif),                 // Tai Tham
    "talu" => fixed(DaiBannaSilBook),           // New Tai Lue

    // East Asian; plrd (Miao) is unmapped
    "hans" => cjk(Gb, SunExtA),                 // Han (simplified)
    "bopo" => fixed(SunExtA),                   // Bopomofo
    "yiii" => fixed(SunExtA),                   // Yi

    // American
    "dsrt" => fixed(Mph2bDamase),               // Deseret

    // Other
    "brai" => fixed(DejaVuSans),                // Braille
}
