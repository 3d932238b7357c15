use super::{cjk, cjk_pick, core_fixed, fixed};
use crate::{
    font::FontFamily::*,
    rule::{Pick, RegionBranch, Rule},
};

const HAN_SIMPLIFIED: Pick = cjk_pick(Gb, SunExtA);

const CHINESE_REGIONS: &[RegionBranch] = &[
    RegionBranch {
        regions: &["hk", "tw"],
        pick: cjk_pick(Big5, SunExtA),
    },
    RegionBranch {
        regions: &["cn"],
        pick: HAN_SIMPLIFIED,
    },
];

// Devanagari in India, Arabic script elsewhere.
const SINDHI_REGIONS: &[RegionBranch] = &[
    RegionBranch {
        regions: &["in"],
        pick: Pick::Font(FreeSerif),
    },
    RegionBranch {
        regions: &["pk"],
        pick: Pick::Font(Lateef),
    },
];

define_table! {
    /// Rules keyed by lowercase primary language subtag.
    pub static LANGUAGE_TABLE;

    // ── European, Latin script: core fonts are enough ───────────────────────
    "en" | "eng" => core_fixed(DejaVuSansCondensed), // English
    "eu" | "eus" => core_fixed(DejaVuSansCondensed), // Basque
    "br" | "bre" => core_fixed(DejaVuSansCondensed), // Breton
    "ca" | "cat" => core_fixed(DejaVuSansCondensed), // Catalan
    "co" | "cos" => core_fixed(DejaVuSansCondensed), // Corsican
    "kw" | "cor" => core_fixed(DejaVuSansCondensed), // Cornish
    "cy" | "cym" => core_fixed(DejaVuSansCondensed), // Welsh
    "cs" | "ces" => core_fixed(DejaVuSansCondensed), // Czech
    "da" | "dan" => core_fixed(DejaVuSansCondensed), // Danish
    "nl" | "nld" => core_fixed(DejaVuSansCondensed), // Dutch
    "et" | "est" => core_fixed(DejaVuSansCondensed), // Estonian
    "fo" | "fao" => core_fixed(DejaVuSansCondensed), // Faroese
    "fi" | "fin" => core_fixed(DejaVuSansCondensed), // Finnish
    "fr" | "fra" => core_fixed(DejaVuSansCondensed), // French
    "gl" | "glg" => core_fixed(DejaVuSansCondensed), // Galician
    "de" | "deu" => core_fixed(DejaVuSansCondensed), // German
    "ht" | "hat" => core_fixed(DejaVuSansCondensed), // Haitian Creole
    "hu" | "hun" => core_fixed(DejaVuSansCondensed), // Hungarian
    "ga" | "gle" => core_fixed(DejaVuSansCondensed), // Irish
    "is" | "isl" => core_fixed(DejaVuSansCondensed), // Icelandic
    "it" | "ita" => core_fixed(DejaVuSansCondensed), // Italian
    "la" | "lat" => core_fixed(DejaVuSansCondensed), // Latin
    "lb" | "ltz" => core_fixed(DejaVuSansCondensed), // Luxembourgish
    "li" | "lim" => core_fixed(DejaVuSansCondensed), // Limburgish
    "lt" | "lit" => core_fixed(DejaVuSansCondensed), // Lithuanian
    "lv" | "lav" => core_fixed(DejaVuSansCondensed), // Latvian
    "gv" | "glv" => core_fixed(DejaVuSansCondensed), // Manx
    "no" | "nor" => core_fixed(DejaVuSansCondensed), // Norwegian
    "nn" | "nno" => core_fixed(DejaVuSansCondensed), // Norwegian Nynorsk
    "nb" | "nob" => core_fixed(DejaVuSansCondensed), // Norwegian Bokmål
    "pl" | "pol" => core_fixed(DejaVuSansCondensed), // Polish
    "pt" | "por" => core_fixed(DejaVuSansCondensed), // Portuguese
    "ro" | "ron" => core_fixed(DejaVuSansCondensed), // Romanian
    "gd" | "gla" => core_fixed(DejaVuSansCondensed), // Scottish Gaelic
    "es" | "spa" => core_fixed(DejaVuSansCondensed), // Spanish
    "sv" | "swe" => core_fixed(DejaVuSansCondensed), // Swedish
    "sl" | "slv" => core_fixed(DejaVuSansCondensed), // Slovene
    "sk" | "slk" => core_fixed(DejaVuSansCondensed), // Slovak

    // ── Cyrillic ────────────────────────────────────────────────────────────
    "ru" | "rus" => fixed(DejaVuSansCondensed), // Russian
    "ab" | "abk" => fixed(DejaVuSansCondensed), // Abkhaz
    "av" | "ava" => fixed(DejaVuSansCondensed), // Avaric
    "ba" | "bak" => fixed(DejaVuSansCondensed), // Bashkir
    "be" | "bel" => fixed(DejaVuSansCondensed), // Belarusian
    "bg" | "bul" => fixed(DejaVuSansCondensed), // Bulgarian
    "ce" | "che" => fixed(DejaVuSansCondensed), // Chechen
    "cv" | "chv" => fixed(DejaVuSansCondensed), // Chuvash
    "kk" | "kaz" => fixed(DejaVuSansCondensed), // Kazakh
    "kv" | "kom" => fixed(DejaVuSansCondensed), // Komi
    "ky" | "kir" => fixed(DejaVuSansCondensed), // Kyrgyz
    "mk" | "mkd" => fixed(DejaVuSansCondensed), // Macedonian
    "cu" | "chu" => fixed(DejaVuSansCondensed), // Old Church Slavonic
    "os" | "oss" => fixed(DejaVuSansCondensed), // Ossetian
    "sr" | "srp" => fixed(DejaVuSansCondensed), // Serbian
    "tg" | "tgk" => fixed(DejaVuSansCondensed), // Tajik
    "tt" | "tat" => fixed(DejaVuSansCondensed), // Tatar
    "tk" | "tuk" => fixed(DejaVuSansCondensed), // Turkmen
    "uk" | "ukr" => fixed(DejaVuSansCondensed), // Ukrainian

    // ── Other European ──────────────────────────────────────────────────────
    "hy" | "hye" => fixed(DejaVuSans),          // Armenian
    "ka" | "kat" => fixed(DejaVuSans),          // Georgian
    "el" | "ell" => fixed(DejaVuSansCondensed), // Greek
    "cop" => fixed(Quivira),                    // Coptic
    "got" => fixed(FreeSerif),                  // Gothic

    // ── African ─────────────────────────────────────────────────────────────
    // bax (Bamum) and ha/hau (Hausa) are unmapped.
    "nqo" => fixed(DejaVuSans),                 // N'Ko
    "vai" => fixed(FreeSans),                   // Vai
    "am" | "amh" => fixed(AbyssinicaSil),       // Amharic
    "ti" | "tir" => fixed(AbyssinicaSil),       // Tigrinya

    // ── Middle Eastern ──────────────────────────────────────────────────────
    // arc (Imperial Aramaic), ae (Avestan), mid (Mandaic), peo (Old Persian)
    // and smp (Samaritan) are unmapped.
    "ar" | "ara" => fixed(XbRiyaz),             // Arabic
    "fa" | "fas" => fixed(XbRiyaz),             // Persian
    "ps" | "pus" => fixed(XbRiyaz),             // Pashto
    "ku" | "kur" => fixed(XbRiyaz),             // Kurdish
    "ur" | "urd" => fixed(XbRiyaz),             // Urdu
    "he" | "heb" => fixed(TaameyDavidClm),      // Hebrew
    "yi" | "yid" => fixed(TaameyDavidClm),      // Yiddish
    "syr" => fixed(EstrangeloEdessa),           // Syriac
    "xcr" => fixed(Aegean),                     // Carian
    "xlc" => fixed(Aegean),                     // Lycian
    "xld" => fixed(Aegean),                     // Lydian
    "phn" => fixed(Aegean),                     // Phoenician
    "uga" => fixed(Aegean),                     // Ugaritic

    // ── Central Asian ───────────────────────────────────────────────────────
    // mn/mon (vertical Mongolian), ug/uig, uz/uzb and azb are unmapped.
    "bo" | "bod" => fixed(Jomolhari),           // Tibetan
    "dz" | "dzo" => fixed(Jomolhari),           // Dzongkha

    // ── South Asian ─────────────────────────────────────────────────────────
    // ccp (Chakma), lep (Lepcha), sat (Ol Chiki), saz (Saurashtra) and
    // dgo (Takri) are unmapped.
    "as" | "asm" => fixed(FreeSerif),           // Assamese
    "bn" | "ben" => fixed(FreeSerif),           // Bengali
    "ks" | "kas" => fixed(FreeSerif),           // Kashmiri
    "hi" | "hin" => fixed(FreeSerif),           // Hindi
    "bh" | "bih" => fixed(FreeSerif),           // Bihari
    "sa" | "san" => fixed(FreeSerif),           // Sanskrit
    "gu" | "guj" => fixed(FreeSerif),           // Gujarati
    "pa" | "pan" => fixed(FreeSerif),           // Punjabi
    "kn" | "kan" => fixed(LohitKannada),        // Kannada
    "mr" | "mar" => fixed(FreeSerif),           // Marathi
    "ml" | "mal" => fixed(FreeSerif),           // Malayalam
    "ne" | "nep" => fixed(FreeSerif),           // Nepali
    "or" | "ori" => fixed(FreeSerif),           // Oriya
    "si" | "sin" => fixed(KaputaUnicode),       // Sinhala
    "ta" | "tam" => fixed(FreeSerif),           // Tamil
    "te" | "tel" => fixed(Pothana2000),         // Telugu
    "sd" | "snd" => Rule::RegionConditioned {   // Sindhi
        branches: SINDHI_REGIONS,
        default: Pick::Font(Lateef),
    },
    "lif" => fixed(SunExtA),                    // Limbu
    "syl" => fixed(Mph2bDamase),                // Syloti Nagri
    "dv" | "div" => fixed(FreeSerif),           // Divehi (Thaana)

    // ── South East Asian ────────────────────────────────────────────────────
    // ms/msa (Malay), ban (Balinese), bya (Batak), cjm (Cham) and
    // jv (Javanese) are unmapped.
    "km" | "khm" => fixed(KhmerOs),             // Khmer
    "lo" | "lao" => fixed(Dhyana),              // Lao
    "my" | "mya" => fixed(Tharlon),             // Burmese
    "th" | "tha" => fixed(ThSarabunPsk),        // Thai
    "vi" | "vie" => fixed(DejaVuSansCondensed), // Vietnamese
    "bug" => fixed(FreeSerif),                  // Buginese
    "su" => fixed(SundaneseUnicode),            // Sundanese
    "tdd" => fixed(Tharlon),                    // Tai Le
    "blt" => fixed(TaiHeritagePro),             // Tai Viet

    // ── Philippine ──────────────────────────────────────────────────────────
    "bku" => fixed(Quivira),                    // Buhid
    "hnn" => fixed(Quivira),                    // Hanunoo
    "tl" => fixed(Quivira),                     // Tagalog
    "tbw" => fixed(Quivira),                    // Tagbanwa

    // ── East Asian ──────────────────────────────────────────────────────────
    // Private-use codes, each pinned to one decorative Chinese face.
    "cn" | "sst" => fixed(ShuoShouTi),
    "cn2" | "pgbhzt" => fixed(PingGuoBoHeZiTi),
    "cn3" | "yxh" => fixed(YfXiHei),
    "cn4" | "fhjt" => fixed(FengHuaJieTi),
    "zh" | "zho" => Rule::RegionConditioned {   // Chinese
        branches: CHINESE_REGIONS,
        default: HAN_SIMPLIFIED,
    },
    "ko" | "kor" => cjk(Uhc, UnBatang),         // Korean
    "ja" | "jpn" => cjk(Sjis, SunExtA),         // Japanese
    "ii" | "iii" => cjk(Gb, SunExtA),           // Nuosu (Yi)
    "lis" => fixed(Quivira),                    // Lisu

    // ── American ────────────────────────────────────────────────────────────
    "chr" => fixed(AboriginalSans),             // Cherokee
    "oj" | "oji" => fixed(AboriginalSans),      // Ojibwe
    "cr" | "cre" => fixed(AboriginalSans),      // Cree
    "iu" | "iku" => fixed(AboriginalSans),      // Inuktitut
}
