use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a string is not a known font family id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontFamilyError {
    #[error("font family id is empty")]
    Empty,
    #[error("unknown font family id `{0}`")]
    Unknown(String),
}

macro_rules! define_fonts {
    ($( $variant:ident => $id:literal ),* $(,)?) => {
        /// A Unicode-capable font family known to the external font catalog.
        ///
        /// The id returned by [`FontFamily::id`] is the catalog key and is stable.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FontFamily {
            $( $variant, )*
        }

        impl FontFamily {
            /// Every family that the classification tables can return.
            pub const ALL: &'static [FontFamily] = &[ $( FontFamily::$variant, )* ];

            #[inline(always)]
            pub const fn id(&self) -> &'static str {
                match self {
                    $( FontFamily::$variant => $id, )*
                }
            }

            fn from_lower(id: &str) -> Option<Self> {
                match id {
                    $( $id => Some(FontFamily::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_fonts! {
    DejaVuSansCondensed => "dejavusanscondensed",
    DejaVuSans => "dejavusans",
    FreeSerif => "freeserif",
    FreeSans => "freesans",
    FreeMono => "freemono",
    Quivira => "quivira",
    AbyssinicaSil => "abyssinicasil",
    XbRiyaz => "xbriyaz",
    TaameyDavidClm => "taameydavidclm",
    EstrangeloEdessa => "estrangeloedessa",
    Aegean => "aegean",
    Aegyptus => "aegyptus",
    Akkadian => "akkadian",
    Jomolhari => "jomolhari",
    LohitKannada => "lohitkannada",
    KaputaUnicode => "kaputaunicode",
    Pothana2000 => "pothana2000",
    Lateef => "lateef",
    SunExtA => "sun-exta",
    Mph2bDamase => "mph2bdamase",
    KhmerOs => "khmeros",
    Dhyana => "dhyana",
    Tharlon => "tharlon",
    ThSarabunPsk => "thsarabunpsk",
    SundaneseUnicode => "sundaneseunicode",
    TaiHeritagePro => "taiheritagepro",
    EeyekUnicode => "eeyekunicode",
    LannaAlif => "lannaalif",
    DaiBannaSilBook => "daibannasilbook",
    AboriginalSans => "aboriginalsans",
    ShuoShouTi => "shuo-shou-ti",
    PingGuoBoHeZiTi => "ping-guo-bo-he-zi-ti",
    YfXiHei => "yf-xi-hei",
    FengHuaJieTi => "feng-hua-jie-ti",
    Big5 => "big5",
    Gb => "gb",
    Uhc => "uhc",
    UnBatang => "unbatang",
    Sjis => "sjis",
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FontFamily {
    type Err = FontFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FontFamilyError::Empty);
        }
        let lower = s.to_ascii_lowercase();
        Self::from_lower(&lower).ok_or(FontFamilyError::Unknown(lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_parse_back() {
        let mut seen = std::collections::BTreeSet::new();
        for &family in FontFamily::ALL {
            assert!(seen.insert(family.id()), "duplicate id {}", family.id());
            assert_eq!(family.id().parse::<FontFamily>(), Ok(family));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("SUN-ExtA".parse::<FontFamily>(), Ok(FontFamily::SunExtA));
        assert_eq!(" Big5 ".parse::<FontFamily>(), Ok(FontFamily::Big5));
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert_eq!("".parse::<FontFamily>(), Err(FontFamilyError::Empty));
        assert_eq!(
            "Helvetica".parse::<FontFamily>(),
            Err(FontFamilyError::Unknown("helvetica".into()))
        );
    }

    #[test]
    fn display_prints_catalog_key() {
        assert_eq!(FontFamily::PingGuoBoHeZiTi.to_string(), "ping-guo-bo-he-zi-ti");
    }
}
