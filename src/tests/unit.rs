#[cfg(test)]
mod unit_tests {

    use crate::{FontDecision, FontFamily, resolve};

    #[test]
    fn chinese_hong_kong() {
        assert_eq!(resolve("zh-HK", false).font_family_id(), "sun-exta");
        assert_eq!(resolve("zh-HK", true).font_family_id(), "big5");
        assert_eq!(resolve("zh-TW", true).font_family_id(), "big5");
    }

    #[test]
    fn chinese_mainland_and_default() {
        assert_eq!(resolve("zh-CN", true).font_family_id(), "gb");
        assert_eq!(resolve("zh-CN", false).font_family_id(), "sun-exta");
        assert_eq!(resolve("zh", false).font_family_id(), "sun-exta");
        assert_eq!(resolve("zh", true).font_family_id(), "gb");
    }

    #[test]
    fn unknown_region_uses_default_branch() {
        assert_eq!(resolve("zh-SG", true), resolve("zh", true));
        assert_eq!(resolve("zh-Hans-MO", false), resolve("zh", false));
        assert_eq!(resolve("sd-GB", false), resolve("sd", false));
    }

    #[test]
    fn sindhi() {
        assert_eq!(resolve("sd-IN", false).font_family_id(), "freeserif");
        assert_eq!(resolve("sd-PK", false).font_family_id(), "lateef");
        assert_eq!(resolve("sd", false).font_family_id(), "lateef");
        assert_eq!(resolve("snd-Deva-IN", true).font_family_id(), "freeserif");
    }

    #[test]
    fn korean_and_japanese() {
        assert_eq!(resolve("ko", true).font_family_id(), "uhc");
        assert_eq!(resolve("ko", false).font_family_id(), "unbatang");
        assert_eq!(resolve("ja", true).font_family_id(), "sjis");
        assert_eq!(resolve("ja", false).font_family_id(), "sun-exta");
        assert_eq!(resolve("jpn-JP", true).font_family_id(), "sjis");
    }

    #[test]
    fn yi_has_its_own_result() {
        assert_eq!(resolve("ii", true).font_family_id(), "gb");
        assert_eq!(resolve("iii", false).font_family_id(), "sun-exta");
        assert_eq!(resolve("lis", true).font_family_id(), "quivira");
    }

    #[test]
    fn script_fallback_for_und() {
        let d = resolve("und-Cyrl", false);
        assert_eq!(d.font_family_id(), "dejavusanscondensed");
        assert!(!d.core_font_suitable());

        assert_eq!(resolve("und-Latn", false).into_tuple(), (false, "dejavusanscondensed"));
        assert_eq!(resolve("und-Arab", false).font_family_id(), "xbriyaz");
        assert_eq!(resolve("und-Hans", true).font_family_id(), "gb");
        assert_eq!(resolve("und-Hans", false).font_family_id(), "sun-exta");
        assert_eq!(resolve("und-Yiii", true).font_family_id(), "sun-exta");
    }

    #[test]
    fn script_fallback_needs_und() {
        assert_eq!(resolve("xx-Cyrl", false), FontDecision::NONE);
        assert_eq!(resolve("zz-Arab", true), FontDecision::NONE);
        assert_eq!(resolve("und", false), FontDecision::NONE);
        assert_eq!(resolve("und-DE", false), FontDecision::NONE);
    }

    #[test]
    fn primary_wins_over_script() {
        assert_eq!(resolve("ru-Latn", false).font_family_id(), "dejavusanscondensed");
        assert_eq!(resolve("ar-Cyrl", false).font_family_id(), "xbriyaz");
        assert!(resolve("en-Arab", false).core_font_suitable());
    }

    #[test]
    fn no_match() {
        assert_eq!(resolve("zz", false).into_tuple(), (false, ""));
        assert_eq!(resolve("und-xxxx", false).into_tuple(), (false, ""));
        assert_eq!(resolve("", true).into_tuple(), (false, ""));
        assert_eq!(resolve("mn", false), FontDecision::NONE);
        assert!(!resolve("und-Brah", true).is_match());
    }

    #[test]
    fn three_part_tag() {
        let d = resolve("sr-Latn-RS", false);
        assert_eq!(d.font_family_id(), "dejavusanscondensed");
        assert!(!d.core_font_suitable());
    }

    #[test]
    fn core_font_languages() {
        for tag in ["en", "fr", "de", "es", "it", "pl", "nb", "cym", "por-BR"] {
            let d = resolve(tag, false);
            assert!(d.core_font_suitable(), "{tag}");
            assert_eq!(d.font(), Some(FontFamily::DejaVuSansCondensed), "{tag}");
        }
        for tag in ["ru", "el", "vi", "zh", "ja", "ko", "ar", "he", "hi"] {
            assert!(!resolve(tag, false).core_font_suitable(), "{tag}");
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(resolve("EN", false), resolve("en", false));
        assert_eq!(resolve("ZH-hk", true), resolve("zh-HK", true));
        assert_eq!(resolve("UND-cyrl", false), resolve("und-Cyrl", false));
        assert_eq!(resolve("SD-in", false).font_family_id(), "freeserif");
    }

    #[test]
    fn private_use_codes() {
        assert_eq!(resolve("cn2", false).font_family_id(), "ping-guo-bo-he-zi-ti");
        assert_eq!(resolve("cn3", true).font_family_id(), "yf-xi-hei");
        assert_eq!(resolve("cn4-TW", true).font_family_id(), "feng-hua-jie-ti");
        assert_eq!(resolve("sst", false).font_family_id(), "shuo-shou-ti");
        assert_eq!(resolve("pgbhzt", false).font_family_id(), "ping-guo-bo-he-zi-ti");
        assert_eq!(resolve("yxh", false).font_family_id(), "yf-xi-hei");
        assert_eq!(resolve("fhjt", false).font_family_id(), "feng-hua-jie-ti");
    }

    #[test]
    fn malformed_tags() {
        assert_eq!(resolve("-", false), FontDecision::NONE);
        assert_eq!(resolve("--", false), FontDecision::NONE);
        assert_eq!(resolve("zh--HK", true).font_family_id(), "big5");
        assert_eq!(resolve("de-DE-1996-x-foo", false).font_family_id(), "dejavusanscondensed");
        assert_eq!(resolve(" en", false), FontDecision::NONE);
    }

    #[test]
    fn tuple_conversion() {
        let t: (bool, &str) = resolve("th", false).into();
        assert_eq!(t, (false, "thsarabunpsk"));
    }
}
