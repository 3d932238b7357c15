use crate::{
    font::FontFamily,
    table::{language_rule, script_rule},
    tag::LanguageTag,
};

/// Rendering guidance for one language tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontDecision {
    core_suitable: bool,
    font: Option<FontFamily>,
}

impl FontDecision {
    /// No table entry matched; the caller picks its own default.
    pub const NONE: FontDecision = FontDecision {
        core_suitable: false,
        font: None,
    };

    #[inline(always)]
    pub(crate) const fn unicode(font: FontFamily) -> Self {
        Self {
            core_suitable: false,
            font: Some(font),
        }
    }

    #[inline(always)]
    pub(crate) const fn core(font: FontFamily) -> Self {
        Self {
            core_suitable: true,
            font: Some(font),
        }
    }

    /// Whether a limited-glyph core font can render the language.
    #[inline(always)]
    pub const fn core_font_suitable(&self) -> bool {
        self.core_suitable
    }

    #[inline(always)]
    pub const fn font(&self) -> Option<FontFamily> {
        self.font
    }

    /// Catalog key of the chosen family, or `""` when nothing matched.
    #[inline(always)]
    pub const fn font_family_id(&self) -> &'static str {
        match &self.font {
            Some(font) => font.id(),
            None => "",
        }
    }

    #[inline(always)]
    pub const fn is_match(&self) -> bool {
        self.font.is_some()
    }

    /// `(core_font_suitable, font_family_id)`.
    #[inline(always)]
    pub const fn into_tuple(self) -> (bool, &'static str) {
        (self.core_suitable, self.font_family_id())
    }
}

impl From<FontDecision> for (bool, &'static str) {
    fn from(d: FontDecision) -> Self {
        d.into_tuple()
    }
}

/// Classify `tag`. Total: unknown or malformed tags give [`FontDecision::NONE`].
///
/// `prefer_proprietary_cjk` picks the licensed CJK families (`big5`, `gb`,
/// `sjis`, `uhc`) over the open-source ones wherever a table entry offers both.
pub fn resolve(tag: &str, prefer_proprietary_cjk: bool) -> FontDecision {
    resolve_tag(&LanguageTag::parse(tag), prefer_proprietary_cjk)
}

/// [`resolve`] for an already parsed tag.
///
/// The primary subtag is looked up first. The script table is only consulted
/// for `und`, so `xx-Cyrl` does not match while `und-Cyrl` does.
pub fn resolve_tag(tag: &LanguageTag, prefer_proprietary_cjk: bool) -> FontDecision {
    if let Some(rule) = language_rule(tag.primary()) {
        return rule.apply(tag.region(), prefer_proprietary_cjk);
    }

    if tag.is_undetermined()
        && let Some(rule) = tag.script().and_then(script_rule)
    {
        log::trace!("language tag `{tag}` resolved by script");
        return rule.apply(tag.region(), prefer_proprietary_cjk);
    }

    log::trace!("no font rule for language tag `{tag}`");
    FontDecision::NONE
}

/// A resolver with fixed caller preferences.
///
/// ```
/// use langfont::FontResolver;
///
/// let resolver = FontResolver::builder().prefer_proprietary_cjk(true).build();
/// assert_eq!(resolver.resolve("zh-TW").font_family_id(), "big5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontResolver {
    prefer_proprietary_cjk: bool,
    core_fonts: bool,
}

impl Default for FontResolver {
    fn default() -> Self {
        FontResolverBuilder::default().build()
    }
}

impl FontResolver {
    pub fn builder() -> FontResolverBuilder {
        FontResolverBuilder::default()
    }

    pub fn prefers_proprietary_cjk(&self) -> bool {
        self.prefer_proprietary_cjk
    }

    pub fn core_fonts_enabled(&self) -> bool {
        self.core_fonts
    }

    pub fn resolve(&self, tag: &str) -> FontDecision {
        self.resolve_tag(&LanguageTag::parse(tag))
    }

    pub fn resolve_tag(&self, tag: &LanguageTag) -> FontDecision {
        let decision = resolve_tag(tag, self.prefer_proprietary_cjk);
        if self.core_fonts {
            decision
        } else {
            FontDecision {
                core_suitable: false,
                ..decision
            }
        }
    }
}

pub struct FontResolverBuilder {
    prefer_proprietary_cjk: bool,
    core_fonts: bool,
}

impl Default for FontResolverBuilder {
    fn default() -> Self {
        Self {
            prefer_proprietary_cjk: false,
            core_fonts: true,
        }
    }
}

impl FontResolverBuilder {
    /// Use licensed CJK families where the tables offer them.
    pub fn prefer_proprietary_cjk(mut self, prefer: bool) -> Self {
        self.prefer_proprietary_cjk = prefer;
        self
    }

    /// When `false`, every decision reports core fonts as unsuitable.
    pub fn core_fonts(mut self, enabled: bool) -> Self {
        self.core_fonts = enabled;
        self
    }

    pub fn build(self) -> FontResolver {
        FontResolver {
            prefer_proprietary_cjk: self.prefer_proprietary_cjk,
            core_fonts: self.core_fonts,
        }
    }
}
