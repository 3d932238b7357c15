use crate::{font::FontFamily, resolver::FontDecision};

/// A font choice that may depend on the proprietary-CJK preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Font(FontFamily),
    Cjk {
        proprietary: FontFamily,
        open: FontFamily,
    },
}

impl Pick {
    #[inline(always)]
    pub const fn font(&self, prefer_proprietary_cjk: bool) -> FontFamily {
        match *self {
            Pick::Font(font) => font,
            Pick::Cjk { proprietary, .. } if prefer_proprietary_cjk => proprietary,
            Pick::Cjk { open, .. } => open,
        }
    }
}

/// One region-specific branch of a [`Rule::RegionConditioned`] entry.
///
/// `regions` hold lowercase region subtags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBranch {
    pub regions: &'static [&'static str],
    pub pick: Pick,
}

/// How a table entry turns a tag into a [`FontDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A single font, core fonts not suitable.
    Fixed(FontFamily),
    /// A single font, and core fonts are good enough.
    CoreFixed(FontFamily),
    /// Chooses between a licensed and an open-source CJK family.
    CjkFlagConditioned {
        proprietary: FontFamily,
        open: FontFamily,
    },
    /// First branch listing the region wins; unknown or absent regions use `default`.
    RegionConditioned {
        branches: &'static [RegionBranch],
        default: Pick,
    },
}

impl Rule {
    pub fn apply(&self, region: Option<&str>, prefer_proprietary_cjk: bool) -> FontDecision {
        match *self {
            Rule::Fixed(font) => FontDecision::unicode(font),
            Rule::CoreFixed(font) => FontDecision::core(font),
            Rule::CjkFlagConditioned { proprietary, open } => FontDecision::unicode(
                Pick::Cjk { proprietary, open }.font(prefer_proprietary_cjk),
            ),
            Rule::RegionConditioned { branches, default } => {
                let pick = region
                    .and_then(|r| branches.iter().find(|b| b.regions.iter().any(|&x| x == r)))
                    .map_or(default, |b| b.pick);
                FontDecision::unicode(pick.font(prefer_proprietary_cjk))
            }
        }
    }

    /// `true` when the result can differ with the proprietary-CJK flag.
    pub fn depends_on_cjk_preference(&self) -> bool {
        match self {
            Rule::Fixed(_) | Rule::CoreFixed(_) => false,
            Rule::CjkFlagConditioned { .. } => true,
            Rule::RegionConditioned { branches, default } => {
                matches!(default, Pick::Cjk { .. })
                    || branches.iter().any(|b| matches!(b.pick, Pick::Cjk { .. }))
            }
        }
    }

    /// Every family this rule can produce.
    pub fn fonts(&self) -> impl Iterator<Item = FontFamily> + '_ {
        let picks: Vec<Pick> = match *self {
            Rule::Fixed(font) | Rule::CoreFixed(font) => vec![Pick::Font(font)],
            Rule::CjkFlagConditioned { proprietary, open } => vec![Pick::Cjk { proprietary, open }],
            Rule::RegionConditioned { branches, default } => branches
                .iter()
                .map(|b| b.pick)
                .chain(std::iter::once(default))
                .collect(),
        };
        picks.into_iter().flat_map(|p| [p.font(true), p.font(false)])
    }
}
