//! Static English/Arabic text for the translatable page regions.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Unknown codes yield `None` and are ignored by the controller.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::En => TextDirection::Ltr,
        }
    }

    pub fn pack(self) -> &'static LanguagePack {
        match self {
            Self::En => &ENGLISH,
            Self::Ar => &ARABIC,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Named page regions whose text follows the selected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HeroTitle,
    HeroSubtitle,
    CtaButton,
    SectionTitle,
    FormTitle,
    FormSubtitle,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::HeroTitle,
        Region::HeroSubtitle,
        Region::CtaButton,
        Region::SectionTitle,
        Region::FormTitle,
        Region::FormSubtitle,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Region::HeroTitle => "hero-title",
            Region::HeroSubtitle => "hero-subtitle",
            Region::CtaButton => "cta-button",
            Region::SectionTitle => "section-title",
            Region::FormTitle => "form-title",
            Region::FormSubtitle => "form-subtitle",
        }
    }
}

/// One string per [`Region`]; a struct so every pack has the same keys.
///
/// `\n` marks a line break. An empty entry means "no translation".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePack {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub cta_button: &'static str,
    pub section_title: &'static str,
    pub form_title: &'static str,
    pub form_subtitle: &'static str,
}

impl LanguagePack {
    pub fn translation(&self, region: Region) -> Option<&'static str> {
        let text = match region {
            Region::HeroTitle => self.hero_title,
            Region::HeroSubtitle => self.hero_subtitle,
            Region::CtaButton => self.cta_button,
            Region::SectionTitle => self.section_title,
            Region::FormTitle => self.form_title,
            Region::FormSubtitle => self.form_subtitle,
        };
        (!text.is_empty()).then_some(text)
    }
}

pub static ENGLISH: LanguagePack = LanguagePack {
    hero_title: "Freelance Talent",
    hero_subtitle: "Connect with skilled professionals\nacross Iraq for any project.",
    cta_button: "Get Started",
    section_title: "Tell Us What You Need",
    form_title: "Describe Your Project",
    form_subtitle: "Let our AI find the right professional\nfor you.",
};

pub static ARABIC: LanguagePack = LanguagePack {
    hero_title: "المواهب المستقلة",
    hero_subtitle: "تواصل مع محترفين مهرة\nفي جميع أنحاء العراق لأي مشروع",
    cta_button: "ابدأ الآن",
    section_title: "أخبرنا بما تحتاجه",
    form_title: "وصف مشروعك",
    form_subtitle: "دع الذكاء الاصطناعي يجد المحترف المناسب\nلك",
};
