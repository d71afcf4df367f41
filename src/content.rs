//! Static page content. Text fields hold translation keys, not prose.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceEntry {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectEntry {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub link: Option<&'static str>,
}

impl ProjectEntry {
    /// Cards without a link are shown as "coming soon" placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.link.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Mail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

impl SocialLink {
    /// Profile links open in a new tab; mailto stays in place.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const SERVICES: [ServiceEntry; 3] = [
    ServiceEntry {
        title_key: "services.ai_consulting",
        description_key: "services.ai_consulting_desc",
    },
    ServiceEntry {
        title_key: "services.custom_ml",
        description_key: "services.custom_ml_desc",
    },
    ServiceEntry {
        title_key: "services.automation",
        description_key: "services.automation_desc",
    },
];

const STOCK_ANALYSIS: ProjectEntry = ProjectEntry {
    title_key: "projects.stock_analysis.title",
    description_key: "projects.stock_analysis.desc",
    link: Some("https://github.com/ArmandoSaboia/realtime-stock-analysis"),
};

const PLACEHOLDER: ProjectEntry = ProjectEntry {
    title_key: "projects.placeholder.title",
    description_key: "projects.placeholder.desc",
    link: None,
};

pub static PROJECTS: [ProjectEntry; 10] = [
    STOCK_ANALYSIS,
    PLACEHOLDER,
    PLACEHOLDER,
    PLACEHOLDER,
    PLACEHOLDER,
    PLACEHOLDER,
    PLACEHOLDER,
    PLACEHOLDER,
    PLACEHOLDER,
    PLACEHOLDER,
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: config::GITHUB_URL,
        icon: SocialIcon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: config::LINKEDIN_URL,
        icon: SocialIcon::Linkedin,
    },
    SocialLink {
        label: "Email",
        href: config::MAILTO,
        icon: SocialIcon::Mail,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, LocaleStore};

    #[test]
    fn one_real_project_then_placeholders() {
        assert!(!PROJECTS[0].is_placeholder());
        assert_eq!(PROJECTS.iter().filter(|p| p.is_placeholder()).count(), 9);
    }

    #[test]
    fn every_content_key_is_translated() {
        let store = LocaleStore::bundled().unwrap();
        let keys = SERVICES
            .iter()
            .flat_map(|s| [s.title_key, s.description_key])
            .chain(PROJECTS.iter().flat_map(|p| [p.title_key, p.description_key]));

        for key in keys {
            for locale in Locale::all() {
                assert!(store.catalog(*locale).contains(key), "{} missing '{}'", locale, key);
            }
        }
    }

    #[test]
    fn mail_link_matches_contact_address() {
        let mail = SOCIAL_LINKS.iter().find(|l| l.icon == SocialIcon::Mail).unwrap();
        assert_eq!(mail.href, format!("mailto:{}", config::CONTACT_EMAIL));
        assert!(!mail.opens_new_tab());
        assert!(SOCIAL_LINKS.iter().filter(|l| l.opens_new_tab()).count() == 2);
    }
}
