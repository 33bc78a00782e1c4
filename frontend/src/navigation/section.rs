use std::fmt;
use std::str::FromStr;

/// The page sections, in top-to-bottom visual order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Services,
    Process,
    Technologies,
    Contact,
}

impl SectionId {
    /// Visual order, which is also the scan order for active-section detection.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Services,
        SectionId::Process,
        SectionId::Technologies,
        SectionId::Contact,
    ];

    /// Element id of the section on the page.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Process => "process",
            SectionId::Technologies => "technologies",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Process => "Process",
            SectionId::Technologies => "Technologies",
            SectionId::Contact => "Contact",
        }
    }

    // hero is reached by scrolling to the top, it has no nav button
    pub fn in_nav(self) -> bool {
        self != SectionId::Hero
    }

    pub fn nav_items() -> impl Iterator<Item = SectionId> {
        Self::ALL.into_iter().filter(|section| section.in_nav())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section: {}", self.0)
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_lists_every_section_but_hero_in_order() {
        let items: Vec<&str> = SectionId::nav_items().map(SectionId::as_str).collect();
        assert_eq!(items, vec!["about", "services", "process", "technologies", "contact"]);
    }

    #[test]
    fn parses_element_ids() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "pricing".parse::<SectionId>(),
            Err(UnknownSection("pricing".to_string()))
        );
        assert!("Hero".parse::<SectionId>().is_err());
    }

    #[test]
    fn defaults_to_hero() {
        assert_eq!(SectionId::default(), SectionId::Hero);
    }
}
