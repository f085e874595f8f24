//! Password gate for the dashboard content sections.
//!
//! Sections are locked until the member types an accepted password for
//! that section. The accepted passwords are fixed product knowledge
//! shared with students out of band, keyed by the section's display
//! name, and matching is exact. Unlocking is per section and lives only
//! in client state for the current page load.

use api::{ItemInfo, SectionInfo};

/// The one section that accepts an extra password.
pub const META_SECTION_NAME: &str = "Meta 學員專區";

/// Passwords accepted for a section, by display name.
pub fn valid_passwords(section_name: &str) -> &'static [&'static str] {
    if section_name == META_SECTION_NAME {
        &["meta", "symptom"]
    } else {
        &["symptom"]
    }
}

/// Dashboard state for one content section.
#[derive(Clone, PartialEq)]
pub struct SectionData {
    pub section: SectionInfo,
    pub items: Vec<ItemInfo>,
    /// Item fetches land after the section list; until then an empty
    /// `items` means "not loaded", not "no content".
    pub items_loaded: bool,
    pub unlocked: bool,
}

impl SectionData {
    pub fn new(section: SectionInfo) -> Self {
        Self {
            section,
            items: Vec::new(),
            items_loaded: false,
            unlocked: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    WrongPassword,
    UnknownSection,
}

/// Applies a password attempt to one section. A correct password opens
/// only the section it was entered for.
pub fn submit_password(
    sections: &mut [SectionData],
    section_id: &str,
    attempt: &str,
) -> UnlockOutcome {
    let Some(data) = sections
        .iter_mut()
        .find(|data| data.section.id == section_id)
    else {
        return UnlockOutcome::UnknownSection;
    };

    if valid_passwords(&data.section.name).contains(&attempt) {
        data.unlocked = true;
        UnlockOutcome::Unlocked
    } else {
        UnlockOutcome::WrongPassword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, name: &str) -> SectionData {
        SectionData::new(SectionInfo {
            id: id.to_string(),
            name: name.to_string(),
            is_visible: true,
        })
    }

    #[test]
    fn meta_section_accepts_both_passwords() {
        for attempt in ["meta", "symptom"] {
            let mut sections = vec![section("a", META_SECTION_NAME)];
            assert_eq!(
                submit_password(&mut sections, "a", attempt),
                UnlockOutcome::Unlocked
            );
            assert!(sections[0].unlocked);
        }
    }

    #[test]
    fn other_sections_accept_only_symptom() {
        let mut sections = vec![section("a", "AI 工具推薦")];
        assert_eq!(
            submit_password(&mut sections, "a", "meta"),
            UnlockOutcome::WrongPassword
        );
        assert!(!sections[0].unlocked);
        assert_eq!(
            submit_password(&mut sections, "a", "symptom"),
            UnlockOutcome::Unlocked
        );
        assert!(sections[0].unlocked);
    }

    #[test]
    fn passwords_match_exactly() {
        let mut sections = vec![section("a", META_SECTION_NAME)];
        for attempt in ["Meta", "SYMPTOM", " symptom", "symptom ", ""] {
            assert_eq!(
                submit_password(&mut sections, "a", attempt),
                UnlockOutcome::WrongPassword
            );
        }
        assert!(!sections[0].unlocked);
    }

    #[test]
    fn unlock_applies_to_one_section_only() {
        let mut sections = vec![section("a", "課程專區"), section("b", "工具專區")];
        assert_eq!(
            submit_password(&mut sections, "a", "symptom"),
            UnlockOutcome::Unlocked
        );
        assert!(sections[0].unlocked);
        assert!(!sections[1].unlocked);
    }

    #[test]
    fn unknown_section_id_is_rejected() {
        let mut sections = vec![section("a", "課程專區")];
        assert_eq!(
            submit_password(&mut sections, "missing", "symptom"),
            UnlockOutcome::UnknownSection
        );
        assert!(!sections[0].unlocked);
    }
}
