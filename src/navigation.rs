//! Section navigation
//!
//! Tracks which top-level section is visible and which nav link is
//! highlighted. Links follow the `nav-{section}` naming convention and map to
//! `{section}-section`.

use std::fmt;

use tracing::{debug, warn};

/// Top-level UI section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Films,
    Series,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Films, Section::Series];

    /// Short name used in both ids
    pub fn name(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Films => "films",
            Section::Series => "series",
        }
    }

    /// Section id, e.g. `home-section`
    pub fn section_id(self) -> String {
        format!("{}-section", self.name())
    }

    /// Nav link id, e.g. `nav-home`
    pub fn link_id(self) -> String {
        format!("nav-{}", self.name())
    }

    pub fn from_section_id(id: &str) -> Option<Self> {
        let name = id.strip_suffix("-section")?;
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Resolve a nav link id to the section it targets
    pub fn from_link_id(id: &str) -> Option<Self> {
        let name = id.strip_prefix("nav-")?;
        Self::from_section_id(&format!("{}-section", name))
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Films => "FILMS",
            Section::Series => "SERIES",
        }
    }

    /// Next section in tab order (wraps)
    pub fn next(self) -> Self {
        match self {
            Section::Home => Section::Films,
            Section::Films => Section::Series,
            Section::Series => Section::Home,
        }
    }

    /// Previous section in tab order (wraps)
    pub fn prev(self) -> Self {
        match self {
            Section::Home => Section::Series,
            Section::Films => Section::Home,
            Section::Series => Section::Films,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section_id())
    }
}

/// Active-section and active-link state
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    active_section: Option<Section>,
    active_link: Option<Section>,
    bound: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark exactly one section active by id.
    ///
    /// Unknown ids deactivate every section.
    pub fn show_section(&mut self, id: &str) {
        self.active_section = Section::from_section_id(id);
        match self.active_section {
            Some(section) => debug!("Showing {}", section),
            None => warn!("No section with id {:?}", id),
        }
    }

    /// Typed shorthand for [`Navigation::show_section`]
    pub fn show(&mut self, section: Section) {
        self.show_section(&section.section_id());
    }

    /// Bind nav links; activation is ignored until this is called
    pub fn setup_navigation(&mut self) {
        self.bound = true;
    }

    /// Activate a nav link by id: highlight it among its siblings and show
    /// its target section. Returns the section shown.
    pub fn activate_link(&mut self, link_id: &str) -> Option<Section> {
        if !self.bound {
            return None;
        }
        let section = Section::from_link_id(link_id)?;
        self.active_link = Some(section);
        self.show(section);
        Some(section)
    }

    /// Typed shorthand for [`Navigation::activate_link`]
    pub fn activate(&mut self, section: Section) -> Option<Section> {
        self.activate_link(&section.link_id())
    }

    pub fn active_section(&self) -> Option<Section> {
        self.active_section
    }

    pub fn active_link(&self) -> Option<Section> {
        self.active_link
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == Some(section)
    }
}
