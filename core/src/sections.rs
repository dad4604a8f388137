use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Upload,
    Results,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Upload, Section::Results];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Upload => "upload",
            Section::Results => "results",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.id() == id.trim())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Follow-up work the host performs after a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowOutcome {
    pub scroll_to_top: bool,
}

/// Single-page section switcher with mutually exclusive visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionNavigator {
    active: Section,
    menu_open: bool,
    print_restore: Option<Section>,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new(Section::Home)
    }
}

impl SectionNavigator {
    pub fn new(initial: Section) -> Self {
        Self {
            active: initial,
            menu_open: false,
            print_restore: None,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn is_hidden(&self, section: Section) -> bool {
        !self.is_active(section)
    }

    /// Whether a navigation trigger targeting `target` is highlighted.
    pub fn trigger_active(&self, target: Section) -> bool {
        self.is_active(target)
    }

    pub fn show(&mut self, section: Section) -> ShowOutcome {
        self.active = section;
        self.menu_open = false;
        ShowOutcome { scroll_to_top: true }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn printing(&self) -> bool {
        self.print_restore.is_some()
    }

    /// Shows only the results for printing and remembers where to return.
    pub fn begin_print(&mut self) {
        if self.print_restore.is_none() {
            self.print_restore = Some(self.active);
        }
        self.active = Section::Results;
    }

    pub fn end_print(&mut self) {
        if let Some(previous) = self.print_restore.take() {
            self.active = previous;
        }
    }
}
