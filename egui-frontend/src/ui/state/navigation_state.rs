//! # Navigation State Module
//!
//! Which sidebar entry, main tab and sub-tabs are active, and whether the
//! sidebar is collapsed. All of it is plain UI state owned by the app.

/// Tabs under the teacher header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Profile,
    Qualifications,
    Schedule,
    Payments,
}

impl MainTab {
    pub const ALL: [MainTab; 4] = [MainTab::Profile, MainTab::Qualifications, MainTab::Schedule, MainTab::Payments];

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Profile => "Profile",
            MainTab::Qualifications => "Quals",
            MainTab::Schedule => "Schedule",
            MainTab::Payments => "Payments",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MainTab::Profile => "👤",
            MainTab::Qualifications => "📚",
            MainTab::Schedule => "📅",
            MainTab::Payments => "💳",
        }
    }
}

/// Sub-tabs of the schedule management card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTab {
    Availability,
    Schedule,
    Students,
    History,
}

impl ScheduleTab {
    pub const ALL: [ScheduleTab; 4] = [
        ScheduleTab::Availability,
        ScheduleTab::Schedule,
        ScheduleTab::Students,
        ScheduleTab::History,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleTab::Availability => "Availability",
            ScheduleTab::Schedule => "Schedule",
            ScheduleTab::Students => "Students",
            ScheduleTab::History => "History",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ScheduleTab::Availability | ScheduleTab::Schedule => "📅",
            ScheduleTab::Students => "👥",
            ScheduleTab::History => "📄",
        }
    }

    /// Heading and hint of the placeholder shown by tabs without content yet
    pub fn placeholder(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ScheduleTab::Availability => Some((
                "Availability Management",
                "Set your available hours and time preferences",
            )),
            ScheduleTab::Schedule => None,
            ScheduleTab::Students => Some(("Student Management", "View and manage your assigned students")),
            ScheduleTab::History => Some(("Schedule History", "View past schedules and changes")),
        }
    }
}

/// Sub-tabs of the payment management card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentTab {
    NewPayment,
    PaymentHistory,
}

impl PaymentTab {
    pub const ALL: [PaymentTab; 2] = [PaymentTab::NewPayment, PaymentTab::PaymentHistory];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentTab::NewPayment => "New Payment",
            PaymentTab::PaymentHistory => "Payment History",
        }
    }
}

/// Entries of the navigation sidebar. Only "Teachers" has a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Dashboard,
    Teachers,
    Students,
    Schedule,
    Payments,
    Courses,
    Reports,
    Notifications,
    Settings,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 9] = [
        SidebarItem::Dashboard,
        SidebarItem::Teachers,
        SidebarItem::Students,
        SidebarItem::Schedule,
        SidebarItem::Payments,
        SidebarItem::Courses,
        SidebarItem::Reports,
        SidebarItem::Notifications,
        SidebarItem::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SidebarItem::Dashboard => "Dashboard",
            SidebarItem::Teachers => "Teachers",
            SidebarItem::Students => "Students",
            SidebarItem::Schedule => "Schedule",
            SidebarItem::Payments => "Payments",
            SidebarItem::Courses => "Courses",
            SidebarItem::Reports => "Reports",
            SidebarItem::Notifications => "Notifications",
            SidebarItem::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SidebarItem::Dashboard => "🏠",
            SidebarItem::Teachers => "👥",
            SidebarItem::Students => "👤",
            SidebarItem::Schedule => "📅",
            SidebarItem::Payments => "💳",
            SidebarItem::Courses => "📖",
            SidebarItem::Reports => "📄",
            SidebarItem::Notifications => "🔔",
            SidebarItem::Settings => "⚙",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    pub sidebar_collapsed: bool,
    pub active_sidebar_item: SidebarItem,
    pub main_tab: MainTab,
    pub schedule_tab: ScheduleTab,
    pub payment_tab: PaymentTab,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: false,
            active_sidebar_item: SidebarItem::Teachers,
            main_tab: MainTab::Profile,
            schedule_tab: ScheduleTab::Schedule,
            payment_tab: PaymentTab::NewPayment,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        log::info!("📐 Sidebar {}", if self.sidebar_collapsed { "collapsed" } else { "expanded" });
    }

    pub fn select_main_tab(&mut self, tab: MainTab) {
        if self.main_tab != tab {
            log::info!("🗂️ Switching main tab: {:?} -> {:?}", self.main_tab, tab);
            self.main_tab = tab;
        }
    }

    pub fn select_schedule_tab(&mut self, tab: ScheduleTab) {
        if self.schedule_tab != tab {
            log::info!("🗂️ Switching schedule tab: {:?} -> {:?}", self.schedule_tab, tab);
            self.schedule_tab = tab;
        }
    }

    pub fn select_payment_tab(&mut self, tab: PaymentTab) {
        if self.payment_tab != tab {
            log::info!("🗂️ Switching payment tab: {:?} -> {:?}", self.payment_tab, tab);
            self.payment_tab = tab;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_navigation() {
        let state = NavigationState::new();
        assert!(!state.sidebar_collapsed);
        assert_eq!(state.active_sidebar_item, SidebarItem::Teachers);
        assert_eq!(state.main_tab, MainTab::Profile);
        assert_eq!(state.schedule_tab, ScheduleTab::Schedule);
        assert_eq!(state.payment_tab, PaymentTab::NewPayment);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = NavigationState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_collapsed);
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed);
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = MainTab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, vec!["Profile", "Quals", "Schedule", "Payments"]);
        assert_eq!(SidebarItem::ALL.len(), 9);
    }

    #[test]
    fn test_only_grid_tab_has_content() {
        for tab in ScheduleTab::ALL {
            assert_eq!(tab.placeholder().is_none(), tab == ScheduleTab::Schedule);
        }
    }
}
