use std::fmt;

/// Menu node a sender is positioned at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    MainMenu,
    Pricing,
    LeadManagement,
    Reports,
    MeetingSchedule,
    EscalationSupport,
    RevenueManagement,
    SalesManagement,
    AccountManagement,
    /// Waiting for the free-text description of an escalation.
    Elaboration,
    /// Waiting for a free-text general inquiry.
    Others,
}

impl MenuState {
    pub const ALL: [MenuState; 11] = [
        MenuState::MainMenu,
        MenuState::Pricing,
        MenuState::LeadManagement,
        MenuState::Reports,
        MenuState::MeetingSchedule,
        MenuState::EscalationSupport,
        MenuState::RevenueManagement,
        MenuState::SalesManagement,
        MenuState::AccountManagement,
        MenuState::Elaboration,
        MenuState::Others,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::MainMenu => "main_menu",
            MenuState::Pricing => "pricing",
            MenuState::LeadManagement => "lead_management",
            MenuState::Reports => "reports",
            MenuState::MeetingSchedule => "meeting_schedule",
            MenuState::EscalationSupport => "escalation_support",
            MenuState::RevenueManagement => "revenue_management",
            MenuState::SalesManagement => "sales_management",
            MenuState::AccountManagement => "account_management",
            MenuState::Elaboration => "elaboration",
            MenuState::Others => "others",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
