//! Static menu tree: one node per `MenuState`.

use super::state::MenuState;
use super::text::*;

/// One selectable entry of a numbered menu.
#[derive(Debug)]
pub struct MenuOption {
    /// Lower-cased inputs that select this entry.
    pub tokens: &'static [&'static str],
    pub next: MenuState,
    /// Reply on selection; None shows the `next` node's menu text.
    pub reply: Option<&'static str>,
}

impl MenuOption {
    pub fn matches(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }
}

#[derive(Debug)]
pub enum NodeKind {
    /// Numbered menu; unknown input replies `invalid` followed by the menu again and stays put.
    Menu {
        options: &'static [MenuOption],
        invalid: &'static str,
    },
    /// Any non-blank input becomes a ticket; blank input replies `blank` plus the prompt and stays put.
    FreeText {
        escalation: bool,
        blank: &'static str,
    },
}

#[derive(Debug)]
pub struct MenuNode {
    pub state: MenuState,
    pub prompt: &'static str,
    pub kind: NodeKind,
}

const fn to(tokens: &'static [&'static str], next: MenuState) -> MenuOption {
    MenuOption {
        tokens,
        next,
        reply: None,
    }
}

const fn ask(
    tokens: &'static [&'static str],
    next: MenuState,
    reply: &'static str,
) -> MenuOption {
    MenuOption {
        tokens,
        next,
        reply: Some(reply),
    }
}

static MAIN: MenuNode = MenuNode {
    state: MenuState::MainMenu,
    prompt: MAIN_MENU,
    kind: NodeKind::Menu {
        options: &[
            to(&["1"], MenuState::Pricing),
            to(&["2"], MenuState::LeadManagement),
            to(&["3"], MenuState::Reports),
            to(&["4"], MenuState::MeetingSchedule),
            to(&["5"], MenuState::EscalationSupport),
            to(&["6", "others"], MenuState::Others),
        ],
        invalid: INVALID_CHOICE,
    },
};

static PRICING: MenuNode = MenuNode {
    state: MenuState::Pricing,
    prompt: PRICING_MENU,
    kind: NodeKind::Menu {
        options: &[
            ask(&["1"], MenuState::Others, "✍️ Please share the dates and the new rates you would like applied, and our team will update them."),
            ask(&["2"], MenuState::Others, "✍️ Please confirm the room types you need pricing for over the next 30 days, and our team will share it."),
            ask(&["3"], MenuState::Others, "✍️ Please share the event dates you need pricing for, and our team will share it."),
            ask(&["4"], MenuState::Others, "✍️ Please tell us what you would like to know about the discounts running on your property, and our team will follow up."),
        ],
        invalid: INVALID_OPTION,
    },
};

static LEAD_MANAGEMENT: MenuNode = MenuNode {
    state: MenuState::LeadManagement,
    prompt: LEAD_MANAGEMENT_MENU,
    kind: NodeKind::Menu {
        options: &[
            ask(&["1"], MenuState::Others, "✍️ Please share the lead details (company, dates, rooms, contact), and our team will log it."),
            ask(&["2"], MenuState::Others, "✍️ Please name the lead and the details that changed, and our team will update it."),
            ask(&["3"], MenuState::Others, "✍️ Please name the lead you want an update on, and our team will get back to you."),
        ],
        invalid: INVALID_OPTION,
    },
};

static REPORTS: MenuNode = MenuNode {
    state: MenuState::Reports,
    prompt: REPORTS_MENU,
    kind: NodeKind::Menu {
        options: &[
            ask(&["1"], MenuState::Others, "✍️ Please share the period you need the STR Report for, and our team will send it."),
            ask(&["2"], MenuState::Others, "✍️ Please share the period you need the OTA Recon Report for, and our team will send it."),
            ask(&["3"], MenuState::Others, "✍️ Please share the date you need the Daily Snapshot Report for, and our team will send it."),
            ask(&["4"], MenuState::Others, "✍️ Please share the month you need the Client Month End Report for, and our team will send it."),
            ask(&["5"], MenuState::Others, "✍️ Please share the period you need the Reputation Report for, and our team will send it."),
        ],
        invalid: INVALID_OPTION,
    },
};

static MEETING_SCHEDULE: MenuNode = MenuNode {
    state: MenuState::MeetingSchedule,
    prompt: MEETING_SCHEDULE_MENU,
    kind: NodeKind::Menu {
        options: &[
            ask(&["1"], MenuState::Others, "✍️ Please reply with anything you want covered, and our team will send your upcoming meetings and joining info."),
            ask(&["2"], MenuState::Others, "✍️ Please share your preferred date, time and topic for the meeting, and our team will schedule it."),
        ],
        invalid: INVALID_OPTION,
    },
};

static ESCALATION_SUPPORT: MenuNode = MenuNode {
    state: MenuState::EscalationSupport,
    prompt: ESCALATION_MENU,
    kind: NodeKind::Menu {
        options: &[
            to(&["1"], MenuState::RevenueManagement),
            to(&["2"], MenuState::SalesManagement),
            to(&["3"], MenuState::AccountManagement),
        ],
        invalid: INVALID_CATEGORY,
    },
};

static REVENUE_MANAGEMENT: MenuNode = MenuNode {
    state: MenuState::RevenueManagement,
    prompt: REVENUE_MANAGEMENT_MENU,
    kind: NodeKind::Menu {
        options: &[
            ask(&["1"], MenuState::Elaboration, "⚠️ Please elaborate on the Low Booking ADR escalation. Provide details to help us understand the issue better."),
            ask(&["2"], MenuState::Elaboration, "⚠️ Please elaborate on the Pricing escalation. Provide details to help us understand the issue better."),
            ask(&["3"], MenuState::Elaboration, "⚠️ Please elaborate on the Performance Issue/Production escalation. Provide details to help us understand the issue better."),
        ],
        invalid: INVALID_ISSUE_TYPE,
    },
};

static SALES_MANAGEMENT: MenuNode = MenuNode {
    state: MenuState::SalesManagement,
    prompt: SALES_MANAGEMENT_MENU,
    kind: NodeKind::Menu {
        options: &[
            ask(&["1"], MenuState::Elaboration, "⚠️ Please elaborate on the Rooming List escalation. Provide details to help us understand the issue better."),
            ask(&["2"], MenuState::Elaboration, "⚠️ Please elaborate on the Credit Card escalation. Provide details to help us understand the issue better."),
            ask(&["3"], MenuState::Elaboration, "⚠️ Please elaborate on the Group Block escalation. Provide details to help us understand the issue better."),
            ask(&["4"], MenuState::Elaboration, "⚠️ Please elaborate on the Performance/Production Issue escalation. Provide details to help us understand the issue better."),
        ],
        invalid: INVALID_ISSUE_TYPE,
    },
};

static ACCOUNT_MANAGEMENT: MenuNode = MenuNode {
    state: MenuState::AccountManagement,
    prompt: ACCOUNT_MANAGEMENT_MENU,
    kind: NodeKind::Menu {
        options: &[
            ask(&["1"], MenuState::Elaboration, "⚠️ Please elaborate on the Payment Issue escalation. Provide details to help us understand the issue better."),
            ask(&["2"], MenuState::Elaboration, "⚠️ Please elaborate on the POC Issue escalation. Provide details to help us understand the issue better."),
            ask(&["3"], MenuState::Elaboration, "⚠️ Please elaborate on the Performance/Production Issue escalation. Provide details to help us understand the issue better."),
        ],
        invalid: INVALID_ISSUE_TYPE,
    },
};

static ELABORATION: MenuNode = MenuNode {
    state: MenuState::Elaboration,
    prompt: ELABORATION_PROMPT,
    kind: NodeKind::FreeText {
        escalation: true,
        blank: ELABORATION_BLANK,
    },
};

static OTHERS: MenuNode = MenuNode {
    state: MenuState::Others,
    prompt: OTHERS_PROMPT,
    kind: NodeKind::FreeText {
        escalation: false,
        blank: OTHERS_BLANK,
    },
};

/// Node definition for a state.
pub fn node(state: MenuState) -> &'static MenuNode {
    match state {
        MenuState::MainMenu => &MAIN,
        MenuState::Pricing => &PRICING,
        MenuState::LeadManagement => &LEAD_MANAGEMENT,
        MenuState::Reports => &REPORTS,
        MenuState::MeetingSchedule => &MEETING_SCHEDULE,
        MenuState::EscalationSupport => &ESCALATION_SUPPORT,
        MenuState::RevenueManagement => &REVENUE_MANAGEMENT,
        MenuState::SalesManagement => &SALES_MANAGEMENT,
        MenuState::AccountManagement => &ACCOUNT_MANAGEMENT,
        MenuState::Elaboration => &ELABORATION,
        MenuState::Others => &OTHERS,
    }
}

/// Text shown when a sender arrives at (or is re-shown) a node. The main menu carries the welcome banner.
pub fn menu_text(state: MenuState) -> String {
    match state {
        MenuState::MainMenu => format!("{}{}", WELCOME, MAIN_MENU),
        other => node(other).prompt.to_string(),
    }
}
