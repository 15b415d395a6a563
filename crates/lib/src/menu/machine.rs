use super::state::MenuState;
use super::table::{menu_text, node, NodeKind};

/// Inputs that jump back to the main menu from anywhere.
pub const GREETINGS: [&str; 5] = ["hi", "hello", "hey", "greetings", "hola"];

/// One normalized inbound message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Trimmed text as typed; used verbatim for ticket descriptions.
    pub text: String,
    /// Lower-cased `text`; used for menu matching.
    pub token: String,
}

impl Input {
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim().to_string();
        let token = text.to_lowercase();
        Self { text, token }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_greeting(&self) -> bool {
        GREETINGS.contains(&self.token.as_str())
    }
}

/// What the bot does with the turn besides moving to `Step::next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Reply(String),
    /// File a ticket; the reply is the ticket sink's outcome.
    FileTicket {
        description: String,
        escalation: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: MenuState,
    pub action: Action,
}

impl Step {
    fn reply(next: MenuState, text: impl Into<String>) -> Self {
        Self {
            next,
            action: Action::Reply(text.into()),
        }
    }
}

/// Advance one sender's menu by one input. Greetings reset to the main menu from any state.
pub fn step(state: MenuState, input: &Input) -> Step {
    if input.is_greeting() {
        return Step::reply(MenuState::MainMenu, menu_text(MenuState::MainMenu));
    }
    match &node(state).kind {
        NodeKind::Menu { options, invalid } => {
            match options.iter().find(|o| o.matches(&input.token)) {
                Some(opt) => {
                    let text = match opt.reply {
                        Some(r) => r.to_string(),
                        None => menu_text(opt.next),
                    };
                    Step::reply(opt.next, text)
                }
                None => Step::reply(state, format!("{}\n\n{}", invalid, menu_text(state))),
            }
        }
        NodeKind::FreeText { escalation, blank } => {
            if input.is_empty() {
                Step::reply(state, format!("{}\n\n{}", blank, menu_text(state)))
            } else {
                Step {
                    next: MenuState::MainMenu,
                    action: Action::FileTicket {
                        description: input.text.clone(),
                        escalation: *escalation,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::text::{
        ELABORATION_BLANK, ELABORATION_PROMPT, INVALID_CATEGORY, OTHERS_BLANK, OTHERS_PROMPT,
        REPORTS_MENU, WELCOME,
    };

    fn run(state: MenuState, raw: &str) -> Step {
        step(state, &Input::parse(raw))
    }

    fn reply_text(step: &Step) -> &str {
        match &step.action {
            Action::Reply(t) => t,
            other => panic!("expected reply, got {:?}", other),
        }
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let input = Input::parse("  Rooms OVERBOOKED \n");
        assert_eq!(input.text, "Rooms OVERBOOKED");
        assert_eq!(input.token, "rooms overbooked");
        assert!(Input::parse(" \t ").is_empty());
    }

    #[test]
    fn greeting_resets_from_every_state() {
        for state in MenuState::ALL {
            for g in ["hi", "HELLO", " Hey ", "greetings", "Hola"] {
                let s = run(state, g);
                assert_eq!(s.next, MenuState::MainMenu);
                assert_eq!(reply_text(&s), menu_text(MenuState::MainMenu));
                assert!(reply_text(&s).starts_with(WELCOME));
            }
        }
    }

    #[test]
    fn main_menu_three_opens_reports() {
        let s = run(MenuState::MainMenu, "3");
        assert_eq!(s.next, MenuState::Reports);
        let text = reply_text(&s);
        assert_eq!(text, REPORTS_MENU);
        assert_eq!(text.lines().filter(|l| l.contains("View/Download")).count(), 5);
    }

    #[test]
    fn main_menu_invalid_choice_stays() {
        let s = run(MenuState::MainMenu, "9");
        assert_eq!(s.next, MenuState::MainMenu);
        assert_eq!(
            reply_text(&s),
            format!("⚠️ Invalid choice.\n\n{}", menu_text(MenuState::MainMenu))
        );
    }

    #[test]
    fn main_menu_others_by_word_or_number() {
        for raw in ["6", "others", "OTHERS"] {
            let s = run(MenuState::MainMenu, raw);
            assert_eq!(s.next, MenuState::Others);
            assert_eq!(reply_text(&s), menu_text(MenuState::Others));
        }
    }

    #[test]
    fn escalation_path_reaches_elaboration() {
        let s = run(MenuState::MainMenu, "5");
        assert_eq!(s.next, MenuState::EscalationSupport);
        let s = run(s.next, "2");
        assert_eq!(s.next, MenuState::SalesManagement);
        let s = run(s.next, "3");
        assert_eq!(s.next, MenuState::Elaboration);
        assert!(reply_text(&s).contains("Group Block"));
    }

    #[test]
    fn submenu_invalid_choice_stays_and_reshows_menu() {
        let s = run(MenuState::EscalationSupport, "7");
        assert_eq!(s.next, MenuState::EscalationSupport);
        let text = reply_text(&s);
        assert!(text.starts_with(INVALID_CATEGORY));
        assert!(text.ends_with(&menu_text(MenuState::EscalationSupport)));

        for state in [
            MenuState::RevenueManagement,
            MenuState::SalesManagement,
            MenuState::AccountManagement,
        ] {
            let s = run(state, "nope");
            assert_eq!(s.next, state);
            assert!(reply_text(&s).starts_with("⚠️ Invalid choice. Please select a valid issue type."));
        }
    }

    #[test]
    fn elaboration_files_escalation_ticket() {
        let s = run(MenuState::Elaboration, "  ADR dropped to 80 since Monday ");
        assert_eq!(s.next, MenuState::MainMenu);
        assert_eq!(
            s.action,
            Action::FileTicket {
                description: "ADR dropped to 80 since Monday".to_string(),
                escalation: true,
            }
        );
    }

    #[test]
    fn others_files_plain_ticket() {
        let s = run(MenuState::Others, "Need a new login");
        assert_eq!(s.next, MenuState::MainMenu);
        assert_eq!(
            s.action,
            Action::FileTicket {
                description: "Need a new login".to_string(),
                escalation: false,
            }
        );
    }

    #[test]
    fn blank_free_text_reprompts_in_place() {
        let s = run(MenuState::Others, "   ");
        assert_eq!(s.next, MenuState::Others);
        assert_eq!(reply_text(&s), format!("{}\n\n{}", OTHERS_BLANK, OTHERS_PROMPT));

        let s = run(MenuState::Elaboration, "");
        assert_eq!(s.next, MenuState::Elaboration);
        assert_eq!(
            reply_text(&s),
            "⚠️ Please provide more details for your escalation.\n\n\
             ⚠️ Please elaborate on your escalation. Provide details to help us understand the issue better."
        );
        assert!(reply_text(&s).starts_with(ELABORATION_BLANK));
        assert!(reply_text(&s).ends_with(ELABORATION_PROMPT));
    }

    #[test]
    fn informational_menu_choice_asks_for_request() {
        let s = run(MenuState::Pricing, "2");
        assert_eq!(s.next, MenuState::Others);
        assert!(reply_text(&s).contains("30 days"));
    }

    #[test]
    fn every_state_answers_every_input() {
        let inputs = ["", "1", "2", "3", "4", "5", "6", "7", "others", "hi", "random text"];
        for state in MenuState::ALL {
            for raw in inputs {
                let s = run(state, raw);
                if let Action::Reply(text) = &s.action {
                    assert!(!text.trim().is_empty(), "{} / {:?} gave empty reply", state, raw);
                }
            }
        }
    }
}
