//! Menu state machine.
//!
//! The menu tree is a static table of nodes (`table`); `step` maps the sender's current
//! state and one normalized input to a reply (or a ticket to file) and the next state.
//! No I/O happens here; the bot performs ticket filing and session writes.

mod machine;
mod state;
mod table;
mod text;

pub use machine::{step, Action, Input, Step, GREETINGS};
pub use state::MenuState;
pub use table::{menu_text, node, MenuNode, MenuOption, NodeKind};
pub use text::{INVALID_MESSAGE_REPLY, NOT_REGISTERED_REPLY, WELCOME};
