//! Terminal presentation of messages and the menu.
//!
//! Messages are plain data ([`CmdMessage`]); this is the only place that decides
//! how they look. `console` drops the styling when stdout is not a terminal, so
//! piped sessions get plain text.

use clientesapp::api::{CmdMessage, MessageLevel};
use console::{style, StyledObject};

pub const MENU: &str = "\nMenu:\n1. Register customer\n2. Delete customer\n3. Save and exit";
pub const MENU_PROMPT: &str = "Choose an option: ";

pub fn styled(message: &CmdMessage) -> StyledObject<&str> {
    let content = style(message.content.as_str());
    match message.level {
        MessageLevel::Info => content.dim(),
        MessageLevel::Success => content.green(),
        MessageLevel::Warning => content.yellow(),
        MessageLevel::Error => content.red(),
    }
}

pub fn render_message(message: &CmdMessage) -> String {
    styled(message).to_string()
}
