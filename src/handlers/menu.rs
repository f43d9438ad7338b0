//! `!menu` — static command list

use crate::handlers::Reply;

pub const MENU_TEXT: &str = "\u{1F4CC} *Bot Menu* \u{1F4CC}

!menu - Show this menu
!chat <prompt>
!weather <city>
!wiki <query>
!ytsearch <query>
!sticker (send or reply to an image)";

pub fn handle() -> Reply {
    Reply::Text(MENU_TEXT.to_string())
}
