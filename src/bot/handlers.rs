use teloxide::types::{CallbackQuery, Message, Update, UpdateKind, User};

use super::{Inbound, Input};
use crate::dialogues::Caller;

/// `bot_username` is used to skip commands addressed to other bots in group chats.
pub fn inbound_from_update(update: Update, bot_username: Option<&str>) -> Option<Inbound> {
    match update.kind {
        UpdateKind::Message(msg) => from_message(&msg, bot_username),
        UpdateKind::CallbackQuery(query) => from_callback(query),
        _ => None,
    }
}

fn from_message(msg: &Message, bot_username: Option<&str>) -> Option<Inbound> {
    tracing::debug!(
        "Handling message. chat_id={} from={:?}",
        msg.chat.id,
        msg.from().map(|f| f.id)
    );
    let name = command_name(msg.text()?, bot_username)?;
    Some(Inbound {
        chat_id: msg.chat.id.0,
        caller: msg.from().map(caller_of).unwrap_or_default(),
        input: Input::Command(name),
    })
}

fn from_callback(query: CallbackQuery) -> Option<Inbound> {
    tracing::debug!(
        "Callback ({}): Handling {:?}",
        query.from.id,
        query.data
    );
    let message = query.message?;
    Some(Inbound {
        chat_id: message.chat.id.0,
        caller: caller_of(&query.from),
        input: Input::Button {
            callback_id: query.id,
            data: query.data?,
            message_id: message.id.0,
        },
    })
}

fn caller_of(user: &User) -> Caller {
    Caller {
        id: user.id.0,
        full_name: Some(user.full_name()).filter(|name| !name.trim().is_empty()),
        username: user.username.clone(),
    }
}

/// `"/books@SomeBot extra"` -> `"books"`. Plain text is not a command, and
/// neither is a command mentioning a bot other than `bot_username`.
pub fn command_name(text: &str, bot_username: Option<&str>) -> Option<String> {
    let word = text.trim_start().strip_prefix('/')?.split_whitespace().next()?;
    let (name, mention) = match word.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (word, None),
    };
    if let (Some(mention), Some(own)) = (mention, bot_username) {
        if !mention.eq_ignore_ascii_case(own.trim_start_matches('@')) {
            tracing::debug!(mention, "Command is addressed to another bot");
            return None;
        }
    }
    (!name.is_empty()).then(|| name.to_lowercase())
}
