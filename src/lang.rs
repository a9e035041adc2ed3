//! Localized user-facing strings.
//!
//! Every message the client prints comes from a [`Messages`] table selected
//! by the active [`Lang`]. Keeping the strings in one struct per language
//! means a missing translation is a compile error, not a runtime `KeyError`.

/// Display language for all user-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    /// Russian (the startup default).
    #[default]
    Ru,
    /// English.
    En,
}

impl Lang {
    /// Returns the other supported language.
    pub fn toggle(self) -> Self {
        match self {
            Lang::Ru => Lang::En,
            Lang::En => Lang::Ru,
        }
    }

    /// Returns the short language tag.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    /// Returns the string table for this language.
    pub fn messages(self) -> &'static Messages {
        match self {
            Lang::Ru => &RU,
            Lang::En => &EN,
        }
    }
}

/// The full set of localized strings used by the client.
#[derive(Debug)]
pub struct Messages {
    /// The REPL prompt. Identical in both languages so the notification
    /// listener can redraw it without knowing the active language.
    pub prompt: &'static str,
    /// Startup banner printed once after sign-in.
    pub banner: &'static str,
    /// Printed once authentication has completed.
    pub authorized: &'static str,
    /// The `help` command output.
    pub help: &'static str,
    /// Printed when a command requires a selected chat and none is set.
    pub no_chat: &'static str,
    /// Printed when a history request returns nothing.
    pub no_messages: &'static str,
    /// Prefix for the `select` confirmation, followed by the chat name.
    pub selected: &'static str,
    /// Printed when a numeric argument does not parse.
    pub invalid_number: &'static str,
    /// Printed when a `select` index is outside the listing.
    pub index_out_of_range: &'static str,
    /// Printed when a `sendfile` path does not exist.
    pub file_not_found: &'static str,
    /// Printed when a `download` id matches no message.
    pub message_not_found: &'static str,
    /// Printed when a `download` target message carries no media.
    pub no_media: &'static str,
    /// Prefix for the `download` confirmation, followed by the written path.
    pub saved_to: &'static str,
    /// The `send` confirmation.
    pub sent_ok: &'static str,
    /// The `sendfile` confirmation.
    pub file_sent: &'static str,
    /// Printed for unrecognized commands.
    pub unknown_command: &'static str,
    /// Prefix for the `lang` confirmation, followed by the language tag.
    pub language_is: &'static str,
    /// Fatal message when `API_ID`/`API_HASH` are missing at startup.
    pub missing_config: &'static str,
    /// Prefix for recovered command errors.
    pub error_prefix: &'static str,
    /// Login prompt for the phone number.
    pub enter_phone: &'static str,
    /// Login prompt for the confirmation code.
    pub enter_code: &'static str,
    /// Login prompt for the two-factor password.
    pub enter_password: &'static str,
}

static RU: Messages = Messages {
    prompt: "tg> ",
    banner: "Telegram CLI. Для помощи введите help",
    authorized: "Авторизация выполнена.",
    help: "Доступные команды:
help — показать эту справку
me — информация о текущем пользователе
dialogs — список чатов
select <num> — выбрать чат по номеру из списка dialogs
history [n] — показать последние n сообщений (по умолчанию 20)
send <text> — отправить текст в выбранный чат
sendfile <путь> — отправить файл/картинку/аудио
download <msg_id> <путь> — скачать медиа из сообщения (по id в истории)
lang — переключить язык (ru/en)
exit — выйти",
    no_chat: "Чат не выбран. Используйте dialogs и select <num>.",
    no_messages: "Нет сообщений.",
    selected: "Выбран чат:",
    invalid_number: "Неверный номер",
    index_out_of_range: "Индекс вне диапазона",
    file_not_found: "Файл не найден",
    message_not_found: "Сообщение не найдено",
    no_media: "В сообщении нет медиа",
    saved_to: "Сохранено в",
    sent_ok: "OK",
    file_sent: "Отправлено",
    unknown_command: "Неизвестная команда. help для списка.",
    language_is: "Language:",
    missing_config: "Заполните окружение: API_ID и API_HASH",
    error_prefix: "Ошибка:",
    enter_phone: "Телефон (в международном формате): ",
    enter_code: "Код подтверждения: ",
    enter_password: "Пароль (2FA): ",
};

static EN: Messages = Messages {
    prompt: "tg> ",
    banner: "Telegram CLI. Type help for the command list",
    authorized: "Signed in.",
    help: "Commands:
help — show this help
me — current user info
dialogs — list chats
select <num> — select chat by number from dialogs
history [n] — show last n messages (default 20)
send <text> — send text to selected chat
sendfile <path> — send file/image/audio
download <msg_id> <path> — download media from message (id from history)
lang — toggle language (ru/en)
exit — quit",
    no_chat: "No chat selected. Use dialogs and select <num>.",
    no_messages: "No messages.",
    selected: "Selected chat:",
    invalid_number: "Invalid number",
    index_out_of_range: "Index out of range",
    file_not_found: "File not found",
    message_not_found: "Message not found",
    no_media: "No media in that message",
    saved_to: "Saved to",
    sent_ok: "OK",
    file_sent: "Sent",
    unknown_command: "Unknown command. Type help for the list.",
    language_is: "Language:",
    missing_config: "Set API_ID and API_HASH in the environment",
    error_prefix: "Error:",
    enter_phone: "Phone (international format): ",
    enter_code: "Login code: ",
    enter_password: "Password (2FA): ",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_russian() {
        assert_eq!(Lang::default(), Lang::Ru);
    }

    #[test]
    fn toggle_twice_round_trips() {
        assert_eq!(Lang::Ru.toggle(), Lang::En);
        assert_eq!(Lang::Ru.toggle().toggle(), Lang::Ru);
        assert_eq!(Lang::En.toggle().toggle(), Lang::En);
    }

    #[test]
    fn codes() {
        assert_eq!(Lang::Ru.code(), "ru");
        assert_eq!(Lang::En.code(), "en");
    }

    #[test]
    fn tables_differ_but_share_the_prompt() {
        let ru = Lang::Ru.messages();
        let en = Lang::En.messages();
        assert_eq!(ru.prompt, en.prompt);
        assert_ne!(ru.no_chat, en.no_chat);
        assert_ne!(ru.help, en.help);
    }

    #[test]
    fn help_mentions_every_command() {
        for messages in [Lang::Ru.messages(), Lang::En.messages()] {
            for command in [
                "help", "me", "dialogs", "select", "history", "send", "sendfile", "download",
                "lang", "exit",
            ] {
                assert!(
                    messages.help.contains(command),
                    "help text is missing `{command}`"
                );
            }
        }
    }
}
