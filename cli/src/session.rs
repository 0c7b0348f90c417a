//! Terminal chat session: reducer state plus a cursor over printed lines.

use transcript::{Action, AskReply, ChatState, Effect, Message, TransportError, UploadReply};

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

/// One REPL input line, already classified.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Send the line as a question (blank lines are dropped by the reducer).
    Ask(String),
    /// Upload the file at this path.
    Upload(String),
    Quit,
    /// Nothing to do, e.g. `/upload` with no path.
    Ignore,
}

impl ReplCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "/quit" | "/exit" => Self::Quit,
            "/upload" => Self::Ignore,
            _ => match trimmed.strip_prefix("/upload ") {
                Some(path) if !path.trim().is_empty() => Self::Upload(path.trim().to_owned()),
                Some(_) => Self::Ignore,
                None => Self::Ask(line.to_owned()),
            },
        }
    }
}

#[derive(Default)]
pub struct Session {
    state: ChatState,
    printed: usize,
}

impl Session {
    #[must_use]
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Put `text` in the composer and submit it.
    ///
    /// Returns the question to send, or `None` when the text was blank.
    pub fn submit(&mut self, text: &str) -> Option<String> {
        self.state.apply(Action::EditComposer(text.to_owned()));
        match self.state.apply(Action::Submit) {
            Effect::Ask { question } => Some(question),
            Effect::None => None,
        }
    }

    /// Record the outcome of an ask and return to idle.
    pub fn settle_ask(&mut self, outcome: Result<AskReply, TransportError>) {
        self.state.apply(Action::AskSettled(outcome));
        self.state.apply(Action::AskFinished);
    }

    pub fn settle_upload(&mut self, file_name: &str, outcome: Result<UploadReply, TransportError>) {
        self.state.apply(Action::UploadSettled {
            file_name: file_name.to_owned(),
            outcome,
        });
    }

    /// Messages appended since the last call.
    pub fn drain(&mut self) -> Vec<Message> {
        let fresh = self.state.transcript().since(self.printed).to_vec();
        self.printed = self.state.transcript().len();
        fresh
    }
}

/// `you> ...` / `bot> ...` rendering of one message.
#[must_use]
pub fn format_line(message: &Message) -> String {
    let prefix = match message.sender() {
        transcript::Sender::User => "you",
        transcript::Sender::Bot => "bot",
    };
    format!("{prefix}> {}", message.text())
}
