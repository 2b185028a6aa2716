// ============================================================================
// ASSISTANT VIEWMODEL - conversación con el asistente
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::demo::{ASSISTANT_CANNED_REPLIES, ASSISTANT_GREETING};
use crate::models::{ChatMessage, ChatRole};
use crate::services::{assistant_service, ApiClient, ApiError};

/// Conversation shown on screen, seeded with the greeting
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, ASSISTANT_GREETING)],
            pending: false,
        }
    }
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the user's question and returns it, or `None` when the input is
    /// blank or a reply is still on its way.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let question = input.trim();
        if question.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, question));
        self.pending = true;
        Some(question.to_string())
    }

    pub fn finish(&mut self, reply: String) {
        self.messages.push(ChatMessage::new(ChatRole::Assistant, reply));
        self.pending = false;
    }

    /// Request failed; the question stays, no reply is added.
    pub fn abort(&mut self) {
        self.pending = false;
    }
}

pub enum ChatAction {
    Ask(String),
    Reply(String),
    Abort,
}

/// An ignored question leaves the log untouched.
impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Ask(input) => {
                if next.begin(&input).is_none() {
                    return self;
                }
            }
            ChatAction::Reply(reply) => next.finish(reply),
            ChatAction::Abort => next.abort(),
        }
        Rc::new(next)
    }
}

/// `pick` chooses an index below its argument.
pub fn canned_reply(pick: impl FnOnce(usize) -> usize) -> &'static str {
    let len = ASSISTANT_CANNED_REPLIES.len();
    ASSISTANT_CANNED_REPLIES[pick(len).min(len - 1)]
}

pub struct AssistantViewModel {
    api_client: ApiClient,
}

impl Default for AssistantViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// Without a token the answer is one of the canned safety tips.
    pub async fn ask(
        &self,
        question: &str,
        token: Option<&str>,
        pick: impl FnOnce(usize) -> usize,
    ) -> Result<String, ApiError> {
        match token {
            Some(token) => assistant_service::chat(&self.api_client, question, Some(token)).await,
            None => Ok(canned_reply(pick).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn blank_or_concurrent_input_is_ignored() {
        let mut log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].content, ASSISTANT_GREETING);

        assert_eq!(log.begin("   "), None);
        assert_eq!(log.begin("  Is it safe?  ").as_deref(), Some("Is it safe?"));
        assert_eq!(log.begin("Another one"), None);
        assert_eq!(log.messages().len(), 2);

        log.finish("Yes".to_string());
        assert!(!log.is_pending());
        assert_eq!(log.messages()[2].role, ChatRole::Assistant);
        assert!(log.messages()[1].is_from_user());
    }

    #[test]
    fn abort_allows_next_question() {
        let mut log = ChatLog::default();
        log.begin("first");
        log.abort();
        assert!(log.begin("second").is_some());
        assert_eq!(log.messages().len(), 3);
    }

    #[test]
    fn reducer_ignores_question_while_pending() {
        let log = Rc::new(ChatLog::default());
        let asked = log.clone().reduce(ChatAction::Ask("Where to eat?".into()));
        assert!(asked.is_pending());

        let again = asked.clone().reduce(ChatAction::Ask("And now?".into()));
        assert!(Rc::ptr_eq(&asked, &again));

        let answered = again.reduce(ChatAction::Reply("Try the old town.".into()));
        assert!(!answered.is_pending());
        assert_eq!(answered.messages().len(), 3);
    }

    #[test]
    fn canned_reply_without_token() {
        let transport = FakeTransport::new();
        let vm = AssistantViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()));
        let reply = block_on(vm.ask("hi", None, |_| 7)).unwrap();
        assert_eq!(reply, ASSISTANT_CANNED_REPLIES[2]);
        assert!(transport.requests().is_empty());
    }
}
