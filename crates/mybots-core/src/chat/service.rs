//! Chat service running one exchange between a user and a bot.
//!
//! Sequence per message: validate, load the bot, record the user turn,
//! generate the reply over the transcript, record the bot turn.

use std::sync::Arc;

use tracing::debug;

use mybots_types::bot::BotId;
use mybots_types::chat::{ChatReply, ChatTurn, SessionId};
use mybots_types::error::BotError;

use crate::chat::transcript::SessionTranscripts;
use crate::repository::bot::BotStore;
use crate::response::{self, Persona, classify_message};
use crate::service::bot::BotService;
use crate::service::validation;

pub struct ChatService<S: BotStore> {
    bots: Arc<BotService<S>>,
    transcripts: SessionTranscripts,
}

impl<S: BotStore> ChatService<S> {
    pub fn new(bots: Arc<BotService<S>>, transcripts: SessionTranscripts) -> Self {
        Self { bots, transcripts }
    }

    pub fn transcripts(&self) -> &SessionTranscripts {
        &self.transcripts
    }

    /// Send `message` to a bot within a session and return its reply.
    ///
    /// Nothing is recorded when validation fails or the bot does not exist.
    pub async fn chat(
        &self,
        session: SessionId,
        bot_id: &BotId,
        message: &str,
    ) -> Result<ChatReply, BotError> {
        let message = message.trim();
        validation::validate_message(message, self.bots.limits())?;

        let bot = self.bots.get_bot(bot_id).await?;

        self.transcripts
            .append(session, bot_id, ChatTurn::user(message));
        let transcript = self.transcripts.get(session, bot_id);

        let reply = response::generate_response(&bot, message, &transcript);
        debug!(
            bot_id = %bot_id,
            session_id = %session,
            persona = Persona::detect(&bot.personality).as_str(),
            kind = classify_message(message).as_str(),
            "Generated reply"
        );

        self.transcripts
            .append(session, bot_id, ChatTurn::bot(reply.clone()));

        Ok(ChatReply {
            response: reply,
            bot_name: bot.name,
        })
    }

    pub fn history(&self, session: SessionId, bot_id: &BotId) -> Vec<ChatTurn> {
        self.transcripts.get(session, bot_id)
    }

    pub fn clear_history(&self, session: SessionId, bot_id: &BotId) {
        self.transcripts.clear(session, bot_id);
        debug!(bot_id = %bot_id, session_id = %session, "Chat history cleared");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::repository::memory::InMemoryBotStore;
    use mybots_types::bot::CreateBotRequest;
    use mybots_types::chat::ChatRole;
    use mybots_types::config::Limits;
    use mybots_types::error::ValidationError;

    async fn setup(max_turns: usize) -> (ChatService<InMemoryBotStore>, BotId) {
        let bots = Arc::new(BotService::new(InMemoryBotStore::new(), Limits::default()));
        let bot = bots
            .create_bot(CreateBotRequest {
                id: Some("aria".to_string()),
                name: "Aria".to_string(),
                personality: "friendly and enthusiastic".to_string(),
                prompt: "I love helping with cooking.".to_string(),
            })
            .await
            .unwrap();
        let transcripts = SessionTranscripts::new(max_turns, Duration::from_secs(3600));
        (ChatService::new(bots, transcripts), bot.id)
    }

    #[tokio::test]
    async fn test_chat_records_both_turns() {
        let (chat, bot_id) = setup(100).await;
        let session = SessionId::new();

        let reply = chat.chat(session, &bot_id, "  hey there!  ").await.unwrap();
        assert_eq!(reply.bot_name, "Aria");
        assert!(reply.response.starts_with("Hey there! 😊 I'm Aria!"));

        let history = chat.history(session, &bot_id);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[0].message, "hey there!");
        assert_eq!(history[1].role, ChatRole::Bot);
        assert_eq!(history[1].message, reply.response);
    }

    #[tokio::test]
    async fn test_empty_message_rejected_without_recording() {
        let (chat, bot_id) = setup(100).await;
        let session = SessionId::new();

        let err = chat.chat(session, &bot_id, "   ").await.unwrap_err();
        assert!(matches!(
            err,
            BotError::Validation(ValidationError::EmptyMessage)
        ));
        assert!(chat.history(session, &bot_id).is_empty());
    }

    #[tokio::test]
    async fn test_unknown_bot_is_not_found() {
        let (chat, _) = setup(100).await;
        let err = chat
            .chat(SessionId::new(), &BotId::new("ghost"), "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_history_stays_bounded() {
        let (chat, bot_id) = setup(4).await;
        let session = SessionId::new();
        for i in 0..5 {
            chat.chat(session, &bot_id, &format!("note {i}")).await.unwrap();
        }
        let history = chat.history(session, &bot_id);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].message, "note 3");
    }

    #[tokio::test]
    async fn test_clear_history() {
        let (chat, bot_id) = setup(100).await;
        let session = SessionId::new();
        chat.chat(session, &bot_id, "hello").await.unwrap();

        chat.clear_history(session, &bot_id);
        assert!(chat.history(session, &bot_id).is_empty());
    }

    #[tokio::test]
    async fn test_deleting_bot_leaves_transcript() {
        let bots = Arc::new(BotService::new(InMemoryBotStore::new(), Limits::default()));
        let bot = bots
            .create_bot(CreateBotRequest {
                id: Some("temp".to_string()),
                name: "Temp".to_string(),
                personality: "calm".to_string(),
                prompt: "p".to_string(),
            })
            .await
            .unwrap();
        let chat = ChatService::new(
            bots.clone(),
            SessionTranscripts::new(10, Duration::from_secs(60)),
        );
        let session = SessionId::new();
        chat.chat(session, &bot.id, "hello").await.unwrap();

        bots.delete_bot(&bot.id).await.unwrap();
        assert_eq!(chat.history(session, &bot.id).len(), 2);
    }
}
