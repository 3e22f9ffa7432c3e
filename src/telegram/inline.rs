//! Inline mode, callback queries, web apps and games.

use super::{EditTarget, Telegram};
use crate::error::Result;
use crate::extra::{
    ExtraAnswerCbQuery, ExtraAnswerInlineQuery, ExtraInlineSend, ExtraSavePreparedInlineMessage,
};
use crate::request::Request;
use crate::types::MessageOrTrue;
use serde_json::Value;
use teloxide::types::{
    ChatId, GameHighScore, InlineQueryResult, Message, SentWebAppMessage, UserId,
};

impl Telegram {
    /// Answers an inline query with at most 50 results.
    pub async fn answer_inline_query(
        &self,
        inline_query_id: &str,
        results: Vec<InlineQueryResult>,
        extra: Option<ExtraAnswerInlineQuery>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("inline_query_id", inline_query_id)
            .field("results", results)
            .extra(&extra);
        self.call("answerInlineQuery", request).await
    }

    /// Answers a callback query from an inline keyboard button. The client
    /// keeps showing a progress bar until this is called.
    pub async fn answer_cb_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        extra: Option<ExtraAnswerCbQuery>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("callback_query_id", callback_query_id)
            .opt_field("text", text)
            .extra(&extra);
        self.call("answerCallbackQuery", request).await
    }

    /// Answers the callback query of a game button by opening the game `url`.
    pub async fn answer_game_query(&self, callback_query_id: &str, url: &str) -> Result<bool> {
        let request = Request::new()
            .field("callback_query_id", callback_query_id)
            .field("url", url);
        self.call("answerCallbackQuery", request).await
    }

    pub async fn answer_web_app_query(
        &self,
        web_app_query_id: &str,
        result: InlineQueryResult,
    ) -> Result<SentWebAppMessage> {
        let request = Request::new()
            .field("web_app_query_id", web_app_query_id)
            .field("result", result);
        self.call("answerWebAppQuery", request).await
    }

    /// Stores a message a mini app user may send later. Returns the raw
    /// `PreparedInlineMessage`.
    pub async fn save_prepared_inline_message(
        &self,
        user_id: UserId,
        result: InlineQueryResult,
        extra: Option<ExtraSavePreparedInlineMessage>,
    ) -> Result<Value> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("result", result)
            .extra(&extra);
        self.call("savePreparedInlineMessage", request).await
    }

    pub async fn send_game(
        &self,
        chat_id: ChatId,
        game_short_name: &str,
        extra: Option<ExtraInlineSend>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id)
            .field("game_short_name", game_short_name)
            .extra(&extra);
        self.call("sendGame", request).await
    }

    /// Sets a player's score. With `edit_message` the game message is updated
    /// with the new scoreboard; `force` allows lowering a score.
    pub async fn set_game_score(
        &self,
        user_id: UserId,
        score: u64,
        target: EditTarget,
        edit_message: bool,
        force: bool,
    ) -> Result<MessageOrTrue> {
        let request = target
            .apply(Request::new())
            .field("user_id", user_id)
            .field("score", score)
            .field("force", force)
            .field("disable_edit_message", !edit_message);
        self.call("setGameScore", request).await
    }

    /// Scores of the player and a few of their neighbors in the table.
    pub async fn get_game_high_scores(
        &self,
        user_id: UserId,
        target: EditTarget,
    ) -> Result<Vec<GameHighScore>> {
        let request = target.apply(Request::new()).field("user_id", user_id);
        self.call("getGameHighScores", request).await
    }
}
