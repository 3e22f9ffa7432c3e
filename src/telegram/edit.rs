//! Editing and deleting sent messages.

use super::Telegram;
use super::messages::raw_ids;
use crate::error::Result;
use crate::extra::{
    ExtraEditMessageCaption, ExtraEditMessageChecklist, ExtraEditMessageLiveLocation,
    ExtraEditMessageText, ExtraInlineMarkup,
};
use crate::format::{FormattedText, TextContext};
use crate::media::InputMedia;
use crate::request::Request;
use crate::types::{InputChecklist, MessageOrTrue};
use teloxide::types::{ChatId, InlineKeyboardMarkup, Message, MessageId, Recipient};

/// The message an edit applies to: one sent by the bot into a chat, or one
/// sent via inline mode.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    Chat {
        chat_id: Recipient,
        message_id: MessageId,
    },
    Inline {
        inline_message_id: String,
    },
}

impl EditTarget {
    pub fn chat(chat_id: impl Into<Recipient>, message_id: MessageId) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }

    /// Adds the identifying fields. Only the ids of the chosen variant are
    /// written.
    pub(crate) fn apply(self, request: Request) -> Request {
        match self {
            Self::Chat {
                chat_id,
                message_id,
            } => request
                .field("chat_id", chat_id)
                .field("message_id", message_id.0),
            Self::Inline { inline_message_id } => {
                request.field("inline_message_id", inline_message_id)
            }
        }
    }
}

impl Telegram {
    /// Edits the text of a message. Bot messages come back edited; inline
    /// messages report `true`.
    pub async fn edit_message_text(
        &self,
        target: EditTarget,
        text: impl Into<FormattedText>,
        extra: Option<ExtraEditMessageText>,
    ) -> Result<MessageOrTrue> {
        let request = target
            .apply(Request::new())
            .extra(&extra)
            .formatted(text, TextContext::Message);
        self.call("editMessageText", request).await
    }

    /// Replaces the caption. `None` removes it.
    pub async fn edit_message_caption(
        &self,
        target: EditTarget,
        caption: Option<FormattedText>,
        extra: Option<ExtraEditMessageCaption>,
    ) -> Result<MessageOrTrue> {
        let request = target
            .apply(Request::new())
            .extra(&extra)
            .opt_formatted(caption, TextContext::Caption);
        self.call("editMessageCaption", request).await
    }

    pub async fn edit_message_media(
        &self,
        target: EditTarget,
        media: InputMedia,
        extra: Option<ExtraInlineMarkup>,
    ) -> Result<MessageOrTrue> {
        let request = target
            .apply(Request::new())
            .attached("media", media)
            .extra(&extra);
        self.call("editMessageMedia", request).await
    }

    /// `None` removes the inline keyboard.
    pub async fn edit_message_reply_markup(
        &self,
        target: EditTarget,
        markup: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageOrTrue> {
        let request = target
            .apply(Request::new())
            .opt_field("reply_markup", markup);
        self.call("editMessageReplyMarkup", request).await
    }

    pub async fn edit_message_live_location(
        &self,
        target: EditTarget,
        latitude: f64,
        longitude: f64,
        extra: Option<ExtraEditMessageLiveLocation>,
    ) -> Result<MessageOrTrue> {
        let request = target
            .apply(Request::new())
            .field("latitude", latitude)
            .field("longitude", longitude)
            .extra(&extra);
        self.call("editMessageLiveLocation", request).await
    }

    pub async fn stop_message_live_location(
        &self,
        target: EditTarget,
        markup: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageOrTrue> {
        let request = target
            .apply(Request::new())
            .opt_field("reply_markup", markup);
        self.call("stopMessageLiveLocation", request).await
    }

    pub async fn edit_message_checklist(
        &self,
        business_connection_id: &str,
        chat_id: ChatId,
        message_id: MessageId,
        checklist: InputChecklist,
        extra: Option<ExtraEditMessageChecklist>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("business_connection_id", business_connection_id)
            .field("chat_id", chat_id)
            .field("message_id", message_id.0)
            .field("checklist", checklist)
            .extra(&extra);
        self.call("editMessageChecklist", request).await
    }

    pub async fn delete_message(
        &self,
        chat_id: impl Into<Recipient>,
        message_id: MessageId,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("message_id", message_id.0);
        self.call("deleteMessage", request).await
    }

    pub async fn delete_messages(
        &self,
        chat_id: impl Into<Recipient>,
        message_ids: &[MessageId],
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("message_ids", raw_ids(message_ids));
        self.call("deleteMessages", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingDispatcher;
    use super::*;
    use crate::input_file::InputFile;
    use serde_json::json;
    use teloxide::types::{InlineKeyboardButton, MessageEntity, ParseMode};

    #[tokio::test]
    async fn inline_edit_returns_true() {
        let recorder = RecordingDispatcher::new();
        let result = recorder
            .bot()
            .edit_message_text(EditTarget::inline("AAQ-inline"), "updated", None)
            .await
            .unwrap();
        assert!(matches!(result, MessageOrTrue::True(true)));
        assert_eq!(
            recorder.last().body(),
            json!({"inline_message_id": "AAQ-inline", "text": "updated"})
        );
    }

    #[tokio::test]
    async fn chat_edit_with_entities_drops_parse_mode() {
        let recorder = RecordingDispatcher::new();
        let extra = ExtraEditMessageText {
            parse_mode: Some(ParseMode::Html),
            ..ExtraEditMessageText::default()
        };
        let text = FormattedText::with_entities("done", vec![MessageEntity::bold(0, 4)]);
        recorder
            .bot()
            .edit_message_text(EditTarget::chat(ChatId(1), MessageId(2)), text, Some(extra))
            .await
            .unwrap();
        let body = recorder.last().body();
        assert_eq!(body["chat_id"], json!(1));
        assert_eq!(body["message_id"], json!(2));
        assert!(body.get("inline_message_id").is_none());
        assert!(body.get("entities").is_some());
        assert!(body.get("parse_mode").is_none());
    }

    #[tokio::test]
    async fn caption_edit_uses_caption_keys_and_may_remove() {
        let recorder = RecordingDispatcher::new();
        let bot = recorder.bot();
        let target = EditTarget::chat(ChatId(1), MessageId(2));
        bot.edit_message_caption(target.clone(), Some("new".into()), None)
            .await
            .unwrap();
        bot.edit_message_caption(target, None, None).await.unwrap();

        let calls = recorder.calls();
        assert_eq!(calls[0].body()["caption"], json!("new"));
        assert!(calls[0].body().get("text").is_none());
        assert_eq!(calls[1].body(), json!({"chat_id": 1, "message_id": 2}));
    }

    #[tokio::test]
    async fn reply_markup_edit_omits_absent_ids() {
        let recorder = RecordingDispatcher::new();
        let markup = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            "OK", "ok",
        )]]);
        recorder
            .bot()
            .edit_message_reply_markup(EditTarget::inline("abc"), Some(markup))
            .await
            .unwrap();
        let body = recorder.last().body();
        assert!(body.get("chat_id").is_none());
        assert!(body.get("message_id").is_none());
        assert_eq!(body["inline_message_id"], json!("abc"));
        assert_eq!(
            body["reply_markup"]["inline_keyboard"][0][0]["callback_data"],
            json!("ok")
        );
    }

    #[tokio::test]
    async fn media_edit_nests_caption() {
        let recorder = RecordingDispatcher::new();
        let media = InputMedia::video(InputFile::path("/tmp/new.mp4")).with_caption("v2");
        recorder
            .bot()
            .edit_message_media(EditTarget::chat(ChatId(1), MessageId(2)), media, None)
            .await
            .unwrap();
        let call = recorder.last();
        assert_eq!(
            call.body()["media"],
            json!({"type": "video", "media": "attach://file0", "caption": "v2"})
        );
        assert!(call.body().get("caption").is_none());
        assert_eq!(call.upload_names(), vec!["file0"]);
    }

    #[tokio::test]
    async fn delete_messages_sends_id_list() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .delete_messages(ChatId(1), &[MessageId(3), MessageId(4)])
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"chat_id": 1, "message_ids": [3, 4]})
        );
    }

    #[tokio::test]
    async fn stop_live_location_without_markup() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .stop_message_live_location(EditTarget::chat(ChatId(9), MessageId(1)), None)
            .await
            .unwrap();
        let call = recorder.last();
        assert_eq!(call.method, "stopMessageLiveLocation");
        assert_eq!(call.body(), json!({"chat_id": 9, "message_id": 1}));
    }
}
