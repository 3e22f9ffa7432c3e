//! Forum topics of supergroups.

use super::Telegram;
use crate::error::Result;
use crate::extra::{ExtraCreateForumTopic, ExtraEditForumTopic};
use crate::request::Request;
use teloxide::types::{ForumTopic, Recipient, Sticker};

impl Telegram {
    /// Stickers any user may use as a topic icon.
    pub async fn get_forum_topic_icon_stickers(&self) -> Result<Vec<Sticker>> {
        self.call("getForumTopicIconStickers", Request::new()).await
    }

    pub async fn create_forum_topic(
        &self,
        chat_id: impl Into<Recipient>,
        name: &str,
        extra: Option<ExtraCreateForumTopic>,
    ) -> Result<ForumTopic> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("name", name)
            .extra(&extra);
        self.call("createForumTopic", request).await
    }

    pub async fn edit_forum_topic(
        &self,
        chat_id: impl Into<Recipient>,
        message_thread_id: i32,
        extra: Option<ExtraEditForumTopic>,
    ) -> Result<bool> {
        let request = topic(chat_id, message_thread_id).extra(&extra);
        self.call("editForumTopic", request).await
    }

    pub async fn close_forum_topic(
        &self,
        chat_id: impl Into<Recipient>,
        message_thread_id: i32,
    ) -> Result<bool> {
        self.call("closeForumTopic", topic(chat_id, message_thread_id))
            .await
    }

    pub async fn reopen_forum_topic(
        &self,
        chat_id: impl Into<Recipient>,
        message_thread_id: i32,
    ) -> Result<bool> {
        self.call("reopenForumTopic", topic(chat_id, message_thread_id))
            .await
    }

    /// Deletes the topic with all of its messages.
    pub async fn delete_forum_topic(
        &self,
        chat_id: impl Into<Recipient>,
        message_thread_id: i32,
    ) -> Result<bool> {
        self.call("deleteForumTopic", topic(chat_id, message_thread_id))
            .await
    }

    pub async fn unpin_all_forum_topic_messages(
        &self,
        chat_id: impl Into<Recipient>,
        message_thread_id: i32,
    ) -> Result<bool> {
        self.call(
            "unpinAllForumTopicMessages",
            topic(chat_id, message_thread_id),
        )
        .await
    }

    pub async fn edit_general_forum_topic(
        &self,
        chat_id: impl Into<Recipient>,
        name: &str,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("name", name);
        self.call("editGeneralForumTopic", request).await
    }

    pub async fn close_general_forum_topic(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        self.call("closeGeneralForumTopic", general(chat_id)).await
    }

    pub async fn reopen_general_forum_topic(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        self.call("reopenGeneralForumTopic", general(chat_id)).await
    }

    /// Hiding also closes the topic if it was open.
    pub async fn hide_general_forum_topic(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        self.call("hideGeneralForumTopic", general(chat_id)).await
    }

    pub async fn unhide_general_forum_topic(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        self.call("unhideGeneralForumTopic", general(chat_id)).await
    }

    pub async fn unpin_all_general_forum_topic_messages(
        &self,
        chat_id: impl Into<Recipient>,
    ) -> Result<bool> {
        self.call("unpinAllGeneralForumTopicMessages", general(chat_id))
            .await
    }
}

fn topic(chat_id: impl Into<Recipient>, message_thread_id: i32) -> Request {
    Request::new()
        .field("chat_id", chat_id.into())
        .field("message_thread_id", message_thread_id)
}

fn general(chat_id: impl Into<Recipient>) -> Request {
    Request::new().field("chat_id", chat_id.into())
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingDispatcher;
    use super::*;
    use serde_json::json;
    use teloxide::types::ChatId;

    #[tokio::test]
    async fn create_topic_with_icon() {
        let recorder = RecordingDispatcher::new();
        let extra = ExtraCreateForumTopic {
            icon_color: Some(0x6FB9F0),
            ..ExtraCreateForumTopic::default()
        };
        let _ = recorder
            .bot()
            .create_forum_topic(ChatId(-100), "Releases", Some(extra))
            .await;
        let call = recorder.last();
        assert_eq!(call.method, "createForumTopic");
        assert_eq!(
            call.body(),
            json!({"chat_id": -100, "name": "Releases", "icon_color": 7_322_096})
        );
    }

    #[tokio::test]
    async fn topic_operations_address_the_thread() {
        let recorder = RecordingDispatcher::new();
        let bot = recorder.bot();
        bot.close_forum_topic(ChatId(-100), 12).await.unwrap();
        bot.unpin_all_forum_topic_messages(ChatId(-100), 12)
            .await
            .unwrap();

        let calls = recorder.calls();
        assert_eq!(calls[0].method, "closeForumTopic");
        assert_eq!(calls[1].method, "unpinAllForumTopicMessages");
        for call in calls {
            assert_eq!(
                call.body(),
                json!({"chat_id": -100, "message_thread_id": 12})
            );
        }
    }

    #[tokio::test]
    async fn edit_topic_may_clear_icon() {
        let recorder = RecordingDispatcher::new();
        let extra = ExtraEditForumTopic {
            icon_custom_emoji_id: Some(String::new()),
            ..ExtraEditForumTopic::default()
        };
        recorder
            .bot()
            .edit_forum_topic(ChatId(-100), 3, Some(extra))
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"chat_id": -100, "message_thread_id": 3, "icon_custom_emoji_id": ""})
        );
    }

    #[tokio::test]
    async fn general_topic_takes_only_the_chat() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .hide_general_forum_topic(Recipient::ChannelUsername("@group".to_string()))
            .await
            .unwrap();
        let call = recorder.last();
        assert_eq!(call.method, "hideGeneralForumTopic");
        assert_eq!(call.body(), json!({"chat_id": "@group"}));
    }

    #[tokio::test]
    async fn icon_stickers_have_no_parameters() {
        let recorder = RecordingDispatcher::replying(json!([]));
        let stickers = recorder
            .bot()
            .get_forum_topic_icon_stickers()
            .await
            .unwrap();
        assert!(stickers.is_empty());
        assert_eq!(recorder.last().body(), json!({}));
    }
}
