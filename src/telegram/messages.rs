use super::Telegram;
use crate::error::Result;
use crate::extra::{
    ExtraApproveSuggestedPost, ExtraContact, ExtraCopyMessage, ExtraCopyMessages,
    ExtraDeclineSuggestedPost, ExtraDice, ExtraForwardMessage, ExtraForwardMessages,
    ExtraInlineMarkup, ExtraLocation, ExtraPoll, ExtraReplyMessage, ExtraSendChatAction,
    ExtraSendChecklist, ExtraSendMessageDraft, ExtraVenue,
};
use crate::format::{FormattedText, TextContext};
use crate::request::Request;
use crate::types::{InputChecklist, InputPollOption};
use teloxide::types::{ChatAction, ChatId, Message, MessageId, Poll, ReactionType, Recipient};

impl Telegram {
    /// Sends a text message. Entities carried by `text` win over a
    /// `parse_mode` in `extra`.
    pub async fn send_message(
        &self,
        chat_id: impl Into<Recipient>,
        text: impl Into<FormattedText>,
        extra: Option<ExtraReplyMessage>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .extra(&extra)
            .formatted(text, TextContext::Message);
        self.call("sendMessage", request).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<Recipient>,
        from_chat_id: impl Into<Recipient>,
        message_id: MessageId,
        extra: Option<ExtraForwardMessage>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("from_chat_id", from_chat_id.into())
            .field("message_id", message_id.0)
            .extra(&extra);
        self.call("forwardMessage", request).await
    }

    /// Forwards several messages at once. Ids must be strictly increasing;
    /// missing or protected messages are skipped by the API.
    pub async fn forward_messages(
        &self,
        chat_id: impl Into<Recipient>,
        from_chat_id: impl Into<Recipient>,
        message_ids: &[MessageId],
        extra: Option<ExtraForwardMessages>,
    ) -> Result<Vec<MessageId>> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("from_chat_id", from_chat_id.into())
            .field("message_ids", raw_ids(message_ids))
            .extra(&extra);
        self.call("forwardMessages", request).await
    }

    /// Streams a partial message while it is being generated. Drafts with
    /// the same non-zero `draft_id` replace each other.
    pub async fn send_message_draft(
        &self,
        chat_id: ChatId,
        draft_id: i64,
        text: impl Into<FormattedText>,
        extra: Option<ExtraSendMessageDraft>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id)
            .field("draft_id", draft_id)
            .extra(&extra)
            .formatted(text, TextContext::Message);
        self.call("sendMessageDraft", request).await
    }

    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<Recipient>,
        action: ChatAction,
        extra: Option<ExtraSendChatAction>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("action", action)
            .extra(&extra);
        self.call("sendChatAction", request).await
    }

    /// Replaces the bot's reactions on a message. `None` or an empty list
    /// removes them.
    pub async fn set_message_reaction(
        &self,
        chat_id: impl Into<Recipient>,
        message_id: MessageId,
        reaction: Option<Vec<ReactionType>>,
        is_big: Option<bool>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("message_id", message_id.0)
            .opt_field("reaction", reaction)
            .opt_field("is_big", is_big);
        self.call("setMessageReaction", request).await
    }

    pub async fn send_location(
        &self,
        chat_id: impl Into<Recipient>,
        latitude: f64,
        longitude: f64,
        extra: Option<ExtraLocation>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("latitude", latitude)
            .field("longitude", longitude)
            .extra(&extra);
        self.call("sendLocation", request).await
    }

    pub async fn send_venue(
        &self,
        chat_id: impl Into<Recipient>,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
        extra: Option<ExtraVenue>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("latitude", latitude)
            .field("longitude", longitude)
            .field("title", title)
            .field("address", address)
            .extra(&extra);
        self.call("sendVenue", request).await
    }

    pub async fn send_contact(
        &self,
        chat_id: impl Into<Recipient>,
        phone_number: &str,
        first_name: &str,
        extra: Option<ExtraContact>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("phone_number", phone_number)
            .field("first_name", first_name)
            .extra(&extra);
        self.call("sendContact", request).await
    }

    pub async fn send_dice(
        &self,
        chat_id: impl Into<Recipient>,
        extra: Option<ExtraDice>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .extra(&extra);
        self.call("sendDice", request).await
    }

    pub async fn send_poll(
        &self,
        chat_id: impl Into<Recipient>,
        question: &str,
        options: Vec<InputPollOption>,
        extra: Option<ExtraPoll>,
    ) -> Result<Message> {
        self.send_poll_of_type(chat_id.into(), "regular", question, options, extra)
            .await
    }

    /// A poll of type `quiz`; set `correct_option_id` in `extra`.
    pub async fn send_quiz(
        &self,
        chat_id: impl Into<Recipient>,
        question: &str,
        options: Vec<InputPollOption>,
        extra: Option<ExtraPoll>,
    ) -> Result<Message> {
        self.send_poll_of_type(chat_id.into(), "quiz", question, options, extra)
            .await
    }

    async fn send_poll_of_type(
        &self,
        chat_id: Recipient,
        kind: &str,
        question: &str,
        options: Vec<InputPollOption>,
        extra: Option<ExtraPoll>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id)
            .field("type", kind)
            .field("question", question)
            .field("options", options)
            .extra(&extra);
        self.call("sendPoll", request).await
    }

    pub async fn stop_poll(
        &self,
        chat_id: impl Into<Recipient>,
        message_id: MessageId,
        extra: Option<ExtraInlineMarkup>,
    ) -> Result<Poll> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("message_id", message_id.0)
            .extra(&extra);
        self.call("stopPoll", request).await
    }

    /// Sends a checklist on behalf of a business account.
    pub async fn send_checklist(
        &self,
        business_connection_id: &str,
        chat_id: ChatId,
        checklist: InputChecklist,
        extra: Option<ExtraSendChecklist>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("business_connection_id", business_connection_id)
            .field("chat_id", chat_id)
            .field("checklist", checklist)
            .extra(&extra);
        self.call("sendChecklist", request).await
    }

    /// Copies a message without a link to the original. A caption in
    /// `extra` replaces the original caption.
    pub async fn copy_message(
        &self,
        chat_id: impl Into<Recipient>,
        from_chat_id: impl Into<Recipient>,
        message_id: MessageId,
        extra: Option<ExtraCopyMessage>,
    ) -> Result<MessageId> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("from_chat_id", from_chat_id.into())
            .field("message_id", message_id.0)
            .extra(&extra)
            .opt_formatted(caption, TextContext::Caption);
        self.call("copyMessage", request).await
    }

    pub async fn copy_messages(
        &self,
        chat_id: impl Into<Recipient>,
        from_chat_id: impl Into<Recipient>,
        message_ids: &[MessageId],
        extra: Option<ExtraCopyMessages>,
    ) -> Result<Vec<MessageId>> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("from_chat_id", from_chat_id.into())
            .field("message_ids", raw_ids(message_ids))
            .extra(&extra);
        self.call("copyMessages", request).await
    }

    /// Copies a message the bot already holds.
    #[deprecated(note = "use `copy_message`")]
    pub async fn send_copy(
        &self,
        chat_id: impl Into<Recipient>,
        message: &Message,
        extra: Option<ExtraCopyMessage>,
    ) -> Result<MessageId> {
        self.copy_message(chat_id, message.chat.id, message.id, extra)
            .await
    }

    pub async fn approve_suggested_post(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        extra: Option<ExtraApproveSuggestedPost>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id)
            .field("message_id", message_id.0)
            .extra(&extra);
        self.call("approveSuggestedPost", request).await
    }

    pub async fn decline_suggested_post(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        extra: Option<ExtraDeclineSuggestedPost>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id)
            .field("message_id", message_id.0)
            .extra(&extra);
        self.call("declineSuggestedPost", request).await
    }
}

/// Message id lists go on the wire as plain integers.
pub(super) fn raw_ids(ids: &[MessageId]) -> Vec<i32> {
    ids.iter().map(|id| id.0).collect()
}
