//! Chat administration: members, permissions, invite links and chat settings.

use super::Telegram;
use crate::error::Result;
use crate::extra::{
    ExtraBanChatMember, ExtraChatInviteLink, ExtraPinChatMessage, ExtraPromoteChatMember,
    ExtraRestrictChatMember, ExtraSetChatPermissions, ExtraSubscriptionInviteLink,
    ExtraUnbanChatMember,
};
use crate::input_file::InputFile;
use crate::request::Request;
use serde_json::Value;
use teloxide::types::{
    Chat, ChatId, ChatInviteLink, ChatMember, ChatPermissions, MenuButton, MessageId, Recipient,
    UserId,
};

/// Subscription links are always monthly.
const SUBSCRIPTION_PERIOD_SECS: u32 = 30 * 24 * 60 * 60;

impl Telegram {
    pub async fn get_chat(&self, chat_id: impl Into<Recipient>) -> Result<Chat> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("getChat", request).await
    }

    pub async fn get_chat_administrators(
        &self,
        chat_id: impl Into<Recipient>,
    ) -> Result<Vec<ChatMember>> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("getChatAdministrators", request).await
    }

    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
    ) -> Result<ChatMember> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id);
        self.call("getChatMember", request).await
    }

    pub async fn get_chat_members_count(&self, chat_id: impl Into<Recipient>) -> Result<u32> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("getChatMembersCount", request).await
    }

    pub async fn set_chat_permissions(
        &self,
        chat_id: impl Into<Recipient>,
        permissions: ChatPermissions,
        extra: Option<ExtraSetChatPermissions>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("permissions", permissions)
            .extra(&extra);
        self.call("setChatPermissions", request).await
    }

    /// Bans a user. `until_date` is a unix timestamp; omitted means forever.
    pub async fn ban_chat_member(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
        until_date: Option<i64>,
        extra: Option<ExtraBanChatMember>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id)
            .opt_field("until_date", until_date)
            .extra(&extra);
        self.call("banChatMember", request).await
    }

    #[deprecated(note = "renamed to `ban_chat_member`")]
    pub async fn kick_chat_member(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
        until_date: Option<i64>,
        extra: Option<ExtraBanChatMember>,
    ) -> Result<bool> {
        self.ban_chat_member(chat_id, user_id, until_date, extra)
            .await
    }

    pub async fn unban_chat_member(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
        extra: Option<ExtraUnbanChatMember>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id)
            .extra(&extra);
        self.call("unbanChatMember", request).await
    }

    /// Grants administrator rights. Leaving every right unset demotes the
    /// user.
    pub async fn promote_chat_member(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
        extra: Option<ExtraPromoteChatMember>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id)
            .extra(&extra);
        self.call("promoteChatMember", request).await
    }

    pub async fn restrict_chat_member(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
        permissions: ChatPermissions,
        extra: Option<ExtraRestrictChatMember>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id)
            .field("permissions", permissions)
            .extra(&extra);
        self.call("restrictChatMember", request).await
    }

    pub async fn set_chat_administrator_custom_title(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
        custom_title: &str,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id)
            .field("custom_title", custom_title);
        self.call("setChatAdministratorCustomTitle", request).await
    }

    /// Generates a new primary invite link, revoking the previous one.
    pub async fn export_chat_invite_link(&self, chat_id: impl Into<Recipient>) -> Result<String> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("exportChatInviteLink", request).await
    }

    pub async fn create_chat_invite_link(
        &self,
        chat_id: impl Into<Recipient>,
        extra: Option<ExtraChatInviteLink>,
    ) -> Result<ChatInviteLink> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .extra(&extra);
        self.call("createChatInviteLink", request).await
    }

    pub async fn edit_chat_invite_link(
        &self,
        chat_id: impl Into<Recipient>,
        invite_link: &str,
        extra: Option<ExtraChatInviteLink>,
    ) -> Result<ChatInviteLink> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("invite_link", invite_link)
            .extra(&extra);
        self.call("editChatInviteLink", request).await
    }

    /// Creates a paid invite link charging `subscription_price` stars every
    /// 30 days.
    pub async fn create_chat_subscription_invite_link(
        &self,
        chat_id: impl Into<Recipient>,
        subscription_price: u32,
        extra: Option<ExtraSubscriptionInviteLink>,
    ) -> Result<ChatInviteLink> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("subscription_price", subscription_price)
            .field("subscription_period", SUBSCRIPTION_PERIOD_SECS)
            .extra(&extra);
        self.call("createChatSubscriptionInviteLink", request).await
    }

    pub async fn edit_chat_subscription_invite_link(
        &self,
        chat_id: impl Into<Recipient>,
        invite_link: &str,
        extra: Option<ExtraSubscriptionInviteLink>,
    ) -> Result<ChatInviteLink> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("invite_link", invite_link)
            .extra(&extra);
        self.call("editChatSubscriptionInviteLink", request).await
    }

    pub async fn revoke_chat_invite_link(
        &self,
        chat_id: impl Into<Recipient>,
        invite_link: &str,
    ) -> Result<ChatInviteLink> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("invite_link", invite_link);
        self.call("revokeChatInviteLink", request).await
    }

    /// The photo must be uploaded; file ids and URLs are rejected by the API.
    pub async fn set_chat_photo(
        &self,
        chat_id: impl Into<Recipient>,
        photo: InputFile,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("photo", photo);
        self.call("setChatPhoto", request).await
    }

    pub async fn delete_chat_photo(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("deleteChatPhoto", request).await
    }

    pub async fn set_chat_title(&self, chat_id: impl Into<Recipient>, title: &str) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("title", title);
        self.call("setChatTitle", request).await
    }

    /// `None` omits the field, which clears the description; so does
    /// `Some("")`.
    pub async fn set_chat_description(
        &self,
        chat_id: impl Into<Recipient>,
        description: Option<&str>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .opt_field("description", description);
        self.call("setChatDescription", request).await
    }

    pub async fn pin_chat_message(
        &self,
        chat_id: impl Into<Recipient>,
        message_id: MessageId,
        extra: Option<ExtraPinChatMessage>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("message_id", message_id.0)
            .extra(&extra);
        self.call("pinChatMessage", request).await
    }

    /// Unpins one message, or the most recent pin when `message_id` is
    /// `None`.
    pub async fn unpin_chat_message(
        &self,
        chat_id: impl Into<Recipient>,
        message_id: Option<MessageId>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .opt_field("message_id", message_id.map(|id| id.0));
        self.call("unpinChatMessage", request).await
    }

    pub async fn unpin_all_chat_messages(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("unpinAllChatMessages", request).await
    }

    pub async fn leave_chat(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("leaveChat", request).await
    }

    pub async fn set_chat_sticker_set(
        &self,
        chat_id: impl Into<Recipient>,
        sticker_set_name: &str,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("sticker_set_name", sticker_set_name);
        self.call("setChatStickerSet", request).await
    }

    pub async fn delete_chat_sticker_set(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("deleteChatStickerSet", request).await
    }

    pub async fn approve_chat_join_request(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id);
        self.call("approveChatJoinRequest", request).await
    }

    pub async fn decline_chat_join_request(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id);
        self.call("declineChatJoinRequest", request).await
    }

    pub async fn ban_chat_sender_chat(
        &self,
        chat_id: impl Into<Recipient>,
        sender_chat_id: ChatId,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("sender_chat_id", sender_chat_id);
        self.call("banChatSenderChat", request).await
    }

    pub async fn unban_chat_sender_chat(
        &self,
        chat_id: impl Into<Recipient>,
        sender_chat_id: ChatId,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("sender_chat_id", sender_chat_id);
        self.call("unbanChatSenderChat", request).await
    }

    /// Boosts a user added to a chat, as a raw `UserChatBoosts` object.
    pub async fn get_user_chat_boosts(
        &self,
        chat_id: impl Into<Recipient>,
        user_id: UserId,
    ) -> Result<Value> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("user_id", user_id);
        self.call("getUserChatBoosts", request).await
    }

    /// Changes the menu button of a private chat, or the default one when
    /// `chat_id` is `None`.
    pub async fn set_chat_menu_button(
        &self,
        chat_id: Option<ChatId>,
        menu_button: Option<MenuButton>,
    ) -> Result<bool> {
        let request = Request::new()
            .opt_field("chat_id", chat_id)
            .opt_field("menu_button", menu_button);
        self.call("setChatMenuButton", request).await
    }

    pub async fn get_chat_menu_button(&self, chat_id: Option<ChatId>) -> Result<MenuButton> {
        let request = Request::new().opt_field("chat_id", chat_id);
        self.call("getChatMenuButton", request).await
    }
}
