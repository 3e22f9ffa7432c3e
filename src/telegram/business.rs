//! Gifts, managed business accounts and stories.
//!
//! Results of these methods are not modeled by the type library and come
//! back as raw JSON.

use super::Telegram;
use super::messages::raw_ids;
use crate::error::Result;
use crate::extra::{
    ExtraEditStory, ExtraGetGifts, ExtraGiftText, ExtraPostStory, ExtraRepostStory,
    ExtraSendGift, ExtraTransferGift, ExtraUpgradeGift,
};
use crate::format::TextContext;
use crate::media::{InputProfilePhoto, InputStoryContent};
use crate::request::Request;
use crate::types::AcceptedGiftTypes;
use serde_json::Value;
use teloxide::types::{ChatId, MessageId, Recipient, UserId};

impl Telegram {
    pub async fn get_available_gifts(&self) -> Result<Value> {
        self.call("getAvailableGifts", Request::new()).await
    }

    /// Sends a gift to the user or channel named in `extra`.
    pub async fn send_gift(&self, gift_id: &str, extra: Option<ExtraSendGift>) -> Result<bool> {
        let request = Request::new().field("gift_id", gift_id).extra(&extra);
        self.call("sendGift", request).await
    }

    pub async fn gift_premium_subscription(
        &self,
        user_id: UserId,
        month_count: u8,
        star_count: u32,
        extra: Option<ExtraGiftText>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("month_count", month_count)
            .field("star_count", star_count)
            .extra(&extra);
        self.call("giftPremiumSubscription", request).await
    }

    pub async fn get_business_account_gifts(
        &self,
        business_connection_id: &str,
        extra: Option<ExtraGetGifts>,
    ) -> Result<Value> {
        let request = business(business_connection_id).extra(&extra);
        self.call("getBusinessAccountGifts", request).await
    }

    pub async fn get_user_gifts(
        &self,
        user_id: UserId,
        extra: Option<ExtraGetGifts>,
    ) -> Result<Value> {
        let request = Request::new().field("user_id", user_id).extra(&extra);
        self.call("getUserGifts", request).await
    }

    pub async fn get_chat_gifts(
        &self,
        chat_id: impl Into<Recipient>,
        extra: Option<ExtraGetGifts>,
    ) -> Result<Value> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .extra(&extra);
        self.call("getChatGifts", request).await
    }

    pub async fn convert_gift_to_stars(
        &self,
        business_connection_id: &str,
        owned_gift_id: &str,
    ) -> Result<bool> {
        let request = business(business_connection_id).field("owned_gift_id", owned_gift_id);
        self.call("convertGiftToStars", request).await
    }

    pub async fn upgrade_gift(
        &self,
        business_connection_id: &str,
        owned_gift_id: &str,
        extra: Option<ExtraUpgradeGift>,
    ) -> Result<bool> {
        let request = business(business_connection_id)
            .field("owned_gift_id", owned_gift_id)
            .extra(&extra);
        self.call("upgradeGift", request).await
    }

    pub async fn transfer_gift(
        &self,
        business_connection_id: &str,
        owned_gift_id: &str,
        new_owner_chat_id: ChatId,
        extra: Option<ExtraTransferGift>,
    ) -> Result<bool> {
        let request = business(business_connection_id)
            .field("owned_gift_id", owned_gift_id)
            .field("new_owner_chat_id", new_owner_chat_id)
            .extra(&extra);
        self.call("transferGift", request).await
    }

    pub async fn read_business_message(
        &self,
        business_connection_id: &str,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<bool> {
        let request = business(business_connection_id)
            .field("chat_id", chat_id)
            .field("message_id", message_id.0);
        self.call("readBusinessMessage", request).await
    }

    pub async fn delete_business_messages(
        &self,
        business_connection_id: &str,
        message_ids: &[MessageId],
    ) -> Result<bool> {
        let request =
            business(business_connection_id).field("message_ids", raw_ids(message_ids));
        self.call("deleteBusinessMessages", request).await
    }

    pub async fn set_business_account_name(
        &self,
        business_connection_id: &str,
        first_name: &str,
        last_name: Option<&str>,
    ) -> Result<bool> {
        let request = business(business_connection_id)
            .field("first_name", first_name)
            .opt_field("last_name", last_name);
        self.call("setBusinessAccountName", request).await
    }

    pub async fn set_business_account_username(
        &self,
        business_connection_id: &str,
        username: Option<&str>,
    ) -> Result<bool> {
        let request = business(business_connection_id).opt_field("username", username);
        self.call("setBusinessAccountUsername", request).await
    }

    pub async fn set_business_account_bio(
        &self,
        business_connection_id: &str,
        bio: Option<&str>,
    ) -> Result<bool> {
        let request = business(business_connection_id).opt_field("bio", bio);
        self.call("setBusinessAccountBio", request).await
    }

    /// `is_public` targets the photo shown to users hidden by privacy
    /// settings.
    pub async fn set_business_account_profile_photo(
        &self,
        business_connection_id: &str,
        photo: InputProfilePhoto,
        is_public: Option<bool>,
    ) -> Result<bool> {
        let request = business(business_connection_id)
            .attached("photo", photo)
            .opt_field("is_public", is_public);
        self.call("setBusinessAccountProfilePhoto", request).await
    }

    pub async fn remove_business_account_profile_photo(
        &self,
        business_connection_id: &str,
        is_public: Option<bool>,
    ) -> Result<bool> {
        let request = business(business_connection_id).opt_field("is_public", is_public);
        self.call("removeBusinessAccountProfilePhoto", request)
            .await
    }

    pub async fn set_business_account_gift_settings(
        &self,
        business_connection_id: &str,
        show_gift_button: bool,
        accepted_gift_types: AcceptedGiftTypes,
    ) -> Result<bool> {
        let request = business(business_connection_id)
            .field("show_gift_button", show_gift_button)
            .field("accepted_gift_types", accepted_gift_types);
        self.call("setBusinessAccountGiftSettings", request).await
    }

    pub async fn get_business_account_star_balance(
        &self,
        business_connection_id: &str,
    ) -> Result<Value> {
        self.call(
            "getBusinessAccountStarBalance",
            business(business_connection_id),
        )
        .await
    }

    /// Moves Stars from the business account to the bot's balance.
    pub async fn transfer_business_account_stars(
        &self,
        business_connection_id: &str,
        star_count: u32,
    ) -> Result<bool> {
        let request = business(business_connection_id).field("star_count", star_count);
        self.call("transferBusinessAccountStars", request).await
    }

    /// Posts a story on behalf of the business account. `active_period` is in
    /// seconds.
    pub async fn post_story(
        &self,
        business_connection_id: &str,
        content: InputStoryContent,
        active_period: u32,
        extra: Option<ExtraPostStory>,
    ) -> Result<Value> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let request = business(business_connection_id)
            .attached("content", content)
            .field("active_period", active_period)
            .extra(&extra)
            .opt_formatted(caption, TextContext::Caption);
        self.call("postStory", request).await
    }

    pub async fn repost_story(
        &self,
        business_connection_id: &str,
        from_chat_id: ChatId,
        from_story_id: i32,
        active_period: u32,
        extra: Option<ExtraRepostStory>,
    ) -> Result<Value> {
        let request = business(business_connection_id)
            .field("from_chat_id", from_chat_id)
            .field("from_story_id", from_story_id)
            .field("active_period", active_period)
            .extra(&extra);
        self.call("repostStory", request).await
    }

    pub async fn edit_story(
        &self,
        business_connection_id: &str,
        story_id: i32,
        content: InputStoryContent,
        extra: Option<ExtraEditStory>,
    ) -> Result<Value> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let request = business(business_connection_id)
            .field("story_id", story_id)
            .attached("content", content)
            .extra(&extra)
            .opt_formatted(caption, TextContext::Caption);
        self.call("editStory", request).await
    }

    pub async fn delete_story(&self, business_connection_id: &str, story_id: i32) -> Result<bool> {
        let request = business(business_connection_id).field("story_id", story_id);
        self.call("deleteStory", request).await
    }
}

fn business(business_connection_id: &str) -> Request {
    Request::new().field("business_connection_id", business_connection_id)
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingDispatcher;
    use super::*;
    use crate::format::FormattedText;
    use crate::input_file::InputFile;
    use serde_json::json;
    use teloxide::types::MessageEntity;

    #[tokio::test]
    async fn gift_to_channel_with_text() {
        let recorder = RecordingDispatcher::new();
        let extra = ExtraSendGift {
            chat_id: Some(Recipient::ChannelUsername("@news".to_string())),
            text: ExtraGiftText {
                text: Some("Congrats".to_string()),
                ..ExtraGiftText::default()
            },
            ..ExtraSendGift::default()
        };
        recorder
            .bot()
            .send_gift("5170145012310081615", Some(extra))
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"gift_id": "5170145012310081615", "chat_id": "@news", "text": "Congrats"})
        );
    }

    #[tokio::test]
    async fn gift_to_user_sends_numeric_id() {
        let recorder = RecordingDispatcher::new();
        let extra = ExtraSendGift {
            user_id: Some(UserId(42)),
            pay_for_upgrade: Some(true),
            ..ExtraSendGift::default()
        };
        recorder.bot().send_gift("g1", Some(extra)).await.unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"gift_id": "g1", "user_id": 42, "pay_for_upgrade": true})
        );
    }

    #[tokio::test]
    async fn gift_listing_filters() {
        let recorder = RecordingDispatcher::replying(json!({"total_count": 0, "gifts": []}));
        let extra = ExtraGetGifts {
            exclude_unique: Some(true),
            limit: Some(20),
            ..ExtraGetGifts::default()
        };
        let gifts = recorder
            .bot()
            .get_user_gifts(UserId(42), Some(extra))
            .await
            .unwrap();
        assert_eq!(gifts["total_count"], json!(0));
        assert_eq!(
            recorder.last().body(),
            json!({"user_id": 42, "exclude_unique": true, "limit": 20})
        );
    }

    #[tokio::test]
    async fn transfer_names_new_owner() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .transfer_gift("bc1", "og1", ChatId(99), Some(ExtraTransferGift { star_count: Some(25) }))
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({
                "business_connection_id": "bc1",
                "owned_gift_id": "og1",
                "new_owner_chat_id": 99,
                "star_count": 25
            })
        );
    }

    #[tokio::test]
    async fn business_messages_by_id() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .delete_business_messages("bc1", &[MessageId(1), MessageId(2)])
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"business_connection_id": "bc1", "message_ids": [1, 2]})
        );
    }

    #[tokio::test]
    async fn profile_photo_is_attached() {
        let recorder = RecordingDispatcher::new();
        let photo = InputProfilePhoto::Static {
            photo: InputFile::path("/tmp/me.jpg"),
        };
        recorder
            .bot()
            .set_business_account_profile_photo("bc1", photo, Some(true))
            .await
            .unwrap();
        let call = recorder.last();
        assert_eq!(
            call.body(),
            json!({
                "business_connection_id": "bc1",
                "photo": {"type": "static", "photo": "attach://file0"},
                "is_public": true
            })
        );
        assert_eq!(call.upload_names(), vec!["file0"]);
    }

    #[tokio::test]
    async fn gift_settings_send_every_type_flag() {
        let recorder = RecordingDispatcher::new();
        let types = AcceptedGiftTypes {
            unlimited_gifts: true,
            ..AcceptedGiftTypes::default()
        };
        recorder
            .bot()
            .set_business_account_gift_settings("bc1", false, types)
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body()["accepted_gift_types"],
            json!({
                "unlimited_gifts": true,
                "limited_gifts": false,
                "unique_gifts": false,
                "premium_subscription": false
            })
        );
    }

    #[tokio::test]
    async fn story_caption_is_normalized() {
        let recorder = RecordingDispatcher::replying(json!({"id": 1}));
        let extra = ExtraPostStory {
            caption: Some(FormattedText::with_entities(
                "Launch",
                vec![MessageEntity::italic(0, 6)],
            )),
            ..ExtraPostStory::default()
        };
        let content = InputStoryContent::Photo {
            photo: InputFile::memory(vec![0xff], "story.jpg"),
        };
        let story = recorder
            .bot()
            .post_story("bc1", content, 86_400, Some(extra))
            .await
            .unwrap();
        assert_eq!(story["id"], json!(1));

        let call = recorder.last();
        let body = call.body();
        assert_eq!(
            body["content"],
            json!({"type": "photo", "photo": "attach://file0"})
        );
        assert_eq!(body["active_period"], json!(86_400));
        assert_eq!(body["caption"], json!("Launch"));
        assert_eq!(
            body["caption_entities"],
            json!([{"type": "italic", "offset": 0, "length": 6}])
        );
        assert_eq!(call.upload_names(), vec!["file0"]);
    }

    #[tokio::test]
    async fn repost_and_delete_story() {
        let recorder = RecordingDispatcher::new();
        let bot = recorder.bot();
        let _ = bot
            .repost_story("bc1", ChatId(-100), 4, 3600, None)
            .await;
        bot.delete_story("bc1", 4).await.unwrap();

        let calls = recorder.calls();
        assert_eq!(
            calls[0].body(),
            json!({
                "business_connection_id": "bc1",
                "from_chat_id": -100,
                "from_story_id": 4,
                "active_period": 3600
            })
        );
        assert_eq!(
            calls[1].body(),
            json!({"business_connection_id": "bc1", "story_id": 4})
        );
    }
}
