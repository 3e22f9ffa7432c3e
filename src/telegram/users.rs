//! Per-user operations: profile media, emoji status, passport errors and
//! verification.

use super::Telegram;
use crate::error::Result;
use crate::extra::{ExtraGetUserProfileAudios, ExtraSetUserEmojiStatus, ExtraVerify};
use crate::request::Request;
use serde_json::Value;
use teloxide::types::{PassportElementError, Recipient, UserId, UserProfilePhotos};

impl Telegram {
    pub async fn get_user_profile_photos(
        &self,
        user_id: UserId,
        offset: Option<u32>,
        limit: Option<u8>,
    ) -> Result<UserProfilePhotos> {
        let request = Request::new()
            .field("user_id", user_id)
            .opt_field("offset", offset)
            .opt_field("limit", limit);
        self.call("getUserProfilePhotos", request).await
    }

    pub async fn get_user_profile_audios(
        &self,
        user_id: UserId,
        extra: Option<ExtraGetUserProfileAudios>,
    ) -> Result<Value> {
        let request = Request::new().field("user_id", user_id).extra(&extra);
        self.call("getUserProfileAudios", request).await
    }

    /// Needs the user to have allowed the bot to manage their emoji status.
    pub async fn set_user_emoji_status(
        &self,
        user_id: UserId,
        extra: Option<ExtraSetUserEmojiStatus>,
    ) -> Result<bool> {
        let request = Request::new().field("user_id", user_id).extra(&extra);
        self.call("setUserEmojiStatus", request).await
    }

    /// Reports problems with the Telegram Passport elements a user shared.
    /// The user cannot resend the elements until every error is fixed.
    pub async fn set_passport_data_errors(
        &self,
        user_id: UserId,
        errors: Vec<PassportElementError>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("errors", errors);
        self.call("setPassportDataErrors", request).await
    }

    pub async fn verify_user(&self, user_id: UserId, extra: Option<ExtraVerify>) -> Result<bool> {
        let request = Request::new().field("user_id", user_id).extra(&extra);
        self.call("verifyUser", request).await
    }

    pub async fn verify_chat(
        &self,
        chat_id: impl Into<Recipient>,
        extra: Option<ExtraVerify>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .extra(&extra);
        self.call("verifyChat", request).await
    }

    pub async fn remove_user_verification(&self, user_id: UserId) -> Result<bool> {
        let request = Request::new().field("user_id", user_id);
        self.call("removeUserVerification", request).await
    }

    pub async fn remove_chat_verification(&self, chat_id: impl Into<Recipient>) -> Result<bool> {
        let request = Request::new().field("chat_id", chat_id.into());
        self.call("removeChatVerification", request).await
    }
}
