//! The bot itself: identity, update delivery and profile.

use super::Telegram;
use crate::error::Result;
use crate::extra::{ExtraCommandScope, ExtraDeleteWebhook, ExtraSetWebhook};
use crate::media::InputProfilePhoto;
use crate::request::Request;
use crate::types::{BotDescription, BotName, BotShortDescription, FileDescriptor};
use teloxide::types::{AllowedUpdate, BotCommand, ChatAdministratorRights, Me, Update, WebhookInfo};

impl Telegram {
    pub async fn get_me(&self) -> Result<Me> {
        self.call("getMe", Request::new()).await
    }

    /// Looks up a stored file. The returned descriptor carries the
    /// `file_path` needed by [`Telegram::get_file_link`].
    pub async fn get_file(&self, file_id: &str) -> Result<FileDescriptor> {
        self.call("getFile", Request::new().field("file_id", file_id))
            .await
    }

    /// Long-polls for incoming updates.
    pub async fn get_updates(
        &self,
        timeout: u32,
        limit: u8,
        offset: i32,
        allowed_updates: Option<Vec<AllowedUpdate>>,
    ) -> Result<Vec<Update>> {
        let request = Request::new()
            .field("timeout", timeout)
            .field("limit", limit)
            .field("offset", offset)
            .opt_field("allowed_updates", allowed_updates);
        self.call("getUpdates", request).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        self.call("getWebhookInfo", Request::new()).await
    }

    /// Registers `url` for outgoing webhook delivery. An empty string removes
    /// the webhook. A self-signed certificate is uploaded as a file part.
    pub async fn set_webhook(&self, url: &str, extra: Option<ExtraSetWebhook>) -> Result<bool> {
        let mut extra = extra.unwrap_or_default();
        let certificate = extra.certificate.take();
        let request = Request::new()
            .field("url", url)
            .extra(&extra)
            .opt_file("certificate", certificate);
        self.call("setWebhook", request).await
    }

    pub async fn delete_webhook(&self, extra: Option<ExtraDeleteWebhook>) -> Result<bool> {
        self.call("deleteWebhook", Request::new().extra(&extra))
            .await
    }

    pub async fn log_out(&self) -> Result<bool> {
        self.call("logOut", Request::new()).await
    }

    pub async fn close(&self) -> Result<bool> {
        self.call("close", Request::new()).await
    }

    pub async fn set_my_commands(
        &self,
        commands: Vec<BotCommand>,
        extra: Option<ExtraCommandScope>,
    ) -> Result<bool> {
        let request = Request::new().field("commands", commands).extra(&extra);
        self.call("setMyCommands", request).await
    }

    pub async fn delete_my_commands(&self, extra: Option<ExtraCommandScope>) -> Result<bool> {
        self.call("deleteMyCommands", Request::new().extra(&extra))
            .await
    }

    pub async fn get_my_commands(&self, extra: Option<ExtraCommandScope>) -> Result<Vec<BotCommand>> {
        self.call("getMyCommands", Request::new().extra(&extra))
            .await
    }

    pub async fn set_my_description(
        &self,
        description: &str,
        language_code: Option<&str>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("description", description)
            .opt_field("language_code", language_code);
        self.call("setMyDescription", request).await
    }

    pub async fn get_my_description(&self, language_code: Option<&str>) -> Result<BotDescription> {
        let request = Request::new().opt_field("language_code", language_code);
        self.call("getMyDescription", request).await
    }

    pub async fn set_my_name(&self, name: &str, language_code: Option<&str>) -> Result<bool> {
        let request = Request::new()
            .field("name", name)
            .opt_field("language_code", language_code);
        self.call("setMyName", request).await
    }

    pub async fn get_my_name(&self, language_code: Option<&str>) -> Result<BotName> {
        let request = Request::new().opt_field("language_code", language_code);
        self.call("getMyName", request).await
    }

    pub async fn set_my_short_description(
        &self,
        short_description: &str,
        language_code: Option<&str>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("short_description", short_description)
            .opt_field("language_code", language_code);
        self.call("setMyShortDescription", request).await
    }

    pub async fn get_my_short_description(
        &self,
        language_code: Option<&str>,
    ) -> Result<BotShortDescription> {
        let request = Request::new().opt_field("language_code", language_code);
        self.call("getMyShortDescription", request).await
    }

    pub async fn set_my_profile_photo(&self, photo: InputProfilePhoto) -> Result<bool> {
        self.call("setMyProfilePhoto", Request::new().attached("photo", photo))
            .await
    }

    pub async fn remove_my_profile_photo(&self) -> Result<bool> {
        self.call("removeMyProfilePhoto", Request::new()).await
    }

    /// Default rights suggested when the bot is added as an administrator.
    /// `None` clears them.
    pub async fn set_my_default_administrator_rights(
        &self,
        rights: Option<ChatAdministratorRights>,
        for_channels: Option<bool>,
    ) -> Result<bool> {
        let request = Request::new()
            .opt_field("rights", rights)
            .opt_field("for_channels", for_channels);
        self.call("setMyDefaultAdministratorRights", request).await
    }

    pub async fn get_my_default_administrator_rights(
        &self,
        for_channels: Option<bool>,
    ) -> Result<ChatAdministratorRights> {
        let request = Request::new().opt_field("for_channels", for_channels);
        self.call("getMyDefaultAdministratorRights", request).await
    }
}
