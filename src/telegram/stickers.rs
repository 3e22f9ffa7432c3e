//! Sticker sets owned by the bot.

use super::Telegram;
use crate::error::Result;
use crate::extra::ExtraCreateNewStickerSet;
use crate::input_file::InputFile;
use crate::media::InputSticker;
use crate::request::Request;
use crate::types::{FileDescriptor, StickerFormat};
use teloxide::types::{MaskPosition, Sticker, StickerSet, UserId};

impl Telegram {
    pub async fn get_sticker_set(&self, name: &str) -> Result<StickerSet> {
        let request = Request::new().field("name", name);
        self.call("getStickerSet", request).await
    }

    /// Uploads a sticker file for later use in set creation and editing.
    pub async fn upload_sticker_file(
        &self,
        user_id: UserId,
        sticker: InputFile,
        sticker_format: StickerFormat,
    ) -> Result<FileDescriptor> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("sticker_format", sticker_format)
            .file("sticker", sticker);
        self.call("uploadStickerFile", request).await
    }

    pub async fn create_new_sticker_set(
        &self,
        user_id: UserId,
        name: &str,
        title: &str,
        stickers: Vec<InputSticker>,
        extra: Option<ExtraCreateNewStickerSet>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("name", name)
            .field("title", title)
            .attached("stickers", stickers)
            .extra(&extra);
        self.call("createNewStickerSet", request).await
    }

    pub async fn add_sticker_to_set(
        &self,
        user_id: UserId,
        name: &str,
        sticker: InputSticker,
    ) -> Result<bool> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("name", name)
            .attached("sticker", sticker);
        self.call("addStickerToSet", request).await
    }

    /// Moves a sticker to a zero-based `position` in its set.
    pub async fn set_sticker_position_in_set(&self, sticker: &str, position: u32) -> Result<bool> {
        let request = Request::new()
            .field("sticker", sticker)
            .field("position", position);
        self.call("setStickerPositionInSet", request).await
    }

    /// Sets or, with `thumbnail = None`, drops the set thumbnail. The format
    /// defaults to static.
    pub async fn set_sticker_set_thumbnail(
        &self,
        name: &str,
        user_id: UserId,
        thumbnail: Option<InputFile>,
        format: Option<StickerFormat>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("name", name)
            .field("user_id", user_id)
            .field("format", format.unwrap_or_default())
            .opt_file("thumbnail", thumbnail);
        self.call("setStickerSetThumbnail", request).await
    }

    #[deprecated(note = "renamed to `set_sticker_set_thumbnail`")]
    pub async fn set_sticker_set_thumb(
        &self,
        name: &str,
        user_id: UserId,
        thumbnail: Option<InputFile>,
        format: Option<StickerFormat>,
    ) -> Result<bool> {
        self.set_sticker_set_thumbnail(name, user_id, thumbnail, format)
            .await
    }

    /// Only for mask stickers. `None` removes the position.
    pub async fn set_sticker_mask_position(
        &self,
        sticker: &str,
        mask_position: Option<MaskPosition>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("sticker", sticker)
            .opt_field("mask_position", mask_position);
        self.call("setStickerMaskPosition", request).await
    }

    pub async fn set_sticker_keywords(
        &self,
        sticker: &str,
        keywords: Option<Vec<String>>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("sticker", sticker)
            .opt_field("keywords", keywords);
        self.call("setStickerKeywords", request).await
    }

    pub async fn set_sticker_emoji_list(
        &self,
        sticker: &str,
        emoji_list: Vec<String>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("sticker", sticker)
            .field("emoji_list", emoji_list);
        self.call("setStickerEmojiList", request).await
    }

    pub async fn delete_sticker_set(&self, name: &str) -> Result<bool> {
        let request = Request::new().field("name", name);
        self.call("deleteStickerSet", request).await
    }

    pub async fn set_sticker_set_title(&self, name: &str, title: &str) -> Result<bool> {
        let request = Request::new().field("name", name).field("title", title);
        self.call("setStickerSetTitle", request).await
    }

    /// `None` falls back to the first sticker as the thumbnail.
    pub async fn set_custom_emoji_sticker_set_thumbnail(
        &self,
        name: &str,
        custom_emoji_id: Option<&str>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("name", name)
            .opt_field("custom_emoji_id", custom_emoji_id);
        self.call("setCustomEmojiStickerSetThumbnail", request)
            .await
    }

    pub async fn delete_sticker_from_set(&self, sticker: &str) -> Result<bool> {
        let request = Request::new().field("sticker", sticker);
        self.call("deleteStickerFromSet", request).await
    }

    pub async fn get_custom_emoji_stickers(
        &self,
        custom_emoji_ids: &[String],
    ) -> Result<Vec<Sticker>> {
        let request = Request::new().field("custom_emoji_ids", custom_emoji_ids);
        self.call("getCustomEmojiStickers", request).await
    }
}
