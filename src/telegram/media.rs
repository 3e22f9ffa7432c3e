//! Sending files. Captions are normalized into `caption` /
//! `caption_entities`; thumbnails and covers may be uploaded alongside.

use super::Telegram;
use crate::error::Result;
use crate::extra::{
    ExtraAnimation, ExtraAudio, ExtraDocument, ExtraMediaGroup, ExtraPaidMedia, ExtraPhoto,
    ExtraSticker, ExtraVideo, ExtraVideoNote, ExtraVoice,
};
use crate::format::TextContext;
use crate::input_file::{InputFile, VideoNoteFile};
use crate::media::{InputMedia, InputPaidMedia};
use crate::request::Request;
use teloxide::types::{Message, Recipient};

impl Telegram {
    pub async fn send_photo(
        &self,
        chat_id: impl Into<Recipient>,
        photo: InputFile,
        extra: Option<ExtraPhoto>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("photo", photo)
            .extra(&extra)
            .opt_formatted(caption, TextContext::Caption);
        self.call("sendPhoto", request).await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<Recipient>,
        document: InputFile,
        extra: Option<ExtraDocument>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let thumbnail = extra.thumbnail.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("document", document)
            .extra(&extra)
            .opt_file("thumbnail", thumbnail)
            .opt_formatted(caption, TextContext::Caption);
        self.call("sendDocument", request).await
    }

    /// Sends audio meant for the music player (MP3 or M4A).
    pub async fn send_audio(
        &self,
        chat_id: impl Into<Recipient>,
        audio: InputFile,
        extra: Option<ExtraAudio>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let thumbnail = extra.thumbnail.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("audio", audio)
            .extra(&extra)
            .opt_file("thumbnail", thumbnail)
            .opt_formatted(caption, TextContext::Caption);
        self.call("sendAudio", request).await
    }

    pub async fn send_sticker(
        &self,
        chat_id: impl Into<Recipient>,
        sticker: InputFile,
        extra: Option<ExtraSticker>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("sticker", sticker)
            .extra(&extra);
        self.call("sendSticker", request).await
    }

    pub async fn send_video(
        &self,
        chat_id: impl Into<Recipient>,
        video: InputFile,
        extra: Option<ExtraVideo>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let thumbnail = extra.thumbnail.take();
        let cover = extra.cover.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("video", video)
            .extra(&extra)
            .opt_file("thumbnail", thumbnail)
            .opt_file("cover", cover)
            .opt_formatted(caption, TextContext::Caption);
        self.call("sendVideo", request).await
    }

    pub async fn send_animation(
        &self,
        chat_id: impl Into<Recipient>,
        animation: InputFile,
        extra: Option<ExtraAnimation>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let thumbnail = extra.thumbnail.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("animation", animation)
            .extra(&extra)
            .opt_file("thumbnail", thumbnail)
            .opt_formatted(caption, TextContext::Caption);
        self.call("sendAnimation", request).await
    }

    /// Sends a rounded square video. Video notes cannot be sent by URL,
    /// which [`VideoNoteFile`] rules out.
    pub async fn send_video_note(
        &self,
        chat_id: impl Into<Recipient>,
        video_note: VideoNoteFile,
        extra: Option<ExtraVideoNote>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let thumbnail = extra.thumbnail.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("video_note", video_note)
            .extra(&extra)
            .opt_file("thumbnail", thumbnail);
        self.call("sendVideoNote", request).await
    }

    pub async fn send_voice(
        &self,
        chat_id: impl Into<Recipient>,
        voice: InputFile,
        extra: Option<ExtraVoice>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .file("voice", voice)
            .extra(&extra)
            .opt_formatted(caption, TextContext::Caption);
        self.call("sendVoice", request).await
    }

    /// Sends an album. Local files inside the items travel as
    /// `attach://fileN` parts.
    pub async fn send_media_group(
        &self,
        chat_id: impl Into<Recipient>,
        media: Vec<InputMedia>,
        extra: Option<ExtraMediaGroup>,
    ) -> Result<Vec<Message>> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .attached("media", media)
            .extra(&extra);
        self.call("sendMediaGroup", request).await
    }

    pub async fn send_paid_media(
        &self,
        chat_id: impl Into<Recipient>,
        star_count: u32,
        media: Vec<InputPaidMedia>,
        extra: Option<ExtraPaidMedia>,
    ) -> Result<Message> {
        let mut extra = extra.unwrap_or_default();
        let caption = extra.caption.take();
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .field("star_count", star_count)
            .attached("media", media)
            .extra(&extra)
            .opt_formatted(caption, TextContext::Caption);
        self.call("sendPaidMedia", request).await
    }
}
