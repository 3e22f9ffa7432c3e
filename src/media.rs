//! Request objects that embed files: media group items, paid media, sticker
//! definitions, profile photos and story content.
//!
//! Their file fields are skipped by serde and spliced in by [`Attach`], which
//! turns local files into `attach://` references on the owning request.

use crate::format::{FormattedText, TextContext, normalize_text};
use crate::input_file::InputFile;
use crate::request::{Attach, Request};
use crate::types::StickerFormat;
use serde::Serialize;
use serde_json::{Map, Value};
use teloxide::types::{MaskPosition, ParseMode};

/// Serializes `value`, then adds its files and normalized caption.
fn embed<T: Serialize>(
    request: &mut Request,
    value: &T,
    files: Vec<(&'static str, Option<InputFile>)>,
    caption: Option<FormattedText>,
) -> Value {
    let mut fields = match request.encode(value) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, file) in files {
        if let Some(file) = file {
            fields.insert(key.to_owned(), file.attach(request));
        }
    }
    if let Some(caption) = caption {
        if let Err(e) = normalize_text(caption, TextContext::Caption).merge_into(&mut fields) {
            request.fail(e);
        }
    }
    Value::Object(fields)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaPhoto {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub caption: Option<FormattedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaVideo {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumbnail: Option<InputFile>,
    #[serde(skip)]
    pub cover: Option<InputFile>,
    #[serde(skip)]
    pub caption: Option<FormattedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaAnimation {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumbnail: Option<InputFile>,
    #[serde(skip)]
    pub caption: Option<FormattedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaAudio {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumbnail: Option<InputFile>,
    #[serde(skip)]
    pub caption: Option<FormattedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaDocument {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumbnail: Option<InputFile>,
    #[serde(skip)]
    pub caption: Option<FormattedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

/// One item of an album, or the replacement media of `editMessageMedia`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    pub fn photo(media: InputFile) -> Self {
        Self::Photo(InputMediaPhoto {
            media,
            caption: None,
            parse_mode: None,
            show_caption_above_media: None,
            has_spoiler: None,
        })
    }

    pub fn video(media: InputFile) -> Self {
        Self::Video(InputMediaVideo {
            media,
            thumbnail: None,
            cover: None,
            caption: None,
            start_timestamp: None,
            parse_mode: None,
            show_caption_above_media: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
            has_spoiler: None,
        })
    }

    pub fn animation(media: InputFile) -> Self {
        Self::Animation(InputMediaAnimation {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            show_caption_above_media: None,
            width: None,
            height: None,
            duration: None,
            has_spoiler: None,
        })
    }

    pub fn audio(media: InputFile) -> Self {
        Self::Audio(InputMediaAudio {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            duration: None,
            performer: None,
            title: None,
        })
    }

    pub fn document(media: InputFile) -> Self {
        Self::Document(InputMediaDocument {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            disable_content_type_detection: None,
        })
    }

    pub fn with_caption(mut self, caption: impl Into<FormattedText>) -> Self {
        let slot = match &mut self {
            Self::Photo(m) => &mut m.caption,
            Self::Video(m) => &mut m.caption,
            Self::Animation(m) => &mut m.caption,
            Self::Audio(m) => &mut m.caption,
            Self::Document(m) => &mut m.caption,
        };
        *slot = Some(caption.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        let slot = match &mut self {
            Self::Photo(m) => &mut m.parse_mode,
            Self::Video(m) => &mut m.parse_mode,
            Self::Animation(m) => &mut m.parse_mode,
            Self::Audio(m) => &mut m.parse_mode,
            Self::Document(m) => &mut m.parse_mode,
        };
        *slot = Some(parse_mode);
        self
    }
}

impl Attach for InputMedia {
    fn attach(self, request: &mut Request) -> Value {
        let (media, thumbnail, cover, caption) = match &self {
            Self::Photo(m) => (m.media.clone(), None, None, m.caption.clone()),
            Self::Video(m) => (
                m.media.clone(),
                m.thumbnail.clone(),
                m.cover.clone(),
                m.caption.clone(),
            ),
            Self::Animation(m) => (m.media.clone(), m.thumbnail.clone(), None, m.caption.clone()),
            Self::Audio(m) => (m.media.clone(), m.thumbnail.clone(), None, m.caption.clone()),
            Self::Document(m) => (m.media.clone(), m.thumbnail.clone(), None, m.caption.clone()),
        };
        let files = vec![
            ("media", Some(media)),
            ("thumbnail", thumbnail),
            ("cover", cover),
        ];
        embed(request, &self, files, caption)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputPaidMediaVideo {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumbnail: Option<InputFile>,
    #[serde(skip)]
    pub cover: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputPaidMedia {
    Photo {
        #[serde(skip)]
        media: InputFile,
    },
    Video(InputPaidMediaVideo),
}

impl InputPaidMedia {
    pub fn photo(media: InputFile) -> Self {
        Self::Photo { media }
    }

    pub fn video(media: InputFile) -> Self {
        Self::Video(InputPaidMediaVideo {
            media,
            thumbnail: None,
            cover: None,
            start_timestamp: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        })
    }
}

impl Attach for InputPaidMedia {
    fn attach(self, request: &mut Request) -> Value {
        let files = match &self {
            Self::Photo { media } => vec![("media", Some(media.clone()))],
            Self::Video(v) => vec![
                ("media", Some(v.media.clone())),
                ("thumbnail", v.thumbnail.clone()),
                ("cover", v.cover.clone()),
            ],
        };
        embed(request, &self, files, None)
    }
}

/// A sticker to add to a set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSticker {
    #[serde(skip)]
    pub sticker: InputFile,
    pub format: StickerFormat,
    pub emoji_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl InputSticker {
    pub fn new(sticker: InputFile, format: StickerFormat, emoji_list: Vec<String>) -> Self {
        Self {
            sticker,
            format,
            emoji_list,
            mask_position: None,
            keywords: None,
        }
    }
}

impl Attach for InputSticker {
    fn attach(self, request: &mut Request) -> Value {
        let files = vec![("sticker", Some(self.sticker.clone()))];
        embed(request, &self, files, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputProfilePhoto {
    Static {
        #[serde(skip)]
        photo: InputFile,
    },
    Animated {
        #[serde(skip)]
        animation: InputFile,
        #[serde(skip_serializing_if = "Option::is_none")]
        main_frame_timestamp: Option<f64>,
    },
}

impl Attach for InputProfilePhoto {
    fn attach(self, request: &mut Request) -> Value {
        let files = match &self {
            Self::Static { photo } => vec![("photo", Some(photo.clone()))],
            Self::Animated { animation, .. } => vec![("animation", Some(animation.clone()))],
        };
        embed(request, &self, files, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputStoryContent {
    Photo {
        #[serde(skip)]
        photo: InputFile,
    },
    Video {
        #[serde(skip)]
        video: InputFile,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cover_frame_timestamp: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_animation: Option<bool>,
    },
}

impl Attach for InputStoryContent {
    fn attach(self, request: &mut Request) -> Value {
        let files = match &self {
            Self::Photo { photo } => vec![("photo", Some(photo.clone()))],
            Self::Video { video, .. } => vec![("video", Some(video.clone()))],
        };
        embed(request, &self, files, None)
    }
}
