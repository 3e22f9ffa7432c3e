//! Rich-text normalization.
//!
//! Text arguments accept either a plain string or a string with formatting
//! entities. The wire protocol has two mutually exclusive key pairs for them,
//! `text`/`entities` for message bodies and `caption`/`caption_entities` for
//! anything attached to media. The calling operation picks the pair; the
//! value itself never does.

use serde_json::{Map, Value};
use teloxide::types::MessageEntity;

/// A plain string, or a string with its formatting entity spans.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedText {
    Plain(String),
    Entities {
        text: String,
        entities: Vec<MessageEntity>,
    },
}

impl FormattedText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn with_entities(text: impl Into<String>, entities: Vec<MessageEntity>) -> Self {
        Self::Entities {
            text: text.into(),
            entities,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Entities { text, .. } => text,
        }
    }

    pub fn entities(&self) -> &[MessageEntity] {
        match self {
            Self::Plain(_) => &[],
            Self::Entities { entities, .. } => entities,
        }
    }
}

impl From<String> for FormattedText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<&str> for FormattedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

impl From<&String> for FormattedText {
    fn from(text: &String) -> Self {
        Self::Plain(text.clone())
    }
}

/// Which wire key pair a text value lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContext {
    /// Message bodies: `text` + `entities`.
    Message,
    /// Media captions: `caption` + `caption_entities`.
    Caption,
}

impl TextContext {
    pub const fn text_key(self) -> &'static str {
        match self {
            Self::Message => "text",
            Self::Caption => "caption",
        }
    }

    pub const fn entities_key(self) -> &'static str {
        match self {
            Self::Message => "entities",
            Self::Caption => "caption_entities",
        }
    }
}

/// The fields a text value contributes to a request.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPair {
    pub context: TextContext,
    pub text: String,
    /// `None` for plain strings and for entity lists that turned out empty.
    pub entities: Option<Vec<MessageEntity>>,
}

pub fn normalize_text(value: FormattedText, context: TextContext) -> FieldPair {
    match value {
        FormattedText::Plain(text) => FieldPair {
            context,
            text,
            entities: None,
        },
        FormattedText::Entities { text, entities } => FieldPair {
            context,
            text,
            entities: (!entities.is_empty()).then_some(entities),
        },
    }
}

impl FieldPair {
    /// Writes the pair into `fields`.
    ///
    /// Entities and `parse_mode` cannot both reach the API, so emitting
    /// entities removes any `parse_mode` already present. A plain string
    /// leaves `parse_mode` untouched.
    pub fn merge_into(self, fields: &mut Map<String, Value>) -> Result<(), serde_json::Error> {
        fields.insert(self.context.text_key().to_owned(), Value::String(self.text));
        if let Some(entities) = self.entities {
            fields.insert(
                self.context.entities_key().to_owned(),
                serde_json::to_value(entities)?,
            );
            fields.remove("parse_mode");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use teloxide::types::ParseMode;

    fn fields_with_parse_mode() -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("chat_id".to_owned(), json!(1));
        fields.insert(
            "parse_mode".to_owned(),
            serde_json::to_value(ParseMode::Html).unwrap(),
        );
        fields
    }

    #[test]
    fn plain_message_text_has_no_entities_key() {
        let pair = normalize_text("hello".into(), TextContext::Message);
        assert_eq!(pair.text, "hello");
        assert!(pair.entities.is_none());

        let mut fields = fields_with_parse_mode();
        pair.merge_into(&mut fields).unwrap();
        assert_eq!(fields["text"], json!("hello"));
        assert!(!fields.contains_key("entities"));
        assert_eq!(fields["parse_mode"], json!("HTML"));
    }

    #[test]
    fn entities_take_precedence_over_parse_mode() {
        let value = FormattedText::with_entities("hello world", vec![MessageEntity::bold(0, 5)]);
        let mut fields = fields_with_parse_mode();
        normalize_text(value, TextContext::Message)
            .merge_into(&mut fields)
            .unwrap();

        assert_eq!(fields["text"], json!("hello world"));
        assert_eq!(
            fields["entities"],
            json!([{"type": "bold", "offset": 0, "length": 5}])
        );
        assert!(!fields.contains_key("parse_mode"));
    }

    #[test]
    fn caption_context_uses_caption_keys() {
        let value = FormattedText::with_entities("pic", vec![MessageEntity::italic(0, 3)]);
        let mut fields = Map::new();
        normalize_text(value, TextContext::Caption)
            .merge_into(&mut fields)
            .unwrap();

        assert_eq!(fields["caption"], json!("pic"));
        assert!(fields.contains_key("caption_entities"));
        assert!(!fields.contains_key("text"));
        assert!(!fields.contains_key("entities"));
    }

    #[test]
    fn plain_caption_keeps_parse_mode() {
        let mut fields = fields_with_parse_mode();
        normalize_text("<b>pic</b>".into(), TextContext::Caption)
            .merge_into(&mut fields)
            .unwrap();
        assert_eq!(fields["caption"], json!("<b>pic</b>"));
        assert!(!fields.contains_key("caption_entities"));
        assert_eq!(fields["parse_mode"], json!("HTML"));
    }

    #[test]
    fn empty_entity_list_behaves_like_plain_text() {
        let value = FormattedText::with_entities("hi", vec![]);
        let pair = normalize_text(value, TextContext::Message);
        assert!(pair.entities.is_none());

        let mut fields = fields_with_parse_mode();
        pair.merge_into(&mut fields).unwrap();
        assert_eq!(fields["parse_mode"], json!("HTML"));
    }

    #[test]
    fn same_value_maps_to_either_context() {
        let value = FormattedText::with_entities("x", vec![MessageEntity::code(0, 1)]);
        let message = normalize_text(value.clone(), TextContext::Message);
        let caption = normalize_text(value, TextContext::Caption);
        assert_eq!(message.text, caption.text);
        assert_eq!(message.entities, caption.entities);
        assert_ne!(message.context, caption.context);
    }

    #[test]
    fn accessors_expose_text_and_entities() {
        let plain = FormattedText::plain("a");
        assert_eq!(plain.text(), "a");
        assert!(plain.entities().is_empty());

        let rich = FormattedText::with_entities("b", vec![MessageEntity::bold(0, 1)]);
        assert_eq!(rich.text(), "b");
        assert_eq!(rich.entities().len(), 1);
    }
}
