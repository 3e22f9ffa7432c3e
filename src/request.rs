//! The flat parameter object every operation hands to the dispatcher.
//!
//! Builders fill a [`Request`] in three stages: required positional fields,
//! then the caller's extra bag, then fields produced by the rich-text
//! normalizer. Each stage may overwrite a key written by an earlier one, so
//! the order of the builder calls is the precedence order.
//!
//! Encoding failures are not reported by the builder methods. The first one
//! is kept and surfaces from [`Request::into_parts`], which the dispatcher
//! calls before anything goes on the wire.

use crate::error::{Error, Result};
use crate::format::{FormattedText, TextContext, normalize_text};
use crate::input_file::{InputFile, LocalFile};
use serde::Serialize;
use serde_json::{Map, Value};

/// A local file travelling beside the JSON fields as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Multipart part name: the field name for top-level files, `fileN` for
    /// files referenced through `attach://fileN`.
    pub name: String,
    pub file: LocalFile,
}

#[derive(Debug, Default)]
pub struct Request {
    fields: Map<String, Value>,
    uploads: Vec<Upload>,
    error: Option<serde_json::Error>,
}

/// Values that may embed local files somewhere inside their JSON shape.
pub(crate) trait Attach {
    /// Moves local files into `request` and returns the value to embed.
    fn attach(self, request: &mut Request) -> Value;
}

impl<A: Attach> Attach for Vec<A> {
    fn attach(self, request: &mut Request) -> Value {
        Value::Array(self.into_iter().map(|item| item.attach(request)).collect())
    }
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field unconditionally.
    pub fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        let value = self.encode(&value);
        self.fields.insert(key.to_owned(), value);
        self
    }

    /// Sets a field only when the caller supplied a value.
    pub fn opt_field<T: Serialize>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Merges every present field of a typed extra bag.
    pub fn extra<E: Serialize>(mut self, extra: &E) -> Self {
        match serde_json::to_value(extra) {
            Ok(Value::Object(map)) => self.fields.extend(map),
            Ok(Value::Null) => {}
            Ok(other) => self.fail(<serde_json::Error as serde::ser::Error>::custom(
                format!("extra options must encode to an object, got {other}"),
            )),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Sets a top-level file field. Local files become a part of the same name.
    pub fn file(mut self, key: &str, file: impl Into<InputFile>) -> Self {
        match file.into() {
            InputFile::FileId(id) => {
                self.fields.insert(key.to_owned(), Value::String(id));
            }
            InputFile::Url(url) => {
                self.fields.insert(key.to_owned(), Value::String(url.into()));
            }
            InputFile::Upload(local) => self.uploads.push(Upload {
                name: key.to_owned(),
                file: local,
            }),
        }
        self
    }

    pub fn opt_file(self, key: &str, file: Option<InputFile>) -> Self {
        match file {
            Some(file) => self.file(key, file),
            None => self,
        }
    }

    /// Sets a field whose value may reference local files via `attach://`.
    pub(crate) fn attached<A: Attach>(mut self, key: &str, value: A) -> Self {
        let value = value.attach(&mut self);
        self.fields.insert(key.to_owned(), value);
        self
    }

    /// Injects normalized rich text. Runs after [`Request::extra`] so that
    /// entity-based formatting replaces a `parse_mode` from the extra bag.
    pub fn formatted(mut self, value: impl Into<FormattedText>, context: TextContext) -> Self {
        if let Err(e) = normalize_text(value.into(), context).merge_into(&mut self.fields) {
            self.fail(e);
        }
        self
    }

    pub fn opt_formatted(self, value: Option<FormattedText>, context: TextContext) -> Self {
        match value {
            Some(value) => self.formatted(value, context),
            None => self,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn uploads(&self) -> &[Upload] {
        &self.uploads
    }

    pub fn has_uploads(&self) -> bool {
        !self.uploads.is_empty()
    }

    /// Splits the request for the wire, reporting the first encoding failure.
    pub fn into_parts(self) -> Result<(Map<String, Value>, Vec<Upload>)> {
        match self.error {
            Some(e) => Err(Error::Encode(e)),
            None => Ok((self.fields, self.uploads)),
        }
    }

    /// Registers a local file for `attach://` and returns the reference.
    pub(crate) fn attach_upload(&mut self, file: LocalFile) -> String {
        let name = format!("file{}", self.uploads.len());
        let reference = format!("attach://{name}");
        self.uploads.push(Upload { name, file });
        reference
    }

    pub(crate) fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Value {
        serde_json::to_value(value).unwrap_or_else(|e| {
            self.fail(e);
            Value::Null
        })
    }

    pub(crate) fn fail(&mut self, error: serde_json::Error) {
        self.error.get_or_insert(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize, Default)]
    struct Extra {
        #[serde(skip_serializing_if = "Option::is_none")]
        disable_notification: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        parse_mode: Option<String>,
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let request = Request::new()
            .field("chat_id", 42)
            .opt_field("message_thread_id", None::<i32>)
            .extra(&Extra::default());
        assert_eq!(Value::Object(request.fields().clone()), json!({"chat_id": 42}));
    }

    #[test]
    fn explicit_false_is_kept() {
        let request = Request::new().extra(&Extra {
            disable_notification: Some(false),
            parse_mode: None,
        });
        assert_eq!(request.get("disable_notification"), Some(&json!(false)));
    }

    #[test]
    fn later_stage_overwrites_earlier_one() {
        let request = Request::new()
            .field("parse_mode", "HTML")
            .extra(&Extra {
                disable_notification: None,
                parse_mode: Some("MarkdownV2".to_string()),
            });
        assert_eq!(request.get("parse_mode"), Some(&json!("MarkdownV2")));
    }

    #[test]
    fn non_object_extra_is_an_encode_error() {
        let err = Request::new().extra(&42).into_parts().unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn unencodable_field_surfaces_on_into_parts() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], 1);
        let err = Request::new()
            .field("chat_id", 1)
            .field("bad", bad)
            .into_parts()
            .unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn local_top_level_file_becomes_named_part() {
        let request = Request::new().file("photo", InputFile::memory(vec![1, 2, 3], "a.jpg"));
        assert!(request.get("photo").is_none());
        assert_eq!(request.uploads().len(), 1);
        assert_eq!(request.uploads()[0].name, "photo");
    }

    #[test]
    fn remote_file_is_a_plain_string_field() {
        let request = Request::new()
            .file("photo", InputFile::file_id("AgACAgIAAxk"))
            .file(
                "document",
                InputFile::url("https://example.org/a.pdf".parse().unwrap()),
            );
        assert_eq!(request.get("photo"), Some(&json!("AgACAgIAAxk")));
        assert_eq!(
            request.get("document"),
            Some(&json!("https://example.org/a.pdf"))
        );
        assert!(!request.has_uploads());
    }

    #[test]
    fn attach_uploads_are_numbered() {
        let mut request = Request::new();
        let first = request.attach_upload(LocalFile::Memory {
            data: vec![0],
            file_name: "a".to_string(),
        });
        let second = request.attach_upload(LocalFile::Memory {
            data: vec![1],
            file_name: "b".to_string(),
        });
        assert_eq!(first, "attach://file0");
        assert_eq!(second, "attach://file1");
        assert_eq!(request.uploads()[1].name, "file1");
    }
}
