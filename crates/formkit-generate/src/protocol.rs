//! The JSON-lines generation protocol.
//!
//! The external producer emits one JSON object per line: exactly one
//! metadata line first, then zero or more field lines. Field lines carry the
//! kind under a `fieldType` key, which is re-tagged to `type` before the
//! line is read as a [`FieldSpec`].

use formkit_core::{FormKitError, FormKitResult};
use formkit_fields::FieldSpec;

/// One parsed line of the generation stream.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationMessage {
    /// The form's metadata; exactly one per stream, first.
    Metadata {
        /// The form title.
        title: String,
        /// The form description, when the producer supplied one.
        description: Option<String>,
    },
    /// One complete field description, minus the identifier.
    Field(FieldSpec),
}

impl GenerationMessage {
    /// Parses a single stream line.
    ///
    /// Any line that is not valid JSON, lacks a recognized `type`, or does
    /// not deserialize into its message shape fails with
    /// [`FormKitError::MalformedMessage`]. The caller skips such lines;
    /// one bad line never poisons the stream.
    pub fn parse_line(line: &str) -> FormKitResult<Self> {
        let malformed = |reason: &str| FormKitError::MalformedMessage(format!("{reason}: {line}"));

        let json: serde_json::Value =
            serde_json::from_str(line).map_err(|e| malformed(&e.to_string()))?;
        let serde_json::Value::Object(mut object) = json else {
            return Err(malformed("not a JSON object"));
        };

        let tag = object
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);
        match tag.as_deref() {
            Some("metadata") => {
                let title = object
                    .get("title")
                    .and_then(serde_json::Value::as_str)
                    .ok_or_else(|| malformed("metadata without a title"))?
                    .to_string();
                let description = object
                    .get("description")
                    .and_then(serde_json::Value::as_str)
                    .filter(|d| !d.is_empty())
                    .map(ToString::to_string);
                Ok(Self::Metadata { title, description })
            }
            Some("field") => {
                // The producer tags the kind as `fieldType`; the field shape
                // expects it under `type`.
                object.remove("type");
                let kind = object
                    .remove("fieldType")
                    .ok_or_else(|| malformed("field without a fieldType"))?;
                object.insert("type".to_string(), kind);
                let spec: FieldSpec = serde_json::from_value(serde_json::Value::Object(object))
                    .map_err(|e| malformed(&e.to_string()))?;
                Ok(Self::Field(spec))
            }
            _ => Err(malformed("unrecognized message type")),
        }
    }
}

/// Incremental splitter turning stream chunks into complete lines.
///
/// Producers deliver arbitrary chunk boundaries; a line is only complete
/// once its newline arrives. The trailing partial line is held back until
/// [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: String,
}

impl LineBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns every line it completed, trimmed, with
    /// blank lines dropped.
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        self.buffer.push_str(chunk);
        let mut lines: Vec<String> = self.buffer.split('\n').map(ToString::to_string).collect();
        self.buffer = lines.pop().unwrap_or_default();
        lines
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }

    /// Drains the final, newline-less line, if any.
    pub fn finish(self) -> Option<String> {
        let rest = self.buffer.trim();
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_fields::{FieldConfig, FieldKind};

    #[test]
    fn test_parse_metadata() {
        let msg = GenerationMessage::parse_line(
            r#"{"type": "metadata", "title": "Contact", "description": "Reach us"}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            GenerationMessage::Metadata {
                title: "Contact".to_string(),
                description: Some("Reach us".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_metadata_empty_description_dropped() {
        let msg = GenerationMessage::parse_line(
            r#"{"type": "metadata", "title": "Contact", "description": ""}"#,
        )
        .unwrap();
        assert!(matches!(
            msg,
            GenerationMessage::Metadata { description: None, .. }
        ));
    }

    #[test]
    fn test_parse_field_retags_field_type() {
        let msg = GenerationMessage::parse_line(
            r#"{"type": "field", "fieldType": "text", "label": "Your name", "minLength": 2}"#,
        )
        .unwrap();
        let GenerationMessage::Field(spec) = msg else {
            panic!("expected a field message");
        };
        assert_eq!(spec.kind(), FieldKind::Text);
        assert_eq!(spec.label, "Your name");
        match spec.config {
            FieldConfig::Text(cfg) => {
                assert_eq!(cfg.min_length, Some(2));
                // Kind defaults filled the rest.
                assert_eq!(cfg.placeholder, "Enter text...");
            }
            other => panic!("unexpected config: {other:?}"),
        }
    }

    #[test]
    fn test_parse_field_with_bare_string_options() {
        let msg = GenerationMessage::parse_line(
            r#"{"type": "field", "fieldType": "select", "label": "Size", "options": ["S", "M", "L"]}"#,
        )
        .unwrap();
        let GenerationMessage::Field(spec) = msg else {
            panic!("expected a field message");
        };
        match spec.config {
            FieldConfig::Select(cfg) => {
                assert_eq!(cfg.options.len(), 3);
                assert_eq!(cfg.options[0].value, "S");
            }
            other => panic!("unexpected config: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_lines_fail_individually() {
        for line in [
            "not json",
            "[1, 2]",
            r#"{"type": "metadata"}"#,
            r#"{"type": "field", "label": "no kind"}"#,
            r#"{"type": "field", "fieldType": "bogus-kind", "label": "x"}"#,
            r#"{"type": "mystery"}"#,
        ] {
            let err = GenerationMessage::parse_line(line).unwrap_err();
            assert!(matches!(err, FormKitError::MalformedMessage(_)), "{line}");
        }
    }

    #[test]
    fn test_line_buffer_respects_chunk_boundaries() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.push("{\"a\": 1").is_empty());
        assert_eq!(buffer.push("}\n{\"b\""), vec!["{\"a\": 1}".to_string()]);
        assert_eq!(buffer.push(": 2}\n\n"), vec!["{\"b\": 2}".to_string()]);
        assert_eq!(buffer.finish(), None);
    }

    #[test]
    fn test_line_buffer_finish_returns_trailing_line() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.push("tail without newline").is_empty());
        assert_eq!(buffer.finish(), Some("tail without newline".to_string()));
    }
}
