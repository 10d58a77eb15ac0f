use serde::{Deserialize, Serialize};

/// A file the tester attached to the report.
///
/// The bytes stay in memory with the draft; only the name, type and size
/// are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
    #[serde(skip)]
    content: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            size_bytes: content.len() as u64,
            content,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_tracks_content() {
        let a = Attachment::new("trace.har", vec![0u8; 512]).with_content_type("application/json");
        assert_eq!(a.size_bytes, 512);
        assert_eq!(a.content().len(), 512);
        assert_eq!(a.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn content_is_not_serialized() {
        let a = Attachment::new("shot.png", vec![1, 2, 3]);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["name"], "shot.png");
        assert_eq!(json["size_bytes"], 3);
        assert!(json.get("content").is_none());
    }
}
