/// A file attached to the draft's image field. At most one per draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        ImageAttachment {
            filename: filename.into(),
            content_type: content_type.into().to_lowercase(),
            data,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
