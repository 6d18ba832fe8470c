/// One uploaded file: original filename plus raw byte buffer.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub size: usize,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let size = content.len();
        Self {
            name: name.into(),
            size,
            content,
        }
    }
}
