use super::EntryPayload;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// A decoded `multipart/form-data` body. Text parts and file parts are kept
/// apart, each in arrival order per field name.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    fields: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(value.into());
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: UploadedFile) {
        self.files.entry(name.into()).or_default().push(file);
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.push_field(name, value);
        self
    }

    pub fn with_file(mut self, name: &str, file_name: &str, data: &[u8]) -> Self {
        self.push_file(
            name,
            UploadedFile {
                file_name: file_name.to_string(),
                data: data.to_vec(),
            },
        );
        self
    }

    /// First value of a text field, or `""`.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn files(&self, name: &str) -> &[UploadedFile] {
        self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files(name).first()
    }
}

/// Either accepted request shape for create and update.
#[derive(Debug)]
pub enum EntrySubmission {
    Json(EntryPayload),
    Form(FormSubmission),
}
