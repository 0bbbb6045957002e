//! Maps both request shapes onto one [`EntryDraft`].
//!
//! JSON bodies carry complete image and link lists. Multipart forms carry
//! files that have to be stored first, and on update the image list is
//! built on top of what the row already holds.

use crate::models::{
    EntityKind, EntryDraft, EntryPayload, FormSubmission, UploadedFile, MAX_IMAGES, MAX_LINKS,
};
use crate::services::normalize::{clamp_strings, decode_string_list, form_links, unique_strings};
use crate::services::uploads::UploadStore;
use anyhow::Result;

pub fn from_payload(kind: EntityKind, payload: EntryPayload) -> EntryDraft {
    let links = if kind.has_links() {
        clamp_strings(unique_strings(payload.links.unwrap_or_default()), MAX_LINKS)
    } else {
        Vec::new()
    };
    let location = if kind.has_location() {
        payload.location.unwrap_or_default()
    } else {
        String::new()
    };

    EntryDraft {
        title: payload.title.unwrap_or_default(),
        title_uz: payload.title_uz.unwrap_or_default(),
        title_en: payload.title_en.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        description_uz: payload.description_uz.unwrap_or_default(),
        description_en: payload.description_en.unwrap_or_default(),
        location,
        images: clamp_strings(payload.images.unwrap_or_default(), MAX_IMAGES),
        links,
    }
}

/// Multipart create: the `imgs` files, or the legacy `img` file when no
/// `imgs` file could be stored.
pub fn for_create(kind: EntityKind, form: &FormSubmission, uploads: &UploadStore) -> EntryDraft {
    let mut images = store_files(uploads, form.files("imgs"));
    if images.is_empty() {
        images.extend(form.file("img").and_then(|file| store_file(uploads, file)));
    }

    EntryDraft {
        images: clamp_strings(images, MAX_IMAGES),
        ..scalar_fields(kind, form)
    }
}

/// Multipart update. Starts from `imagesOld` when it names any image,
/// otherwise from `current_images`; new `imgs` files are appended and an
/// `img` file is put in front.
pub fn for_update<F>(
    kind: EntityKind,
    form: &FormSubmission,
    uploads: &UploadStore,
    current_images: F,
) -> Result<EntryDraft>
where
    F: FnOnce() -> Result<Vec<String>>,
{
    let mut images = decode_string_list(form.value("imagesOld"));
    if images.is_empty() {
        images = current_images()?;
    }

    images.extend(store_files(uploads, form.files("imgs")));

    if let Some(path) = form.file("img").and_then(|file| store_file(uploads, file)) {
        images.insert(0, path);
    }

    Ok(EntryDraft {
        images: clamp_strings(images, MAX_IMAGES),
        ..scalar_fields(kind, form)
    })
}

fn scalar_fields(kind: EntityKind, form: &FormSubmission) -> EntryDraft {
    EntryDraft {
        title: form.value("title").to_string(),
        title_uz: form.value("title_uz").to_string(),
        title_en: form.value("title_en").to_string(),
        description: form.value("description").to_string(),
        description_uz: form.value("description_uz").to_string(),
        description_en: form.value("description_en").to_string(),
        location: if kind.has_location() {
            form.value("location").to_string()
        } else {
            String::new()
        },
        images: Vec::new(),
        links: if kind.has_links() {
            form_links(form)
        } else {
            Vec::new()
        },
    }
}

fn store_files(uploads: &UploadStore, files: &[UploadedFile]) -> Vec<String> {
    files
        .iter()
        .take(MAX_IMAGES)
        .filter_map(|file| store_file(uploads, file))
        .collect()
}

/// A failed write drops that one image; the row is still saved.
fn store_file(uploads: &UploadStore, file: &UploadedFile) -> Option<String> {
    match uploads.save(&file.file_name, &file.data) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("Skipping upload {:?}: {:#}", file.file_name, e);
            None
        }
    }
}
