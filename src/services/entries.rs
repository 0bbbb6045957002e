use crate::models::{EntityKind, Entry, EntryDraft, EntrySubmission};
use crate::services::drafts;
use crate::services::normalize::decode_string_list;
use crate::services::uploads::UploadStore;
use crate::Database;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

/// List/get/create/update/delete against one of the listing tables.
#[derive(Clone)]
pub struct EntryRepository {
    db: Database,
    kind: EntityKind,
}

impl EntryRepository {
    pub fn new(db: Database, kind: EntityKind) -> Self {
        Self { db, kind }
    }

    /// Name of the column that differs between kinds.
    fn extra_column(&self) -> &'static str {
        if self.kind.has_links() {
            "links"
        } else {
            "location"
        }
    }

    fn select_sql(&self) -> String {
        format!(
            "SELECT id, IFNULL(img, ''), IFNULL(title, ''), IFNULL(title_uz, ''), IFNULL(title_en, ''), \
             IFNULL(description, ''), IFNULL(description_uz, ''), IFNULL(description_en, ''), \
             IFNULL(images, ''), IFNULL({extra}, '') FROM {table}",
            extra = self.extra_column(),
            table = self.kind.table(),
        )
    }

    fn row_to_entry(&self, row: &Row) -> rusqlite::Result<Entry> {
        let images: String = row.get(8)?;
        let extra: String = row.get(9)?;
        Ok(Entry {
            id: row.get(0)?,
            img: row.get(1)?,
            title: row.get(2)?,
            title_uz: row.get(3)?,
            title_en: row.get(4)?,
            description: row.get(5)?,
            description_uz: row.get(6)?,
            description_en: row.get(7)?,
            images: decode_string_list(&images),
            links: self.kind.has_links().then(|| decode_string_list(&extra)),
            location: self.kind.has_location().then_some(extra),
        })
    }

    /// Value written to the kind-specific column.
    fn extra_value(&self, draft: &EntryDraft) -> Result<String> {
        if self.kind.has_links() {
            Ok(serde_json::to_string(&draft.links)?)
        } else {
            Ok(draft.location.clone())
        }
    }

    /// All rows, newest id first.
    pub fn list(&self) -> Result<Vec<Entry>> {
        let conn = self.db.get()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id DESC", self.select_sql()))?;
        let entries = stmt
            .query_map([], |row| self.row_to_entry(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn get(&self, id: i64) -> Result<Option<Entry>> {
        let conn = self.db.get()?;
        let entry = conn
            .query_row(
                &format!("{} WHERE id = ?", self.select_sql()),
                [id],
                |row| self.row_to_entry(row),
            )
            .optional()?;
        Ok(entry)
    }

    /// Images stored on a row; empty when the row does not exist.
    pub fn current_images(&self, id: i64) -> Result<Vec<String>> {
        let conn = self.db.get()?;
        let raw: Option<String> = conn
            .query_row(
                &format!("SELECT IFNULL(images, '') FROM {} WHERE id = ?", self.kind.table()),
                [id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(raw.map(|r| decode_string_list(&r)).unwrap_or_default())
    }

    pub fn insert(&self, draft: &EntryDraft) -> Result<i64> {
        let conn = self.db.get()?;
        conn.execute(
            &format!(
                "INSERT INTO {} (img, title, title_uz, title_en, description, description_uz, description_en, images, {}) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
                self.kind.table(),
                self.extra_column(),
            ),
            params![
                draft.img(),
                draft.title,
                draft.title_uz,
                draft.title_en,
                draft.description,
                draft.description_uz,
                draft.description_en,
                serde_json::to_string(&draft.images)?,
                self.extra_value(draft)?,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrites every column of the row. Returns the number of rows
    /// changed, which is 0 for an unknown id.
    pub fn update(&self, id: i64, draft: &EntryDraft) -> Result<usize> {
        let conn = self.db.get()?;
        let changed = conn.execute(
            &format!(
                "UPDATE {} SET img = ?, title = ?, title_uz = ?, title_en = ?, description = ?, \
                 description_uz = ?, description_en = ?, images = ?, {} = ? WHERE id = ?",
                self.kind.table(),
                self.extra_column(),
            ),
            params![
                draft.img(),
                draft.title,
                draft.title_uz,
                draft.title_en,
                draft.description,
                draft.description_uz,
                draft.description_en,
                serde_json::to_string(&draft.images)?,
                self.extra_value(draft)?,
                id,
            ],
        )?;
        Ok(changed)
    }

    /// Removes the row. Files it referenced stay on disk.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let conn = self.db.get()?;
        let changed = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?", self.kind.table()),
            [id],
        )?;
        Ok(changed)
    }

    /// Creates a row from either request shape and returns what the API
    /// echoes back.
    pub fn create(&self, submission: EntrySubmission, uploads: &UploadStore) -> Result<Entry> {
        match submission {
            EntrySubmission::Json(payload) => {
                let draft = drafts::from_payload(self.kind, payload);
                let id = self.insert(&draft)?;
                Ok(draft.into_entry(self.kind, id))
            }
            EntrySubmission::Form(form) => {
                let draft = drafts::for_create(self.kind, &form, uploads);
                let id = self.insert(&draft)?;
                Ok(draft.into_entry(self.kind, id).without_translations())
            }
        }
    }

    /// Full overwrite of row `id` from either request shape.
    pub fn replace(&self, id: i64, submission: EntrySubmission, uploads: &UploadStore) -> Result<usize> {
        let draft = match submission {
            EntrySubmission::Json(payload) => drafts::from_payload(self.kind, payload),
            EntrySubmission::Form(form) => {
                drafts::for_update(self.kind, &form, uploads, || self.current_images(id))?
            }
        };
        let changed = self.update(id, &draft)?;
        if changed == 0 {
            tracing::debug!("Update of {} {} matched no row", self.kind, id);
        }
        Ok(changed)
    }
}
