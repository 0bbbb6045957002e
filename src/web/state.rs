use crate::models::EntityKind;
use crate::services::contact::ContactForwarder;
use crate::services::entries::EntryRepository;
use crate::services::translate::Translator;
use crate::services::uploads::UploadStore;
use crate::{Config, Database};
use anyhow::Result;
use std::path::PathBuf;

pub struct AppState {
    pub config: Config,
    pub blog: EntryRepository,
    pub projects: EntryRepository,
    pub led: EntryRepository,
    pub uploads: UploadStore,
    pub contact: ContactForwarder,
    pub translator: Translator,
    pub site_root: PathBuf,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        let site_root = config.site_root();

        Ok(Self {
            blog: EntryRepository::new(db.clone(), EntityKind::Blog),
            projects: EntryRepository::new(db.clone(), EntityKind::Project),
            led: EntryRepository::new(db, EntityKind::Led),
            uploads: UploadStore::new(&site_root, &config.media.upload_dir),
            contact: ContactForwarder::new(client.clone(), &config.telegram),
            translator: Translator::new(client, &config.translate),
            site_root,
            config,
        })
    }

    pub fn entries(&self, kind: EntityKind) -> &EntryRepository {
        match kind {
            EntityKind::Blog => &self.blog,
            EntityKind::Project => &self.projects,
            EntityKind::Led => &self.led,
        }
    }
}
