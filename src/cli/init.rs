use crate::Config;
use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, config_path: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&path)?;

    let target = path.join(&config_path);
    if target.exists() {
        anyhow::bail!("{} already exists", target.display());
    }

    let config = Config::default();
    let contents = format!(
        r#"[server]
host = "{host}"
port = {port}

[database]
path = "{db}"

[site]
# Static site served for every non-API path
root = "{root}"

[media]
# Relative to the site root, also the public URL prefix
upload_dir = "{uploads}"
max_upload_size = "{max_upload}"

[telegram]
# Or set TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID
# bot_token = ""
# chat_id = ""

[translate]
source_lang = "{source_lang}"
"#,
        host = config.server.host,
        port = config.server.port,
        db = config.database.path,
        root = config.site.root,
        uploads = config.media.upload_dir,
        max_upload = config.media.max_upload_size,
        source_lang = config.translate.source_lang,
    );
    std::fs::write(&target, contents)?;

    let upload_dir = path.join(&config.site.root).join(&config.media.upload_dir);
    std::fs::create_dir_all(&upload_dir)?;

    tracing::info!("Wrote {}", target.display());
    tracing::info!("Run 'influence migrate' to set up the database");
    tracing::info!("Run 'influence serve' to start the server");

    Ok(())
}
