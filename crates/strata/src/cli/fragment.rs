//! Fragment command handlers.

use super::commands::Commands;
use super::io::{print_json, read_input, write_output};
use serde_json::json;
use std::path::Path;
use strata::{
    Fragment, FragmentStore, StorageError, StorageErrorKind, StrataConfig, StrataResult,
    supported_formats, supported_types,
};

/// Dispatch a parsed command against the configured backend.
///
/// The backend is opened only by commands that touch stored fragments.
pub async fn handle_command(cmd: Commands, config: &StrataConfig) -> StrataResult<()> {
    let store = || config.fragment_store();

    match cmd {
        Commands::Formats { content_type } => show_formats(content_type.as_deref()),

        Commands::Create {
            owner,
            content_type,
            file,
        } => create(&store()?, &owner, &content_type, file.as_deref()).await,

        Commands::Update { owner, id, file } => update(&store()?, &owner, &id, file.as_deref()).await,

        Commands::Get {
            owner,
            id,
            ext,
            out,
        } => get(&store()?, &owner, &id, ext.as_deref(), out.as_deref()).await,

        Commands::Info { owner, id } => info(&store()?, &owner, &id).await,

        Commands::List { owner, expand } => list(&store()?, &owner, expand).await,

        Commands::Versions { owner, id, expand } => versions(&store()?, &owner, &id, expand).await,

        Commands::Version {
            owner,
            id,
            version_id,
            ext,
            out,
        } => {
            version(
                &store()?,
                &owner,
                &id,
                &version_id,
                ext.as_deref(),
                out.as_deref(),
            )
            .await
        }

        Commands::Restore {
            owner,
            id,
            version_id,
        } => restore(&store()?, &owner, &id, &version_id).await,

        Commands::Delete { owner, id, version } => {
            delete(&store()?, &owner, &id, version.as_deref()).await
        }
    }
}

async fn find(store: &FragmentStore, owner: &str, id: &str) -> StrataResult<Fragment> {
    store.by_id(owner, id).await.ok_or_else(|| {
        StorageError::new(StorageErrorKind::NotFound(format!("fragment {}", id))).into()
    })
}

async fn create(
    store: &FragmentStore,
    owner: &str,
    content_type: &str,
    file: Option<&Path>,
) -> StrataResult<()> {
    let data = read_input(file).await?;
    let fragment = store.create(owner, content_type, data).await?;
    print_json(&fragment)
}

async fn update(
    store: &FragmentStore,
    owner: &str,
    id: &str,
    file: Option<&Path>,
) -> StrataResult<()> {
    let mut fragment = find(store, owner, id).await?;
    let data = read_input(file).await?;
    let version = store.update_content(&mut fragment, data).await?;
    print_json(&json!({
        "fragment": fragment,
        "version": version,
    }))
}

async fn get(
    store: &FragmentStore,
    owner: &str,
    id: &str,
    ext: Option<&str>,
    out: Option<&Path>,
) -> StrataResult<()> {
    let fragment = find(store, owner, id).await?;
    let content = store.read_as(&fragment, ext).await?;
    tracing::info!(content_type = %content.content_type, size = content.data.len(), "Read fragment");
    write_output(out, &content.data).await
}

async fn info(store: &FragmentStore, owner: &str, id: &str) -> StrataResult<()> {
    let fragment = find(store, owner, id).await?;
    print_json(&json!({
        "fragment": fragment,
        "mimeType": fragment.mime_type(),
        "isText": fragment.is_text(),
        "formats": fragment.formats(),
    }))
}

async fn list(store: &FragmentStore, owner: &str, expand: bool) -> StrataResult<()> {
    if expand {
        print_json(&store.by_owner_expanded(owner).await?)
    } else {
        print_json(&store.by_owner(owner).await?)
    }
}

async fn versions(store: &FragmentStore, owner: &str, id: &str, expand: bool) -> StrataResult<()> {
    let fragment = find(store, owner, id).await?;
    if expand {
        print_json(&store.versions().list(owner, fragment.id()).await)
    } else {
        print_json(&store.versions().list_ids(owner, fragment.id()).await)
    }
}

async fn version(
    store: &FragmentStore,
    owner: &str,
    id: &str,
    version_id: &str,
    ext: Option<&str>,
    out: Option<&Path>,
) -> StrataResult<()> {
    let content = store
        .read_version_as(owner, id, version_id, ext)
        .await?
        .ok_or_else(|| {
            StorageError::new(StorageErrorKind::NotFound(format!("version {}", version_id)))
        })?;
    tracing::info!(content_type = %content.content_type, size = content.data.len(), "Read version");
    write_output(out, &content.data).await
}

async fn restore(store: &FragmentStore, owner: &str, id: &str, version_id: &str) -> StrataResult<()> {
    let mut fragment = find(store, owner, id).await?;
    store.restore_version(&mut fragment, version_id).await?;
    print_json(&fragment)
}

async fn delete(
    store: &FragmentStore,
    owner: &str,
    id: &str,
    version: Option<&str>,
) -> StrataResult<()> {
    match version {
        Some(version_id) => {
            store.versions().remove(owner, id, version_id).await?;
            println!("Deleted version {}", version_id);
        }
        None => {
            store.remove(owner, id).await?;
            println!("Deleted fragment {}", id);
        }
    }
    Ok(())
}

fn show_formats(content_type: Option<&str>) -> StrataResult<()> {
    let types: Vec<String> = match content_type {
        Some(value) => vec![strata::base_type(value)?],
        None => supported_types().into_iter().map(String::from).collect(),
    };

    let table: serde_json::Map<String, serde_json::Value> = types
        .into_iter()
        .map(|base| {
            let formats = supported_formats(&base);
            (base, json!(formats))
        })
        .collect();
    print_json(&table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata::{StorageBackend, StrataErrorKind};

    /// A filesystem backend rooted under a regular file cannot open.
    fn unopenable(blocker: &Path) -> StrataConfig {
        let mut config = StrataConfig::default();
        config.storage.backend = StorageBackend::Filesystem;
        config.storage.data_dir = blocker.join("data");
        config
    }

    #[tokio::test]
    async fn formats_does_not_open_backend() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let config = unopenable(blocker.path());

        let cmd = Commands::Formats {
            content_type: Some("text/csv".to_string()),
        };
        handle_command(cmd, &config).await.unwrap();

        let cmd = Commands::List {
            owner: "owner-1".to_string(),
            expand: false,
        };
        let err = handle_command(cmd, &config).await.unwrap_err();
        assert!(matches!(err.kind(), StrataErrorKind::Storage(_)));
    }
}
