use anyhow::Result;
use scylla::CachingSession;

use crate::{db::ScyllaDb, model::compra_album::CompraAlbumModel};

const INSERT: &str = "INSERT INTO \"estadisticas_keyspace\".\"compraAlbum\" (\"id_usuario\", \"id_album\", \"fecha\") VALUES (?, ?, ?)";

pub async fn init(cached_session: &CachingSession) {
    es_log::info(Some("🔧"), "[ScyllaDB] Setting up compraAlbum table");

    if let Err(err) = cached_session
        .get_session()
        .query("CREATE TABLE IF NOT EXISTS \"estadisticas_keyspace\".\"compraAlbum\" (\"id_usuario\" int, \"id_album\" int, \"fecha\" timestamp, PRIMARY KEY ((\"id_usuario\"), \"fecha\"))", &[])
        .await
    {
        es_log::error(
            None,
            format!("[ScyllaDB] Creating compraAlbum table failed: {err}"),
        );
        return;
    }

    if let Err(err) = cached_session.add_prepared_statement(&INSERT.into()).await {
        es_log::error(
            None,
            format!("[ScyllaDB] Preparing compraAlbum statement failed: {err}"),
        );
    }
}

impl ScyllaDb {
    pub async fn insert_compra_album(&self, value: &CompraAlbumModel) -> Result<()> {
        self.execute(INSERT, value).await?;
        Ok(())
    }
}
