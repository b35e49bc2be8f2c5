use anyhow::Result;
use scylla::CachingSession;

use crate::{db::ScyllaDb, model::compra_merch::CompraMerchModel};

const INSERT: &str = "INSERT INTO \"estadisticas_keyspace\".\"compraMerch\" (\"id_usuario\", \"id_merch\", \"fecha\", \"cantidad\") VALUES (?, ?, ?, ?)";

pub async fn init(cached_session: &CachingSession) {
    es_log::info(Some("🔧"), "[ScyllaDB] Setting up compraMerch table");

    if let Err(err) = cached_session
        .get_session()
        .query("CREATE TABLE IF NOT EXISTS \"estadisticas_keyspace\".\"compraMerch\" (\"id_usuario\" int, \"id_merch\" int, \"fecha\" timestamp, \"cantidad\" int, PRIMARY KEY ((\"id_usuario\"), \"fecha\"))", &[])
        .await
    {
        es_log::error(
            None,
            format!("[ScyllaDB] Creating compraMerch table failed: {err}"),
        );
        return;
    }

    if let Err(err) = cached_session.add_prepared_statement(&INSERT.into()).await {
        es_log::error(
            None,
            format!("[ScyllaDB] Preparing compraMerch statement failed: {err}"),
        );
    }
}

impl ScyllaDb {
    pub async fn insert_compra_merch(&self, value: &CompraMerchModel) -> Result<()> {
        self.execute(INSERT, value).await?;
        Ok(())
    }
}
