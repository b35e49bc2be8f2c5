use anyhow::Result;
use scylla::CachingSession;

use crate::{db::ScyllaDb, model::escucha::EscuchaModel};

const INSERT: &str = "INSERT INTO \"estadisticas_keyspace\".\"escucha\" (\"id_usuario\", \"id_cancion\", \"fecha\") VALUES (?, ?, ?)";
const COUNT: &str = "SELECT COUNT(1) FROM \"estadisticas_keyspace\".\"escucha\"";

pub async fn init(cached_session: &CachingSession) {
    es_log::info(Some("🔧"), "[ScyllaDB] Setting up escucha table");

    if let Err(err) = cached_session
        .get_session()
        .query("CREATE TABLE IF NOT EXISTS \"estadisticas_keyspace\".\"escucha\" (\"id_usuario\" int, \"id_cancion\" int, \"fecha\" timestamp, PRIMARY KEY ((\"id_usuario\"), \"fecha\"))", &[])
        .await
    {
        es_log::error(
            None,
            format!("[ScyllaDB] Creating escucha table failed: {err}"),
        );
        return;
    }

    for statement in [INSERT, COUNT] {
        if let Err(err) = cached_session.add_prepared_statement(&statement.into()).await {
            es_log::error(
                None,
                format!("[ScyllaDB] Preparing escucha statement failed: {err}"),
            );
        }
    }
}

impl ScyllaDb {
    pub async fn insert_escucha(&self, value: &EscuchaModel) -> Result<()> {
        self.execute(INSERT, value).await?;
        Ok(())
    }

    pub async fn count_escucha(&self) -> Result<i64> {
        Ok(self
            .execute(COUNT, &[])
            .await?
            .first_row_typed::<(i64,)>()?
            .0)
    }
}
