use std::sync::Arc;

use es_config::db::scylla::{DbScyllaConfig, SessionProfile};
use scylla::{
    serialize::row::SerializeRow,
    statement::Consistency,
    transport::{errors::QueryError, ExecutionProfile},
    CachingSession, QueryResult, SessionBuilder,
};

use crate::{
    query::{compra_album, compra_merch, escucha, keyspace},
    seed,
};

pub struct ScyllaDb {
    cached_session: CachingSession,
}

impl ScyllaDb {
    pub async fn new(config: &DbScyllaConfig) -> Self {
        es_log::info(Some("⚡"), "[ScyllaDB] Initializing component");

        let hostname = format!("{}:{}", config.host(), config.port());
        let execution_profile = ExecutionProfile::builder()
            .consistency(consistency_from_str(config.consistency()))
            .request_timeout(Some(*config.request_timeout()))
            .build();
        let session = match SessionBuilder::new()
            .known_node(&hostname)
            .user(config.user(), config.password())
            .connection_timeout(*config.connect_timeout())
            .default_execution_profile_handle(execution_profile.into_handle())
            .build()
            .await
        {
            Ok(session) => session,
            Err(err) => es_log::panic(
                None,
                format!("[ScyllaDB] Connecting to cluster at {hostname} failed: {err}"),
            ),
        };
        let cached_session =
            CachingSession::from(session, *config.prepared_statement_cache_size());

        match config.profile() {
            SessionProfile::Bootstrap => {
                keyspace::init(&cached_session, config.replication_factor()).await;
                Self::bind_keyspace(&cached_session).await;
                Self::init(&cached_session).await;

                let db = Self { cached_session };
                seed::load(&db).await;
                db
            }
            SessionProfile::Attach => {
                Self::bind_keyspace(&cached_session).await;
                Self { cached_session }
            }
        }
    }

    pub async fn session_query(
        &self,
        query: &str,
        values: impl SerializeRow,
    ) -> Result<QueryResult, QueryError> {
        self.cached_session.get_session().query(query, values).await
    }

    pub async fn execute(
        &self,
        query: &str,
        values: impl SerializeRow,
    ) -> Result<QueryResult, QueryError> {
        self.cached_session.execute(query, values).await
    }

    async fn bind_keyspace(cached_session: &CachingSession) {
        if let Err(err) = cached_session
            .get_session()
            .use_keyspace(keyspace::NAME, false)
            .await
        {
            es_log::panic(
                None,
                format!("[ScyllaDB] Binding estadisticas keyspace failed: {err}"),
            );
        }
    }

    // Table creation is strictly sequential, one statement per table.
    async fn init(cached_session: &CachingSession) {
        escucha::init(cached_session).await;
        compra_album::init(cached_session).await;
        compra_merch::init(cached_session).await;
    }
}

/// Owns the single shared session handle for the whole process. Initialized
/// once at startup by one writer, handed out by reference to any consumer and
/// torn down once at shutdown. There is no reinitialization path.
pub struct DbCtx {
    db: Option<Arc<ScyllaDb>>,
}

impl DbCtx {
    pub fn new() -> Self {
        Self { db: None }
    }

    pub async fn open(&mut self, config: &DbScyllaConfig) -> Arc<ScyllaDb> {
        let db = Arc::new(ScyllaDb::new(config).await);
        self.db = Some(db.clone());
        db
    }

    pub fn db(&self) -> Option<&Arc<ScyllaDb>> {
        self.db.as_ref()
    }

    pub fn close(&mut self) {
        if self.db.take().is_some() {
            es_log::info(Some("👋"), "[ScyllaDB] Session closed");
        }
    }
}

fn consistency_from_str(value: &str) -> Consistency {
    match value.to_ascii_lowercase().as_str() {
        "any" => Consistency::Any,
        "one" => Consistency::One,
        "two" => Consistency::Two,
        "three" => Consistency::Three,
        "quorum" => Consistency::Quorum,
        "all" => Consistency::All,
        "local_quorum" => Consistency::LocalQuorum,
        "each_quorum" => Consistency::EachQuorum,
        "local_one" => Consistency::LocalOne,
        other => es_log::panic(
            None,
            format!("[ScyllaDB] Unsupported consistency level '{other}'"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_without_open_is_a_noop() {
        let mut db_ctx = DbCtx::new();

        assert!(db_ctx.db().is_none());
        db_ctx.close();
        db_ctx.close();
        assert!(db_ctx.db().is_none());
    }

    #[test]
    fn maps_consistency_names_case_insensitively() {
        assert_eq!(consistency_from_str("quorum"), Consistency::Quorum);
        assert_eq!(consistency_from_str("QUORUM"), Consistency::Quorum);
        assert_eq!(consistency_from_str("local_one"), Consistency::LocalOne);
    }

    #[test]
    #[should_panic]
    fn rejects_unknown_consistency_names() {
        consistency_from_str("majority");
    }
}
