use scylla::CachingSession;

pub const NAME: &str = "estadisticas_keyspace";

pub async fn init(cached_session: &CachingSession, replication_factor: &i64) {
    es_log::info(Some("🔧"), "[ScyllaDB] Setting up estadisticas keyspace");

    if let Err(err) = cached_session.get_session().query("CREATE KEYSPACE IF NOT EXISTS \"estadisticas_keyspace\" WITH REPLICATION = {'class' : 'SimpleStrategy', 'replication_factor' : ".to_owned() + &replication_factor.to_string() + "}", &[]).await {
        es_log::panic(
            None,
            format!("[ScyllaDB] Creating estadisticas keyspace failed: {err}"),
        );
    }
}
