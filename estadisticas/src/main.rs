use es_db_scylladb::db::DbCtx;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = es_config::from_path(&config_path);

    es_log::init(config.log().display_level(), config.log().level_filter());

    es_log::info(Some("🚀"), "[Estadisticas] Starting");

    let mut db_ctx = DbCtx::new();
    let _db = db_ctx.open(config.db().scylla()).await;

    es_log::info(
        Some("📢"),
        "[Estadisticas] Database initialized and session ready",
    );

    if let Err(err) = tokio::signal::ctrl_c().await {
        es_log::error(
            None,
            format!("[Estadisticas] Waiting for shutdown signal failed: {err}"),
        );
    }

    db_ctx.close();

    es_log::info(Some("👋"), "[Estadisticas] Turned off");
}
