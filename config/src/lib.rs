use std::fs::File;

use serde::Deserialize;

use self::{db::DbConfig, log::LogConfig};

pub mod db;
pub mod log;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    db: DbConfig,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("Opening configuration file '{path}' failed: {err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("Parsing configuration file '{path}' failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::db::scylla::SessionProfile;

    use super::*;

    const CONFIG: &str = r#"
log:
  display_level: true
  level_filter: "INFO"
db:
  scylla:
    host: "estadisticas-db"
    port: "9042"
    user: "user"
    password: "12345"
    consistency: "quorum"
    connect_timeout: "10s"
    request_timeout: "30s"
    replication_factor: 1
    prepared_statement_cache_size: 50
    profile: "bootstrap"
"#;

    #[test]
    fn parses_full_document() {
        let config = serde_yaml::from_str::<Config>(CONFIG).unwrap();

        assert!(*config.log().display_level());
        assert_eq!(config.log().level_filter(), "INFO");

        let scylla = config.db().scylla();
        assert_eq!(scylla.host(), "estadisticas-db");
        assert_eq!(scylla.port(), "9042");
        assert_eq!(scylla.user(), "user");
        assert_eq!(scylla.password(), "12345");
        assert_eq!(scylla.consistency(), "quorum");
        assert_eq!(*scylla.connect_timeout(), Duration::from_secs(10));
        assert_eq!(*scylla.request_timeout(), Duration::from_secs(30));
        assert_eq!(*scylla.replication_factor(), 1);
        assert_eq!(*scylla.prepared_statement_cache_size(), 50);
        assert!(matches!(scylla.profile(), SessionProfile::Bootstrap));
    }

    #[test]
    fn parses_attach_profile() {
        let config =
            serde_yaml::from_str::<Config>(&CONFIG.replace("\"bootstrap\"", "\"attach\"")).unwrap();

        assert!(matches!(
            config.db().scylla().profile(),
            SessionProfile::Attach
        ));
    }

    #[test]
    fn rejects_unknown_profile() {
        assert!(
            serde_yaml::from_str::<Config>(&CONFIG.replace("\"bootstrap\"", "\"migrate\""))
                .is_err()
        );
    }
}
