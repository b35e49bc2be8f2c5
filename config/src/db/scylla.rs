use std::time::Duration;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct DbScyllaConfig {
    host: String,
    port: String,
    user: String,
    password: String,
    consistency: String,
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    connect_timeout: Duration,
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    request_timeout: Duration,
    replication_factor: i64,
    prepared_statement_cache_size: usize,
    profile: SessionProfile,
}

impl DbScyllaConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn consistency(&self) -> &str {
        &self.consistency
    }

    pub fn connect_timeout(&self) -> &Duration {
        &self.connect_timeout
    }

    pub fn request_timeout(&self) -> &Duration {
        &self.request_timeout
    }

    pub fn replication_factor(&self) -> &i64 {
        &self.replication_factor
    }

    pub fn prepared_statement_cache_size(&self) -> &usize {
        &self.prepared_statement_cache_size
    }

    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }
}

/// Named profiles of the single open operation: `bootstrap` creates the
/// keyspace, tables and seed data, `attach` binds a pre-existing keyspace.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionProfile {
    Bootstrap,
    Attach,
}
