use serde::Deserialize;

use self::scylla::DbScyllaConfig;

pub mod scylla;

#[derive(Deserialize)]
pub struct DbConfig {
    scylla: DbScyllaConfig,
}

impl DbConfig {
    pub fn scylla(&self) -> &DbScyllaConfig {
        &self.scylla
    }
}
