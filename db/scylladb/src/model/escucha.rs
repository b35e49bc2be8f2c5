use scylla::{frame::value::CqlTimestamp, FromRow, SerializeRow};

#[derive(FromRow, SerializeRow)]
pub struct EscuchaModel {
    id_usuario: i32,
    id_cancion: i32,
    fecha: CqlTimestamp,
}

impl EscuchaModel {
    pub fn new(id_usuario: &i32, id_cancion: &i32, fecha: &CqlTimestamp) -> Self {
        Self {
            id_usuario: *id_usuario,
            id_cancion: *id_cancion,
            fecha: *fecha,
        }
    }

    pub fn id_usuario(&self) -> &i32 {
        &self.id_usuario
    }

    pub fn id_cancion(&self) -> &i32 {
        &self.id_cancion
    }

    pub fn fecha(&self) -> &CqlTimestamp {
        &self.fecha
    }
}
