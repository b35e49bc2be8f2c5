use scylla::{frame::value::CqlTimestamp, FromRow, SerializeRow};

#[derive(FromRow, SerializeRow)]
pub struct CompraMerchModel {
    id_usuario: i32,
    id_merch: i32,
    fecha: CqlTimestamp,
    cantidad: i32,
}

impl CompraMerchModel {
    pub fn new(id_usuario: &i32, id_merch: &i32, fecha: &CqlTimestamp, cantidad: &i32) -> Self {
        Self {
            id_usuario: *id_usuario,
            id_merch: *id_merch,
            fecha: *fecha,
            cantidad: *cantidad,
        }
    }

    pub fn id_usuario(&self) -> &i32 {
        &self.id_usuario
    }

    pub fn id_merch(&self) -> &i32 {
        &self.id_merch
    }

    pub fn fecha(&self) -> &CqlTimestamp {
        &self.fecha
    }

    pub fn cantidad(&self) -> &i32 {
        &self.cantidad
    }
}
