use scylla::{frame::value::CqlTimestamp, FromRow, SerializeRow};

#[derive(FromRow, SerializeRow)]
pub struct CompraAlbumModel {
    id_usuario: i32,
    id_album: i32,
    fecha: CqlTimestamp,
}

impl CompraAlbumModel {
    pub fn new(id_usuario: &i32, id_album: &i32, fecha: &CqlTimestamp) -> Self {
        Self {
            id_usuario: *id_usuario,
            id_album: *id_album,
            fecha: *fecha,
        }
    }

    pub fn id_usuario(&self) -> &i32 {
        &self.id_usuario
    }

    pub fn id_album(&self) -> &i32 {
        &self.id_album
    }

    pub fn fecha(&self) -> &CqlTimestamp {
        &self.fecha
    }
}
