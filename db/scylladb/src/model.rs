pub mod compra_album;
pub mod compra_merch;
pub mod escucha;
