//! Este modulo define el generador de archivos de envios y la fila que escribe

pub mod generador;
pub mod registro;
