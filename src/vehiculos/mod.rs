//! Este modulo define el generador de archivos de vehiculos y la fila que escribe

pub mod generador;
pub mod registro;
