use aliases::Grados;

pub mod aliases;
pub mod envios;
pub mod errores;
pub mod generators;
pub mod logger;
pub mod punto;
pub mod salida;
pub mod vehiculos;

/// Latitud del deposito por defecto (Bucarest)
pub const LATITUD_DEPOSITO: Grados = 44.5279615;

/// Longitud del deposito por defecto (Bucarest)
pub const LONGITUD_DEPOSITO: Grados = 26.1798147;

/// Cantidad de registros que se muestran en el resumen por consola
pub const CANTIDAD_RESUMEN: usize = 3;

