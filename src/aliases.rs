//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type Grados = f64;
pub type Kilometros = f64;
pub type Hora = u32;
pub type Minutos = i64;
pub type Segundos = u32;
pub type CantidadPallets = u32;
pub type Costo = u64;
