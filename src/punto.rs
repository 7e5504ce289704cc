//! Este modulo define la estructura de un punto geografico, el cual se escribe
//! en los archivos generados como un waypoint de la forma "latitud, longitud"

use std::fmt;

use serde::{Serialize, Serializer};

use crate::aliases::Grados;

/// Un punto geografico esta definido por una latitud y una longitud, en grados
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuntoGeo {
    pub latitud: Grados,
    pub longitud: Grados,
}

impl PuntoGeo {
    /// Crea un nuevo punto con los parametros dados
    pub fn new(latitud: Grados, longitud: Grados) -> Self {
        Self { latitud, longitud }
    }
}

impl fmt::Display for PuntoGeo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Debug conserva el ".0" de los valores enteros
        write!(f, "{:?}, {:?}", self.latitud, self.longitud)
    }
}

/// En el csv el punto ocupa una unica columna, con su representacion de waypoint
impl Serialize for PuntoGeo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
