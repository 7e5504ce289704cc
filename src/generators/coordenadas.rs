//! Este modulo permite generar coordenadas aleatorias dentro de un cuadrado
//! centrado en un punto de referencia. Se usa la aproximacion de que un grado
//! de latitud mide 111 km, y un grado de longitud 111 km por el coseno de la latitud.

use rand::Rng;

use crate::aliases::{Grados, Kilometros};
use crate::errores::ErrorGeneracion;
use crate::punto::PuntoGeo;

/// Kilometros que abarca un grado de latitud
pub const KM_POR_GRADO: f64 = 111.0;

/// Cantidad de decimales con los que se redondea cada coordenada
const DECIMALES: i32 = 8;

/// Redondea un valor en grados a la cantidad fija de decimales
fn redondear(valor: Grados) -> Grados {
    let factor = 10f64.powi(DECIMALES);
    (valor * factor).round() / factor
}

/// Calcula el desplazamiento maximo, en grados de latitud y longitud, que se
/// puede tomar desde el centro para no salir del cuadrado de lado dado
pub fn desplazamientos(
    centro: PuntoGeo,
    lado_km: Kilometros,
) -> Result<(Grados, Grados), ErrorGeneracion> {
    if !lado_km.is_finite() || lado_km <= 0.0 {
        return Err(ErrorGeneracion::LadoCuadradoInvalido);
    }
    if !centro.latitud.is_finite() || !centro.longitud.is_finite() {
        return Err(ErrorGeneracion::CentroInvalido);
    }

    let coseno = centro.latitud.to_radians().cos().abs();
    if coseno < f64::EPSILON {
        return Err(ErrorGeneracion::LatitudPolar);
    }

    let medio_lado = lado_km / 2.0;
    Ok((
        medio_lado / KM_POR_GRADO,
        medio_lado / (KM_POR_GRADO * coseno),
    ))
}

/// Genera un punto uniformemente aleatorio dentro del cuadrado de lado `lado_km`
/// centrado en `centro`. Primero se sortea la latitud y luego la longitud, por lo
/// que con un generador sembrado el resultado es reproducible.
pub fn muestrear<R: Rng + ?Sized>(
    rng: &mut R,
    centro: PuntoGeo,
    lado_km: Kilometros,
) -> Result<PuntoGeo, ErrorGeneracion> {
    let (desp_lat, desp_lon) = desplazamientos(centro, lado_km)?;

    let latitud = centro.latitud + rng.gen_range(-desp_lat..=desp_lat);
    let longitud = centro.longitud + rng.gen_range(-desp_lon..=desp_lon);

    Ok(PuntoGeo::new(redondear(latitud), redondear(longitud)))
}
