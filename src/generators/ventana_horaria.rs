//! Este modulo permite generar ventanas horarias de entrega, ancladas siempre
//! en una hora en punto del dia base. Las ventanas blandas coinciden con las duras.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use rand::Rng;

use crate::aliases::{Hora, Minutos};
use crate::errores::ErrorGeneracion;

/// Formato con el que se escriben los horarios. La `Z` se agrega de forma literal
/// sobre la hora local, sin convertir a UTC.
const FORMATO_ISO: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Parametros con los que se generan las ventanas horarias
#[derive(Debug, Clone, PartialEq)]
pub struct ParametrosVentana {
    /// Primera hora posible (inclusive) cuando la hora es aleatoria
    pub hora_inicio: Hora,
    /// Ultima hora posible (exclusive) cuando la hora es aleatoria
    pub hora_fin: Hora,
    pub duracion_minutos: Minutos,
    /// Si esta presente, todas las ventanas empiezan a esta hora
    pub hora_fija: Option<Hora>,
    /// Se acepta por compatibilidad, pero las ventanas siempre empiezan en el minuto 00
    pub minuto_fijo: u32,
}

impl Default for ParametrosVentana {
    fn default() -> Self {
        Self {
            hora_inicio: 6,
            hora_fin: 22,
            duracion_minutos: 60,
            hora_fija: None,
            minuto_fijo: 0,
        }
    }
}

/// Ventana horaria de una entrega, con sus limites duros y blandos
#[derive(Debug, Clone, PartialEq)]
pub struct VentanaHoraria {
    pub inicio: NaiveDateTime,
    pub inicio_suave: NaiveDateTime,
    pub fin: NaiveDateTime,
    pub fin_suave: NaiveDateTime,
}

impl VentanaHoraria {
    /// Genera una ventana en la fecha dada. La hora es la fija de los parametros
    /// si la hay, o una sorteada en `[hora_inicio, hora_fin)`. La duracion puede
    /// ser cero o negativa; solo falla si el fin se sale del calendario.
    pub fn generar<R: Rng + ?Sized>(
        rng: &mut R,
        parametros: &ParametrosVentana,
        fecha: NaiveDate,
    ) -> Result<Self, ErrorGeneracion> {
        let hora = match parametros.hora_fija {
            Some(hora) => hora,
            None => {
                if parametros.hora_inicio >= parametros.hora_fin || parametros.hora_fin > 24 {
                    return Err(ErrorGeneracion::RangoHorarioInvalido);
                }
                rng.gen_range(parametros.hora_inicio..parametros.hora_fin)
            }
        };

        let inicio = fecha
            .and_hms_opt(hora, 0, 0)
            .ok_or(ErrorGeneracion::HoraFijaInvalida)?;
        let fin = Duration::try_minutes(parametros.duracion_minutos)
            .and_then(|duracion| inicio.checked_add_signed(duracion))
            .ok_or(ErrorGeneracion::DuracionInvalida)?;

        Ok(Self {
            inicio,
            inicio_suave: inicio,
            fin,
            fin_suave: fin,
        })
    }

    pub fn inicio_iso(&self) -> String {
        formatear_iso(&self.inicio)
    }

    pub fn inicio_suave_iso(&self) -> String {
        formatear_iso(&self.inicio_suave)
    }

    pub fn fin_iso(&self) -> String {
        formatear_iso(&self.fin)
    }

    pub fn fin_suave_iso(&self) -> String {
        formatear_iso(&self.fin_suave)
    }
}

/// Escribe un horario como `YYYY-MM-DDTHH:MM:SS.000Z`
pub fn formatear_iso(horario: &NaiveDateTime) -> String {
    horario.format(FORMATO_ISO).to_string()
}

/// Fecha de mañana segun el reloj local
pub fn fecha_de_manana() -> NaiveDate {
    let hoy = Local::now().date_naive();
    hoy.succ_opt().unwrap_or(hoy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fecha() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_hora_fija_catorce() {
        let mut rng = StdRng::seed_from_u64(0);
        let parametros = ParametrosVentana {
            hora_fija: Some(14),
            ..Default::default()
        };
        let ventana = VentanaHoraria::generar(&mut rng, &parametros, fecha()).unwrap();

        assert_eq!(ventana.inicio_iso(), "2024-03-15T14:00:00.000Z");
        assert_eq!(ventana.fin_iso(), "2024-03-15T15:00:00.000Z");
    }

    #[test]
    fn test_ventanas_blandas_iguales_a_duras() {
        let mut rng = StdRng::seed_from_u64(3);
        let parametros = ParametrosVentana {
            duracion_minutos: 45,
            ..Default::default()
        };

        for _ in 0..200 {
            let ventana = VentanaHoraria::generar(&mut rng, &parametros, fecha()).unwrap();
            assert_eq!(ventana.inicio_suave, ventana.inicio);
            assert_eq!(ventana.fin_suave, ventana.fin);
            assert_eq!(ventana.fin - ventana.inicio, Duration::minutes(45));
            assert_eq!(ventana.inicio_suave_iso(), ventana.inicio_iso());
            assert_eq!(ventana.fin_suave_iso(), ventana.fin_iso());
        }
    }

    #[test]
    fn test_hora_aleatoria_en_rango() {
        let mut rng = StdRng::seed_from_u64(11);
        let parametros = ParametrosVentana::default();

        for _ in 0..500 {
            let ventana = VentanaHoraria::generar(&mut rng, &parametros, fecha()).unwrap();
            let hora = ventana.inicio.hour();
            assert!((6..22).contains(&hora));
            assert_eq!(ventana.inicio.minute(), 0);
            assert_eq!(ventana.inicio.second(), 0);
        }
    }

    #[test]
    fn test_el_minuto_fijo_no_mueve_la_ventana() {
        let mut rng = StdRng::seed_from_u64(0);
        let parametros = ParametrosVentana {
            hora_fija: Some(8),
            minuto_fijo: 30,
            ..Default::default()
        };
        let ventana = VentanaHoraria::generar(&mut rng, &parametros, fecha()).unwrap();
        assert_eq!(ventana.inicio_iso(), "2024-03-15T08:00:00.000Z");
    }

    #[test]
    fn test_la_ventana_pasa_al_dia_siguiente() {
        let mut rng = StdRng::seed_from_u64(0);
        let parametros = ParametrosVentana {
            hora_fija: Some(23),
            duracion_minutos: 90,
            ..Default::default()
        };
        let ventana = VentanaHoraria::generar(&mut rng, &parametros, fecha()).unwrap();
        assert_eq!(ventana.fin_iso(), "2024-03-16T00:30:00.000Z");
    }

    #[test]
    fn test_parametros_invalidos() {
        let mut rng = StdRng::seed_from_u64(0);

        let hora_invalida = ParametrosVentana {
            hora_fija: Some(24),
            ..Default::default()
        };
        assert_eq!(
            VentanaHoraria::generar(&mut rng, &hora_invalida, fecha()),
            Err(ErrorGeneracion::HoraFijaInvalida)
        );

        let rango_vacio = ParametrosVentana {
            hora_inicio: 10,
            hora_fin: 10,
            ..Default::default()
        };
        assert_eq!(
            VentanaHoraria::generar(&mut rng, &rango_vacio, fecha()),
            Err(ErrorGeneracion::RangoHorarioInvalido)
        );

        let desbordada = ParametrosVentana {
            duracion_minutos: Minutos::MAX,
            ..Default::default()
        };
        assert_eq!(
            VentanaHoraria::generar(&mut rng, &desbordada, fecha()),
            Err(ErrorGeneracion::DuracionInvalida)
        );
    }

    #[test]
    fn test_ventana_sin_duracion() {
        let mut rng = StdRng::seed_from_u64(0);
        let parametros = ParametrosVentana {
            hora_fija: Some(14),
            duracion_minutos: 0,
            ..Default::default()
        };
        let ventana = VentanaHoraria::generar(&mut rng, &parametros, fecha()).unwrap();

        assert_eq!(ventana.fin, ventana.inicio);
        assert_eq!(ventana.inicio_iso(), "2024-03-15T14:00:00.000Z");
        assert_eq!(ventana.fin_iso(), "2024-03-15T14:00:00.000Z");
    }

    #[test]
    fn test_ventana_con_duracion_negativa() {
        let mut rng = StdRng::seed_from_u64(0);
        let parametros = ParametrosVentana {
            hora_fija: Some(14),
            duracion_minutos: -30,
            ..Default::default()
        };
        let ventana = VentanaHoraria::generar(&mut rng, &parametros, fecha()).unwrap();

        assert_eq!(ventana.fin - ventana.inicio, Duration::minutes(-30));
        assert_eq!(ventana.fin_iso(), "2024-03-15T13:30:00.000Z");
        assert_eq!(ventana.fin_suave, ventana.fin);
    }

    #[test]
    fn test_manana_es_posterior_a_hoy() {
        let hoy = Local::now().date_naive();
        assert!(fecha_de_manana() > hoy);
    }
}
