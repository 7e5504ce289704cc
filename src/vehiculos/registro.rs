//! Este modulo define la fila de un archivo de vehiculos, con los nombres de
//! columna del formato de entrada del optimizador de rutas

use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::aliases::{CantidadPallets, Costo};
use crate::punto::PuntoGeo;

/// Columnas del archivo de vehiculos, en el orden en que se escriben
pub const ENCABEZADOS_VEHICULOS: [&str; 31] = [
    "label",
    "travelMode",
    "startWaypoint",
    "endWaypoint",
    "unloadingPolicy",
    "costPerHour",
    "costPerTraveledHour",
    "costPerKilometer",
    "fixedCost",
    "usedIfRouteIsEmpty",
    "travelDurationMultiple",
    "StartTimeWindowCostPerHourBeforeSoftStartTime",
    "StartTimeWindowCostPerHourAfterSoftEndTime",
    "startTimeWindowStartTime",
    "startTimeWindowSoftStartTime",
    "startTimeWindowEndTime",
    "startTimeWindowSoftEndTime",
    "EndTimeWindowCostPerHourBeforeSoftStartTime",
    "EndTimeWindowCostPerHourAfterSoftEndTime",
    "endTimeWindowStartTime",
    "endTimeWindowSoftStartTime",
    "endTimeWindowEndTime",
    "endTimeWindowSoftEndTime",
    "loadLimit1Type",
    "loadLimit1Value",
    "loadLimit2Type",
    "loadLimit2Value",
    "loadLimit3Type",
    "loadLimit3Value",
    "loadLimit4Type",
    "loadLimit4Value",
];

pub const MODO_MANEJO: &str = "DRIVING";
pub const POLITICA_DESCARGA: &str = "UNLOADING_POLICY_UNSPECIFIED";

/// El formato espera los booleanos en mayusculas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Booleano(pub bool);

impl fmt::Display for Booleano {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(if self.0 { "TRUE" } else { "FALSE" })
    }
}

impl Serialize for Booleano {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Un vehiculo sale y vuelve al deposito, sin costos ni restricciones horarias,
/// con una capacidad en pallets
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroVehiculo {
    pub label: String,
    pub travel_mode: &'static str,
    pub start_waypoint: PuntoGeo,
    pub end_waypoint: PuntoGeo,
    pub unloading_policy: &'static str,
    pub cost_per_hour: Costo,
    pub cost_per_traveled_hour: Costo,
    pub cost_per_kilometer: Costo,
    pub fixed_cost: Costo,
    pub used_if_route_is_empty: Booleano,
    pub travel_duration_multiple: u32,
    #[serde(rename = "StartTimeWindowCostPerHourBeforeSoftStartTime")]
    pub start_time_window_cost_per_hour_before_soft_start_time: Option<Costo>,
    #[serde(rename = "StartTimeWindowCostPerHourAfterSoftEndTime")]
    pub start_time_window_cost_per_hour_after_soft_end_time: Option<Costo>,
    pub start_time_window_start_time: Option<String>,
    pub start_time_window_soft_start_time: Option<String>,
    pub start_time_window_end_time: Option<String>,
    pub start_time_window_soft_end_time: Option<String>,
    #[serde(rename = "EndTimeWindowCostPerHourBeforeSoftStartTime")]
    pub end_time_window_cost_per_hour_before_soft_start_time: Option<Costo>,
    #[serde(rename = "EndTimeWindowCostPerHourAfterSoftEndTime")]
    pub end_time_window_cost_per_hour_after_soft_end_time: Option<Costo>,
    pub end_time_window_start_time: Option<String>,
    pub end_time_window_soft_start_time: Option<String>,
    pub end_time_window_end_time: Option<String>,
    pub end_time_window_soft_end_time: Option<String>,
    pub load_limit1_type: &'static str,
    pub load_limit1_value: CantidadPallets,
    pub load_limit2_type: Option<&'static str>,
    pub load_limit2_value: Option<CantidadPallets>,
    pub load_limit3_type: Option<&'static str>,
    pub load_limit3_value: Option<CantidadPallets>,
    pub load_limit4_type: Option<&'static str>,
    pub load_limit4_value: Option<CantidadPallets>,
}

impl fmt::Display for RegistroVehiculo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} → {} ",
            self.label.bold(),
            self.start_waypoint,
            self.end_waypoint
        )?;
        write!(f, "({} pallets)", self.load_limit1_value.to_string().blue())
    }
}
