//! Este modulo define la fila de un archivo de envios. Los nombres de las columnas
//! son los del formato de entrada del optimizador de rutas, por lo que los campos
//! conservan esos nombres.

use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::aliases::{CantidadPallets, Costo, Segundos};
use crate::punto::PuntoGeo;

/// Columnas del archivo de envios, en el orden en que se escriben
pub const ENCABEZADOS_ENVIOS: [&str; 30] = [
    "label",
    "penaltyCost",
    "pickupArrivalWaypoint",
    "pickupDuration",
    "pickupCost",
    "pickupStartTime",
    "pickupSoftStartTime",
    "pickupEndTime",
    "pickupSoftEndTime",
    "pickupCostPerHourBeforeSoftStartTime",
    "pickupCostPerHourAfterSoftStartTime",
    "pickupCostPerHourAfterSoftEndTime",
    "deliveryArrivalWaypoint",
    "deliveryDuration",
    "deliveryCost",
    "deliveryStartTime",
    "deliverySoftStartTime",
    "deliveryEndTime",
    "deliverySoftEndTime",
    "deliveryCostPerHourBeforeSoftStartTime",
    "deliveryCostPerHourAfterSoftEndTime",
    "loadDemand1Type",
    "loadDemand1Value",
    "loadDemand2Type",
    "loadDemand2Value",
    "loadDemand3Type",
    "loadDemand3Value",
    "loadDemand4Type",
    "loadDemand4Value",
    "allowedVehicleIndices",
];

/// Tipo de carga con el que se expresan las demandas
pub const TIPO_PALLETS: &str = "pallets";

/// Un envio se retira del deposito y se entrega en un punto, dentro de una ventana
/// horaria, con una cantidad de pallets. Los campos en `None` quedan vacios.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroEnvio {
    pub label: String,
    pub penalty_cost: Costo,
    pub pickup_arrival_waypoint: PuntoGeo,
    pub pickup_duration: Segundos,
    pub pickup_cost: Option<Costo>,
    pub pickup_start_time: Option<String>,
    pub pickup_soft_start_time: Option<String>,
    pub pickup_end_time: Option<String>,
    pub pickup_soft_end_time: Option<String>,
    pub pickup_cost_per_hour_before_soft_start_time: Option<Costo>,
    pub pickup_cost_per_hour_after_soft_start_time: Option<Costo>,
    pub pickup_cost_per_hour_after_soft_end_time: Option<Costo>,
    pub delivery_arrival_waypoint: PuntoGeo,
    pub delivery_duration: Segundos,
    pub delivery_cost: Option<Costo>,
    pub delivery_start_time: String,
    pub delivery_soft_start_time: String,
    pub delivery_end_time: String,
    pub delivery_soft_end_time: String,
    pub delivery_cost_per_hour_before_soft_start_time: Costo,
    pub delivery_cost_per_hour_after_soft_end_time: Costo,
    pub load_demand1_type: &'static str,
    pub load_demand1_value: CantidadPallets,
    pub load_demand2_type: Option<&'static str>,
    pub load_demand2_value: Option<CantidadPallets>,
    pub load_demand3_type: Option<&'static str>,
    pub load_demand3_value: Option<CantidadPallets>,
    pub load_demand4_type: Option<&'static str>,
    pub load_demand4_value: Option<CantidadPallets>,
    pub allowed_vehicle_indices: Option<String>,
}

impl fmt::Display for RegistroEnvio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: ({}) @ {} ",
            self.label.bold(),
            self.delivery_arrival_waypoint,
            self.delivery_start_time.blue()
        )?;
        write!(
            f,
            "({} pallets)",
            self.load_demand1_value.to_string().blue()
        )
    }
}
