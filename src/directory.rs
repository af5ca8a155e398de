// src/directory.rs
//! Read-only lookup over the injected ambulance/hospital/alert datasets.
//! No geospatial math here: "nearby" means the injected regional snapshot,
//! with hospitals pre-annotated with a distance.

use std::cmp::Ordering;

use crate::model::{Ambulance, DisasterAlert, Hospital, HospitalDetail};

#[derive(Debug, Clone)]
pub struct Directory {
    ambulances: Vec<Ambulance>,
    hospitals: Vec<Hospital>,
    alerts: Vec<DisasterAlert>,
}

impl Directory {
    pub fn new(
        ambulances: Vec<Ambulance>,
        hospitals: Vec<Hospital>,
        alerts: Vec<DisasterAlert>,
    ) -> Self {
        Self {
            ambulances,
            hospitals,
            alerts,
        }
    }

    /// Ambulances currently marked available.
    pub fn available_ambulances(&self) -> Vec<Ambulance> {
        self.ambulances
            .iter()
            .filter(|a| a.availability)
            .cloned()
            .collect()
    }

    pub fn ambulance(&self, id: &str) -> Option<Ambulance> {
        self.ambulances.iter().find(|a| a.id == id).cloned()
    }

    /// Hospitals sorted ascending by annotated distance; a missing distance
    /// sorts as zero.
    pub fn hospitals_by_distance(&self) -> Vec<Hospital> {
        let mut out = self.hospitals.clone();
        out.sort_by(|a, b| {
            let da = a.distance_km.unwrap_or(0.0);
            let db = b.distance_km.unwrap_or(0.0);
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        });
        out
    }

    pub fn hospital(&self, id: &str) -> Option<Hospital> {
        self.hospitals.iter().find(|h| h.id == id).cloned()
    }

    /// Expanded detail view for one hospital. Wait time and bed availability
    /// come from a static snapshot until a live feed exists.
    pub fn hospital_detail(&self, id: &str) -> Option<HospitalDetail> {
        self.hospital(id).map(|h| HospitalDetail {
            id: h.id,
            name: h.name,
            emergency_contact: h.phone,
            departments: h.specialties,
            current_wait_time: "15-30 minutes".to_string(),
            bed_availability: "Available".to_string(),
            accepts_insurance: true,
        })
    }

    pub fn active_alerts(&self) -> Vec<DisasterAlert> {
        self.alerts.iter().filter(|a| a.active).cloned().collect()
    }

    pub fn alert(&self, id: &str) -> Option<DisasterAlert> {
        self.alerts.iter().find(|a| a.id == id).cloned()
    }
}
