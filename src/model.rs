// src/model.rs
//! Wire-level record types shared by the handlers, stores, and sample data.
//! All ids are opaque strings (UUID v4 at creation time).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fresh opaque id for a newly created record.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyCall {
    pub id: String,
    pub user_id: String,
    pub emergency_type: String, // 'general', 'medical', 'fire', 'police'
    pub location: LocationData,
    pub timestamp: DateTime<Utc>,
    pub status: String, // 'active', 'resolved', 'cancelled'
    pub response_time: Option<String>,
}

/// Request body for `POST /api/emergency/sos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyCallCreate {
    pub user_id: String,
    pub emergency_type: String,
    pub location: LocationData,
}

impl EmergencyCall {
    /// Open a new call from a request body: fresh id, current timestamp,
    /// status "active", no response time yet.
    pub fn open(req: EmergencyCallCreate) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            emergency_type: req.emergency_type,
            location: req.location,
            timestamp: Utc::now(),
            status: "active".to_string(),
            response_time: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ambulance {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String, // 'public', 'private'
    pub location: LocationData,
    pub availability: bool,
    pub phone: String,
    pub rating: f64,
    pub estimated_arrival: u32, // minutes
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: LocationData,
    pub phone: String,
    pub specialties: Vec<String>,
    pub emergency_services: bool,
    pub rating: f64,
    pub distance_km: Option<f64>,
}

/// Expanded view served by `GET /api/hospitals/{hospital_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalDetail {
    pub id: String,
    pub name: String,
    pub emergency_contact: String,
    pub departments: Vec<String>,
    pub current_wait_time: String,
    pub bed_availability: String,
    pub accepts_insurance: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterAlert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub alert_type: String, // 'flood', 'earthquake', 'cyclone', 'fire', 'other'
    pub severity: String,   // 'low', 'medium', 'high', 'critical'
    pub location_affected: String,
    pub coordinates: LocationData,
    pub active: bool,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub safety_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: String, // 'family', 'friend', 'medical'
    pub user_id: String,
}

/// Request body for `POST /api/users/{user_id}/emergency-contacts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContactCreate {
    pub name: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbulanceBooking {
    pub id: String,
    pub ambulance_id: String,
    pub user_id: String,
    pub pickup_location: LocationData,
    pub status: String,
    pub booked_at: DateTime<Utc>,
    pub estimated_arrival: u32, // minutes
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyNews {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub category: String, // 'emergency_response', 'disaster_relief', 'safety_update', 'community_alert'
    pub location: String,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub source: String,
    pub priority: String, // 'low', 'normal', 'high', 'urgent'
}
