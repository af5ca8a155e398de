// src/api.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use shuttle_axum::axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::ServiceConfig;
use crate::directory::Directory;
use crate::model::{
    Ambulance, AmbulanceBooking, DisasterAlert, EmergencyCall, EmergencyCallCreate,
    EmergencyContact, EmergencyContactCreate, EmergencyNews, Hospital, HospitalDetail,
    LocationData, new_id,
};
use crate::news::{self, NewsFilter, NewsProvider, StaticNewsBoard};
use crate::samples;
use crate::store::{BookingLog, CallLog, ContactBook};

/// `(status, message)` pair; axum renders it as a plain-text error response.
type ApiError = (StatusCode, String);

#[derive(Clone)]
pub struct AppState {
    calls: Arc<CallLog>,
    contacts: Arc<ContactBook>,
    bookings: Arc<BookingLog>,
    directory: Arc<Directory>,
    news: Arc<dyn NewsProvider>,
    config: Arc<ServiceConfig>,
}

impl AppState {
    /// Wire the state from injected collaborators (tests bring fixtures here).
    pub fn new(config: ServiceConfig, directory: Directory, news: Arc<dyn NewsProvider>) -> Self {
        Self {
            calls: Arc::new(CallLog::with_capacity(config.store_cap)),
            contacts: Arc::new(ContactBook::with_capacity(config.store_cap)),
            bookings: Arc::new(BookingLog::with_capacity(config.store_cap)),
            directory: Arc::new(directory),
            news,
            config: Arc::new(config),
        }
    }

    /// State backed by the built-in sample dataset; what the binary serves.
    pub fn with_samples(config: ServiceConfig) -> Self {
        let directory = Directory::new(
            samples::sample_ambulances(),
            samples::sample_hospitals(),
            samples::sample_alerts(),
        );
        let board = StaticNewsBoard::new(samples::sample_news());
        Self::new(config, directory, Arc::new(board))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/emergency/sos", post(trigger_emergency))
        .route("/api/emergency/history/{user_id}", get(emergency_history))
        .route("/api/ambulances/nearby", get(nearby_ambulances))
        .route("/api/ambulances/book", post(book_ambulance))
        .route("/api/hospitals/nearby", get(nearby_hospitals))
        .route("/api/hospitals/{hospital_id}", get(hospital_details))
        .route("/api/alerts/active", get(active_alerts))
        .route("/api/alerts/{alert_id}", get(alert_details))
        .route(
            "/api/users/{user_id}/emergency-contacts",
            post(add_emergency_contact).get(list_emergency_contacts),
        )
        .route("/api/navigation/safe-route", get(safe_route))
        .route("/api/news", get(list_news))
        .route("/api/news/categories", get(news_categories))
        .route("/api/news/{news_id}", get(news_details))
        .route("/api/health", get(health))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

// --- emergency calls ---

async fn trigger_emergency(
    State(state): State<AppState>,
    Json(body): Json<EmergencyCallCreate>,
) -> Json<EmergencyCall> {
    let call = EmergencyCall::open(body);
    info!(call_id = %call.id, user = %call.user_id, address = %call.location.address,
        "emergency call triggered");
    state.calls.push(call.clone());
    Json(call)
}

async fn emergency_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<EmergencyCall>> {
    Json(state.calls.for_user(&user_id))
}

// --- ambulances ---

fn default_lat() -> f64 {
    37.7749
}
fn default_lng() -> f64 {
    -122.4194
}

#[derive(serde::Deserialize)]
struct NearbyQuery {
    #[serde(default = "default_lat")]
    #[allow(dead_code)] // accepted for contract parity; no geo math yet
    lat: f64,
    #[serde(default = "default_lng")]
    #[allow(dead_code)]
    lng: f64,
}

async fn nearby_ambulances(
    State(state): State<AppState>,
    Query(_q): Query<NearbyQuery>,
) -> Json<Vec<Ambulance>> {
    Json(state.directory.available_ambulances())
}

#[derive(serde::Deserialize)]
struct BookQuery {
    ambulance_id: String,
    user_id: String,
}

#[derive(serde::Serialize)]
struct BookingConfirmation {
    message: String,
    booking_id: String,
    estimated_arrival: String,
    status: String,
}

async fn book_ambulance(
    State(state): State<AppState>,
    Query(q): Query<BookQuery>,
    Json(pickup): Json<LocationData>,
) -> Result<Json<BookingConfirmation>, ApiError> {
    let Some(ambulance) = state.directory.ambulance(&q.ambulance_id) else {
        return Err((StatusCode::NOT_FOUND, "Ambulance not found".to_string()));
    };

    let booking = AmbulanceBooking {
        id: new_id(),
        ambulance_id: ambulance.id,
        user_id: q.user_id,
        pickup_location: pickup,
        status: "confirmed".to_string(),
        booked_at: Utc::now(),
        estimated_arrival: 10, // minutes
    };
    let booking_id = booking.id.clone();
    state.bookings.push(booking);

    Ok(Json(BookingConfirmation {
        message: "Ambulance booked successfully".to_string(),
        booking_id,
        estimated_arrival: "10 minutes".to_string(),
        status: "confirmed".to_string(),
    }))
}

// --- hospitals ---

async fn nearby_hospitals(
    State(state): State<AppState>,
    Query(_q): Query<NearbyQuery>,
) -> Json<Vec<Hospital>> {
    Json(state.directory.hospitals_by_distance())
}

async fn hospital_details(
    State(state): State<AppState>,
    Path(hospital_id): Path<String>,
) -> Result<Json<HospitalDetail>, ApiError> {
    state
        .directory
        .hospital_detail(&hospital_id)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Hospital not found".to_string()))
}

// --- disaster alerts ---

async fn active_alerts(State(state): State<AppState>) -> Json<Vec<DisasterAlert>> {
    Json(state.directory.active_alerts())
}

async fn alert_details(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Result<Json<DisasterAlert>, ApiError> {
    state
        .directory
        .alert(&alert_id)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Alert not found".to_string()))
}

// --- emergency contacts ---

async fn add_emergency_contact(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<EmergencyContactCreate>,
) -> Json<EmergencyContact> {
    let contact = EmergencyContact {
        id: new_id(),
        name: body.name,
        phone: body.phone,
        kind: body.kind,
        user_id,
    };
    state.contacts.push(contact.clone());
    Json(contact)
}

async fn list_emergency_contacts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<EmergencyContact>> {
    Json(state.contacts.for_user(&user_id))
}

// --- navigation ---

#[derive(serde::Deserialize)]
struct SafeRouteQuery {
    start_lat: f64,
    start_lng: f64,
    end_lat: f64,
    end_lng: f64,
}

#[derive(serde::Serialize)]
struct Waypoint {
    lat: f64,
    lng: f64,
    instruction: String,
}

#[derive(serde::Serialize)]
struct RouteSummary {
    distance: String,
    duration: String,
    safety_score: f64,
    warnings: Vec<String>,
    waypoints: Vec<Waypoint>,
}

#[derive(serde::Serialize)]
struct SafeRouteResp {
    route: RouteSummary,
    alternative_routes: u32,
    danger_zones_avoided: Vec<String>,
}

/// Mock route: start, midpoint, destination. Real routing is out of scope.
async fn safe_route(Query(q): Query<SafeRouteQuery>) -> Json<SafeRouteResp> {
    let waypoints = vec![
        Waypoint {
            lat: q.start_lat,
            lng: q.start_lng,
            instruction: "Start point".to_string(),
        },
        Waypoint {
            lat: (q.start_lat + q.end_lat) / 2.0,
            lng: (q.start_lng + q.end_lng) / 2.0,
            instruction: "Continue on Main St".to_string(),
        },
        Waypoint {
            lat: q.end_lat,
            lng: q.end_lng,
            instruction: "Destination".to_string(),
        },
    ];

    Json(SafeRouteResp {
        route: RouteSummary {
            distance: "5.2 km".to_string(),
            duration: "12 minutes".to_string(),
            safety_score: 9.2,
            warnings: Vec::new(),
            waypoints,
        },
        alternative_routes: 2,
        danger_zones_avoided: vec![
            "Construction zone on 5th Street".to_string(),
            "Reported flooding on Mission St".to_string(),
        ],
    })
}

// --- emergency news ---

#[derive(serde::Deserialize)]
struct NewsQuery {
    category: Option<String>,
    priority: Option<String>,
    limit: Option<usize>, // unsigned: negative limits fail deserialization (400)
}

async fn list_news(
    State(state): State<AppState>,
    Query(q): Query<NewsQuery>,
) -> Result<Json<Vec<EmergencyNews>>, ApiError> {
    let snapshot = state.news.list_current().await.map_err(|e| {
        error!(provider = state.news.name(), error = %e, "news snapshot unavailable");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "News data unavailable".to_string(),
        )
    })?;

    let filter = NewsFilter {
        category: q.category,
        priority: q.priority,
    };
    let limit = q.limit.unwrap_or(state.config.news_default_limit);
    Ok(Json(news::rank(snapshot, &filter, limit)))
}

async fn news_details(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> Result<Json<EmergencyNews>, ApiError> {
    let snapshot = state.news.list_current().await.map_err(|e| {
        error!(provider = state.news.name(), error = %e, "news snapshot unavailable");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "News data unavailable".to_string(),
        )
    })?;

    snapshot
        .into_iter()
        .find(|n| n.id == news_id)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "News article not found".to_string()))
}

#[derive(serde::Serialize)]
struct CategoryInfo {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
}

#[derive(serde::Serialize)]
struct CategoriesResp {
    categories: Vec<CategoryInfo>,
}

async fn news_categories() -> Json<CategoriesResp> {
    Json(CategoriesResp {
        categories: vec![
            CategoryInfo {
                id: "emergency_response",
                name: "Emergency Response",
                icon: "medical",
            },
            CategoryInfo {
                id: "disaster_relief",
                name: "Disaster Relief",
                icon: "warning",
            },
            CategoryInfo {
                id: "safety_update",
                name: "Safety Updates",
                icon: "shield-checkmark",
            },
            CategoryInfo {
                id: "community_alert",
                name: "Community Alerts",
                icon: "people",
            },
        ],
    })
}

// --- health ---

#[derive(serde::Serialize)]
struct HealthResp {
    status: &'static str,
    service: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health() -> Json<HealthResp> {
    Json(HealthResp {
        status: "healthy",
        service: "EmergiLink API",
        timestamp: Utc::now(),
    })
}
