// src/samples.rs
//! Sample dataset standing in for a real upstream feed. Timestamps are
//! relative to "now" so recency ordering stays meaningful.

use chrono::{Duration, Utc};

use crate::model::{new_id, Ambulance, DisasterAlert, EmergencyNews, Hospital, LocationData};

pub fn sample_ambulances() -> Vec<Ambulance> {
    vec![
        Ambulance {
            id: new_id(),
            name: "City Emergency Ambulance".to_string(),
            kind: "public".to_string(),
            location: LocationData {
                latitude: 37.7749,
                longitude: -122.4194,
                address: "San Francisco, CA".to_string(),
            },
            availability: true,
            phone: "+1-555-EMRG".to_string(),
            rating: 4.8,
            estimated_arrival: 8,
            cost: None,
        },
        Ambulance {
            id: new_id(),
            name: "QuickCare Ambulance Service".to_string(),
            kind: "private".to_string(),
            location: LocationData {
                latitude: 37.7849,
                longitude: -122.4094,
                address: "Downtown SF, CA".to_string(),
            },
            availability: true,
            phone: "+1-555-QUICK".to_string(),
            rating: 4.6,
            estimated_arrival: 5,
            cost: Some(150.0),
        },
        Ambulance {
            id: new_id(),
            name: "LifeLine Emergency Services".to_string(),
            kind: "private".to_string(),
            location: LocationData {
                latitude: 37.7649,
                longitude: -122.4294,
                address: "Mission District, SF".to_string(),
            },
            availability: true,
            phone: "+1-555-LIFE".to_string(),
            rating: 4.4,
            estimated_arrival: 12,
            cost: Some(120.0),
        },
    ]
}

pub fn sample_hospitals() -> Vec<Hospital> {
    vec![
        Hospital {
            id: new_id(),
            name: "San Francisco General Hospital".to_string(),
            address: "1001 Potrero Ave, San Francisco, CA 94110".to_string(),
            location: LocationData {
                latitude: 37.7576,
                longitude: -122.4086,
                address: "1001 Potrero Ave, SF".to_string(),
            },
            phone: "+1-415-206-8000".to_string(),
            specialties: vec![
                "Emergency Medicine".to_string(),
                "Trauma".to_string(),
                "Cardiology".to_string(),
                "Surgery".to_string(),
            ],
            emergency_services: true,
            rating: 4.5,
            distance_km: Some(2.1),
        },
        Hospital {
            id: new_id(),
            name: "UCSF Medical Center".to_string(),
            address: "505 Parnassus Ave, San Francisco, CA 94143".to_string(),
            location: LocationData {
                latitude: 37.7631,
                longitude: -122.4583,
                address: "505 Parnassus Ave, SF".to_string(),
            },
            phone: "+1-415-476-1000".to_string(),
            specialties: vec![
                "Neurology".to_string(),
                "Oncology".to_string(),
                "Pediatrics".to_string(),
                "Emergency Medicine".to_string(),
            ],
            emergency_services: true,
            rating: 4.8,
            distance_km: Some(3.5),
        },
        Hospital {
            id: new_id(),
            name: "St. Mary's Medical Center".to_string(),
            address: "450 Stanyan St, San Francisco, CA 94117".to_string(),
            location: LocationData {
                latitude: 37.7686,
                longitude: -122.4536,
                address: "450 Stanyan St, SF".to_string(),
            },
            phone: "+1-415-668-1000".to_string(),
            specialties: vec![
                "Emergency Medicine".to_string(),
                "Orthopedics".to_string(),
                "Cardiology".to_string(),
            ],
            emergency_services: true,
            rating: 4.2,
            distance_km: Some(1.8),
        },
    ]
}

pub fn sample_alerts() -> Vec<DisasterAlert> {
    let now = Utc::now();
    vec![
        DisasterAlert {
            id: new_id(),
            title: "Flood Warning - Mission District".to_string(),
            description: "Heavy rainfall has caused flooding in low-lying areas of Mission \
                          District. Avoid driving through flooded streets."
                .to_string(),
            alert_type: "flood".to_string(),
            severity: "medium".to_string(),
            location_affected: "Mission District, San Francisco".to_string(),
            coordinates: LocationData {
                latitude: 37.7599,
                longitude: -122.4148,
                address: "Mission District, SF".to_string(),
            },
            active: true,
            issued_at: now,
            expires_at: now + Duration::hours(6),
            safety_tips: vec![
                "Avoid driving through flooded roads".to_string(),
                "Stay on higher ground".to_string(),
                "Monitor local emergency broadcasts".to_string(),
                "Keep emergency supplies ready".to_string(),
            ],
        },
        DisasterAlert {
            id: new_id(),
            title: "High Fire Risk - Bay Area".to_string(),
            description: "Dry conditions and high winds create elevated fire risk. Avoid \
                          outdoor burning and report smoke immediately."
                .to_string(),
            alert_type: "fire".to_string(),
            severity: "high".to_string(),
            location_affected: "San Francisco Bay Area".to_string(),
            coordinates: LocationData {
                latitude: 37.7749,
                longitude: -122.4194,
                address: "San Francisco Bay Area".to_string(),
            },
            active: true,
            issued_at: now,
            expires_at: now + Duration::hours(24),
            safety_tips: vec![
                "Avoid outdoor burning".to_string(),
                "Clear vegetation around homes".to_string(),
                "Prepare evacuation kit".to_string(),
                "Monitor emergency alerts".to_string(),
            ],
        },
    ]
}

pub fn sample_news() -> Vec<EmergencyNews> {
    let now = Utc::now();
    vec![
        EmergencyNews {
            id: new_id(),
            title: "San Francisco Emergency Response Team Saves Lives in Downtown Fire"
                .to_string(),
            summary: "Quick response by SF Fire Department and paramedics resulted in \
                      successful evacuation of 50+ people from office building."
                .to_string(),
            content: "In a remarkable display of coordination, San Francisco's emergency \
                      response teams successfully evacuated over 50 people from a downtown \
                      office building following an electrical fire on the 12th floor. The \
                      incident, which occurred at 2:30 PM yesterday, saw firefighters, \
                      paramedics, and police working together to ensure zero casualties. \
                      Fire Chief Maria Rodriguez praised the building's emergency systems \
                      and the calm response of occupants."
                .to_string(),
            category: "emergency_response".to_string(),
            location: "Downtown San Francisco".to_string(),
            published_at: now - Duration::hours(8),
            image_url: Some("https://images.unsplash.com/photo-1554734867-bf3c00a49371".to_string()),
            source: "EmergiLink News".to_string(),
            priority: "high".to_string(),
        },
        EmergencyNews {
            id: new_id(),
            title: "New Emergency Alert System Reduces Response Times by 40%".to_string(),
            summary: "City-wide implementation of advanced emergency dispatch technology \
                      shows significant improvement in response efficiency."
                .to_string(),
            content: "San Francisco's new AI-powered emergency dispatch system has shown \
                      remarkable results in its first quarter of operation. The system, \
                      which integrates real-time traffic data, resource availability, and \
                      incident severity scoring, has reduced average emergency response \
                      times by 40%. Mayor Johnson announced plans to expand the system to \
                      neighboring counties."
                .to_string(),
            category: "safety_update".to_string(),
            location: "San Francisco Bay Area".to_string(),
            published_at: now - Duration::hours(16),
            image_url: Some("https://images.unsplash.com/photo-1599152097274-5da4c5979b9b".to_string()),
            source: "EmergiLink News".to_string(),
            priority: "normal".to_string(),
        },
        EmergencyNews {
            id: new_id(),
            title: "Community Emergency Preparedness Workshop This Weekend".to_string(),
            summary: "Free disaster preparedness training available for all Bay Area \
                      residents at Civic Center."
                .to_string(),
            content: "The San Francisco Department of Emergency Management is hosting a \
                      comprehensive emergency preparedness workshop this Saturday at the \
                      Civic Center. The event will cover earthquake safety, fire evacuation \
                      procedures, emergency kit preparation, and family communication plans. \
                      Registration is free and includes take-home emergency supplies."
                .to_string(),
            category: "community_alert".to_string(),
            location: "San Francisco Civic Center".to_string(),
            published_at: now - Duration::hours(24),
            image_url: Some("https://images.unsplash.com/photo-1619025873875-59dfdd2bbbd6".to_string()),
            source: "EmergiLink News".to_string(),
            priority: "normal".to_string(),
        },
        EmergencyNews {
            id: new_id(),
            title: "Earthquake Early Warning System Successfully Alerts Residents".to_string(),
            summary: "Recent 4.2 magnitude earthquake triggered automated alerts 15 seconds \
                      before shaking began."
                .to_string(),
            content: "The Bay Area's earthquake early warning system performed flawlessly \
                      during yesterday's 4.2 magnitude earthquake near Hayward. Residents \
                      received automated alerts on their phones 15 seconds before the \
                      shaking began, allowing time to take protective actions. Seismologist \
                      Dr. Sarah Chen noted this demonstrates the system's reliability for \
                      larger potential earthquakes."
                .to_string(),
            category: "disaster_relief".to_string(),
            location: "Bay Area".to_string(),
            published_at: now - Duration::hours(48),
            image_url: Some("https://images.unsplash.com/photo-1554734867-bf3c00a49371".to_string()),
            source: "EmergiLink News".to_string(),
            priority: "high".to_string(),
        },
    ]
}
