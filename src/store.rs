// src/store.rs
//! In-memory record stores behind the handler contracts. Each store is a
//! capacity-bounded `Mutex<Vec<_>>`; when full, the oldest entries are dropped.

use std::sync::Mutex;

use crate::model::{AmbulanceBooking, EmergencyCall, EmergencyContact};

const MAX_CAP: usize = 10_000;

/// Emergency calls, newest last.
#[derive(Debug)]
pub struct CallLog {
    inner: Mutex<Vec<EmergencyCall>>,
    cap: usize,
}

impl CallLog {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(MAX_CAP))),
            cap: cap.min(MAX_CAP),
        }
    }

    pub fn push(&self, call: EmergencyCall) {
        let mut v = self.inner.lock().expect("call log mutex poisoned");
        v.push(call);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    /// All retained calls for one user, oldest first.
    pub fn for_user(&self, user_id: &str) -> Vec<EmergencyCall> {
        let v = self.inner.lock().expect("call log mutex poisoned");
        v.iter().filter(|c| c.user_id == user_id).cloned().collect()
    }
}

/// Emergency contacts keyed by owning user.
#[derive(Debug)]
pub struct ContactBook {
    inner: Mutex<Vec<EmergencyContact>>,
    cap: usize,
}

impl ContactBook {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(MAX_CAP))),
            cap: cap.min(MAX_CAP),
        }
    }

    pub fn push(&self, contact: EmergencyContact) {
        let mut v = self.inner.lock().expect("contact book mutex poisoned");
        v.push(contact);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn for_user(&self, user_id: &str) -> Vec<EmergencyContact> {
        let v = self.inner.lock().expect("contact book mutex poisoned");
        v.iter().filter(|c| c.user_id == user_id).cloned().collect()
    }
}

/// Ambulance bookings, append-only within the cap.
#[derive(Debug)]
pub struct BookingLog {
    inner: Mutex<Vec<AmbulanceBooking>>,
    cap: usize,
}

impl BookingLog {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(MAX_CAP))),
            cap: cap.min(MAX_CAP),
        }
    }

    pub fn push(&self, booking: AmbulanceBooking) {
        let mut v = self.inner.lock().expect("booking log mutex poisoned");
        v.push(booking);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<AmbulanceBooking> {
        let v = self.inner.lock().expect("booking log mutex poisoned");
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{new_id, AmbulanceBooking, EmergencyCall, EmergencyCallCreate, LocationData};

    fn call(user: &str) -> EmergencyCall {
        EmergencyCall::open(EmergencyCallCreate {
            user_id: user.to_string(),
            emergency_type: "general".to_string(),
            location: LocationData {
                latitude: 0.0,
                longitude: 0.0,
                address: "nowhere".to_string(),
            },
        })
    }

    #[test]
    fn call_log_drops_oldest_beyond_cap() {
        let log = CallLog::with_capacity(2);
        log.push(call("a"));
        log.push(call("b"));
        log.push(call("c"));
        assert!(log.for_user("a").is_empty());
        assert_eq!(log.for_user("b").len(), 1);
        assert_eq!(log.for_user("c").len(), 1);
    }

    fn booking(user: &str) -> AmbulanceBooking {
        AmbulanceBooking {
            id: new_id(),
            ambulance_id: "amb-1".to_string(),
            user_id: user.to_string(),
            pickup_location: LocationData {
                latitude: 0.0,
                longitude: 0.0,
                address: "nowhere".to_string(),
            },
            status: "confirmed".to_string(),
            booked_at: chrono::Utc::now(),
            estimated_arrival: 10,
        }
    }

    #[test]
    fn booking_log_snapshot_returns_newest_within_cap() {
        let log = BookingLog::with_capacity(2);
        log.push(booking("a"));
        log.push(booking("b"));
        log.push(booking("c"));

        // "a" was evicted; the snapshot holds the newest entries, oldest first
        let last = log.snapshot_last_n(5);
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].user_id, "b");
        assert_eq!(last[1].user_id, "c");

        assert_eq!(log.snapshot_last_n(1)[0].user_id, "c");
        assert!(log.snapshot_last_n(0).is_empty());
    }

    #[test]
    fn call_log_filters_by_user() {
        let log = CallLog::with_capacity(10);
        log.push(call("u1"));
        log.push(call("u2"));
        log.push(call("u1"));
        assert_eq!(log.for_user("u1").len(), 2);
        assert_eq!(log.for_user("u2").len(), 1);
        assert!(log.for_user("u3").is_empty());
    }
}
