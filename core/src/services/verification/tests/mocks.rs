//! Mock implementations for testing the verification service

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::verification::traits::{EmailServiceTrait, VerificationStoreTrait};

// Mock email service for testing
pub struct MockEmailService {
    pub sent_messages: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockEmailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent_messages.lock().unwrap().get(email).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("email provider error".to_string());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(())
    }
}

// Mock store for testing, email -> (code, expires_at)
pub struct MockVerificationStore {
    pub codes: Arc<Mutex<HashMap<String, (String, DateTime<Utc>)>>>,
    pub should_fail: bool,
}

impl MockVerificationStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            codes: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        self.codes.lock().unwrap().contains_key(email)
    }

    /// Force an entry's expiry into the past without removing it
    pub fn expire(&self, email: &str) {
        if let Some(entry) = self.codes.lock().unwrap().get_mut(email) {
            entry.1 = Utc::now() - Duration::seconds(1);
        }
    }
}

#[async_trait]
impl VerificationStoreTrait for MockVerificationStore {
    async fn store_code(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<(), String> {
        if self.should_fail {
            return Err("store error".to_string());
        }
        let expires_at = Utc::now() + Duration::seconds(ttl_seconds as i64);
        self.codes
            .lock()
            .unwrap()
            .insert(email.to_string(), (code.to_string(), expires_at));
        Ok(())
    }

    async fn get_code(&self, email: &str) -> Result<Option<String>, String> {
        if self.should_fail {
            return Err("store error".to_string());
        }
        let codes = self.codes.lock().unwrap();
        Ok(codes.get(email).and_then(|(code, expires_at)| {
            if Utc::now() >= *expires_at {
                None
            } else {
                Some(code.clone())
            }
        }))
    }

    async fn delete_code(&self, email: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("store error".to_string());
        }
        self.codes.lock().unwrap().remove(email);
        Ok(())
    }
}
