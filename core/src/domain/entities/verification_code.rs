//! Verification code entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default number of digits in a verification code
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Verification code entity
///
/// At most one live entry exists per email address; issuing a new code
/// for the same address replaces the previous one. An entry is valid
/// only until `expires_at` and is consumed (deleted) on a successful
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Email address this code was issued for (the lookup key)
    pub email: String,

    /// The numeric verification code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new verification code for an email address
    ///
    /// # Arguments
    ///
    /// * `email` - The address the code will be sent to
    /// * `code_length` - Number of digits to generate
    /// * `expiration_minutes` - Minutes until the code expires
    pub fn new(email: String, code_length: usize, expiration_minutes: i64) -> Self {
        let code = Self::generate_code(code_length);
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            email,
            code,
            created_at: now,
            expires_at,
        }
    }

    /// Generates a random numeric code of the given length
    ///
    /// Each character is drawn uniformly from `0-9` using the
    /// thread-local CSPRNG, which is seeded once by the runtime. Rapid
    /// successive or concurrent calls therefore never see correlated
    /// sequences.
    pub fn generate_code(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Checks whether the code has expired
    ///
    /// A code is live strictly before `expires_at`; at the expiry
    /// instant it is already expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Time remaining until expiration, or zero if already expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }

    /// Code time-to-live in whole seconds at creation
    pub fn ttl_seconds(&self) -> u64 {
        (self.expires_at - self.created_at).num_seconds().max(0) as u64
    }
}
