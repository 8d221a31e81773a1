/// Signing secret for tokens issued during tests.
pub static TEST_JWT_SECRET: &str = "integration-test-jwt-secret";

/// The plaintext password every fixture user is created with.
pub static TEST_PASSWORD: &str = "password123";

/// Bcrypt cost for fixture password hashes. Far below the production
/// default, keeps test setup fast.
pub const TEST_BCRYPT_COST: u32 = 4;
