//! Domain-level constants.

// =============================================================================
// Search
// =============================================================================

/// Number of listings returned when the caller does not supply a limit
pub const DEFAULT_RESULT_LIMIT: u64 = 10;

// =============================================================================
// Pricing
// =============================================================================

/// Nightly costs are stored in minor currency units (cents); search bounds
/// arrive in major units and are compared against the stored value / 100.
pub const MINOR_UNITS_PER_MAJOR: i32 = 100;
