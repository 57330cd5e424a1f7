// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) → Protected (JWT + tenant + quota) → Elevated (root JWT)
pub mod public;    // Tier 1: No authentication required
pub mod protected; // Tier 2: JWT authentication required (/api/*)
pub mod elevated;  // Tier 3: Root JWT authentication required (/api/root/*)
