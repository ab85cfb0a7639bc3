//! Test-only bootstrap helpers (logging).
