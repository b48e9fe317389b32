/// Domain layer - requirement, override and report models plus the pure
/// parsing and source-URL selection logic. No I/O happens here.
pub mod domain;
pub mod policies;
pub mod services;
