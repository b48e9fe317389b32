/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the inventory use case
/// relies on for file access, registry and hosting-platform lookups, report
/// formatting and progress output.
pub mod outbound;
