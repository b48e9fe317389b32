/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// filesystem access, PyPI and GitHub clients, CSV formatting and console
/// progress output.
pub mod outbound;
