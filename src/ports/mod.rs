/// Ports module defining interfaces for hexagonal architecture
///
/// The application core talks to credentials storage, the registry, the
/// console and the report destinations only through these traits.
pub mod outbound;
