use super::{ByteSize, PackageName};

/// PackageInfo value object - the resolved size of one package's latest version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    name: PackageName,
    size: ByteSize,
    pretty_size: String,
}

impl PackageInfo {
    pub fn new(name: PackageName, raw_size_bytes: u64) -> Self {
        let size = ByteSize::new(raw_size_bytes);
        Self {
            name,
            pretty_size: size.pretty(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    pub fn raw_size_bytes(&self) -> u64 {
        self.size.bytes()
    }

    pub fn pretty_size(&self) -> &str {
        &self.pretty_size
    }
}

/// A package left out of the report, with the cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedPackage {
    pub name: String,
    pub reason: String,
}

/// Outcome of a single size lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Emitted(PackageInfo),
    Dropped(DroppedPackage),
}
