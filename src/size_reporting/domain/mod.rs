/// Domain model for package size reporting
mod auth_token;
mod byte_size;
mod names;
mod package_info;

pub use auth_token::AuthToken;
pub use byte_size::ByteSize;
pub use names::{OrgName, PackageName};
pub use package_info::{DroppedPackage, FetchOutcome, PackageInfo};
