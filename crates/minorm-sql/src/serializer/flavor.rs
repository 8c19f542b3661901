use super::Serializer;

use minorm_core::driver::Capability;

pub(super) use minorm_core::driver::SqlFlavor as Flavor;

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn sql_server() -> Serializer {
        Serializer {
            flavor: Flavor::SqlServer,
        }
    }

    /// Returns the serializer for the dialect a driver speaks.
    pub fn for_capability(capability: &Capability) -> Serializer {
        Serializer {
            flavor: capability.sql_flavor,
        }
    }
}
