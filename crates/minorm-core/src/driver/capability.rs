use crate::schema::db;

#[derive(Debug)]
pub struct Capability {
    /// SQL dialect the database speaks
    pub sql_flavor: SqlFlavor,

    /// Column storage types supported by the database
    pub storage_types: StorageTypes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlFlavor {
    Sqlite,
    SqlServer,
}

#[derive(Debug)]
pub struct StorageTypes {
    /// The default storage type for a string.
    pub default_string_type: db::Type,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        sql_flavor: SqlFlavor::Sqlite,
        storage_types: StorageTypes::SQLITE,
    };

    /// SQL Server capabilities.
    pub const SQL_SERVER: Self = Self {
        sql_flavor: SqlFlavor::SqlServer,
        storage_types: StorageTypes::SQL_SERVER,
    };
}

impl StorageTypes {
    /// SQLite ignores `VARCHAR` lengths, the cap is declared for parity with
    /// SQL Server schemas.
    pub const SQLITE: Self = Self {
        default_string_type: db::Type::VarChar(100),
    };

    pub const SQL_SERVER: Self = Self {
        default_string_type: db::Type::VarChar(100),
    };
}
