/// Roles documented for API consumers. Assignment does not restrict role
/// names to this catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KnownRoleName {
    Operator,
    Admin,
    ProviderManager,
    Technician,
}

impl KnownRoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operator => "OPERATOR",
            Self::Admin => "ADMIN",
            Self::ProviderManager => "PROVIDER_MANAGER",
            Self::Technician => "TECHNICIAN",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Operator => "Handles day-to-day dispatch operations",
            Self::Admin => "Full administrative access",
            Self::ProviderManager => "Manages service providers and their staff",
            Self::Technician => "Field technician assigned to work orders",
        }
    }

    pub fn all() -> &'static [Self] {
        const VALUES: [KnownRoleName; 4] = [
            KnownRoleName::Operator,
            KnownRoleName::Admin,
            KnownRoleName::ProviderManager,
            KnownRoleName::Technician,
        ];
        &VALUES
    }
}
