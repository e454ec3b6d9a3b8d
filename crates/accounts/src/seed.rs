use serde::Serialize;

/// A demo account provisioned by the seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub full_name: &'static str,
    pub role: &'static str,
}

/// Fixed fixture list. The seeder may run any number of times; accounts that
/// already exist are reported, not recreated.
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@tiendaops.dev",
        password: "Admin1234!",
        full_name: "Administración",
        role: "admin",
    },
    DemoAccount {
        email: "gerente@tiendaops.dev",
        password: "Gerente1234!",
        full_name: "Gerencia de Tienda",
        role: "gerente",
    },
    DemoAccount {
        email: "almacen@tiendaops.dev",
        password: "Almacen1234!",
        full_name: "Equipo de Almacén",
        role: "almacen",
    },
    DemoAccount {
        email: "ventas@tiendaops.dev",
        password: "Ventas1234!",
        full_name: "Equipo de Ventas",
        role: "ventas",
    },
];

/// Outcome of seeding one account, serialized for the admin-facing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeedStatus {
    #[serde(rename = "creado")]
    Created,
    #[serde(rename = "ya existía")]
    AlreadyExists,
    #[serde(rename = "error")]
    Failed,
}

/// Per-account entry of the seeder response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedResult {
    pub email: String,
    pub status: SeedStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SeedResult {
    pub fn created(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: SeedStatus::Created,
            detail: None,
        }
    }

    pub fn already_exists(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: SeedStatus::AlreadyExists,
            detail: None,
        }
    }

    pub fn failed(email: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: SeedStatus::Failed,
            detail: Some(detail.into()),
        }
    }
}

/// Mirrored `profiles` row, upserted keyed on email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileMirror {
    pub email: String,
    pub full_name: String,
    pub role: String,
}

impl From<&DemoAccount> for ProfileMirror {
    fn from(account: &DemoAccount) -> Self {
        Self {
            email: account.email.to_string(),
            full_name: account.full_name.to_string(),
            role: account.role.to_string(),
        }
    }
}
