use serde::{Deserialize, Serialize};

/// Contact details collected by the intake form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub company_name: String,
}

impl ContactInfo {
    /// Presence check only; values are forwarded as typed.
    pub fn validate(&self) -> Result<(), IntakeError> {
        let fields = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Whatsapp, &self.whatsapp),
            (ContactField::CompanyName, &self.company_name),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(IntakeError::MissingField(*field)),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
    CompanyName,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Whatsapp => "whatsapp",
            ContactField::CompanyName => "companyName",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("contact field '{}' is required", .0.label())]
    MissingField(ContactField),
}
