use serde::{Deserialize, Serialize};

// ============================================================================
// Field names
// ============================================================================

/// Поле контактной формы, в порядке отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    /// Name used in error messages and serialized keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Текущие значения полей формы (редактируемые)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDto {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::FirstName => self.first_name = value,
            FieldName::LastName => self.last_name = value,
            FieldName::Email => self.email = value,
            FieldName::Message => self.message = value,
        }
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Значения, зафиксированные при успешной отправке.
///
/// Never edited in place: every accepted submit builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` when the message was empty at submit time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&ContactFormDto> for SubmittedSnapshot {
    fn from(dto: &ContactFormDto) -> Self {
        Self {
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            message: if dto.message.is_empty() {
                None
            } else {
                Some(dto.message.clone())
            },
        }
    }
}
