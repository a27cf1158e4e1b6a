use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Caption shown in the select input
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Femenino",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(anyhow::anyhow!("Unknown sex: {}", other)),
        }
    }
}

/// An uploaded image file
#[derive(Clone, PartialEq, Eq)]
pub struct Photo {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Photo {
    /// Builds a photo from a file input. Only parts carrying a `filename` are
    /// files; browsers send an empty one when no file was picked, which counts
    /// as no photo at all.
    pub fn from_upload(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Option<Self> {
        let file_name = file_name?;
        if file_name.is_empty() && bytes.is_empty() {
            return None;
        }

        Some(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Serializes the metadata only, never the bytes
impl Serialize for Photo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Photo", 3)?;
        state.serialize_field("fileName", &self.file_name)?;
        state.serialize_field("contentType", &self.content_type)?;
        state.serialize_field("size", &self.bytes.len())?;
        state.end()
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// A teacher record that passed validation but is not persisted yet
#[derive(Clone, PartialEq, Eq)]
pub struct TeacherDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    /// Social security number, sent as `bloodType` by the form
    pub national_id: String,
    /// CURP
    pub personal_id_code: String,
    pub birthday: Date,
    pub sex: Sex,
    pub photo: Photo,
}

impl fmt::Debug for TeacherDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeacherDraft")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"********")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("national_id", &self.national_id)
            .field("personal_id_code", &self.personal_id_code)
            .field("birthday", &self.birthday)
            .field("sex", &self.sex)
            .field("photo", &self.photo)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Update,
}

#[derive(Debug, Clone)]
pub struct TeacherSubmission {
    pub mode: FormMode,
    /// Record being updated, if the caller knows it
    pub record_id: Option<Uuid>,
    pub draft: TeacherDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: OffsetDateTime,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: OffsetDateTime::now_utc(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives every draft that passes validation
#[async_trait]
pub trait TeacherSubmissionHandler: Send + Sync {
    async fn handle(&self, submission: TeacherSubmission)
    -> Result<SubmissionReceipt, anyhow::Error>;
}
