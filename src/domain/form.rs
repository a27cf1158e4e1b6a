use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// The inputs of the teacher form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Username,
    Email,
    Password,
    FirstName,
    LastName,
    PersonalIdCode,
    Phone,
    Address,
    NationalId,
    Birthday,
    Sex,
    Photo,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::FirstName,
        Field::LastName,
        Field::PersonalIdCode,
        Field::Phone,
        Field::Address,
        Field::NationalId,
        Field::Birthday,
        Field::Sex,
        Field::Photo,
    ];

    /// Name used by the form on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PersonalIdCode => "curp",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::NationalId => "bloodType",
            Field::Birthday => "birthday",
            Field::Sex => "sex",
            Field::Photo => "img",
        }
    }

    /// Name of the struct member holding this field in `TeacherFormInput`
    pub fn key(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::PersonalIdCode => "personal_id_code",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::NationalId => "national_id",
            Field::Birthday => "birthday",
            Field::Sex => "sex",
            Field::Photo => "photo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Usuario",
            Field::Email => "Email",
            Field::Password => "Contraseña",
            Field::FirstName => "Nombre",
            Field::LastName => "Apellido",
            Field::PersonalIdCode => "CURP",
            Field::Phone => "Teléfono",
            Field::Address => "Dirección",
            Field::NationalId => "Número de Seguro Social",
            Field::Birthday => "Fecha de nacimiento",
            Field::Sex => "Sexo",
            Field::Photo => "Subir una foto",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.key() == key || f.name() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A constraint violated by one field, with the message shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldValidationError {
    #[schema(value_type = String, example = "username")]
    pub field: Field,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
