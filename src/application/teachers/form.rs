use crate::domain::form::{Field, FieldValidationError};
use crate::domain::teachers::{
    FormMode, Photo, Sex, SubmissionReceipt, TeacherDraft, TeacherSubmission,
    TeacherSubmissionHandler,
};
use crate::shared::error::AppError;
use crate::shared::validation::{field_errors, invalid, max_chars};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

const USERNAME_MAX: &str = "El nombre de usuario no puede contener más de 10 caracteres";
const NATIONAL_ID_MAX: &str = "El NSS no puede contener más de 11 caracteres";
const PERSONAL_ID_CODE_MAX: &str = "La CURP contiene más de 18 caracteres";
const BIRTHDAY_REQUIRED: &str = "Ingresa la fecha de nacimiento";
const SEX_REQUIRED: &str = "Ingresa el sexo";
const PHOTO_REQUIRED: &str = "Sube una imagen";

/// Raw values as typed into the teacher form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherFormInput {
    #[validate(
        length(min = 5, message = "El nombre de usuario debe contener por lo menos 5 caracteres"),
        custom(function = "username_max")
    )]
    #[schema(example = "teach1", min_length = 5, max_length = 10)]
    pub username: String,
    #[validate(email(message = "La dirección de correo electrónico no es válida"))]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "La contraseña debe contener 8 caracteres mínimo"))]
    #[schema(example = "password1", min_length = 8)]
    pub password: String,
    #[validate(length(min = 1, message = "Debes ingresar el nombre"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Ingresa el apellido"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "Ingresa el número telefónico"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Ingresa una dirección"))]
    pub address: String,
    #[serde(rename = "bloodType")]
    #[validate(
        length(min = 11, message = "El NSS debe contener 11 caracteres"),
        custom(function = "national_id_max")
    )]
    #[schema(example = "12345678901", min_length = 11, max_length = 11)]
    pub national_id: String,
    #[serde(rename = "curp")]
    #[validate(
        length(min = 18, message = "La CURP debe contener 18 caracteres"),
        custom(function = "personal_id_code_max")
    )]
    #[schema(example = "ABCD123456EFGH1234", min_length = 18, max_length = 18)]
    pub personal_id_code: String,
    #[validate(custom(function = "valid_birthday"))]
    #[schema(example = "1990-05-17", format = Date)]
    pub birthday: String,
    #[validate(custom(function = "valid_sex"))]
    #[schema(example = "female")]
    pub sex: String,
    #[serde(skip)]
    #[validate(required(message = "Sube una imagen"))]
    pub photo: Option<Photo>,
}

fn username_max(value: &str) -> Result<(), ValidationError> {
    max_chars(value, 10, USERNAME_MAX)
}

fn national_id_max(value: &str) -> Result<(), ValidationError> {
    max_chars(value, 11, NATIONAL_ID_MAX)
}

fn personal_id_code_max(value: &str) -> Result<(), ValidationError> {
    max_chars(value, 18, PERSONAL_ID_CODE_MAX)
}

fn valid_birthday(value: &str) -> Result<(), ValidationError> {
    parse_date(value)
        .map(|_| ())
        .ok_or_else(|| invalid("date", BIRTHDAY_REQUIRED))
}

fn valid_sex(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Sex>()
        .map(|_| ())
        .map_err(|_| invalid("enum", SEX_REQUIRED))
}

/// Parses the value of a date input (`YYYY-MM-DD`)
pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

impl TeacherFormInput {
    /// Reads pre-fill values out of an arbitrary record. Anything that is not
    /// a scalar is skipped and the photo is never pre-filled.
    pub fn from_prefill(record: &Value) -> Self {
        let mut input = Self::default();
        let Some(object) = record.as_object() else {
            return input;
        };

        for field in Field::ALL {
            let text = match object.get(field.name()) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Bool(b)) => b.to_string(),
                _ => continue,
            };

            let text = if field == Field::Birthday {
                birthday_prefill(text)
            } else {
                text
            };
            input.set(field, text);
        }

        input
    }

    /// Stores a text value. Setting the photo this way is a no-op.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::PersonalIdCode => self.personal_id_code = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
            Field::NationalId => self.national_id = value,
            Field::Birthday => self.birthday = value,
            Field::Sex => self.sex = value,
            Field::Photo => {}
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PersonalIdCode => &self.personal_id_code,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::NationalId => &self.national_id,
            Field::Birthday => &self.birthday,
            Field::Sex => &self.sex,
            Field::Photo => return self.photo.as_ref().map(|p| p.file_name.as_str()),
        };
        Some(value.as_str())
    }

    /// Checks every field and types the values into a draft
    pub fn to_draft(&self) -> Result<TeacherDraft, Vec<FieldValidationError>> {
        if let Err(errors) = self.validate() {
            return Err(field_errors(&errors));
        }

        let (birthday, sex, photo) = self.typed_values()?;

        Ok(TeacherDraft {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            national_id: self.national_id.clone(),
            personal_id_code: self.personal_id_code.clone(),
            birthday,
            sex,
            photo,
        })
    }
}

impl TeacherFormInput {
    /// The values that change type on the way to a draft. Each one reports
    /// its own field when it cannot be converted.
    fn typed_values(&self) -> Result<(Date, Sex, Photo), Vec<FieldValidationError>> {
        let mut errors = Vec::new();

        let birthday = parse_date(&self.birthday);
        if birthday.is_none() {
            errors.push(FieldValidationError::new(Field::Birthday, BIRTHDAY_REQUIRED));
        }
        let sex = self.sex.parse::<Sex>().ok();
        if sex.is_none() {
            errors.push(FieldValidationError::new(Field::Sex, SEX_REQUIRED));
        }
        let photo = self.photo.clone();
        if photo.is_none() {
            errors.push(FieldValidationError::new(Field::Photo, PHOTO_REQUIRED));
        }

        match (birthday, sex, photo) {
            (Some(birthday), Some(sex), Some(photo)) => Ok((birthday, sex, photo)),
            _ => Err(errors),
        }
    }
}

fn birthday_prefill(text: String) -> String {
    if parse_date(&text).is_some() {
        return text;
    }
    match OffsetDateTime::parse(&text, &Rfc3339) {
        Ok(ts) => format_date(ts.date()),
        Err(_) => text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Password,
    Date,
    Select,
    File,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One rendered input
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub input_type: InputType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectionView {
    pub title: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub title: String,
    pub mode: FormMode,
    pub status: FormStatus,
    pub sections: Vec<SectionView>,
    pub submit_label: String,
}

const ACCESS_FIELDS: [Field; 3] = [Field::Username, Field::Email, Field::Password];
const PERSONAL_FIELDS: [Field; 9] = [
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

/// The teacher create/update form: values, current errors and mode
#[derive(Debug, Clone)]
pub struct TeacherRecordForm {
    mode: FormMode,
    values: TeacherFormInput,
    errors: Vec<FieldValidationError>,
    status: FormStatus,
}

impl TeacherRecordForm {
    pub fn new(mode: FormMode, prefill: Option<&Value>) -> Self {
        let values = prefill
            .map(TeacherFormInput::from_prefill)
            .unwrap_or_default();
        Self::with_values(mode, values)
    }

    pub fn with_values(mode: FormMode, values: TeacherFormInput) -> Self {
        Self {
            mode,
            values,
            errors: Vec::new(),
            status: FormStatus::Editing,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn values(&self) -> &TeacherFormInput {
        &self.values
    }

    pub fn errors(&self) -> &[FieldValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    pub fn set_photo(&mut self, photo: Option<Photo>) {
        self.values.photo = photo;
    }

    pub fn validate(&self) -> Result<TeacherDraft, Vec<FieldValidationError>> {
        self.values.to_draft()
    }

    /// Validates every field and forwards a valid draft to `handler`. On
    /// failure the errors are kept for rendering and the form stays editable.
    pub async fn submit(
        &mut self,
        handler: &dyn TeacherSubmissionHandler,
        record_id: Option<Uuid>,
    ) -> Result<(TeacherDraft, SubmissionReceipt), AppError> {
        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                tracing::debug!(count = errors.len(), "teacher form rejected");
                self.errors = errors.clone();
                return Err(AppError::FieldValidation(errors));
            }
        };
        self.errors.clear();

        let receipt = handler
            .handle(TeacherSubmission {
                mode: self.mode,
                record_id,
                draft: draft.clone(),
            })
            .await?;
        self.status = FormStatus::Submitted;

        Ok((draft, receipt))
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Agregar",
            FormMode::Update => "Actualizar",
        }
    }

    pub fn render(&self) -> FormView {
        FormView {
            title: "Agregar docente".to_string(),
            mode: self.mode,
            status: self.status,
            sections: vec![
                self.section("Información de acceso", &ACCESS_FIELDS),
                self.section("Información personal", &PERSONAL_FIELDS),
            ],
            submit_label: self.submit_label().to_string(),
        }
    }

    fn section(&self, title: &str, fields: &[Field]) -> SectionView {
        SectionView {
            title: title.to_string(),
            fields: fields.iter().map(|f| self.field_view(*f)).collect(),
        }
    }

    fn field_view(&self, field: Field) -> FieldView {
        let input_type = match field {
            Field::Password => InputType::Password,
            Field::Birthday => InputType::Date,
            Field::Sex => InputType::Select,
            Field::Photo => InputType::File,
            _ => InputType::Text,
        };
        let options = match field {
            Field::Sex => [Sex::Male, Sex::Female]
                .into_iter()
                .map(|s| SelectOption {
                    value: s.as_str().to_string(),
                    label: s.label().to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };

        FieldView {
            name: field.name().to_string(),
            label: field.label().to_string(),
            input_type,
            value: self
                .values
                .get(field)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            options,
            error: self.error_for(field).map(str::to_string),
        }
    }
}
