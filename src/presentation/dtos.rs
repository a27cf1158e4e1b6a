use crate::application::teachers::form::format_date;
use crate::domain::teachers::{Photo, Sex, TeacherDraft};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResource {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: usize,
}

impl From<&Photo> for PhotoResource {
    fn from(photo: &Photo) -> Self {
        Self {
            file_name: photo.file_name.clone(),
            content_type: photo.content_type.clone(),
            size: photo.size(),
        }
    }
}

/// Accepted teacher draft as returned to the client. The password is omitted.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResource {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub blood_type: String,
    pub curp: String,
    #[schema(example = "1990-05-17")]
    pub birthday: String,
    pub sex: Sex,
    pub img: PhotoResource,
}

impl From<TeacherDraft> for TeacherResource {
    fn from(draft: TeacherDraft) -> Self {
        Self {
            img: PhotoResource::from(&draft.photo),
            birthday: format_date(draft.birthday),
            username: draft.username,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone: draft.phone,
            address: draft.address,
            blood_type: draft.national_id,
            curp: draft.personal_id_code,
            sex: draft.sex,
        }
    }
}
