use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const MISSING_SWATCH: &str = "Kartela resmi yüklenmedi";
pub const MISSING_NAME: &str = "Kumaş ismi zorunlu";
pub const MISSING_SELLER_TYPE: &str = "Satıcı türü zorunlu";

/// Raw text fields of an ingestion form, exactly as they arrived.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub seller_type: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub showcase: Option<String>,
}

impl CatalogForm {
    /// Store a multipart text part. Returns false for field names the form does not know.
    pub fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "isim" => &mut self.name,
            "aciklama" => &mut self.description,
            "satici_turu" => &mut self.seller_type,
            "seo_baslik" => &mut self.seo_title,
            "seo_aciklama" => &mut self.seo_description,
            "vitrin" => &mut self.showcase,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    pub fn into_new_entry(self) -> AppResult<NewCatalogEntry> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_NAME.into()))?;
        let seller_type = self
            .seller_type
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_SELLER_TYPE.into()))?;

        Ok(NewCatalogEntry {
            name,
            description: self.description,
            seller_type: seller_type.to_lowercase(),
            seo_title: self.seo_title.unwrap_or_default(),
            seo_description: self.seo_description.unwrap_or_default(),
            showcased: self.showcase.as_deref() == Some("1"),
        })
    }
}

/// A validated, normalized entry ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCatalogEntry {
    pub name: String,
    pub description: Option<String>,
    pub seller_type: String,
    pub seo_title: String,
    pub seo_description: String,
    pub showcased: bool,
}

/// Multipart layout of `POST /admin/kumas-ekle`, for the API docs.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct CatalogUploadForm {
    pub isim: String,
    pub aciklama: Option<String>,
    pub satici_turu: String,
    pub seo_baslik: Option<String>,
    pub seo_aciklama: Option<String>,
    /// `"1"` puts the entry in the showcase.
    pub vitrin: Option<String>,
    #[schema(value_type = String, format = Binary)]
    pub kartela: Vec<u8>,
}
