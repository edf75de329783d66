use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry as returned by the active listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntry {
    pub id: i32,
    #[serde(rename = "isim")]
    pub name: String,
    #[serde(rename = "aciklama")]
    pub description: Option<String>,
    #[serde(rename = "satici_turu")]
    pub seller_type: String,
    #[serde(rename = "kartela_resmi")]
    pub swatch_image: String,
    #[serde(rename = "seo_baslik")]
    pub seo_title: String,
    #[serde(rename = "seo_aciklama")]
    pub seo_description: String,
}

/// The trimmed projection used by the storefront showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShowcaseEntry {
    pub id: i32,
    #[serde(rename = "isim")]
    pub name: String,
    #[serde(rename = "kartela_resmi")]
    pub swatch_image: String,
    #[serde(rename = "aciklama")]
    pub description: Option<String>,
}

/// Public view of an account. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountSummary {
    pub id: i32,
    #[serde(rename = "isim")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "rol")]
    pub role: String,
}
