use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "kumaslar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "isim")]
    pub name: String,
    #[sea_orm(column_name = "aciklama")]
    pub description: Option<String>,
    #[sea_orm(column_name = "satici_turu")]
    pub seller_type: String,
    #[sea_orm(column_name = "kartela_resmi")]
    pub swatch_image: String,
    #[sea_orm(column_name = "seo_baslik")]
    pub seo_title: String,
    #[sea_orm(column_name = "seo_aciklama")]
    pub seo_description: String,
    #[sea_orm(column_name = "aktif")]
    pub active: bool,
    #[sea_orm(column_name = "vitrin")]
    pub showcased: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
