use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "kullanicilar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "isim")]
    pub full_name: String,
    pub email: String,
    /// Stored exactly as submitted; no hashing is applied.
    #[sea_orm(column_name = "sifre")]
    pub password: String,
    #[sea_orm(column_name = "rol")]
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
