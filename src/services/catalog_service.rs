use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    ActiveValue::NotSet,
};

use crate::{
    dto::catalog::{CatalogForm, MISSING_SWATCH},
    entity::fabrics::{ActiveModel, Column, Entity as Fabrics, Model as FabricModel},
    error::{AppError, AppResult},
    models::{CatalogEntry, ShowcaseEntry},
    state::AppState,
    upload::SwatchUpload,
};

pub const CREATE_FAILED: &str = "Kayıt yapılamadı";
pub const LIST_FAILED: &str = "Listeleme yapılamadı";
pub const SHOWCASE_FAILED: &str = "Vitrin kumaşları listelenemedi";

/// Validate, store the swatch, insert the row. The file is removed again when
/// the insert fails so no orphan is left in the upload dir.
pub async fn create_catalog_entry(
    state: &AppState,
    form: CatalogForm,
    swatch: Option<SwatchUpload>,
) -> AppResult<CatalogEntry> {
    let swatch = swatch.ok_or_else(|| AppError::Validation(MISSING_SWATCH.into()))?;
    let entry = form.into_new_entry()?;

    let file_name = state.uploads.store(&swatch).await?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(entry.name),
        description: Set(entry.description),
        seller_type: Set(entry.seller_type),
        swatch_image: Set(file_name.clone()),
        seo_title: Set(entry.seo_title),
        seo_description: Set(entry.seo_description),
        active: Set(true),
        showcased: Set(entry.showcased),
    };

    let fabric = match active.insert(&state.orm).await {
        Ok(fabric) => fabric,
        Err(err) => {
            state.uploads.discard(&file_name).await;
            return Err(AppError::persistence(CREATE_FAILED)(err));
        }
    };

    tracing::info!(
        fabric_id = fabric.id,
        swatch = %fabric.swatch_image,
        showcased = fabric.showcased,
        "catalog entry created"
    );
    Ok(catalog_entry_from_entity(fabric))
}

pub async fn list_active_catalog_entries(state: &AppState) -> AppResult<Vec<CatalogEntry>> {
    let items = Fabrics::find()
        .filter(Column::Active.eq(true))
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await
        .map_err(AppError::persistence(LIST_FAILED))?
        .into_iter()
        .map(catalog_entry_from_entity)
        .collect();
    Ok(items)
}

pub async fn list_showcased_catalog_entries(state: &AppState) -> AppResult<Vec<ShowcaseEntry>> {
    let items = Fabrics::find()
        .filter(Column::Showcased.eq(true))
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await
        .map_err(AppError::persistence(SHOWCASE_FAILED))?
        .into_iter()
        .map(showcase_entry_from_entity)
        .collect();
    Ok(items)
}

fn catalog_entry_from_entity(model: FabricModel) -> CatalogEntry {
    CatalogEntry {
        id: model.id,
        name: model.name,
        description: model.description,
        seller_type: model.seller_type,
        swatch_image: model.swatch_image,
        seo_title: model.seo_title,
        seo_description: model.seo_description,
    }
}

fn showcase_entry_from_entity(model: FabricModel) -> ShowcaseEntry {
    ShowcaseEntry {
        id: model.id,
        name: model.name,
        swatch_image: model.swatch_image,
        description: model.description,
    }
}
