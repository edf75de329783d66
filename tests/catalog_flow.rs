mod common;

use axum::http::StatusCode;
use common::{PNG_BYTES, Part, app, body_bytes, body_json, body_text, database_state, get, post_multipart};
use kumas_catalog_api::{
    dto::catalog::CatalogForm,
    entity::fabrics::ActiveModel as FabricActive,
    routes::admin::FABRIC_CREATED,
    services::catalog_service,
    state::AppState,
    upload::SwatchUpload,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, Set, Statement};

// Ingest through HTTP, then check both listings and the served swatch.
#[tokio::test]
async fn ingest_list_and_showcase_flow() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let Some(state) = database_state(dir.path()).await? else {
        return Ok(());
    };
    reset(&state).await?;

    let parts = vec![
        Part::Text("isim", "Lino Natural"),
        Part::Text("satici_turu", "TOPTAN"),
        Part::Text("vitrin", "1"),
        Part::File {
            name: "kartela",
            file_name: "lino.png",
            content_type: "image/png",
            data: PNG_BYTES,
        },
    ];
    let response = post_multipart(app(state.clone()), "/admin/kumas-ekle", &parts).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, FABRIC_CREATED);

    // Inactive but showcased: must show up only in the showcase.
    insert_raw(&state, "Arşiv Saten", false, true).await?;
    // Active but not showcased.
    insert_raw(&state, "Pamuk", true, false).await?;

    let response = get(app(state.clone()), "/kumaslar").await;
    assert_eq!(response.status(), StatusCode::OK);
    let active = body_json(response).await;
    let active = active.as_array().unwrap();
    assert_eq!(active.len(), 2);
    let lino = &active[0];
    assert_eq!(lino["isim"], "Lino Natural");
    assert_eq!(lino["satici_turu"], "toptan");
    assert_eq!(lino["seo_baslik"], "");
    assert_eq!(lino["seo_aciklama"], "");
    assert!(lino.get("aktif").is_none());
    assert!(active.iter().all(|e| e["isim"] != "Arşiv Saten"));

    let swatch = lino["kartela_resmi"].as_str().unwrap().to_string();
    assert!(swatch.ends_with(".png"));
    assert_ne!(swatch, "lino.png");

    let response = get(app(state.clone()), "/kumaslar/vitrin").await;
    assert_eq!(response.status(), StatusCode::OK);
    let showcase = body_json(response).await;
    let names: Vec<&str> = showcase
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["isim"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lino Natural", "Arşiv Saten"]);
    assert!(showcase[0].get("satici_turu").is_none());

    let response = get(app(state.clone()), &format!("/uploads/{swatch}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, PNG_BYTES);

    // The service hands back the stored entry, id included.
    let mut form = CatalogForm::default();
    form.set("isim", "Kadife".into());
    form.set("satici_turu", "Perakende".into());
    form.set("vitrin", "true".into());
    let swatch = SwatchUpload::new("webp".into(), PNG_BYTES.to_vec().into());

    let entry = catalog_service::create_catalog_entry(&state, form, Some(swatch)).await?;
    assert!(entry.id > 0);
    assert_eq!(entry.seller_type, "perakende");
    assert!(dir.path().join(&entry.swatch_image).exists());

    let showcase = catalog_service::list_showcased_catalog_entries(&state).await?;
    assert!(showcase.iter().all(|e| e.id != entry.id));

    Ok(())
}

async fn reset(state: &AppState) -> anyhow::Result<()> {
    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(
            backend,
            "TRUNCATE TABLE kumaslar RESTART IDENTITY",
        ))
        .await?;
    Ok(())
}

async fn insert_raw(state: &AppState, name: &str, active: bool, showcased: bool) -> anyhow::Result<()> {
    FabricActive {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(None),
        seller_type: Set("toptan".into()),
        swatch_image: Set("placeholder.png".into()),
        seo_title: Set(String::new()),
        seo_description: Set(String::new()),
        active: Set(active),
        showcased: Set(showcased),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}
