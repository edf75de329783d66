use axum::extract::{FromRequest, Multipart, Request};

use crate::{
    dto::catalog::CatalogForm,
    error::{AppError, PlainTextError},
    upload::SwatchUpload,
};

/// Multipart field carrying the swatch image.
pub const SWATCH_FIELD: &str = "kartela";

const DUPLICATE_SWATCH: &str = "Yalnızca bir kartela resmi yüklenebilir";

/// A parsed ingestion form. The swatch, when present, already passed the
/// extension and content-type checks; anything else rejects the request here,
/// before the handler runs.
#[derive(Debug)]
pub struct CatalogSubmission {
    pub form: CatalogForm,
    pub swatch: Option<SwatchUpload>,
}

impl<S> FromRequest<S> for CatalogSubmission
where
    S: Send + Sync,
{
    type Rejection = PlainTextError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        let mut form = CatalogForm::default();
        let mut swatch: Option<SwatchUpload> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?
        {
            let name = field.name().unwrap_or("").to_string();

            if let Some(file_name) = field.file_name().map(str::to_string) {
                // Browsers send an empty filename when no file was chosen.
                if name != SWATCH_FIELD || file_name.is_empty() {
                    continue;
                }
                if swatch.is_some() {
                    return Err(AppError::Validation(DUPLICATE_SWATCH.into()).into());
                }
                let extension = SwatchUpload::check(&file_name, field.content_type())?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                swatch = Some(SwatchUpload::new(extension, data));
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            if !form.set(&name, value) {
                tracing::debug!(field = %name, "ignoring unknown form field");
            }
        }

        Ok(CatalogSubmission { form, swatch })
    }
}
