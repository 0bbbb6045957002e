use crate::models::{EntryPayload, EntrySubmission, FormSubmission, UploadedFile};
use crate::web::error::AppError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;

/// JSON body decoded regardless of the declared content type. Any decode
/// failure is a 400 `Invalid JSON`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    fn from_request<'life0, 'async_trait>(
        req: Request,
        state: &'life0 S,
    ) -> Pin<Box<dyn Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>>
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|_| invalid_json())?;
            let value = serde_json::from_slice(&body).map_err(|_| invalid_json())?;
            Ok(JsonBody(value))
        })
    }
}

impl<S> FromRequest<S> for EntrySubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request<'life0, 'async_trait>(
        req: Request,
        state: &'life0 S,
    ) -> Pin<Box<dyn Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>>
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("multipart/form-data"))
            .unwrap_or(false);

        Box::pin(async move {
            if is_multipart {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|_| invalid_form())?;
                Ok(EntrySubmission::Form(read_form(multipart).await?))
            } else {
                let JsonBody(payload) = JsonBody::<EntryPayload>::from_request(req, state).await?;
                Ok(EntrySubmission::Json(payload))
            }
        })
    }
}

/// Buffers every part. Parts with a non-empty filename are files, the rest
/// text. An untouched `<input type="file">` arrives as `filename=""` and is
/// read as an empty text value.
async fn read_form(mut multipart: Multipart) -> Result<FormSubmission, AppError> {
    let mut form = FormSubmission::new();

    while let Some(field) = multipart.next_field().await.map_err(|_| invalid_form())? {
        let name = field.name().unwrap_or_default().to_string();
        match field
            .file_name()
            .filter(|file_name| !file_name.is_empty())
            .map(str::to_string)
        {
            Some(file_name) => {
                let data = field.bytes().await.map_err(|_| invalid_form())?;
                form.push_file(
                    name,
                    UploadedFile {
                        file_name,
                        data: data.to_vec(),
                    },
                );
            }
            None => {
                let value = field.text().await.map_err(|_| invalid_form())?;
                form.push_field(name, value);
            }
        }
    }

    Ok(form)
}

fn invalid_json() -> AppError {
    AppError::bad_request("Invalid JSON")
}

fn invalid_form() -> AppError {
    AppError::bad_request("Invalid form")
}
