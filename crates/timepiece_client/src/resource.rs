use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use timepiece_http::error::HttpError;
use timepiece_http::{check_response, HttpClient};
use timepiece_types::contracts::{build_query_string, Page, PageRequest};
use timepiece_types::http::{RequestType, Resource};
use tracing::error;

fn api_error(err: HttpError) -> ApiError {
    match err {
        HttpError::ValidationError(detail) => ApiError::ValidationError(detail),
        other => ApiError::HttpError(other),
    }
}

/// Uniform CRUD and filtered listing over one backend resource path. Every
/// resource client in the crate is this struct with the entity and filter
/// types plugged in; per-resource behavior lives in extension impls.
///
/// Holds no state beyond the shared HTTP client and the resource path, so
/// clones are cheap and calls from different UI flows never contend.
#[derive(Debug, Clone)]
pub struct ResourceClient<T, F> {
    pub(crate) http: HttpClient,
    pub(crate) resource: Resource,
    _marker: PhantomData<fn() -> (T, F)>,
}

impl<T, F> ResourceClient<T, F>
where
    T: Serialize + DeserializeOwned,
    F: Serialize,
{
    pub fn new(http: HttpClient, resource: Resource) -> Self {
        ResourceClient {
            http,
            resource,
            _marker: PhantomData,
        }
    }

    pub(crate) fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.resource.as_str(), id)
    }

    /// Logs a failed operation with its context, then hands the error back
    /// to the caller. User-visible messaging stays a UI concern.
    pub(crate) fn logged<R>(
        &self,
        operation: &str,
        id: Option<i64>,
        result: Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        if let Err(err) = &result {
            error!(
                resource = self.resource.as_str(),
                operation = operation,
                id = ?id,
                "{}",
                err
            );
        }
        result
    }

    /// Maps a transport-level not-found onto the entity the caller asked for.
    fn not_found(&self, id: i64) -> impl FnOnce(HttpError) -> ApiError + '_ {
        move |err| match err {
            HttpError::NotFound(_) => ApiError::NotFound {
                resource: self.resource.as_str().to_string(),
                id,
            },
            other => api_error(other),
        }
    }

    pub fn get_by_id(&self, id: i64) -> Result<T, ApiError> {
        let result = (|| {
            let response =
                self.http
                    .request(&self.item_path(id), RequestType::Get, None, None, None)?;
            let response = check_response(response).map_err(self.not_found(id))?;
            Ok(response.json::<T>()?)
        })();

        self.logged("get_by_id", Some(id), result)
    }

    pub fn create<N: Serialize>(&self, data: &N) -> Result<T, ApiError> {
        let result = (|| {
            let body = serde_json::to_value(data)?;
            let response = self.http.request(
                self.resource.as_str(),
                RequestType::Post,
                Some(body),
                None,
                None,
            )?;
            let response = check_response(response).map_err(api_error)?;
            Ok(response.json::<T>()?)
        })();

        self.logged("create", None, result)
    }

    /// Full replacement of the entity's fields.
    pub fn update(&self, id: i64, data: &T) -> Result<T, ApiError> {
        let result = (|| {
            let body = serde_json::to_value(data)?;
            let response = self.http.request(
                &self.item_path(id),
                RequestType::Put,
                Some(body),
                None,
                None,
            )?;
            let response = check_response(response).map_err(self.not_found(id))?;
            Ok(response.json::<T>()?)
        })();

        self.logged("update", Some(id), result)
    }

    /// Partial update. Fields absent from the patch are left unchanged
    /// server-side.
    pub fn patch<P: Serialize>(&self, id: i64, data: &P) -> Result<T, ApiError> {
        let result = (|| {
            let body = serde_json::to_value(data)?;
            let response = self.http.request(
                &self.item_path(id),
                RequestType::Patch,
                Some(body),
                None,
                None,
            )?;
            let response = check_response(response).map_err(self.not_found(id))?;
            Ok(response.json::<T>()?)
        })();

        self.logged("patch", Some(id), result)
    }

    pub fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = (|| {
            let response =
                self.http
                    .request(&self.item_path(id), RequestType::Delete, None, None, None)?;
            check_response(response).map_err(self.not_found(id))?;
            Ok(true)
        })();

        self.logged("delete", Some(id), result)
    }

    /// Filtered, paginated listing of the resource collection.
    pub fn list(&self, page: &PageRequest, filter: Option<&F>) -> Result<Page<T>, ApiError> {
        let result = (|| {
            let query = build_query_string(page, filter)?;
            let response = self.http.request(
                self.resource.as_str(),
                RequestType::Get,
                None,
                Some(query),
                None,
            )?;
            let response = check_response(response).map_err(api_error)?;
            Ok(response.json::<Page<T>>()?)
        })();

        self.logged("list", None, result)
    }
}
