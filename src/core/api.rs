//! Storage API client.
//!
//! [`Endpoints`] computes every URL for one storage target; [`ApiClient`]
//! performs the requests through `gloo-net` and interprets the response
//! envelope, so callers only ever see `Result<_, ApiError>`.

use gloo_net::http::{Request, Response};
use web_sys::FormData;

use super::envelope::{self, Envelope, code};
use super::error::ApiError;
use super::paths;
use crate::models::{FileEntry, StorageTarget};
use crate::utils::dom;
use crate::utils::url::with_query;

// =============================================================================
// Endpoints
// =============================================================================

/// URL builder for the operations of one storage target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    target: StorageTarget,
}

impl Endpoints {
    pub fn new(base_url: &str, target: StorageTarget) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            target,
        }
    }

    pub fn target(&self) -> &StorageTarget {
        &self.target
    }

    fn op(&self, name: &str) -> String {
        format!("{}{}/{}", self.base_url, self.target.api_prefix(), name)
    }

    /// `POST ls` (form field `dir`).
    pub fn list(&self) -> String {
        self.op("ls")
    }

    /// `GET download?file=&t=`; `t` defeats intermediary caches.
    pub fn download(&self, file: &str, t: u64) -> String {
        with_query(&self.op("download"), &[("file", file), ("t", &t.to_string())])
    }

    /// `POST upload?dir=` (multipart field `file`).
    pub fn upload(&self, dir: &str) -> String {
        with_query(&self.op("upload"), &[("dir", dir)])
    }

    /// `POST rm` (form field `file`).
    pub fn remove(&self) -> String {
        self.op("rm")
    }

    /// `POST edit` (form fields `file`, `fileContent`).
    pub fn edit(&self) -> String {
        self.op("edit")
    }

    /// `POST mkdir?dir=`.
    pub fn mkdir(&self, dir: &str) -> String {
        with_query(&self.op("mkdir"), &[("dir", dir)])
    }

    /// `POST rename?oldName=&newName=`.
    pub fn rename(&self, old_name: &str, new_name: &str) -> String {
        with_query(
            &self.op("rename"),
            &[("oldName", old_name), ("newName", new_name)],
        )
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client bound to one storage target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(base_url: &str, target: StorageTarget) -> Self {
        Self {
            endpoints: Endpoints::new(base_url, target),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// List a directory. An empty `dir` lists the root.
    pub async fn list(&self, dir: &str) -> Result<Vec<FileEntry>, ApiError> {
        let form = form_data(&[("dir", paths::or_root(dir))])?;
        let entries: Option<Vec<FileEntry>> = self
            .post(&self.endpoints.list(), Some(form))
            .await?
            .into_result()?;
        // An empty directory may come back as `null`
        Ok(entries.unwrap_or_default())
    }

    /// Fresh download URL for `file`.
    pub fn download_url(&self, file: &str) -> String {
        self.endpoints.download(file, dom::now_ms())
    }

    /// Fetch a file's content as text (for the editor).
    pub async fn read_text(&self, file: &str) -> Result<String, ApiError> {
        let response = Request::get(&self.download_url(file)).send().await?;
        let is_json = response
            .headers()
            .get("content-type")
            .is_some_and(|ct| ct.contains("application/json"));
        let body = checked_body(response).await?;
        interpret_text(is_json, body)
    }

    /// Delete a file or directory.
    pub async fn remove(&self, file: &str) -> Result<(), ApiError> {
        let form = form_data(&[("file", file)])?;
        self.post(&self.endpoints.remove(), Some(form))
            .await?
            .into_value()
            .map(drop)
    }

    /// Replace a file's content.
    pub async fn edit(&self, file: &str, content: &str) -> Result<(), ApiError> {
        let form = form_data(&[("file", file), ("fileContent", content)])?;
        self.post(&self.endpoints.edit(), Some(form))
            .await?
            .into_value()
            .map(drop)
    }

    /// Create a directory (full path).
    pub async fn mkdir(&self, dir: &str) -> Result<(), ApiError> {
        self.post(&self.endpoints.mkdir(dir), None)
            .await?
            .into_value()
            .map(drop)
    }

    /// Move `old_name` to `new_name` (both full paths).
    pub async fn rename(&self, old_name: &str, new_name: &str) -> Result<(), ApiError> {
        self.post(&self.endpoints.rename(old_name, new_name), None)
            .await?
            .into_value()
            .map(drop)
    }

    async fn post(&self, url: &str, body: Option<FormData>) -> Result<Envelope, ApiError> {
        let builder = Request::post(url);
        let request = match body {
            Some(form) => builder.body(form)?,
            None => builder.build()?,
        };
        let response = request.send().await?;
        let body = checked_body(response).await?;
        Envelope::parse(&body)
    }
}

/// Read the body, turning HTTP-level failures into errors.
async fn checked_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    check_status(status, &body)?;
    Ok(body)
}

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthenticated),
        _ => Err(ApiError::Http {
            status,
            message: envelope::error_message(status, body),
        }),
    }
}

/// A download answered with JSON may be an error envelope rather than the
/// file itself; anything else is returned verbatim.
fn interpret_text(is_json: bool, body: String) -> Result<String, ApiError> {
    if is_json
        && let Ok(env) = Envelope::parse(&body)
        && env.code != code::SUCCESS
        && env.code != code::CONTINUE
    {
        env.into_value()?;
    }
    Ok(body)
}

fn form_data(fields: &[(&str, &str)]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::RequestBuild("FormData".to_string()))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::RequestBuild(format!("form field {}", name)))?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(base: &str) -> Endpoints {
        Endpoints::new(base, StorageTarget::new("storages", "s1"))
    }

    #[test]
    fn test_endpoint_paths() {
        let e = endpoints("");
        assert_eq!(e.list(), "/storages/s1/ls");
        assert_eq!(e.remove(), "/storages/s1/rm");
        assert_eq!(e.edit(), "/storages/s1/edit");

        let remote = endpoints("https://ops.example.com/api/");
        assert_eq!(remote.list(), "https://ops.example.com/api/storages/s1/ls");
    }

    #[test]
    fn test_endpoint_queries_are_encoded() {
        let e = endpoints("");
        assert_eq!(
            e.download("/etc/my file.conf", 1700000000000),
            "/storages/s1/download?file=%2Fetc%2Fmy%20file.conf&t=1700000000000"
        );
        assert_eq!(e.upload("/srv/www"), "/storages/s1/upload?dir=%2Fsrv%2Fwww");
        assert_eq!(e.mkdir("/tmp/new"), "/storages/s1/mkdir?dir=%2Ftmp%2Fnew");
        assert_eq!(
            e.rename("/a.txt", "/b&c.txt"),
            "/storages/s1/rename?oldName=%2Fa.txt&newName=%2Fb%26c.txt"
        );
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200, ""), Ok(()));
        assert_eq!(check_status(401, ""), Err(ApiError::Unauthenticated));
        assert_eq!(
            check_status(500, r#"{"code":500,"message":"boom"}"#),
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string()
            })
        );
    }

    #[test]
    fn test_interpret_text() {
        assert_eq!(
            interpret_text(false, "plain text".to_string()),
            Ok("plain text".to_string())
        );

        // a JSON file on the storage is content, not an envelope
        let file = r#"{"name":"pkg","version":"1.0.0"}"#.to_string();
        assert_eq!(interpret_text(true, file.clone()), Ok(file));

        let ok = r#"{"code":1,"message":"","data":null}"#.to_string();
        assert_eq!(interpret_text(true, ok.clone()), Ok(ok));

        assert_eq!(
            interpret_text(true, r#"{"code":401,"message":""}"#.to_string()),
            Err(ApiError::Unauthenticated)
        );
        assert!(matches!(
            interpret_text(true, r#"{"code":0,"message":"too large"}"#.to_string()),
            Err(ApiError::Application { .. })
        ));
    }
}
