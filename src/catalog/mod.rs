pub mod dto;

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::AppError;
use crate::models::{Course, Department, InterestCategory};

const COURSES_FILE: &str = "gened-courses.json";
const INTERESTS_FILE: &str = "explore-interests.json";
const DEPARTMENTS_FILE: &str = "departments.json";

/// The immutable course collection for a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Everything a session needs from the data source: the catalog itself plus
/// the two auxiliary feeds consumed by the facet index.
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub catalog: Catalog,
    pub departments: Vec<Department>,
    pub interests: Vec<InterestCategory>,
}

/// Where the static JSON feeds come from. A load either yields a complete
/// `CatalogData` or fails; callers never see a partially-populated catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<CatalogData, AppError>;
}

#[derive(Clone, Debug)]
pub struct HttpSourceConfig {
    pub base_url: String,
}

impl HttpSourceConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("GENED_DATA_URL")
            .map_err(|_| AppError::Config("GENED_DATA_URL is not set".to_string()))?;
        Ok(Self { base_url })
    }
}

/// Fetches the feeds over HTTP from a static-hosting base URL.
pub struct HttpCatalogSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpCatalogSource {
    pub fn new(config: HttpSourceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, AppError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), file);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::DataLoad(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<CatalogData, AppError> {
        let (courses, interests, departments) = tokio::try_join!(
            self.fetch_json::<Vec<dto::RawCourse>>(COURSES_FILE),
            self.fetch_json::<Vec<dto::RawInterest>>(INTERESTS_FILE),
            // The department directory is keyed by an internal id; only the
            // values matter here.
            self.fetch_json::<HashMap<String, dto::RawDepartment>>(DEPARTMENTS_FILE),
        )?;

        let data = assemble(courses, interests, departments);
        info!(
            "Loaded catalog: {} courses, {} departments, {} interest categories",
            data.catalog.len(),
            data.departments.len(),
            data.interests.len()
        );
        Ok(data)
    }
}

/// Reads the same three feeds from a local directory. Used by the CLI
/// harness and tests.
pub struct FileCatalogSource {
    dir: PathBuf,
}

impl FileCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, AppError> {
        let path = self.dir.join(file);
        let bytes = tokio::fs::read(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<CatalogData, AppError> {
        let (courses, interests, departments) = tokio::try_join!(
            self.read_json::<Vec<dto::RawCourse>>(COURSES_FILE),
            self.read_json::<Vec<dto::RawInterest>>(INTERESTS_FILE),
            self.read_json::<HashMap<String, dto::RawDepartment>>(DEPARTMENTS_FILE),
        )?;

        Ok(assemble(courses, interests, departments))
    }
}

fn assemble(
    courses: Vec<dto::RawCourse>,
    interests: Vec<dto::RawInterest>,
    departments: HashMap<String, dto::RawDepartment>,
) -> CatalogData {
    CatalogData {
        catalog: Catalog::new(courses.into_iter().map(Into::into).collect()),
        departments: departments.into_values().map(Into::into).collect(),
        interests: interests.into_iter().map(Into::into).collect(),
    }
}
