use crate::encounter::Encounter;
use crate::{Error, Resource, Result, Source, Subject, ability, subject};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    api: String,
}

impl Session {
    pub const API: &'static str = "https://pokeapi.co/api/v2";

    pub fn new(api: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let api = api.into().trim_end_matches('/').to_owned();
        let mut client = reqwest::ClientBuilder::new();

        if let Some(timeout) = timeout {
            client = client.timeout(timeout);
        }

        log::info!("PokeAPI session started ({api})");

        Ok(Self {
            client: client.build()?,
            api,
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::info!("Fetching: {url}");

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_owned()));
        }

        Ok(response.error_for_status()?.json().await?)
    }
}

impl Source for Session {
    async fn subject(&self, id: subject::Id) -> Result<Subject> {
        self.get(&format!("{api}/pokemon/{id}", api = self.api))
            .await
    }

    async fn ability(&self, ability: &Resource) -> Result<ability::Details> {
        self.get(&ability.url).await
    }

    async fn encounters(&self, subject: &Subject) -> Result<Vec<Encounter>> {
        self.get(&subject.encounters).await
    }
}
