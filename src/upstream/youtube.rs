//! Data API v3 client backed by `ureq`

use std::time::Duration;
use async_trait::async_trait;
use crate::config::Config;
use super::errors::FetchError;
use super::models::{SearchResponse, VideoListResponse};
use super::VideoSource;

/// Search filters sent with every search call, the broadest result set
const SEARCH_FILTERS: &[(&str, &str)] = &[
    ("part", "snippet"),
    ("channelType", "any"),
    ("order", "date"),
    ("type", "video"),
    ("videoCaption", "any"),
    ("videoDefinition", "any"),
    ("videoDimension", "any"),
    ("videoDuration", "any"),
    ("videoEmbeddable", "any"),
    ("videoLicense", "any"),
    ("videoSyndicated", "any"),
    ("videoType", "any"),
];

#[derive(Clone)]
pub struct YouTubeClient {
    agent: ureq::Agent,
    api_key: String,
    search_url: String,
    videos_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String, search_url: String, videos_url: String, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            api_key,
            search_url,
            videos_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.search_url.clone(),
            config.videos_url.clone(),
            config.request_timeout(),
        )
    }

    fn search_blocking(&self, channel_id: &str) -> Result<SearchResponse, FetchError> {
        let mut request = self.agent.get(&self.search_url);
        for (key, value) in SEARCH_FILTERS {
            request = request.query(key, value);
        }
        let body = request
            .query("channelId", channel_id)
            .query("key", &self.api_key)
            .call()?
            .into_string()?;

        Ok(serde_json::from_str(&body)?)
    }

    fn details_blocking(&self, video_id: &str) -> Result<VideoListResponse, FetchError> {
        let body = self
            .agent
            .get(&self.videos_url)
            .query("part", "liveStreamingDetails")
            .query("id", video_id)
            .query("key", &self.api_key)
            .call()?
            .into_string()?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search(&self, channel_id: &str) -> Result<SearchResponse, FetchError> {
        let client = self.clone();
        let channel_id = channel_id.to_string();
        tokio::task::spawn_blocking(move || client.search_blocking(&channel_id))
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
    }

    async fn end_time(&self, video_id: &str) -> Option<String> {
        let client = self.clone();
        let id = video_id.to_string();
        let result = tokio::task::spawn_blocking(move || client.details_blocking(&id)).await;

        match result {
            Ok(Ok(details)) => details.actual_end_time(),
            Ok(Err(e)) => {
                tracing::debug!("end time lookup for {} failed: {}", video_id, e);
                None
            }
            Err(e) => {
                tracing::debug!("end time lookup for {} aborted: {}", video_id, e);
                None
            }
        }
    }
}
