use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::metrics::RequestMetrics;
use super::region::Region;
use super::types::{AccountDto, MatchDto};
use super::{AccountApi, ApiError, ApiResponse, MatchApi};

/// Authenticated client over the Riot endpoints the bot consumes.
///
/// One outbound request per call. No retries, no caching, no client-side
/// rate limiting.
#[derive(Debug)]
pub struct RiotClient {
    client: reqwest::Client,
    /// Riot API Key
    key: String,
    /// Account-v1 routing host.
    account_base: String,
    /// Match-v5 routing host.
    match_base: String,
    metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    pub fn new(key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            key,
            account_base: Region::Americas.base_url(),
            match_base: Region::Europe.base_url(),
            metrics: RequestMetrics::new(),
        }
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    #[cfg(test)]
    fn with_base_url(key: String, base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            key,
            account_base: base.to_string(),
            match_base: base.to_string(),
            metrics: RequestMetrics::new(),
        }
    }

    async fn get<T: DeserializeOwned + Debug>(&self, url: String) -> ApiResponse<T> {
        self.metrics.inc();

        let res = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimited),
            status => Err(ApiError::Status(status)),
        }
    }
}

#[async_trait]
impl AccountApi for RiotClient {
    async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> ApiResponse<AccountDto> {
        tracing::trace!(
            "[RIOT::CLIENT] get_account_by_riot_id {}#{}",
            game_name,
            tag_line
        );
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.account_base,
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        self.get(url).await
    }
}

#[async_trait]
impl MatchApi for RiotClient {
    async fn get_match_ids(&self, puuid: &str, count: u32) -> ApiResponse<Vec<String>> {
        tracing::trace!("[RIOT::CLIENT] get_match_ids {} (count {})", puuid, count);
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            self.match_base, puuid, count
        );

        self.get(url).await
    }

    async fn get_match(&self, match_id: &str) -> ApiResponse<MatchDto> {
        tracing::trace!("[RIOT::CLIENT] get_match {}", match_id);
        let url = format!("{}/lol/match/v5/matches/{}", self.match_base, match_id);

        self.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client_for(server: &MockServer) -> RiotClient {
        RiotClient::with_base_url("TEST_KEY".into(), &server.base_url())
    }

    #[tokio::test]
    async fn get_account_decodes_puuid() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/riot/account/v1/accounts/by-riot-id/RoboFico/SMER")
                    .header("X-Riot-Token", "TEST_KEY");
                then.status(200).json_body(json!({
                    "puuid": "P1",
                    "gameName": "RoboFico",
                    "tagLine": "SMER",
                }));
            })
            .await;

        let account = client_for(&server)
            .get_account_by_riot_id("RoboFico", "SMER")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(account.puuid, "P1");
        assert_eq!(account.game_name.as_deref(), Some("RoboFico"));
    }

    #[tokio::test]
    async fn non_success_statuses_map_to_tagged_errors() {
        let server = MockServer::start_async().await;
        for (status, check) in [
            (404, ApiError::NotFound),
            (429, ApiError::RateLimited),
            (500, ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        ] {
            let mock = server
                .mock_async(move |when, then| {
                    when.method(GET)
                        .path("/riot/account/v1/accounts/by-riot-id/Ghost/EUW");
                    then.status(status);
                })
                .await;

            let err = client_for(&server)
                .get_account_by_riot_id("Ghost", "EUW")
                .await
                .unwrap_err();

            assert_eq!(std::mem::discriminant(&err), std::mem::discriminant(&check));
            mock.delete_async().await;
        }
    }

    #[tokio::test]
    async fn get_match_ids_returns_page_in_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/lol/match/v5/matches/by-puuid/P1/ids")
                    .query_param("count", "20");
                then.status(200).json_body(json!(["M3", "M2", "M1"]));
            })
            .await;

        let ids = client_for(&server).get_match_ids("P1", 20).await.unwrap();

        assert_eq!(ids, vec!["M3", "M2", "M1"]);
    }

    #[tokio::test]
    async fn get_match_decodes_participants() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lol/match/v5/matches/EUW1_42");
                then.status(200).json_body(json!({
                    "info": {
                        "gameCreation": 1_697_000_000_000_u64,
                        "participants": [
                            { "puuid": "P1", "totalDamageDealtToChampions": 500 },
                            { "puuid": "P2", "totalDamageDealtToChampions": 900 },
                        ],
                    }
                }));
            })
            .await;

        let match_data = client_for(&server).get_match("EUW1_42").await.unwrap();

        assert_eq!(match_data.info.participants.len(), 2);
        assert_eq!(match_data.top_damage_participant().unwrap().puuid, "P2");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let client = RiotClient::with_base_url("TEST_KEY".into(), "http://127.0.0.1:1");

        let res = client.get_match("EUW1_42").await;

        assert!(matches!(res, Err(ApiError::Transport(_))));
    }
}
