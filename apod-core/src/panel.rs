//! APOD panel
//!
//! Picks a random date, fetches its APOD entry and writes the result to the
//! panel's render target.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::api_client::ApodClient;
use crate::date::random_date;
use crate::render::{RenderTarget, RenderUpdate};

/// Owns one render target and refreshes it on demand.
pub struct ApodPanel {
    client: ApodClient,
    target: RwLock<RenderTarget>,
    /// Sequence number of the most recently started refresh
    latest: AtomicU64,
    disposed: AtomicBool,
}

impl ApodPanel {
    pub fn new(client: ApodClient) -> Self {
        Self {
            client,
            target: RwLock::new(RenderTarget::new()),
            latest: AtomicU64::new(0),
            disposed: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current slots.
    pub async fn render_target(&self) -> RenderTarget {
        self.target.read().await.clone()
    }

    /// Fetch the entry for a random date and render it.
    pub async fn refresh(&self) {
        self.refresh_for_date(&random_date()).await;
    }

    /// Fetch the entry for `date` and render it.
    ///
    /// Failures end up in the caption; nothing is returned or propagated.
    /// When refreshes overlap, only the most recently started one writes.
    pub async fn refresh_for_date(&self, date: &str) {
        if self.is_disposed() {
            tracing::debug!("Ignoring refresh of disposed APOD panel");
            return;
        }

        let seq = self.begin();
        let outcome = self.client.fetch(date).await;

        if let Err(e) = &outcome {
            match e.caption() {
                Some(_) => tracing::warn!("APOD refresh for {} failed: {}", date, e),
                None => tracing::error!("APOD refresh for {} failed: {}", date, e),
            }
        }

        if let Some(update) = RenderUpdate::from_outcome(&outcome) {
            if !self.settle(seq, update).await {
                tracing::debug!("Discarding stale APOD response for {} (request #{})", date, seq);
            }
        }
    }

    /// Register a new refresh and return its sequence number.
    fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Write `update` unless a newer refresh has started since `seq` began.
    async fn settle(&self, seq: u64, update: RenderUpdate) -> bool {
        let mut target = self.target.write().await;
        if self.latest.load(Ordering::SeqCst) != seq || self.is_disposed() {
            return false;
        }
        target.apply(update);
        true
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApodSettings;
    use std::sync::Arc;
    use crate::render::NOT_AN_IMAGE;
    use mockito::{Matcher, Server, ServerGuard};

    const APOD_PATH: &str = "/planetary/apod";

    fn panel_for(server: &ServerGuard) -> ApodPanel {
        let client = ApodClient::new(&ApodSettings {
            api_key: "DEMO_KEY".to_string(),
            endpoint: format!("{}{}", server.url(), APOD_PATH),
        })
        .unwrap();
        ApodPanel::new(client)
    }

    async fn serve(server: &mut ServerGuard, date: &str, status: usize, body: &str) -> mockito::Mock {
        server
            .mock("GET", APOD_PATH)
            .match_query(Matcher::UrlEncoded("date".into(), date.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_refresh_image_then_video() {
        let mut server = Server::new_async().await;
        let _image = serve(
            &mut server,
            "2015-03-02",
            200,
            r#"{"media_type":"image","title":"Orion","url":"http://x/o.jpg","copyright":"J. Doe"}"#,
        )
        .await;
        let _video = serve(
            &mut server,
            "2016-07-04",
            200,
            r#"{"media_type":"video","title":"Whatever","url":"http://x/v.mp4"}"#,
        )
        .await;

        let panel = panel_for(&server);

        panel.refresh_for_date("2015-03-02").await;
        let target = panel.render_target().await;
        assert_eq!(target.image.src.as_deref(), Some("http://x/o.jpg"));
        assert_eq!(target.caption, "Orion (Copyright J. Doe)");

        panel.refresh_for_date("2016-07-04").await;
        let target = panel.render_target().await;
        assert_eq!(target.image.src.as_deref(), Some("http://x/o.jpg"));
        assert_eq!(target.caption, NOT_AN_IMAGE);
    }

    #[tokio::test]
    async fn test_refresh_errors() {
        let mut server = Server::new_async().await;
        let _forbidden = serve(&mut server, "2011-01-01", 403, r#"{"error":{"message":"API key invalid"}}"#).await;
        let _failed = serve(&mut server, "2011-01-02", 500, "").await;
        let _broken = serve(&mut server, "2011-01-03", 200, "{broken").await;

        let panel = panel_for(&server);

        panel.refresh_for_date("2011-01-01").await;
        assert_eq!(panel.render_target().await.caption, "API key invalid");

        panel.refresh_for_date("2011-01-02").await;
        assert_eq!(panel.render_target().await.caption, "Internal Server Error");

        // Undecodable success bodies leave the slots alone
        panel.refresh_for_date("2011-01-03").await;
        let target = panel.render_target().await;
        assert_eq!(target.caption, "Internal Server Error");
        assert_eq!(target.image.src, None);
    }

    #[tokio::test]
    async fn test_random_refresh_hits_endpoint() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", APOD_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "DEMO_KEY".into()),
                Matcher::Regex(r"date=\d{4}-\d{2}-\d{2}".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"media_type":"image","title":"Orion","url":"http://x/o.jpg"}"#)
            .expect(1)
            .create_async()
            .await;

        let panel = panel_for(&server);
        panel.refresh().await;

        assert_eq!(panel.render_target().await.caption, "Orion");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let server = Server::new_async().await;
        let panel = panel_for(&server);

        let older = panel.begin();
        let newer = panel.begin();

        // The newer request settles first, the older one last
        assert!(panel.settle(newer, RenderUpdate::Caption("Newer".to_string())).await);
        assert!(!panel.settle(older, RenderUpdate::Caption("Older".to_string())).await);

        assert_eq!(panel.render_target().await.caption, "Newer");
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_settle_once_each() {
        let mut server = Server::new_async().await;
        let _moon = serve(
            &mut server,
            "2013-05-05",
            200,
            r#"{"media_type":"image","title":"Moon","url":"http://x/m.jpg"}"#,
        )
        .await;

        let panel = Arc::new(panel_for(&server));
        let first = tokio::spawn({
            let panel = panel.clone();
            async move { panel.refresh_for_date("2013-05-05").await }
        });
        let second = tokio::spawn({
            let panel = panel.clone();
            async move { panel.refresh_for_date("2013-05-05").await }
        });
        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(panel.latest.load(Ordering::SeqCst), 2);
        assert_eq!(panel.render_target().await.caption, "Moon");
    }

    #[tokio::test]
    async fn test_disposed_panel_ignores_refresh() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", APOD_PATH)
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let panel = panel_for(&server);
        panel.dispose();
        panel.refresh().await;

        assert!(panel.is_disposed());
        assert_eq!(panel.render_target().await, RenderTarget::default());
        mock.assert_async().await;
    }
}
