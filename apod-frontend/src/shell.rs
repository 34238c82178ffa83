use std::sync::Arc;

use apod_core::{ApodClient, ApodPanel, RenderTarget};

/// Panel title shown by the shell
pub const PANEL_LABEL: &str = "Astronomy Picture";

/// Minimal host: owns at most one live panel and triggers its refreshes.
pub struct Shell {
    client: ApodClient,
    panel: Option<Arc<ApodPanel>>,
}

impl Shell {
    pub fn new(client: ApodClient) -> Self {
        Self {
            client,
            panel: None,
        }
    }

    /// Open the panel and refresh it.
    ///
    /// A new panel is created when none exists or the previous one was
    /// closed; otherwise the current panel is reused.
    pub async fn open(&mut self, date: Option<&str>) -> Arc<ApodPanel> {
        let panel = match self.panel.clone() {
            Some(panel) if !panel.is_disposed() => panel,
            _ => {
                tracing::info!("Creating {} panel", PANEL_LABEL);
                let panel = Arc::new(ApodPanel::new(self.client.clone()));
                self.panel = Some(panel.clone());
                panel
            }
        };

        match date {
            Some(date) => panel.refresh_for_date(date).await,
            None => panel.refresh().await,
        }

        panel
    }

    /// Dispose the current panel. Returns false when nothing was open.
    pub fn close(&mut self) -> bool {
        match self.panel.take() {
            Some(panel) if !panel.is_disposed() => {
                panel.dispose();
                tracing::info!("{} panel closed", PANEL_LABEL);
                true
            }
            _ => false,
        }
    }

    pub fn panel(&self) -> Option<&Arc<ApodPanel>> {
        self.panel.as_ref().filter(|p| !p.is_disposed())
    }
}

/// Text rendering of a panel's slots
pub fn format_target(target: &RenderTarget) -> String {
    let mut out = format!("[{}]\n", PANEL_LABEL);
    if let Some(src) = &target.image.src {
        out.push_str(&format!("  image: {}\n", src));
    }
    if let Some(title) = &target.image.title {
        out.push_str(&format!("  title: {}\n", title));
    }
    out.push_str(&format!("  {}", target.caption));
    out
}
