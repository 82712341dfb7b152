use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{browser::default_executable, Browser, LaunchOptions, Tab};
use reqwest::Client;
use tokio::{task::spawn_blocking, time::sleep};

use crate::{info_time, Error, Result};

/// A single browsing session. The crawl owns one and reuses it for every page it loads.
#[allow(async_fn_in_trait)]
pub trait Navigator {
    /// Loads `url`, waits `settle` for client-side rendering and returns the page markup.
    async fn load(&mut self, url: &str, settle: Duration) -> Result<String>;
}

/// Plain HTTP fetches. Sees only server-rendered markup.
/// Error statuses are not failures: their body is returned like any other page.
#[derive(Debug, Clone, Default)]
pub struct HttpNavigator {
    client: Client,
}

impl HttpNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for HttpNavigator {
    async fn load(&mut self, url: &str, settle: Duration) -> Result<String> {
        let res = self.client.get(url).send().await?;
        let html = res.text().await?;
        sleep(settle).await;
        Ok(html)
    }
}

/// One headless Chrome tab, navigated page to page.
/// The browser process goes away when this is dropped, whichever way the crawl ends.
pub struct ChromeNavigator {
    // Field order matters: the tab is released before the browser.
    tab: Arc<Tab>,
    _browser: Browser,
}

impl ChromeNavigator {
    pub fn launch() -> Result<Self> {
        let path = default_executable().map_err(Error::Browser)?;
        let options = LaunchOptions::default_builder()
            .path(Some(path))
            .window_size(Some((1920, 1080)))
            .idle_browser_timeout(Duration::from_secs(600))
            .build()
            .map_err(|e| Error::Browser(e.to_string()))?;
        let browser = Browser::new(options).map_err(browser_err)?;
        let tab = browser.new_tab().map_err(browser_err)?;
        info_time!("Launched headless browser");

        Ok(Self {
            tab,
            _browser: browser,
        })
    }
}

impl Navigator for ChromeNavigator {
    async fn load(&mut self, url: &str, settle: Duration) -> Result<String> {
        spawn_blocking({
            let tab = self.tab.clone();
            let url = url.to_string();
            move || -> Result<()> {
                tab.navigate_to(&url)
                    .and_then(|t| t.wait_until_navigated())
                    .map_err(browser_err)?;
                Ok(())
            }
        })
        .await??;

        sleep(settle).await;

        let tab = self.tab.clone();
        let html = spawn_blocking(move || tab.get_content().map_err(browser_err)).await??;
        Ok(html)
    }
}

impl Drop for ChromeNavigator {
    fn drop(&mut self) {
        let _ = self.tab.close(false);
        info_time!("Closed headless browser");
    }
}

#[inline]
fn browser_err(e: impl std::fmt::Display) -> Error {
    Error::Browser(e.to_string())
}
