use crate::error::RenderError;
use crate::scrapers::traits::PageRenderer;
use crate::scrapers::types::RenderOptions;
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use std::ffi::OsStr;
use tracing::{debug, info};

const DISABLE_IMAGES_ARG: &str = "--blink-settings=imagesEnabled=false";

/// Renders pages in a headless Chrome process that lives only for one call
pub struct ChromeRenderer {
    options: RenderOptions,
}

impl ChromeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Default for ChromeRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<String, RenderError> {
        let options = self.options.clone();
        let url = url.to_string();

        // headless_chrome blocks on its websocket, keep it off the runtime thread
        tokio::task::spawn_blocking(move || fetch_page(&options, &url)).await?
    }
}

fn launch_options(options: &RenderOptions) -> Result<LaunchOptions<'static>, RenderError> {
    let mut args = Vec::new();
    if !options.load_images {
        args.push(OsStr::new(DISABLE_IMAGES_ARG));
    }

    LaunchOptions::default_builder()
        .headless(options.headless)
        .sandbox(options.sandbox)
        .ignore_certificate_errors(options.ignore_certificate_errors)
        .args(args)
        .build()
        .map_err(|e| RenderError::Options(e.to_string()))
}

fn fetch_page(options: &RenderOptions, url: &str) -> Result<String, RenderError> {
    info!("Launching headless Chrome...");
    let browser =
        Browser::new(launch_options(options)?).map_err(|e| RenderError::Launch(e.into()))?;

    let content = load_content(&browser, url);

    // Dropping the browser kills the Chrome process, whatever load_content returned
    info!("Closing browser session");
    drop(browser);

    content
}

fn load_content(browser: &Browser, url: &str) -> Result<String, RenderError> {
    let navigation = |e: anyhow::Error| RenderError::Navigation {
        url: url.to_string(),
        source: e.into(),
    };

    let tab = browser.new_tab().map_err(navigation)?;

    info!("Opening {}", url);
    tab.navigate_to(url).map_err(navigation)?;
    tab.wait_until_navigated().map_err(navigation)?;
    info!("Request status: loaded {}", tab.get_url());

    let html = tab
        .get_content()
        .map_err(|e| RenderError::Content(e.into()))?;
    debug!("Captured {} bytes of HTML", html.len());

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_disable_images_and_ignore_certificates() {
        let options = launch_options(&RenderOptions::default()).unwrap();

        assert!(options.headless);
        assert!(options.sandbox);
        assert!(options.ignore_certificate_errors);
        assert_eq!(options.args, vec![OsStr::new(DISABLE_IMAGES_ARG)]);
    }

    #[test]
    fn images_can_be_enabled() {
        let options = launch_options(&RenderOptions {
            load_images: true,
            ignore_certificate_errors: false,
            ..Default::default()
        })
        .unwrap();

        assert!(!options.ignore_certificate_errors);
        assert!(options.args.is_empty());
    }

    fn chrome_options() -> RenderOptions {
        RenderOptions {
            sandbox: false,
            ..Default::default()
        }
    }

    // Chrome processes started by this test binary that are still alive
    #[cfg(target_os = "linux")]
    fn live_chrome_children() -> Vec<u32> {
        let me = std::process::id();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return Vec::new();
        };

        entries
            .flatten()
            .filter_map(|entry| {
                let pid: u32 = entry.file_name().to_str()?.parse().ok()?;
                let stat = std::fs::read_to_string(entry.path().join("stat")).ok()?;
                let (head, tail) = stat.rsplit_once(')')?;
                let comm = head.split_once('(')?.1;
                let mut rest = tail.split_whitespace();
                let state = rest.next()?;
                let ppid: u32 = rest.next()?.parse().ok()?;

                let alive_child = ppid == me && state != "Z";
                let is_chrome = comm.contains("chrom") || comm.contains("headless");
                (alive_child && is_chrome).then_some(pid)
            })
            .collect()
    }

    // Both browser tests inspect this process's children, so they take turns
    static CHROME: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[cfg(target_os = "linux")]
    #[tokio::test]
    #[ignore = "needs a local Chrome install"]
    async fn failed_navigation_still_closes_chrome() {
        let _turn = CHROME.lock().unwrap_or_else(|e| e.into_inner());
        let renderer = ChromeRenderer::new(chrome_options());

        let err = renderer.render("http://127.0.0.1:1/").await.unwrap_err();

        assert!(
            matches!(err, RenderError::Navigation { .. }),
            "expected a navigation error, got {err:?}"
        );
        assert!(live_chrome_children().is_empty());
    }

    #[tokio::test]
    #[ignore = "needs a local Chrome install"]
    async fn renders_served_page_for_extraction() {
        use crate::scrapers::conditions::fixtures::{conditions_page, PageValues};
        use crate::scrapers::extract;
        use wiremock::matchers::path;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let _turn = CHROME.lock().unwrap_or_else(|e| e.into_inner());
        let server = MockServer::start().await;
        Mock::given(path("/conditions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(conditions_page(&PageValues::default()), "text/html"),
            )
            .mount(&server)
            .await;

        let renderer = ChromeRenderer::new(chrome_options());
        let html = renderer
            .render(&format!("{}/conditions", server.uri()))
            .await
            .unwrap();

        let snapshot = extract(&html).unwrap();
        assert_eq!(snapshot.temperature, "28F");
        assert_eq!(snapshot.wind, "10 MPH NW");
        assert_eq!(snapshot.snow_depth, "12\"");

        #[cfg(target_os = "linux")]
        assert!(live_chrome_children().is_empty());
    }
}
