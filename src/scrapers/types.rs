/// Launch options for the headless browser session
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Run Chrome without a window
    pub headless: bool,
    /// Keep Chrome's sandbox on; it refuses to start as root with it enabled
    pub sandbox: bool,
    /// Fetch images while loading the page
    pub load_images: bool,
    /// Accept invalid or self-signed TLS certificates
    pub ignore_certificate_errors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            load_images: false,
            ignore_certificate_errors: true,
        }
    }
}
