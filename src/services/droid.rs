use thirtyfour::{
    error::WebDriverResult, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver,
};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    /// Opens a Chrome session against the configured WebDriver endpoint with
    /// the automation banner and extension disabled.
    pub async fn new(webdriver_url: &str) -> WebDriverResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg(&format!("user-agent={}", USER_AGENT))?;
        caps.add_arg("start-maximized")?;
        caps.add_experimental_option("useAutomationExtension", false)?;
        caps.add_experimental_option("excludeSwitches", ["enable-automation"])?;

        let driver = WebDriver::new(webdriver_url, caps).await?;
        driver.maximize_window().await?;

        Ok(Droid { driver })
    }

    pub async fn quit(self) -> WebDriverResult<()> {
        self.driver.quit().await
    }
}
