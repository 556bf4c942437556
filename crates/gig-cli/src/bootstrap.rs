/// Load `.env`, then the layered config.
pub fn load_config() -> anyhow::Result<gig_config::GigConfig> {
    gig_config::GigConfig::load_with_dotenv().map_err(anyhow::Error::from)
}
