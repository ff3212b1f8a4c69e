use anyhow::Context;

/// Load `.env` (if any) and then the layered configuration.
pub fn load_config() -> anyhow::Result<qn_config::QnConfig> {
    load_dotenv()?;
    qn_config::QnConfig::load().map_err(anyhow::Error::from)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    // A project directory keeps its .env next to .quest-nexus/.
    let project_env = cwd.join(".quest-nexus").join(".env");
    if project_env.exists() {
        dotenvy::from_path(&project_env)
            .with_context(|| format!("failed to load dotenv file at {}", project_env.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
