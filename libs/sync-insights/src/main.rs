use anyhow::Context as _;
use futures::future::join_all;
use repository::init_repository;
use std::fs::OpenOptions;
use sync_insights::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let out_file = OpenOptions::new()
        .append(true)
        .create(true)
        .open("log.txt")
        .unwrap();

    tracing_subscriber::fmt().with_writer(out_file).init();

    let secrets = util::load_env()?;

    let db_url = secrets.get("DATABASE_URL").unwrap().as_str().unwrap();
    let redis_url = secrets.get("REDIS_URL").unwrap().as_str().unwrap();

    let config_name = &format!(
        "Config{}",
        secrets
            .get("CONFIG")
            .context("CONFIG was not found")?
            .as_str()
            .unwrap()
    );

    let repository = init_repository(db_url, redis_url).await?;

    let handles = serve(repository, config_name).await?;

    let _ = join_all(handles).await;

    Ok(())
}
