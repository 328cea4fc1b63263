use std::future::IntoFuture;
use std::net::{Ipv4Addr, SocketAddr};

use futures::future::join_all;
use repository::init_repository;
use tokio::{join, net::TcpListener};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let secrets = util::load_env()?;
    let db_url = util::secret(&secrets, "DATABASE_URL")?;
    let redis_url = util::secret(&secrets, "REDIS_URL")?;
    let identity_api_key = util::secret(&secrets, "IDENTITY_API_KEY")?;
    let config_name = format!("Config{}", util::secret(&secrets, "CONFIG")?);

    let repository = init_repository(&db_url, &redis_url).await?;

    let handles = sync_insights::serve(repository.clone(), &config_name).await?;
    let router = api::serve(repository, &config_name, identity_api_key).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;

    let (served, _) = join!(
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>()
        )
        .into_future(),
        join_all(handles)
    );
    served?;

    Ok(())
}
