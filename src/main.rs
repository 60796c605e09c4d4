use anyhow::Result;
use removebg::config::ServiceConfig;
use removebg::remover::BackgroundRemover;
use removebg::server;
use std::sync::Arc;
use std::{env, process};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: ./removebg [config file]";

fn get_args() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => None,
        2 => Some(args[1].clone()),
        _ => {
            println!("{USAGE}");
            process::exit(1);
        },
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::load(get_args().as_deref())?;
    info!("starting removebg with {config:?}");

    let remover = build_remover(&config).await?;

    server::run(config, remover).await
}

#[cfg(feature = "bgremove")]
async fn build_remover(config: &ServiceConfig) -> Result<Arc<dyn BackgroundRemover>> {
    let remover = removebg::remover::ModelRemover::load(&config.model_url).await?;
    Ok(Arc::new(remover))
}

#[cfg(not(feature = "bgremove"))]
async fn build_remover(_config: &ServiceConfig) -> Result<Arc<dyn BackgroundRemover>> {
    anyhow::bail!("this build has no inference backend; rebuild with the `bgremove` feature")
}
