use std::sync::Arc;

use clap::Parser;
use roaster_config::{ApiDriver, Config};
use roaster_core::CoreModule;
use roaster_ghapi_interface::ApiService;
use roaster_ghapi_null::NullApiService;
use roaster_server::ghapi::MetricsApiService;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = "Roast GitHub developers from their recent commits", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let api_service: Box<dyn ApiService> = {
                if config.api.driver == ApiDriver::GitHub {
                    info!("Using MetricsApiService API driver");
                    if !config.api.github.is_authenticated() {
                        warn!("No GitHub token configured, anonymous rate limits apply");
                    }

                    Box::new(MetricsApiService::new(config.clone()))
                } else {
                    info!("Using NullApiService API driver");
                    Box::new(NullApiService::new())
                }
            };

            let ctx = CommandContext {
                config,
                api_service,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(move || runtime).block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
