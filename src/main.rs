use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use storefront_checkout::application::checkout::{
    CheckoutController, LoadOutcome, SubmitOutcome, USERNAME_KEY,
};
use storefront_checkout::config::CheckoutConfig;
use storefront_checkout::domain::order::PayMethod;
use storefront_checkout::domain::ports::{ClientStorage, StorageScope};
use storefront_checkout::infrastructure::file_storage::FileStorage;
use storefront_checkout::infrastructure::http::HttpOrdersApi;
use storefront_checkout::interfaces::console::{ConsoleNavigator, ConsoleNotifier};
use storefront_checkout::interfaces::csv::summary_writer::SummaryWriter;
use storefront_checkout::telemetry::setup_tracing;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storefront backend origin
    #[arg(long, env = "CHECKOUT_HOST", default_value = storefront_checkout::config::DEFAULT_HOST)]
    host: String,

    /// Directory holding the client's session and local storage
    #[arg(long, env = "CHECKOUT_STORAGE_DIR", default_value = ".checkout")]
    storage_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "CHECKOUT_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Front-end origin used to print absolute navigation URLs
    #[arg(long)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the settlement and print it as CSV
    Settlement,
    /// Load the settlement and commit an order
    Submit {
        /// Index of the delivery address
        #[arg(long, default_value_t = 0)]
        address: usize,
        /// Payment method code (1 = cash on delivery, 2 = Alipay)
        #[arg(long, default_value_t = 1)]
        pay_method: u8,
    },
    /// Clear all stored session data
    Logout,
    /// Store a session cookie obtained from logging in
    LoginCookie {
        session: String,
        #[arg(long)]
        username: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let config = CheckoutConfig::new(cli.host)
        .into_diagnostic()?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let storage = FileStorage::open(&cli.storage_dir).into_diagnostic()?;

    let controller = |session: Option<String>| -> Result<CheckoutController> {
        let api = HttpOrdersApi::new(config.clone(), session.as_deref()).into_diagnostic()?;
        Ok(CheckoutController::new(
            Box::new(api),
            Box::new(ConsoleNavigator::new(cli.origin.clone())),
            Box::new(storage.clone()),
            Box::new(ConsoleNotifier),
        ))
    };
    let session = storage
        .get(StorageScope::Local, &config.session_cookie_name)
        .await
        .into_diagnostic()?;

    match cli.command {
        Command::Settlement => {
            let controller = controller(session)?;
            if controller.load().await.into_diagnostic()? == LoadOutcome::Loaded {
                controller
                    .render(|state| match &state.summary {
                        Some(summary) => {
                            let stdout = io::stdout();
                            SummaryWriter::new(stdout.lock())
                                .write_summary(summary, state.selected_address)
                        }
                        None => Ok(()),
                    })
                    .await
                    .into_diagnostic()?;
            }
        }
        Command::Submit {
            address,
            pay_method,
        } => {
            let pay_method = PayMethod::try_from(pay_method).into_diagnostic()?;
            let controller = controller(session)?;
            if controller.load().await.into_diagnostic()? == LoadOutcome::Loaded {
                controller.select_address(address).await.into_diagnostic()?;
                controller
                    .select_pay_method(pay_method)
                    .await
                    .into_diagnostic()?;
                if let SubmitOutcome::Committed { order_id } =
                    controller.submit().await.into_diagnostic()?
                {
                    tracing::info!(%order_id, "checkout complete");
                }
            }
        }
        Command::Logout => controller(session)?.logout().await.into_diagnostic()?,
        Command::LoginCookie { session, username } => {
            storage
                .set(StorageScope::Local, &config.session_cookie_name, &session)
                .await
                .into_diagnostic()?;
            if let Some(username) = username {
                storage
                    .set(StorageScope::Local, USERNAME_KEY, &username)
                    .await
                    .into_diagnostic()?;
            }
        }
    }

    Ok(())
}
