//! Command-line shell over the admin API.
//!
//! ```text
//! admin-console <banners|brands|categories|collaborations|news|products>
//! ```
//!
//! Signs in first when `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set.

use std::process::ExitCode;
use std::sync::Arc;

use admin_console::core::SessionStore;
use admin_console::debug::{init_logger, LogConfig};
use admin_console::services::api::{auth, banner, category, collaboration, news, products};
use admin_console::services::notifier::{self, ChannelSink, Notification, NotificationLevel};
use admin_console::services::session::MemorySessionStore;
use admin_console::{ApiClient, AppError, ClientConfig};
use serde_json::Value;
use shared::{LoginRequest, NewsQuery, ProductQuery};

const USAGE: &str = "usage: admin-console <banners|brands|categories|collaborations|news|products>";

#[tokio::main]
async fn main() -> ExitCode {
    let _guard = match init_logger(&LogConfig::from_env()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    let Some(command) = std::env::args().nth(1).as_deref().and_then(Command::parse) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let (sink, notifications) = ChannelSink::new();
    notifier::init(Arc::new(sink));
    let code = match run(command).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to render output");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!(error = %e, command = ?command, "Command failed");
            ExitCode::FAILURE
        }
    };

    while let Ok(notification) = notifications.try_recv() {
        match notification.level {
            NotificationLevel::Error | NotificationLevel::Warning => eprintln!("✗ {}", notification.message),
            NotificationLevel::Success | NotificationLevel::Info => eprintln!("✓ {}", notification.message),
        }
    }
    code
}

/// Listing to print
#[derive(Debug, Clone, Copy)]
enum Command {
    Banners,
    Brands,
    Categories,
    Collaborations,
    News,
    Products,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "banners" => Some(Self::Banners),
            "brands" => Some(Self::Brands),
            "categories" => Some(Self::Categories),
            "collaborations" => Some(Self::Collaborations),
            "news" => Some(Self::News),
            "products" => Some(Self::Products),
            _ => None,
        }
    }
}

async fn run(command: Command) -> Result<Value, AppError> {
    let session = Arc::new(MemorySessionStore::new());
    let client = ApiClient::new(ClientConfig::from_env()?, session.clone())?;
    tracing::info!(
        base_url = %client.config().base_url,
        origin = %client.config().origin,
        command = ?command,
        "Running command"
    );

    if let (Ok(username), Ok(password)) = (std::env::var("ADMIN_USERNAME"), std::env::var("ADMIN_PASSWORD")) {
        let result = auth::login(&client, &LoginRequest { username, password }).await?;
        notifier::notify(Notification::success(format!("已登录: {}", result.user_info.username)));
        session.set_session(result.token, result.user_info);
    }

    let output = match command {
        Command::Banners => serde_json::to_value(banner::list_banners(&client).await?),
        Command::Brands => serde_json::to_value(category::list_brands(&client).await?),
        Command::Categories => serde_json::to_value(category::category_tree(&client).await?),
        Command::Collaborations => serde_json::to_value(collaboration::list_collaborations(&client).await?),
        Command::News => serde_json::to_value(news::list_news(&client, &NewsQuery::default()).await?),
        Command::Products => return Ok(products::search_products(&client, &ProductQuery::default()).await?),
    };

    output.map_err(|e| AppError::Config(format!("unrenderable response: {e}")))
}
