mod call;
mod common;
mod config;
mod storage;
mod ui;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio::runtime::Handle;

use call::SystemMedia;
use common::{CallCommand, CallKind};
use storage::ChatStore;
use ui::MessengerApp;
use ui::state::{AppState, CallLauncher};

#[derive(Parser)]
#[command(
    name = "rust_messenger",
    version,
    about = "Desktop messenger mock with call overlays"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Show an incoming call from the selected chat on startup
    #[arg(long, value_enum, value_name = "KIND")]
    incoming_call: Option<CallKind>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Write the default config file and exit
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();

    if cli.command == Some(Command::InitConfig) {
        init_config(&cli.config);
        return Ok(());
    }

    let app_config = config::load_config(&cli.config);
    run_client(app_config, cli.incoming_call)
}

fn init_config(path: &str) {
    if let Err(err) = config::save_config(path, &config::AppConfig::default()) {
        log::error!("Failed to write config {path}: {err}");
    } else {
        log::info!("Wrote default config to {path}");
    }
}

fn run_client(
    app_config: config::AppConfig,
    incoming_call: Option<CallKind>,
) -> Result<(), eframe::Error> {
    // 1. Dữ liệu mẫu + trạng thái UI
    let mut state = AppState::new(ChatStore::sample());

    // 2. Timer của cuộc gọi chạy trên runtime hiện tại
    let launcher = CallLauncher::new(
        Handle::current(),
        app_config.call_settings(),
        Arc::new(SystemMedia::new()),
    );

    if let Some(kind) = incoming_call {
        match state.selected().map(|chat| chat.contact()) {
            Some(contact) => {
                state.handle_call_command(CallCommand::Ring { contact, kind }, &launcher)
            }
            None => log::warn!("No chat selected; skipping simulated incoming call"),
        }
    }

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.window_title.clone())
            .with_inner_size([1200.0, 780.0]),
        ..Default::default()
    };
    let mut initial = Some((state, launcher));
    let user_name = app_config.user_name.clone();

    log::info!(
        "Messenger started with {} sample chats",
        initial.as_ref().map_or(0, |(state, _)| state.store.chats().len())
    );

    eframe::run_native(
        &app_config.window_title,
        options,
        Box::new(move |cc| {
            let (state, launcher) = initial
                .take()
                .expect("MessengerApp should only be initialized once");
            Ok(Box::new(MessengerApp::new(cc, state, launcher, user_name.clone())))
        }),
    )
}
