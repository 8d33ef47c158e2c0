//! 管理控制台主入口
//! 逐行读取 stdin 命令，处理后把当前页标记打印到 stdout

use admin_console::{
    app::App,
    cli::{self, Command},
    config::{AppConfig, StoreBackend},
    services::{DataService, FakeSeed},
    store::{FileStore, KeyValueStore, MemoryStore},
    telemetry,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ===== CLI 参数处理 =====
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" => {
                println!("admin-console {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("未知参数: {}", args[1]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    // 按优先级加载：.env.local > .env.development > .env
    if let Ok(name) = std::env::var("ADMIN_ENV") {
        dotenv::from_filename(format!(".env.{}", name)).ok();
    } else {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env.development").ok();
        dotenv::dotenv().ok();
    }

    // 1. 加载配置
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    // 2. 初始化日志与指标
    telemetry::init_telemetry(&config);
    telemetry::init_metrics();

    // 3. 持久化存储
    let store: Arc<dyn KeyValueStore> = match config.store.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => Arc::new(FileStore::open(&config.store.path)?),
    };

    // 4. 数据服务（恢复或生成种子数据）
    let seed = Arc::new(FakeSeed::new(config.seed.clone()));
    let data = Arc::new(DataService::new(
        store.clone(),
        seed,
        config.service.delay(),
    )?);

    tracing::info!(
        backend = ?config.store.backend,
        delay_ms = config.service.delay_ms,
        "Data service ready"
    );

    // 5. 挂载两个列表页
    let mut app = App::start(data, store).await?;

    let mut stdout = tokio::io::stdout();
    print_screen(&mut stdout, &app).await?;

    // 6. 命令循环
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                tracing::info!("Ctrl+C received, exiting");
                break;
            }
        };

        // stdin 已关闭
        let Some(line) = line else { break };

        match cli::parse_command(&line, app.active()) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                stdout.write_all(cli::HELP.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Ok(Command::Print) => print_screen(&mut stdout, &app).await?,
            Ok(Command::Dispatch(message)) => {
                app.dispatch(message).await?;
                print_screen(&mut stdout, &app).await?;
            }
            Err(cli::CommandError::Empty) => {}
            Err(e) => eprintln!("{} (type `help` for commands)", e),
        }
    }

    tracing::info!("Admin console shutdown complete");
    Ok(())
}

async fn print_screen(stdout: &mut tokio::io::Stdout, app: &App) -> anyhow::Result<()> {
    let screen = app.screen()?;
    stdout.write_all(screen.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

/// 打印帮助信息
fn print_help() {
    println!("admin-console {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("用法: admin-console [选项]");
    println!();
    println!("选项:");
    println!("  --version     打印版本信息并退出");
    println!("  --help        打印此帮助信息并退出");
    println!();
    println!("环境变量:");
    println!("  ADMIN_SERVICE__DELAY_MS   模拟延迟（毫秒）");
    println!("  ADMIN_STORE__BACKEND      memory | file");
    println!("  ADMIN_STORE__PATH         file 后端的 JSON 文件");
    println!("  ADMIN_SEED__RNG_SEED      固定随机种子");
    println!("  ADMIN_LOGGING__LEVEL      trace | debug | info | warn | error");
    println!();
    println!("{}", cli::HELP);
}
