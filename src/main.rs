// ABOUTME: Main entry point for the exchange-site program.
// ABOUTME: Provides CLI commands to render pages and drive the site on a simulated or real clock.

use clap::{Args, Parser, Subcommand};
use exchange_site::script::{self, ScriptedEvent};
use exchange_site::{
    html, AdminPanel, MockDataSource, SiteConfig, SiteError, Website,
};
use log::{error, info, warn};
use parking_lot::Mutex;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the public home page to an HTML file
    Render(RenderArgs),

    /// Render the admin dashboard to an HTML file
    RenderAdmin(RenderAdminArgs),

    /// Run the site on a simulated clock and print slide changes
    Simulate(SimulateArgs),

    /// Run the site on the wall clock, reading commands from stdin
    Play(PlayArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Path to output HTML file
    #[arg(short, long)]
    output: PathBuf,

    /// Simulated milliseconds to run before rendering
    #[arg(long, default_value_t = 0)]
    after_ms: u64,
}

#[derive(Args)]
struct RenderAdminArgs {
    /// Path to output HTML file
    #[arg(short, long)]
    output: PathBuf,

    /// Dashboard section to show
    #[arg(long, default_value = "dashboard")]
    section: String,

    /// Viewport width used to decide whether the sidebar is open
    #[arg(long, default_value_t = 1280)]
    width: u32,
}

#[derive(Args)]
struct SimulateArgs {
    /// Total simulated time in milliseconds
    #[arg(long, default_value_t = 30000)]
    duration_ms: u64,

    /// Scripted event as <ms>:<kind>[:<arg>], e.g. 7000:select:2 or 1000:login:admin|admin123
    #[arg(long = "event")]
    events: Vec<String>,
}

#[derive(Args)]
struct PlayArgs {
    /// Stop after this many seconds
    #[arg(long, default_value_t = 60)]
    duration_secs: u64,

    /// Tick resolution in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

fn build_site(config: SiteConfig) -> exchange_site::Result<Website> {
    let mut site = Website::new(config, Arc::new(MockDataSource))?;
    site.slider_mut().on_active_changed(|change| {
        println!(
            "t={}ms active slide {}",
            change.at.as_millis(),
            change.current
        );
    });
    Ok(site)
}

fn render(args: &RenderArgs, config: SiteConfig) -> exchange_site::Result<()> {
    let mut site = Website::new(config, Arc::new(MockDataSource))?;
    site.advance(Duration::from_millis(args.after_ms));
    let html_content = html::render_home_page(&site);
    html::write_html_to_file(&html_content, &args.output)?;
    println!("HTML generated successfully: {:?}", args.output);
    Ok(())
}

fn render_admin(args: &RenderAdminArgs, config: SiteConfig) -> exchange_site::Result<()> {
    let mut panel = AdminPanel::new(
        Arc::new(MockDataSource),
        args.width,
        config.sidebar_breakpoint_px,
    );
    let data = panel.switch_section(&args.section)?;
    let html_content = html::render_admin_page(&panel, &data);
    html::write_html_to_file(&html_content, &args.output)?;
    println!("Admin HTML generated successfully: {:?}", args.output);
    Ok(())
}

fn simulate(args: &SimulateArgs, config: SiteConfig) -> exchange_site::Result<()> {
    let events: Vec<ScriptedEvent> = script::parse_script(&args.events)?;
    let end = Duration::from_millis(args.duration_ms);
    let mut site = build_site(config)?;

    for scripted in events.into_iter().filter(|e| e.at <= end) {
        site.advance(scripted.at.saturating_sub(site.now()));
        println!("t={}ms event {:?}", scripted.at.as_millis(), scripted.event);
        if let Err(e) = site.handle(scripted.event) {
            warn!("Event rejected: {}", e);
            println!("t={}ms rejected: {}", scripted.at.as_millis(), e);
        }
    }
    site.advance(end.saturating_sub(site.now()));

    println!(
        "t={}ms final slide {} ({:?})",
        site.now().as_millis(),
        site.slider().current_index(),
        site.slider().auto_advance()
    );
    println!(
        "t={}ms location {:?}, {} message(s) sent",
        site.now().as_millis(),
        site.location(),
        site.receipts().len()
    );
    for toast in site.notifier().visible() {
        println!("toast [{}] {}", toast.kind.css_class(), toast.message);
    }
    Ok(())
}

fn play(args: &PlayArgs, config: SiteConfig) -> exchange_site::Result<()> {
    let site = Arc::new(Mutex::new(build_site(config)?));
    let stop = Arc::new(AtomicBool::new(false));

    let input_site = site.clone();
    let input_stop = stop.clone();
    thread::Builder::new()
        .name("stdin-commands".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" {
                    break;
                }
                match script::parse_line(line) {
                    Ok(event) => {
                        if let Err(e) = input_site.lock().handle(event) {
                            println!("rejected: {}", e);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            input_stop.store(true, Ordering::SeqCst);
        })
        .map_err(|e| anyhow::anyhow!("Failed to start input thread: {}", e))?;

    info!("Playing for {}s", args.duration_secs);
    let started = Instant::now();
    let mut last = started;
    let deadline = Duration::from_secs(args.duration_secs);
    let tick = Duration::from_millis(args.tick_ms.max(1));

    while started.elapsed() < deadline && !stop.load(Ordering::SeqCst) {
        thread::sleep(tick);
        let now = Instant::now();
        site.lock().advance(now - last);
        last = now;
    }

    let site = site.lock();
    println!(
        "final slide {} ({:?})",
        site.slider().current_index(),
        site.slider().auto_advance()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = SiteConfig::from_env();

    let result: Result<(), SiteError> = match &cli.command {
        Some(Commands::Render(args)) => render(args, config),
        Some(Commands::RenderAdmin(args)) => render_admin(args, config),
        Some(Commands::Simulate(args)) => simulate(args, config),
        Some(Commands::Play(args)) => play(args, config),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
