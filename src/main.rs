use anyhow::Result;
use notify_migrate::cli;
use notify_migrate::config::NotificationTarget;
use notify_migrate::io::RealFileSystem;

// Main orchestrator function
fn main() -> Result<()> {
    let args = cli::parse_args();
    cli::init_logging();

    let formatter = cli::formatter_from_env();
    let target = NotificationTarget::default();

    let fs = RealFileSystem::new();
    let report = notify_migrate::migrate_files(&fs, args.paths.as_slice(), &target, |file| {
        println!("{}", file.status_line(&formatter));
    });

    println!();
    println!("{}", report.summary_line(&formatter));

    // Per-file failures are reported above and never change the exit status
    Ok(())
}
