use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use beranda_tui::{AppConfig, DEFAULT_GROUP_SIZE, DEFAULT_MAX_DIGITS, MaskedDigitInput, ThemeManager};
use beranda_types::ThemeMode;
use beranda_util::{Bill, BillStatus, CustomerDirectory, PreferenceStore, UserPreferences, expand_tilde};
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Overrides where the TUI writes its log file.
const LOG_PATH_ENV: &str = "BERANDA_LOG_PATH";
const LOG_FILE_NAME: &str = "beranda.log";

#[derive(Debug, Parser)]
#[command(name = "beranda", version, about = "Bule Network landing page in the terminal")]
struct Cli {
    #[command(flatten)]
    tui: TuiArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args)]
struct TuiArgs {
    /// Number of testimonials to cycle in the carousel.
    #[arg(long, value_name = "N")]
    slides: Option<usize>,
    /// Milliseconds between automatic slide changes.
    #[arg(long, value_name = "MS", default_value_t = 5000)]
    auto_advance_ms: u64,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Group a digit string the way the identity number field does.
    FormatId {
        input: String,
        #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
        max_digits: usize,
        #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
        group_size: usize,
    },
    /// Print the bill for a customer ID.
    Bill {
        id: String,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Read or change the stored theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum ThemeAction {
    Show,
    Light,
    Dark,
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // No subcommands => TUI
    let Some(command) = cli.command else {
        init_tracing(true);
        let config = AppConfig {
            slides: cli.tui.slides,
            auto_advance_interval: Duration::from_millis(cli.tui.auto_advance_ms),
            ..AppConfig::default()
        };
        return beranda_tui::run(config, open_preferences()).await;
    };

    init_tracing(false);
    match command {
        Command::FormatId {
            input,
            max_digits,
            group_size,
        } => {
            println!("{}", format_id(&input, max_digits, group_size)?);
            Ok(())
        }
        Command::Bill { id, json } => print_bill(&id, json),
        Command::Theme { action } => {
            let mode = run_theme(open_preferences(), action.unwrap_or(ThemeAction::Show));
            println!("{mode}");
            Ok(())
        }
    }
}

/// Installs the global subscriber. While the TUI owns the terminal, log
/// lines go to a file instead of stderr.
fn init_tracing(to_file: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if to_file {
        match open_log_file() {
            Ok(file) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
            // Writing to stderr would corrupt the screen; stay quiet instead.
            Err(_) => {
                let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::new("off")).try_init();
            }
        }
        return;
    }
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn log_path() -> PathBuf {
    if let Ok(path) = std::env::var(LOG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }
    dirs_next::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("beranda")
        .join(LOG_FILE_NAME)
}

fn open_log_file() -> Result<fs::File> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))
}

/// Opens the preference file, falling back to an in-memory store so a broken
/// file never blocks startup.
fn open_preferences() -> Arc<dyn PreferenceStore> {
    match UserPreferences::new() {
        Ok(preferences) => Arc::new(preferences),
        Err(error) => {
            warn!(%error, "preferences unavailable; theme changes will not persist");
            Arc::new(UserPreferences::ephemeral())
        }
    }
}

fn format_id(input: &str, max_digits: usize, group_size: usize) -> Result<String> {
    let mut field = MaskedDigitInput::new(max_digits, group_size)?;
    field.on_paste(input);
    Ok(field.current_display_text().to_string())
}

fn print_bill(id: &str, json: bool) -> Result<()> {
    let directory = CustomerDirectory::seeded();
    let bill = directory.lookup(id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(bill)?);
    } else {
        print!("{}", render_bill(bill));
    }
    Ok(())
}

fn render_bill(bill: &Bill) -> String {
    let status = match bill.status {
        BillStatus::Unpaid => "Belum Dibayar",
        BillStatus::Paid => "Lunas",
    };
    let rows = [
        ("ID Pelanggan", bill.customer_id.clone()),
        ("Nama", bill.name.clone()),
        ("Paket", bill.package.clone()),
        ("Telepon", bill.phone.clone()),
        ("Periode", bill.period_label()),
        ("Jatuh Tempo", bill.due_date_label()),
        ("Total Tagihan", bill.amount_label()),
        ("Status", status.to_string()),
    ];
    rows.iter().map(|(label, value)| format!("{label:<16}{value}\n")).collect()
}

fn run_theme(store: Arc<dyn PreferenceStore>, action: ThemeAction) -> ThemeMode {
    let mut manager = ThemeManager::new(store);
    match action {
        ThemeAction::Show => {}
        ThemeAction::Light => manager.set_mode(ThemeMode::Light),
        ThemeAction::Dark => manager.set_mode(ThemeMode::Dark),
        ThemeAction::Toggle => {
            manager.toggle();
        }
    }
    manager.mode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tui_flags_parse_without_subcommand() {
        let cli = Cli::parse_from(["beranda", "--slides", "3", "--auto-advance-ms", "800"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.tui.slides, Some(3));
        assert_eq!(cli.tui.auto_advance_ms, 800);
    }

    #[test]
    fn format_id_groups_and_truncates() {
        assert_eq!(format_id("3201-0123 4567 89012", 16, 4).unwrap(), "3201 0123 4567 8901");
        assert_eq!(format_id("123456", 6, 3).unwrap(), "123 456");
        assert!(format_id("1", 0, 4).is_err());
    }

    #[test]
    fn bill_table_lists_every_field() {
        let directory = CustomerDirectory::seeded();
        let table = render_bill(directory.lookup("int002").unwrap());
        assert!(table.contains("Siti Nurhaliza"));
        assert!(table.contains("Rp 299.000"));
        assert!(table.contains("Belum Dibayar"));
        assert_eq!(table.lines().count(), 8);
    }

    #[test]
    fn theme_choice_persists_between_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let open = || -> Arc<dyn PreferenceStore> { Arc::new(UserPreferences::at(&path).unwrap()) };

        assert_eq!(run_theme(open(), ThemeAction::Dark), ThemeMode::Dark);
        assert_eq!(run_theme(open(), ThemeAction::Show), ThemeMode::Dark);
        assert_eq!(run_theme(open(), ThemeAction::Toggle), ThemeMode::Light);
    }

    #[test]
    fn log_path_honors_override() {
        temp_env::with_var(LOG_PATH_ENV, Some("/tmp/beranda-test.log"), || {
            assert_eq!(log_path(), PathBuf::from("/tmp/beranda-test.log"));
        });
    }
}
