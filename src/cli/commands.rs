//! CLI command implementations

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    model: String,
    endpoint: String,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("fieldnotes doctor");
    println!("model: {}", report.model);
    println!("endpoint: {}", report.endpoint);
    println!();

    for check in &report.checks {
        println!("{:<10} {:<8} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> Result<DoctorReport> {
    let key_ok = !settings.llm.api_key.trim().is_empty();
    let config_path = Settings::config_path()?;
    let config_ok = config_path.exists();
    let addr = settings.bind_addr();
    let port_free = std::net::TcpListener::bind(&addr).is_ok();

    let mut notes = Vec::new();

    if !key_ok {
        notes.push(
            "hint: set OPENAI_API_KEY (or llm.api_key in config.toml); without it both API endpoints return errors.".to_string(),
        );
    }
    if !config_ok {
        notes.push("hint: run `fieldnotes config init` to write a starter config.".to_string());
    }
    if !port_free {
        notes.push(format!(
            "hint: another process is listening on {}; stop it or change server.port.",
            addr
        ));
    }

    Ok(DoctorReport {
        model: settings.llm.model.clone(),
        endpoint: settings.llm.endpoint.clone(),
        checks: vec![
            DoctorCheck {
                name: "api-key",
                status: if key_ok { "ok" } else { "missing" },
                detail: "used to authenticate completion requests".to_string(),
            },
            DoctorCheck {
                name: "config",
                status: if config_ok { "ok" } else { "missing" },
                detail: config_path.display().to_string(),
            },
            DoctorCheck {
                name: "port",
                status: if port_free { "ok" } else { "busy" },
                detail: addr,
            },
        ],
        notes,
    })
}
