use owo_colors::OwoColorize;
use provisioning_core::apps::{AppDescriptor, AppList};
use provisioning_core::authorization::Principal;
use tabled::{builder::Builder, settings::Style};
use tracing::info;

use super::render;
use crate::app_state::AppState;
use crate::cli::{AppIdCommand, ListCommand, OutputFormat};

pub fn colored_by_state(name: &str, enabled: bool) -> String {
    if enabled {
        name.green().to_string()
    } else {
        name.blue().to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn format_app_list(list: &AppList) -> String {
    if list.is_empty() {
        return "No apps found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(vec!["Id", "Name", "Version", "Enabled", "Shipped"]);
    for app in &list.apps {
        builder.push_record(vec![
            colored_by_state(&app.id, app.enabled),
            app.name.clone(),
            app.version.clone(),
            yes_no(app.enabled).to_string(),
            yes_no(app.shipped).to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

pub fn format_app_info(app: &AppDescriptor) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Id", app.id.as_str()]);
    builder.push_record(["Name", app.name.as_str()]);
    builder.push_record(["Version", app.version.as_str()]);
    builder.push_record(["Enabled", yes_no(app.enabled)]);
    builder.push_record(["Shipped", yes_no(app.shipped)]);
    for (label, value) in [
        ("Summary", &app.summary),
        ("Description", &app.description),
        ("Author", &app.author),
        ("Licence", &app.licence),
    ] {
        if let Some(value) = value {
            builder.push_record([label, value.as_str()]);
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    format!("Info for {}\n{}", colored_by_state(&app.name, app.enabled), table)
}

/// List installed apps
pub fn list_apps(
    state: &AppState,
    principal: Option<&Principal>,
    cmd: &ListCommand,
    output: OutputFormat,
) -> anyhow::Result<String> {
    info!("Listing apps with filter {:?}", cmd.filter);
    let result = state.controller.get_apps(principal, cmd.filter.as_deref());
    render(&result, output, format_app_list)
}

/// Get info for a specific app
pub fn info_app(
    state: &AppState,
    principal: Option<&Principal>,
    cmd: &AppIdCommand,
    output: OutputFormat,
) -> anyhow::Result<String> {
    let result = state.controller.get_app_info(principal, &cmd.app_id);
    render(&result, output, format_app_info)
}

pub fn enable_app(
    state: &mut AppState,
    principal: Option<&Principal>,
    cmd: &AppIdCommand,
    output: OutputFormat,
) -> anyhow::Result<String> {
    let result = state.controller.enable_app(principal, &cmd.app_id);
    render(&result, output, |_| {
        format!("App {} has been enabled", cmd.app_id.yellow())
    })
}

pub fn disable_app(
    state: &mut AppState,
    principal: Option<&Principal>,
    cmd: &AppIdCommand,
    output: OutputFormat,
) -> anyhow::Result<String> {
    let result = state.controller.disable_app(principal, &cmd.app_id);
    render(&result, output, |_| {
        format!("App {} has been disabled", cmd.app_id.yellow())
    })
}
