//! Built-in commands

use anyhow::{Context, Result};

use super::{Args, CommandSpec, Outcome, Param, ParamKind};
use crate::app::Workspace;
use crate::heading::HeadingSettings;

const NO_PARAMS: &[Param] = &[];
const TEXT: &[Param] = &[Param::required("text", ParamKind::Text)];
const PATTERN: &[Param] = &[Param::required("pattern", ParamKind::Text)];
const SIZE: &[Param] = &[Param::required("size", ParamKind::Integer)];
const FLAG: &[Param] = &[Param::required("on|off", ParamKind::Flag)];
const NAME: &[Param] = &[Param::required("name", ParamKind::Text)];
const PATH: &[Param] = &[Param::required("path", ParamKind::Text)];
const TOPIC: &[Param] = &[Param::optional("command", ParamKind::Text)];

/// The command table, in the order `help` lists it
pub fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "help",
            aliases: &["?"],
            params: TOPIC,
            summary: "List commands, or describe one",
            handler: help,
        },
        CommandSpec {
            name: "heading",
            aliases: &["h"],
            params: TEXT,
            summary: "Render text as a heading (use \"\\n\" inside quotes for new lines)",
            handler: heading,
        },
        CommandSpec {
            name: "clip",
            aliases: &[],
            params: NO_PARAMS,
            summary: "Render the text currently on the clipboard",
            handler: clip,
        },
        CommandSpec {
            name: "show",
            aliases: &["settings"],
            params: NO_PARAMS,
            summary: "Show the current settings",
            handler: show,
        },
        CommandSpec {
            name: "boundary",
            aliases: &[],
            params: PATTERN,
            summary: "Set the repeating pattern of the outer frame",
            handler: boundary,
        },
        CommandSpec {
            name: "fill",
            aliases: &[],
            params: PATTERN,
            summary: "Set the repeating pattern around the text",
            handler: fill,
        },
        CommandSpec {
            name: "vertical-boundary",
            aliases: &["vbound"],
            params: SIZE,
            summary: "Frame lines above and below",
            handler: vertical_boundary,
        },
        CommandSpec {
            name: "horizontal-boundary",
            aliases: &["hbound"],
            params: SIZE,
            summary: "Frame columns left and right",
            handler: horizontal_boundary,
        },
        CommandSpec {
            name: "vertical-buffer",
            aliases: &["vbuf"],
            params: SIZE,
            summary: "Fill lines above and below the text",
            handler: vertical_buffer,
        },
        CommandSpec {
            name: "horizontal-buffer",
            aliases: &["hbuf"],
            params: SIZE,
            summary: "Fill columns left and right of the text",
            handler: horizontal_buffer,
        },
        CommandSpec {
            name: "section-buffer",
            aliases: &["sbuf"],
            params: SIZE,
            summary: "Fill lines between sections",
            handler: section_buffer,
        },
        CommandSpec {
            name: "fixed-width",
            aliases: &[],
            params: FLAG,
            summary: "Force the text area to the fixed size (wraps long lines)",
            handler: fixed_width,
        },
        CommandSpec {
            name: "fixed-size",
            aliases: &[],
            params: SIZE,
            summary: "Width of the text area when fixed width is on",
            handler: fixed_size,
        },
        CommandSpec {
            name: "reset",
            aliases: &[],
            params: NO_PARAMS,
            summary: "Restore the default settings",
            handler: reset,
        },
        CommandSpec {
            name: "profiles",
            aliases: &[],
            params: NO_PARAMS,
            summary: "List saved profiles",
            handler: profiles,
        },
        CommandSpec {
            name: "save",
            aliases: &[],
            params: NAME,
            summary: "Save the current settings as a named profile",
            handler: save,
        },
        CommandSpec {
            name: "load",
            aliases: &[],
            params: NAME,
            summary: "Switch to a saved profile",
            handler: load,
        },
        CommandSpec {
            name: "delete",
            aliases: &[],
            params: NAME,
            summary: "Delete a saved profile",
            handler: delete,
        },
        CommandSpec {
            name: "export",
            aliases: &[],
            params: PATH,
            summary: "Write the current settings to a TOML file",
            handler: export,
        },
        CommandSpec {
            name: "import",
            aliases: &[],
            params: PATH,
            summary: "Read settings from a TOML file",
            handler: import,
        },
        CommandSpec {
            name: "copy",
            aliases: &[],
            params: FLAG,
            summary: "Copy rendered headings to the clipboard",
            handler: copy,
        },
        CommandSpec {
            name: "quit",
            aliases: &["exit", "q"],
            params: NO_PARAMS,
            summary: "Leave headsmith",
            handler: quit,
        },
    ]
}

fn help(_: &mut Workspace, args: &Args) -> Result<Outcome> {
    Ok(Outcome::Help(args.get_text(0).map(str::to_string)))
}

fn heading(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    let text = args.text(0)?;
    Ok(ws.render_and_deliver(text))
}

fn clip(ws: &mut Workspace, _: &Args) -> Result<Outcome> {
    let text = ws
        .clipboard
        .get_text()
        .context("Could not read text from the clipboard")?;
    Ok(ws.render_and_deliver(&text))
}

fn show(ws: &mut Workspace, _: &Args) -> Result<Outcome> {
    Ok(Outcome::Message(ws.settings().describe()))
}

fn set_pattern(
    ws: &mut Workspace,
    args: &Args,
    label: &str,
    apply: fn(&mut HeadingSettings, &str) -> bool,
    read: fn(&HeadingSettings) -> &str,
) -> Result<Outcome> {
    let pattern = args.text(0)?;
    if pattern.is_empty() {
        return Ok(Outcome::Message(format!(
            "{} unchanged, patterns cannot be empty (still {:?})",
            label,
            read(ws.settings())
        )));
    }
    ws.update_settings(|s| {
        apply(s, pattern);
    })?;
    Ok(Outcome::Message(format!("{} = {:?}", label, read(ws.settings()))))
}

fn boundary(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_pattern(
        ws,
        args,
        "boundary",
        HeadingSettings::set_boundary_sequence,
        HeadingSettings::boundary_sequence,
    )
}

fn fill(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_pattern(
        ws,
        args,
        "fill",
        HeadingSettings::set_fill_sequence,
        HeadingSettings::fill_sequence,
    )
}

fn set_size(
    ws: &mut Workspace,
    args: &Args,
    label: &str,
    apply: fn(&mut HeadingSettings, i64),
    read: fn(&HeadingSettings) -> usize,
) -> Result<Outcome> {
    let size = args.integer(0)?;
    ws.update_settings(|s| apply(s, size))?;
    Ok(Outcome::Message(format!("{} = {}", label, read(ws.settings()))))
}

fn vertical_boundary(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_size(
        ws,
        args,
        "vertical-boundary",
        HeadingSettings::set_vertical_boundary_size,
        HeadingSettings::vertical_boundary_size,
    )
}

fn horizontal_boundary(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_size(
        ws,
        args,
        "horizontal-boundary",
        HeadingSettings::set_horizontal_boundary_size,
        HeadingSettings::horizontal_boundary_size,
    )
}

fn vertical_buffer(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_size(
        ws,
        args,
        "vertical-buffer",
        HeadingSettings::set_vertical_buffer_size,
        HeadingSettings::vertical_buffer_size,
    )
}

fn horizontal_buffer(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_size(
        ws,
        args,
        "horizontal-buffer",
        HeadingSettings::set_horizontal_buffer_size,
        HeadingSettings::horizontal_buffer_size,
    )
}

fn section_buffer(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_size(
        ws,
        args,
        "section-buffer",
        HeadingSettings::set_section_buffer_size,
        HeadingSettings::section_buffer_size,
    )
}

fn fixed_size(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    set_size(
        ws,
        args,
        "fixed-size",
        HeadingSettings::set_fixed_size,
        HeadingSettings::fixed_size,
    )
}

fn fixed_width(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    let enabled = args.flag(0)?;
    ws.update_settings(|s| s.set_use_fixed_width(enabled))?;
    Ok(Outcome::Message(format!("fixed-width = {}", enabled)))
}

fn reset(ws: &mut Workspace, _: &Args) -> Result<Outcome> {
    ws.store.reset_current();
    ws.save_store()?;
    Ok(Outcome::Message("Settings reset to defaults".to_string()))
}

fn profiles(ws: &mut Workspace, _: &Args) -> Result<Outcome> {
    if ws.store.is_empty() {
        return Ok(Outcome::Message(
            "No saved profiles (use 'save <name>')".to_string(),
        ));
    }
    let lines: Vec<String> = ws
        .store
        .profiles_sorted()
        .into_iter()
        .map(|p| format!("  {}", p.summary()))
        .collect();
    Ok(Outcome::Message(lines.join("\n")))
}

fn save(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    let name = ws.store.save_profile(args.text(0)?)?;
    ws.save_store()?;
    Ok(Outcome::Message(format!("Saved profile '{}'", name)))
}

fn load(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    ws.store.load_profile(args.text(0)?)?;
    ws.save_store()?;
    Ok(Outcome::Message(format!(
        "Loaded profile '{}'",
        args.text(0)?.trim()
    )))
}

fn delete(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    let name = args.text(0)?.trim();
    if ws.store.remove(name).is_none() {
        anyhow::bail!("No profile named '{}'", name);
    }
    ws.save_store()?;
    Ok(Outcome::Message(format!("Deleted profile '{}'", name)))
}

fn export(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    let path = shellexpand::tilde(args.text(0)?).into_owned();
    let content =
        toml::to_string_pretty(ws.settings()).context("Failed to serialize settings")?;
    std::fs::write(&path, content)
        .map_err(|e| anyhow::anyhow!(crate::config::friendly_io_error_message(&e, &path)))?;
    tracing::info!("Exported settings to {}", path);
    Ok(Outcome::Message(format!("Settings written to {}", path)))
}

fn import(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    let path = shellexpand::tilde(args.text(0)?).into_owned();
    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!(crate::config::friendly_io_error_message(&e, &path)))?;
    let settings: HeadingSettings =
        toml::from_str(&content).with_context(|| format!("{} is not a settings file", path))?;
    ws.store.set_current(settings.sanitized());
    ws.save_store()?;
    tracing::info!("Imported settings from {}", path);
    Ok(Outcome::Message(format!("Settings read from {}", path)))
}

fn copy(ws: &mut Workspace, args: &Args) -> Result<Outcome> {
    ws.config.copy_to_clipboard = args.flag(0)?;
    ws.save_config()?;
    Ok(Outcome::Message(format!(
        "copy = {}",
        ws.config.copy_to_clipboard
    )))
}

fn quit(_: &mut Workspace, _: &Args) -> Result<Outcome> {
    Ok(Outcome::Quit)
}
