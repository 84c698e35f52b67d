//! Bot lifecycle CLI commands: create, list, show, update, delete.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::{Confirm, Input};

use mybots_core::response::Persona;
use mybots_types::bot::{BotField, BotId, BotRecord, CreateBotRequest, UpdateBotRequest};

use crate::state::AppState;

/// Use the flag value when given, otherwise prompt for it.
fn field_or_prompt(value: Option<String>, field: BotField) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(field.label())
            .interact_text()?),
    }
}

/// Create a new bot via interactive prompts or one-shot flags.
///
/// # Examples
///
/// ```bash
/// # Interactive
/// mybots create bot
///
/// # One-shot with flags
/// mybots create bot --name "Aria" --personality "friendly" --prompt "Cooking tips"
/// ```
pub async fn create_bot(
    state: &AppState,
    id: Option<String>,
    name: Option<String>,
    personality: Option<String>,
    prompt: Option<String>,
    json: bool,
) -> Result<()> {
    let name = field_or_prompt(name, BotField::Name)?;
    let personality = field_or_prompt(personality, BotField::Personality)?;
    let prompt = field_or_prompt(prompt, BotField::Prompt)?;

    let bot = state
        .bot_service
        .create_bot(CreateBotRequest {
            id,
            name,
            personality,
            prompt,
        })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bot)?);
        return Ok(());
    }

    println!();
    println!("  {} Bot created successfully!", style("✓").green().bold());
    println!();
    println!("  {}     {}", style("Name:").bold(), style(&bot.name).cyan());
    println!("  {}       {}", style("ID:").bold(), &bot.id);
    println!(
        "  {}  {}",
        style("Persona:").bold(),
        Persona::detect(&bot.personality).as_str()
    );
    println!();
    println!(
        "  Start chatting: {}",
        style(format!("mybots chat {}", bot.id)).yellow()
    );
    println!();

    Ok(())
}

/// List all bots in a table.
pub async fn list_bots(state: &AppState, json: bool) -> Result<()> {
    let bots = state.bot_service.list_bots().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bots)?);
        return Ok(());
    }

    if bots.is_empty() {
        println!();
        println!(
            "  {} No bots found. Create one with: {}",
            style("i").blue().bold(),
            style("mybots create bot").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Persona").fg(Color::White),
        Cell::new("Personality").fg(Color::White),
        Cell::new("Updated").fg(Color::White),
    ]);

    for bot in bots.values() {
        let last_change = bot.updated_at.unwrap_or(bot.created_at);
        table.add_row(vec![
            Cell::new(&bot.id).fg(Color::DarkGrey),
            Cell::new(&bot.name).fg(Color::Cyan),
            Cell::new(Persona::detect(&bot.personality).as_str()),
            Cell::new(truncate_chars(&bot.personality, 40)),
            Cell::new(format_relative_time(&last_change)).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} bot{}",
        style(bots.len()).bold(),
        if bots.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show the full record for a bot.
pub async fn show_bot(state: &AppState, id: &str, json: bool) -> Result<()> {
    let bot = state.bot_service.get_bot(&BotId::new(id)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bot)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&bot.name).cyan().bold());
    println!("  {}", style(&bot.id).dim());
    println!();

    println!("  {}", style("── Personality ──").dim());
    println!("  {}", &bot.personality);
    println!(
        "  {} {}",
        style("Persona:").bold(),
        Persona::detect(&bot.personality).as_str()
    );
    println!();

    println!("  {}", style("── Prompt ──").dim());
    for line in bot.prompt.lines() {
        println!("  {line}");
    }
    println!();

    println!("  {}", style("── Timestamps ──").dim());
    println!(
        "  {}  {}",
        style("Created:").bold(),
        bot.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(updated) = &bot.updated_at {
        println!(
            "  {}  {}",
            style("Updated:").bold(),
            updated.format("%Y-%m-%d %H:%M UTC")
        );
    }
    println!();

    Ok(())
}

/// Merge flag values over the current record; omitted fields are kept.
fn merge_update(
    current: &BotRecord,
    name: Option<String>,
    personality: Option<String>,
    prompt: Option<String>,
) -> UpdateBotRequest {
    UpdateBotRequest {
        name: name.unwrap_or_else(|| current.name.clone()),
        personality: personality.unwrap_or_else(|| current.personality.clone()),
        prompt: prompt.unwrap_or_else(|| current.prompt.clone()),
    }
}

/// Update a bot's fields.
pub async fn update_bot(
    state: &AppState,
    id: &str,
    name: Option<String>,
    personality: Option<String>,
    prompt: Option<String>,
    json: bool,
) -> Result<()> {
    let id = BotId::new(id);
    let current = state.bot_service.get_bot(&id).await?;
    let request = merge_update(&current, name, personality, prompt);
    let updated = state.bot_service.update_bot(&id, request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "  {} Bot '{}' updated.",
            style("✓").green().bold(),
            style(&updated.name).cyan()
        );
    }

    Ok(())
}

/// Delete a bot permanently with confirmation.
pub async fn delete_bot(state: &AppState, id: &str, force: bool, json: bool) -> Result<()> {
    let bot = state.bot_service.get_bot(&BotId::new(id)).await?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete bot '{}'?",
                style(&bot.name).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.bot_service.delete_bot(&bot.id).await?;

    if json {
        println!("{}", serde_json::json!({"deleted": true, "id": bot.id}));
    } else {
        println!("  {} Bot '{}' deleted.", style("✓").red().bold(), bot.name);
    }

    Ok(())
}

// --- Formatting helpers ---

/// Shorten to at most `max` characters, marking the cut with "...".
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn format_relative_time(dt: &chrono::DateTime<chrono::Utc>) -> String {
    let diff = chrono::Utc::now() - *dt;

    if diff.num_minutes() < 1 {
        "just now".to_string()
    } else if diff.num_hours() < 1 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_days() < 1 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 30 {
        format!("{}d ago", diff.num_days())
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}
