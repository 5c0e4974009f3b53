use blogr::api::{BlogrApi, CmdMessage, ConfigAction, DisplayPost, MessageLevel};
use blogr::clock::SystemClock;
use blogr::config::BlogrConfig;
use blogr::error::Result;
use blogr::model::PostDraft;
use blogr::posts::PostStore;
use blogr::store::fs::FileStore;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
mod shell;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub(crate) struct AppContext {
    pub api: BlogrApi<FileStore, SystemClock>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            image,
            url,
        }) => handle_add(&mut ctx, title, content, image, url),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Delete { position }) => handle_delete(&mut ctx, position),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Seed { input }) => handle_seed(&mut ctx, input),
        Some(Commands::Publish { output }) => handle_publish(&ctx, output),
        Some(Commands::Shell) => shell::run(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = if cli.global {
        let proj_dirs =
            ProjectDirs::from("com", "blogr", "blogr").expect("Could not determine data dir");
        proj_dirs.data_dir().to_path_buf()
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        cwd.join(".blogr")
    };

    let config = BlogrConfig::load(&data_dir).unwrap_or_default();
    let store = PostStore::new(FileStore::new(data_dir.clone()), SystemClock);
    let mut api = BlogrApi::new(store, config, data_dir);
    api.hydrate()?;

    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    image: Option<String>,
    url: Option<String>,
) -> Result<()> {
    let draft = PostDraft {
        title: title.unwrap_or_default(),
        content: content.unwrap_or_default(),
        image: image.unwrap_or_default(),
        detail_url: url.unwrap_or_default(),
    };
    let result = ctx.api.add_blog(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_posts()?;
    print_posts(&result.listed_posts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize) -> Result<()> {
    if position == 0 {
        println!("{}", "Positions are 1-based; see 'blogr list'.".yellow());
        return Ok(());
    }
    let result = ctx.api.delete_blog_by_index(position - 1)?;
    print_messages(&result.messages);
    if !result.affected_posts.is_empty() {
        println!(
            "{}",
            "Undoing needs a live session: run 'blogr shell'.".dimmed()
        );
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, id: Option<String>) -> Result<()> {
    let result = ctx.api.render_post(id.as_deref())?;
    print_messages(&result.messages);
    if let Some(html) = result.html {
        println!("{}", html);
    }
    Ok(())
}

fn handle_seed(ctx: &mut AppContext, input: Option<PathBuf>) -> Result<()> {
    let path = input.unwrap_or_else(|| PathBuf::from(&ctx.api.config().seed_source));
    if !path.exists() {
        println!(
            "{}",
            format!("Seed source {} not found; nothing to do.", path.display()).yellow()
        );
        return Ok(());
    }
    let markup = fs::read_to_string(&path)?;
    let result = ctx.api.seed_from_markup(&markup)?;
    print_messages(&result.messages);
    Ok(())
}

pub(crate) fn handle_publish(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.render_listing()?;
    let path = output.unwrap_or_else(|| PathBuf::from(&ctx.api.config().output_file));
    if let Some(html) = result.html {
        fs::write(&path, html)?;
        println!(
            "{}",
            format!("Published to {}", path.display()).green()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let shown_key = match &action {
        ConfigAction::ShowKey(k) => Some(k.clone()),
        _ => None,
    };

    let result = ctx.api.config_cmd(action)?;
    if let Some(config) = &result.config {
        match shown_key {
            Some(key) => {
                if let Some(value) = config.get(&key) {
                    println!("{} = {}", key, value);
                }
            }
            None => {
                println!("seed-source = {}", config.seed_source);
                println!("output-file = {}", config.output_file);
                println!("site-title = {}", config.site_title);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

pub(crate) fn print_posts(posts: &[DisplayPost]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for dp in posts {
        let idx_str = format!("{}. ", dp.index);

        let content_preview: String = dp
            .post
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if content_preview.is_empty() {
            dp.post.title.clone()
        } else {
            format!("{} {}", dp.post.title, content_preview)
        };

        let time_ago = format_time_ago(dp.post.created_at_millis());

        let fixed_width = 4 + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "    {}{}{}{}",
            idx_str,
            title_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(epoch_ms: i64) -> String {
    let created = DateTime::from_timestamp_millis(epoch_ms).unwrap_or_else(Utc::now);
    let duration = Utc::now().signed_duration_since(created);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
