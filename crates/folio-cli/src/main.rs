use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use folio_config::Config;
use folio_engine::{
    Blog, NotificationPayload, SharePlatform,
    io::{self, BLOG_FILE, IoError, MEDIA_CATALOG_FILE},
    media::{DriveFileList, build_catalog, listing_url},
    parse_markup, post_url, posts_to_notify, render_html, resolve_url, share_link,
};
use relative_path::RelativePath;
use serde_json::{Value, json};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Content tools for the portfolio site")]
struct Cli {
    /// Config file (defaults to ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse <strong>/<em>/<code> markup into fragments
    Parse {
        /// Text to parse (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Render HTML instead of JSON fragments
        #[arg(long)]
        html: bool,
    },

    /// Resolve a Drive file id and media kind to a display URL
    MediaUrl {
        identifier: String,
        /// `image` or `video`
        kind: String,
    },

    /// Build the media catalog from saved Drive listing pages
    Catalog {
        /// Listing page JSON files, in page order
        #[arg(required = true)]
        listings: Vec<PathBuf>,

        /// Output file (defaults to the catalog file in the content dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the Drive listing request URL for the configured folder
    ListingUrl {
        #[arg(long)]
        page_token: Option<String>,
    },

    /// List notifications for newly published blog posts
    Notify {
        /// Blog file before the change (missing means every published post is new)
        #[arg(long)]
        previous: Option<PathBuf>,

        /// Blog file after the change (defaults to the blog file in the content dir)
        #[arg(long)]
        current: Option<PathBuf>,
    },

    /// Print share links for a blog post
    Share {
        #[arg(long)]
        slug: String,

        #[arg(long)]
        title: String,

        /// Only this platform (`facebook` or `twitter`)
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match execute(cli.command, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Runs one command and returns what should be printed to stdout.
fn execute(command: Command, config: &Config) -> Result<String> {
    match command {
        Command::Parse { text, file, html } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, None) => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            parse_command(&text, html, config)
        }
        Command::MediaUrl { identifier, kind } => {
            let url = resolve_url(identifier.as_str(), kind.as_str());
            if url.is_none() {
                log::info!("No display URL for kind {kind:?}; a placeholder should be shown");
            }
            Ok(serde_json::to_string(&url)?)
        }
        Command::Catalog { listings, output } => catalog_command(&listings, output, config),
        Command::ListingUrl { page_token } => {
            let Some((folder_id, api_key)) = config.drive_credentials() else {
                bail!(
                    "Drive folder id and API key are required; set {} and {}",
                    folio_config::ENV_DRIVE_FOLDER_ID,
                    folio_config::ENV_DRIVE_API_KEY
                );
            };
            Ok(listing_url(folder_id, api_key, page_token.as_deref()))
        }
        Command::Notify { previous, current } => {
            notify_command(previous.as_deref(), current.as_deref(), config)
        }
        Command::Share {
            slug,
            title,
            platform,
        } => share_command(&slug, &title, platform.as_deref(), config),
    }
}

fn parse_command(text: &str, html: bool, config: &Config) -> Result<String> {
    let fragments = parse_markup(text);
    if html {
        return Ok(fragments
            .map(|f| render_html(&f, &config.classes))
            .unwrap_or_default());
    }
    Ok(serde_json::to_string_pretty(&fragments)?)
}

fn catalog_command(listings: &[PathBuf], output: Option<PathBuf>, config: &Config) -> Result<String> {
    let mut files = Vec::new();
    for (page, path) in listings.iter().enumerate() {
        let listing: DriveFileList = io::read_json_file(path)?;
        log::info!("Loaded page {}: {} files found.", page + 1, listing.files.len());
        files.extend(listing.files);
    }
    log::info!("Total files found in folder: {}", files.len());

    let catalog = build_catalog(files);
    if catalog.skipped_count() > 0 {
        log::info!(
            "Skipped {} files not matching allowed MIME types",
            catalog.skipped_count()
        );
        for (mime, count) in &catalog.skipped {
            log::info!("   - {mime}: {count}");
        }
    }

    let written = match output {
        Some(path) => {
            io::write_json_file(&path, &catalog.items)?;
            path
        }
        None => io::write_json(
            RelativePath::new(MEDIA_CATALOG_FILE),
            &config.content_dir,
            &catalog.items,
        )?,
    };
    log::info!("Saved {} media items", catalog.items.len());
    Ok(written.display().to_string())
}

fn notify_command(previous: Option<&Path>, current: Option<&Path>, config: &Config) -> Result<String> {
    let current: Blog = match current {
        Some(path) => io::read_json_file(path)?,
        None => {
            io::validate_content_dir(&config.content_dir)?;
            io::read_json(RelativePath::new(BLOG_FILE), &config.content_dir)?
        }
    };

    let previous: Blog = match previous.map(io::read_json_file::<Blog>) {
        Some(Ok(blog)) => blog,
        Some(Err(e @ (IoError::NotFound(_) | IoError::Json { .. }))) => {
            log::info!("Could not read previous blog file ({e}). Assuming all posts are new.");
            Blog::default()
        }
        Some(Err(e)) => return Err(e.into()),
        None => Blog::default(),
    };

    let payloads: Vec<NotificationPayload> = posts_to_notify(&previous, &current)
        .into_iter()
        .map(|post| NotificationPayload::new_post(post, &config.site_url))
        .collect();

    if payloads.is_empty() {
        log::info!("No new or newly published posts detected.");
    }
    Ok(serde_json::to_string_pretty(&payloads)?)
}

fn share_command(slug: &str, title: &str, platform: Option<&str>, config: &Config) -> Result<String> {
    let platforms = match platform {
        Some(name) => match SharePlatform::parse(name) {
            Some(platform) => vec![platform],
            None => bail!("Unknown share platform: {name}"),
        },
        None => SharePlatform::ALL.to_vec(),
    };

    let mut links = serde_json::Map::new();
    links.insert("link".to_string(), json!(post_url(&config.site_url, slug)));
    for platform in platforms {
        let link = share_link(platform, &config.site_url, slug, title);
        links.insert(platform.as_str().to_string(), Value::String(link));
    }
    Ok(serde_json::to_string_pretty(&links)?)
}
