use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write as _};
use tracing::{debug, warn};
use waclick_core::domain::{build_link, normalize_phone_with, GeneratedLink, ShareRequest};
use waclick_core::dto::{LinkDto, NormalizedPhoneDto};
use waclick_platform::clipboard::copy_once;
use waclick_platform::opener::{Sharer, SystemOpener};
use waclick_platform::qr::render_terminal;

use crate::commands::{print_json, Context, PolicyArgs};

#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Phone number in any format, e.g. 050-123-4567 or +972501234567
    pub phone: String,
    /// Message to prefill in the chat
    #[arg(long, short, default_value = "", allow_hyphen_values = true)]
    pub message: String,
    /// Print a QR code under the link
    #[arg(long)]
    pub qr: bool,
    /// Copy the link to the clipboard
    #[arg(long)]
    pub copy: bool,
    /// Open the link with the system URL handler
    #[arg(long)]
    pub open: bool,
    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    pub phone: String,
    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Debug, Args)]
pub struct QrArgs {
    pub phone: String,
    #[arg(long, short, default_value = "", allow_hyphen_values = true)]
    pub message: String,
    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Debug, Serialize)]
struct LinkOutput {
    #[serde(flatten)]
    link: LinkDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    qr: Option<String>,
    copied: bool,
    opened: bool,
}

#[derive(Debug, Serialize)]
struct QrOutput {
    url: String,
    qr: String,
}

pub fn link(ctx: &Context<'_>, args: LinkArgs) -> Result<()> {
    let link = generate(ctx, &args.phone, &args.message, &args.policy)?;

    let qr = if args.qr {
        Some(render_terminal(link.as_str(), &ctx.config.qr)?)
    } else {
        None
    };

    if args.open {
        let request = ShareRequest::for_link(&link);
        if let Err(err) = SystemOpener.share(&request) {
            warn!(error = %err, "open link failed");
            return Err(anyhow::Error::new(err).context("open link"));
        }
    }

    if ctx.json {
        print_json(&LinkOutput {
            link: LinkDto::from(&link),
            qr,
            copied: args.copy,
            opened: args.open,
        })?;
    } else {
        println!("{}", link);
        if let Some(qr) = qr {
            println!();
            print!("{}", qr);
            println!();
        }
    }

    // Last step: on Linux the copy holds the process until the selection
    // is taken over, so everything else is already printed.
    if args.copy {
        io::stdout().flush().with_context(|| "flush stdout")?;
        if cfg!(target_os = "linux") {
            eprintln!("Holding the link on the clipboard until another copy replaces it (Ctrl+C to stop)");
        }
        copy_once(link.as_str()).with_context(|| "copy link to clipboard")?;
        debug!("link copied to clipboard");
        if !cfg!(target_os = "linux") {
            eprintln!("Link copied to clipboard");
        }
    }
    Ok(())
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let policy = args.policy.resolve(&ctx.config.phone)?;
    let phone = normalize_phone_with(&args.phone, &policy)?;
    if ctx.json {
        return print_json(&NormalizedPhoneDto::new(&args.phone, &phone));
    }
    println!("{}", phone);
    Ok(())
}

pub fn qr(ctx: &Context<'_>, args: QrArgs) -> Result<()> {
    let link = generate(ctx, &args.phone, &args.message, &args.policy)?;
    let qr = render_terminal(link.as_str(), &ctx.config.qr)?;
    if ctx.json {
        return print_json(&QrOutput {
            url: link.into_string(),
            qr,
        });
    }
    print!("{}", qr);
    println!();
    Ok(())
}

fn generate(
    ctx: &Context<'_>,
    phone: &str,
    message: &str,
    policy: &PolicyArgs,
) -> Result<GeneratedLink> {
    let policy = policy.resolve(&ctx.config.phone)?;
    debug!(
        country_code = policy.country_code(),
        local_length = policy.local_length(),
        "phone policy"
    );
    let phone = normalize_phone_with(phone, &policy)?;
    let link = build_link(&phone, message);
    debug!(phone = %link.phone(), "link generated");
    Ok(link)
}
