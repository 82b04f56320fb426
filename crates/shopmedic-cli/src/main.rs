//! `shopmedic` binary: audit a store's policy compliance and product SEO,
//! generate legal policy pages, or rewrite product content.

mod display;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use shopmedic_ai::{GenClient, GenConfig};
use shopmedic_core::{ContentRequest, PolicyRequest};
use shopmedic_engine::{generate_policies, rewrite_product, run_audit};
use shopmedic_store::{AdminClient, AdminConfig};

#[derive(Parser)]
#[command(name = "shopmedic", version, about = "Store compliance and SEO health toolkit")]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    /// Generative API key. Without it, generation runs in degraded mode
    /// and remediation commands refuse to write to the store.
    #[arg(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    gemini_api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct StoreArgs {
    /// Shop domain, e.g. acme.myshopify.com.
    #[arg(long, env = "SHOPMEDIC_SHOP_DOMAIN", global = true, default_value = "")]
    shop_domain: String,

    /// Admin API access token.
    #[arg(
        long,
        env = "SHOPMEDIC_ACCESS_TOKEN",
        global = true,
        default_value = "",
        hide_env_values = true
    )]
    access_token: String,
}

#[derive(Subcommand)]
enum Command {
    /// Score the store's policy compliance and product SEO health.
    Audit {
        /// Emit the raw result as JSON instead of the card view.
        #[arg(long)]
        json: bool,
    },
    /// Generate the three legal policy pages and publish them.
    Policies {
        #[arg(long)]
        business_name: String,
        #[arg(long)]
        contact_email: String,
        #[arg(long)]
        jurisdiction: String,
        /// Refund window in days.
        #[arg(long)]
        refund_days: String,
    },
    /// Rewrite one product's title, description, and SEO meta description.
    Rewrite {
        /// Product GID, e.g. gid://shopify/Product/123.
        #[arg(long)]
        product_id: String,
        #[arg(long, default_value = "")]
        product_name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "professional")]
        tone: String,
        #[arg(long, default_value = "English")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("shopmedic v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    if cli.store.shop_domain.is_empty() || cli.store.access_token.is_empty() {
        bail!("store credentials required: set --shop-domain and --access-token (or SHOPMEDIC_SHOP_DOMAIN / SHOPMEDIC_ACCESS_TOKEN)");
    }
    let store = AdminClient::new(&AdminConfig::new(
        cli.store.shop_domain.clone(),
        cli.store.access_token.clone(),
    ));
    let generator = GenClient::new(&GenConfig::new(cli.gemini_api_key.clone()));

    match cli.command {
        Command::Audit { json } => {
            let outcome = run_audit(&store).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                display::print_audit(&outcome);
            }
            if !outcome.success {
                bail!("audit failed");
            }
        }
        Command::Policies {
            business_name,
            contact_email,
            jurisdiction,
            refund_days,
        } => {
            let request = PolicyRequest {
                business_name,
                contact_email,
                jurisdiction,
                refund_days,
            };
            let outcome = generate_policies(&generator, &store, &request).await;
            display::print_policy_outcome(&outcome);
            if !outcome.success {
                bail!("policy generation failed");
            }
        }
        Command::Rewrite {
            product_id,
            product_name,
            description,
            tags,
            tone,
            language,
        } => {
            let request = ContentRequest {
                product_id,
                product_name,
                product_description: description,
                product_tags: tags,
                tone,
                target_language: language,
            };
            let outcome = rewrite_product(&generator, &store, &request).await;
            display::print_content_outcome(&outcome);
            if !outcome.success {
                bail!("content rewrite failed");
            }
        }
    }

    Ok(())
}
