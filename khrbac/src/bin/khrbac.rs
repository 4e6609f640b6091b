use clap::{
    Parser,
    Subcommand,
};
use khrbac::{
    Action,
    Enforcer,
    Feature,
    NavContext,
    Page,
    PageAccess,
    Permission,
    SidebarItem,
    nav::Badge,
};
use std::process::ExitCode;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// The role as held by the session; unrecognized roles have no access
    #[clap(long, value_name = "KHRBAC_ROLE", env = "KHRBAC_ROLE")]
    role: Option<String>,
    /// Emit JSON instead of text
    #[clap(long, global = true)]
    json: bool,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the permission set for the role
    Permissions,
    /// Lists the pages the role may view
    Pages,
    /// Lists the navigation entries visible to the role
    Sidebar {
        #[arg(long, value_enum)]
        context: Option<NavContext>,
    },
    /// Checks access to a page, or to an action or feature on it
    #[command(arg_required_else_help = true)]
    Check {
        #[arg(value_enum)]
        page: Page,
        #[arg(long, value_enum, conflicts_with = "feature")]
        action: Option<Action>,
        #[arg(long, value_enum)]
        feature: Option<Feature>,
        #[arg(long, value_enum, default_value_t)]
        context: NavContext,
    },
    /// Prints the full capability summary for the role
    Summary,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("khrbac")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let enforcer = Enforcer::from_session(args.role.as_deref());
    log::info!("evaluating as {:?}", enforcer.role());

    match args.command {
        Commands::Permissions => {
            let permissions = enforcer.permissions();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&permissions)?);
            } else {
                for permission in Permission::VARIANTS {
                    println!("{permission}: {}", permissions.has(permission));
                }
            }
        }
        Commands::Pages => {
            let pages = enforcer.accessible_pages().collect::<Vec<_>>();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&pages)?);
            } else {
                for page in pages {
                    println!("{page}");
                }
            }
        }
        Commands::Sidebar { context } => {
            let items = match context {
                Some(context) => enforcer.sidebar_in(context),
                None => enforcer.sidebar(),
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in items {
                    print_item(item);
                }
            }
        }
        Commands::Check { page, action, feature, context } => {
            if let Some(feature) = feature {
                let granted = enforcer.can_access_feature(page, feature);
                if args.json {
                    println!("{}", serde_json::json!({
                        "page": page,
                        "feature": feature,
                        "granted": granted,
                    }));
                } else if granted {
                    println!("granted");
                } else {
                    println!("denied: feature {feature} on page {page}");
                }
                return Ok(if granted { ExitCode::SUCCESS } else { ExitCode::FAILURE });
            }
            let access = match action {
                Some(action) => enforcer.guard_action(page, action, context),
                None => enforcer.guard_page(page, context),
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&access)?);
            }
            return Ok(match access {
                PageAccess::Granted => {
                    if !args.json {
                        println!("granted");
                    }
                    ExitCode::SUCCESS
                }
                PageAccess::Denied(denied) => {
                    if !args.json {
                        println!("denied: {denied}");
                        println!("redirect: {}", denied.fallback);
                    }
                    ExitCode::FAILURE
                }
            });
        }
        Commands::Summary => {
            let summary = enforcer.summarize();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                match summary.display_name {
                    Some(name) => println!("role: {name}"),
                    None => println!("role: (unauthenticated)"),
                }
                let granted = summary.permissions.granted()
                    .iter()
                    .map(<&'static str>::from)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("permissions: [{granted}]");
                let pages = summary.pages.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("pages: [{pages}]");
                println!("sidebar:");
                for item in summary.sidebar {
                    print_item(item);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_item(item: &SidebarItem) {
    let badge = match &item.badge {
        Some(Badge::Count(n)) => format!(" ({n})"),
        Some(Badge::Text(text)) => format!(" [{text}]"),
        None => String::new(),
    };
    println!("  {:<16} {:<20} {}{badge}", item.id, item.label, item.path);
}
