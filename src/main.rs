use activity_render::{
    Classification, EngineConfig, ExtensionRegistry, NotificationType, ParameterRenderer,
    ParameterType, RenderFlags,
};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{ClassifyArgs, Command, FlagArgs, FormatArgs, JoinArgs, RootArgs, SubjectArgs, TypesArgs};

const LOG_ENV: &str = "ARENDER_LOG";

#[derive(Serialize)]
struct FormatReport {
    flags: RenderFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<Classification>,
    rendered: Vec<String>,
}

#[derive(Serialize)]
struct JoinReport {
    flags: RenderFlags,
    item_type: ParameterType,
    rendered: String,
}

#[derive(Serialize)]
struct SubjectReport {
    module: String,
    subject: String,
    flags: RenderFlags,
    rendered: String,
}

#[derive(Serialize)]
struct ClassifyReport {
    module: String,
    subject: String,
    classification: Option<Classification>,
}

#[derive(Serialize)]
struct TypesReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    types: Vec<NotificationType>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = RootArgs::parse();
    let renderer = build_renderer(&args)?;
    let registry = ExtensionRegistry::builtin();

    match args.command {
        Command::Format(cmd) => cmd_format(&renderer, &registry, cmd),
        Command::Join(cmd) => cmd_join(&renderer, cmd),
        Command::Subject(cmd) => cmd_subject(&renderer, &registry, cmd),
        Command::Classify(cmd) => cmd_classify(&registry, cmd),
        Command::Types(cmd) => cmd_types(&renderer, &registry, cmd),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_renderer(args: &RootArgs) -> Result<ParameterRenderer> {
    let mut config = EngineConfig::resolve(args.config.as_deref())?;
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
    }
    let language = config.language.clone();
    tracing::debug!(
        language = %language,
        files_root = ?config.files_root,
        "renderer configured"
    );
    ParameterRenderer::from_config(config)
        .with_context(|| format!("load catalog for {language}"))
}

fn render_flags(args: FlagArgs) -> RenderFlags {
    RenderFlags::new(args.strip_path, args.highlight)
}

fn cmd_format(
    renderer: &ParameterRenderer,
    registry: &ExtensionRegistry,
    args: FormatArgs,
) -> Result<()> {
    let classification = match (&args.module, &args.subject) {
        (Some(module), Some(subject)) => registry.classify(module, subject),
        _ if args.types.is_empty() => None,
        _ => Some(Classification::parse_pairs(&args.types)?),
    };
    let flags = render_flags(args.flags);
    let rendered = renderer.format(&args.params, classification.as_ref(), flags);
    if args.json {
        return print_json(&FormatReport {
            flags,
            classification,
            rendered,
        });
    }
    for line in rendered {
        println!("{line}");
    }
    Ok(())
}

fn cmd_join(renderer: &ParameterRenderer, args: JoinArgs) -> Result<()> {
    let item_type: ParameterType = args.item_type.parse()?;
    let flags = render_flags(args.flags);
    let rendered = renderer.join_list(&args.items, item_type, flags);
    if args.json {
        return print_json(&JoinReport {
            flags,
            item_type,
            rendered,
        });
    }
    println!("{rendered}");
    Ok(())
}

fn cmd_subject(
    renderer: &ParameterRenderer,
    registry: &ExtensionRegistry,
    args: SubjectArgs,
) -> Result<()> {
    let flags = render_flags(args.flags);
    let rendered = renderer
        .render_subject(registry, &args.module, &args.subject, &args.params, flags)
        .ok_or_else(|| {
            anyhow!(
                "no extension provides a sentence for {}/{}",
                args.module,
                args.subject
            )
        })?;
    if args.json {
        return print_json(&SubjectReport {
            module: args.module,
            subject: args.subject,
            flags,
            rendered,
        });
    }
    println!("{rendered}");
    Ok(())
}

fn cmd_classify(registry: &ExtensionRegistry, args: ClassifyArgs) -> Result<()> {
    let classification = registry.classify(&args.module, &args.subject);
    if args.json {
        return print_json(&ClassifyReport {
            module: args.module,
            subject: args.subject,
            classification,
        });
    }
    match classification {
        Some(map) if !map.is_empty() => {
            for (position, kind) in map.iter() {
                println!("{position}\t{kind}");
            }
        }
        _ => println!("unclassified"),
    }
    Ok(())
}

fn cmd_types(
    renderer: &ParameterRenderer,
    registry: &ExtensionRegistry,
    args: TypesArgs,
) -> Result<()> {
    let types = renderer.notification_types(registry, args.filter.as_deref())?;
    if args.json {
        return print_json(&TypesReport {
            filter: args.filter,
            types,
        });
    }
    for entry in types {
        println!(
            "{}\t{}\t{}",
            entry.kind,
            entry.icon.unwrap_or("-"),
            entry.description
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
