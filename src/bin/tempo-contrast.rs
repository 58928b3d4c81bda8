//! `tempo-contrast`: check text/background pairs against WCAG from the shell.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use tempo_tokens::contrast::TextPalette;
use tempo_tokens::render::to_json;
use tempo_tokens::{
    best_text_color, color_variations, ensure_aaa_text_color, suggest_text_color_for_background,
    AdaptiveTheme, ContrastReport, GoogleFont, OutputMode, PartialDesignTokens, PartialFontFamily,
    PartialTypographyTokens, ReportRenderer, Rgb, TokenStore, GOOGLE_FONTS,
};

#[derive(Parser)]
#[command(name = "tempo-contrast", version, about = "WCAG contrast checks for Tempo UI tokens")]
struct Cli {
    /// JSON or YAML file with token overrides
    #[arg(long, global = true, value_name = "FILE")]
    tokens: Option<std::path::PathBuf>,

    /// Output mode: auto, term, text or json
    #[arg(long, global = true, default_value = "auto", value_parser = parse_output_mode)]
    output: OutputMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full contrast report for a foreground on a background
    Check {
        #[arg(value_parser = parse_color)]
        foreground: String,
        #[arg(value_parser = parse_color)]
        background: String,
    },
    /// Black or white, whichever reads better on the background
    Best {
        #[arg(value_parser = parse_color)]
        background: String,
    },
    /// A text color reaching AAA on the background
    Ensure {
        #[arg(value_parser = parse_color)]
        background: String,
        /// Keep this color if it already reaches AAA
        #[arg(long, value_parser = parse_color)]
        current: Option<String>,
    },
    /// The palette text token to use on the background
    Suggest {
        #[arg(value_parser = parse_color)]
        background: String,
    },
    /// Print the effective token set
    Tokens {
        /// Use this web font as the primary font family (e.g. "Open Sans")
        #[arg(long, value_name = "NAME")]
        font: Option<String>,
    },
    /// Print the 50..900 shade scale of a color
    Variations {
        #[arg(value_parser = parse_color)]
        color: String,
    },
}

fn parse_color(value: &str) -> Result<String, String> {
    Rgb::parse(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

fn parse_output_mode(value: &str) -> Result<OutputMode, String> {
    value.parse()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = TokenStore::new();
    if let Some(path) = &cli.tokens {
        store
            .apply_overrides_file(path)
            .with_context(|| format!("loading token overrides from {}", path.display()))?;
    }

    let output = run(&cli, &store)?;
    println!("{}", output);
    Ok(())
}

fn run(cli: &Cli, store: &TokenStore) -> Result<String> {
    if let Command::Tokens { font: Some(name) } = &cli.command {
        store.set(font_override(name)?);
    }

    let tokens = store.get();
    let palette = TextPalette::from(&tokens.colors.text);

    let output = match &cli.command {
        Command::Check {
            foreground,
            background,
        } => {
            let report = ContrastReport::build(foreground, background).with_palette(&palette);
            let renderer = ReportRenderer::new(&AdaptiveTheme::default(), cli.output)?;
            renderer.render(&report)?
        }
        Command::Best { background } => {
            let color = best_text_color(background);
            plain_or_json(cli.output, color, &serde_json::json!({ "color": color }))?
        }
        Command::Ensure {
            background,
            current,
        } => {
            let choice = ensure_aaa_text_color(background, current.as_deref());
            let line = format!(
                "{} ({}:1, {})",
                choice.color,
                choice.contrast.ratio,
                choice.contrast.level()
            );
            plain_or_json(cli.output, &line, &choice)?
        }
        Command::Suggest { background } => {
            let suggestion = suggest_text_color_for_background(background, &palette);
            let line = format!(
                "{} {} - {}",
                suggestion.variable, suggestion.color, suggestion.reason
            );
            plain_or_json(cli.output, &line, &suggestion)?
        }
        Command::Tokens { .. } => to_json(tokens.as_ref())?,
        Command::Variations { color } => {
            let scale = color_variations(color);
            let lines: Vec<String> = scale
                .iter()
                .map(|(shade, hex)| format!("{:>3}  {}", shade, hex))
                .collect();
            plain_or_json(cli.output, &lines.join("\n"), &scale)?
        }
    };

    Ok(output)
}

fn font_override(name: &str) -> Result<PartialDesignTokens> {
    let font = GoogleFont::find(name).ok_or_else(|| {
        let known: Vec<&str> = GOOGLE_FONTS.iter().map(|font| font.name).collect();
        anyhow!("unknown font '{}' (available: {})", name, known.join(", "))
    })?;

    Ok(PartialDesignTokens {
        typography: Some(PartialTypographyTokens {
            font_family: Some(PartialFontFamily::primary(font.value)),
            ..Default::default()
        }),
        ..Default::default()
    })
}

fn plain_or_json<T: Serialize>(mode: OutputMode, plain: &str, data: &T) -> Result<String> {
    if mode.is_structured() {
        Ok(to_json(data)?)
    } else {
        Ok(plain.to_string())
    }
}
