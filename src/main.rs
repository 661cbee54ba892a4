use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mdsite::{Config, SiteError};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static site from Markdown")]
struct Cli {
    /// Site config file
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the output directory from static assets and content
    Build {
        /// Content directory (overrides config)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Static asset directory (overrides config)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page template (overrides config)
        #[arg(short, long)]
        template: Option<PathBuf>,
    },
    /// Render a single Markdown file
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the fragment in this page template
        #[arg(short, long)]
        template: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SiteError> {
    let mut config = Config::load(&cli.config)?;

    match cli.command {
        Command::Build {
            content,
            static_dir,
            output,
            template,
        } => {
            if let Some(content) = content {
                config.paths.content = content;
            }
            if let Some(static_dir) = static_dir {
                config.paths.static_dir = static_dir;
            }
            if let Some(output) = output {
                config.paths.output = output;
            }
            if let Some(template) = template {
                config.paths.template = template;
            }
            let pages = mdsite::build_site(&config)?;
            log::info!("Built {} pages into {}", pages, config.paths.output.display());
        }
        Command::Render {
            input,
            output,
            template,
        } => {
            let markdown = fs::read_to_string(&input).map_err(|source| SiteError::Io {
                path: input.clone(),
                source,
            })?;

            let html = match template {
                Some(template_path) => {
                    let template = fs::read_to_string(&template_path).map_err(|source| {
                        SiteError::Io {
                            path: template_path.clone(),
                            source,
                        }
                    })?;
                    mdsite::render_page(&input, &markdown, &template, &config.template)?
                }
                None => mdsite::markdown_to_html(&markdown).map_err(|source| SiteError::Markdown {
                    path: input.clone(),
                    source,
                })?,
            };

            match output {
                Some(output) => {
                    fs::write(&output, html).map_err(|source| SiteError::Io {
                        path: output.clone(),
                        source,
                    })?;
                    log::info!("Created {}", output.display());
                }
                None => println!("{}", html),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_accepts_path_overrides() {
        let cli = Cli::try_parse_from([
            "mdsite",
            "build",
            "--static-dir",
            "assets",
            "--content",
            "pages",
        ])
        .unwrap();
        match cli.command {
            Command::Build {
                content,
                static_dir,
                output,
                template,
            } => {
                assert_eq!(static_dir, Some(PathBuf::from("assets")));
                assert_eq!(content, Some(PathBuf::from("pages")));
                assert_eq!(output, None);
                assert_eq!(template, None);
            }
            Command::Render { .. } => panic!("expected build"),
        }
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn static_dir_defaults_to_config() {
        let cli = Cli::try_parse_from(["mdsite", "build"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Build {
                static_dir: None,
                ..
            }
        ));
    }
}
