use std::io::{self, Read};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typewriter::{
    config::Config, player::Player, segment, GraphemeSegmenter, Locale, Timing, TimingValue,
    Token, TypewriterByLetter, UnicodeGraphemeSegmenter,
};

const DEMO_TEXT: &str = "🌞 Good Morning Billy, I break naturally 🌅 instead of by letter";

#[derive(Parser)]
#[command(name = "typewriter", about = "Letter-by-letter text reveal", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into words and spaces
    Segment {
        /// Text to segment; `-` or nothing reads stdin
        text: Option<String>,
        #[arg(short, long)]
        locale: Option<Locale>,
        /// Use legacy instead of extended grapheme clusters
        #[arg(long)]
        legacy: bool,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Render the animated markup as HTML
    Render {
        /// Text to render; `-` or nothing reads stdin
        text: Option<String>,
        #[arg(short, long)]
        locale: Option<Locale>,
        #[command(flatten)]
        timing: TimingArgs,
        #[command(flatten)]
        input: InputArgs,
        /// Emit a standalone page with the default stylesheet
        #[arg(long)]
        page: bool,
    },
    /// Play the animation in the terminal
    Play {
        text: Option<String>,
        #[arg(short, long)]
        locale: Option<Locale>,
        #[command(flatten)]
        timing: TimingArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Keep the trailing newline of text read from stdin (it is stripped by default)
    #[arg(long)]
    keep_newline: bool,
}

#[derive(Args)]
struct TimingArgs {
    /// Delay before the first letter, e.g. `1000ms` or `1s`
    #[arg(long)]
    delay: Option<TimingValue>,
    /// Delay between consecutive letters
    #[arg(long)]
    drag_delay: Option<TimingValue>,
    /// Animation duration of each letter
    #[arg(long)]
    duration: Option<TimingValue>,
}

impl From<TimingArgs> for Timing {
    fn from(args: TimingArgs) -> Self {
        Self {
            delay: args.delay,
            drag_delay: args.drag_delay,
            duration: args.duration,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typewriter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Segment {
            text,
            locale,
            legacy,
            json,
            input,
        } => {
            let text = read_text(text, &input)?;
            let locale = locale.unwrap_or(config.locale);
            let segmenter = if legacy {
                UnicodeGraphemeSegmenter::legacy(locale)
            } else {
                UnicodeGraphemeSegmenter::new(locale)
            };
            if !json {
                println!("{}", describe_segmenter(&segmenter));
            }
            print_tokens(&text, &segmenter, json)?;
        }
        Commands::Render {
            text,
            locale,
            timing,
            page,
            input,
        } => {
            let text = read_text(text, &input)?;
            let component = TypewriterByLetter::new(&text)
                .locale(locale.unwrap_or(config.locale))
                .timing(config.timing.merge(timing.into()));
            if page {
                print!("{}", component.page());
            } else {
                println!("{}", component.render());
            }
        }
        Commands::Play {
            text,
            locale,
            timing,
        } => {
            let text = text.unwrap_or_else(|| DEMO_TEXT.to_string());
            let mut player = Player::new(
                &text,
                locale.unwrap_or(config.locale),
                config.timing.merge(timing.into()),
            )
            .context("Could not initialize the terminal")?;
            player.run();
        }
    }

    Ok(())
}

fn read_text(text: Option<String>, input: &InputArgs) -> anyhow::Result<String> {
    match text.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Could not read text from stdin")?;
            if input.keep_newline {
                Ok(buffer)
            } else {
                Ok(strip_trailing_newline(&buffer).to_string())
            }
        }
        Some(_) => Ok(text.unwrap_or_default()),
    }
}

// 去掉管道输入末尾的一个换行（`\n` 或 `\r\n`）
fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n')
        .map_or(text, |text| text.strip_suffix('\r').unwrap_or(text))
}

fn describe_segmenter(segmenter: &UnicodeGraphemeSegmenter) -> String {
    let clusters = if segmenter.is_extended() {
        "extended"
    } else {
        "legacy"
    };
    let locale = segmenter.locale();
    format!(
        "# locale {locale} (language {}), {clusters} grapheme clusters",
        locale.language()
    )
}

fn print_tokens(text: &str, segmenter: &dyn GraphemeSegmenter, json: bool) -> anyhow::Result<()> {
    let tokens = segment(text, segmenter);
    if json {
        println!("{}", tokens.to_json()?);
        return Ok(());
    }
    for token in &tokens {
        match token {
            Token::Word(word) => {
                let end = word.start().saturating_add(word.to_string().len());
                println!(
                    "word  {:>4}..{:<4} {:?} ({} graphemes)",
                    word.start(),
                    end,
                    word.to_string(),
                    word.len()
                );
            }
            Token::Space(space) => {
                println!("space {:>4}..{:<4} {:?}", space.start, space.end(), space.grapheme);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_trailing_newline() {
        assert_eq!(strip_trailing_newline("Hello\n"), "Hello");
        assert_eq!(strip_trailing_newline("Hello\r\n"), "Hello");
        assert_eq!(strip_trailing_newline("Hello\n\n"), "Hello\n");
        assert_eq!(strip_trailing_newline("Hello\r"), "Hello\r");
        assert_eq!(strip_trailing_newline("Hello"), "Hello");
    }

    #[test]
    fn keep_newline_flag_is_parsed() {
        let cli = Cli::parse_from(["typewriter", "render", "-", "--keep-newline"]);
        assert!(matches!(
            cli.command,
            Commands::Render { input: InputArgs { keep_newline: true }, .. }
        ));
        let cli = Cli::parse_from(["typewriter", "segment"]);
        assert!(matches!(
            cli.command,
            Commands::Segment { input: InputArgs { keep_newline: false }, .. }
        ));
    }

    #[test]
    fn segmenter_description_names_locale_and_clusters() {
        let segmenter = UnicodeGraphemeSegmenter::legacy("de_AT".parse().unwrap());
        assert_eq!(
            describe_segmenter(&segmenter),
            "# locale de-AT (language de), legacy grapheme clusters"
        );
        assert!(describe_segmenter(&UnicodeGraphemeSegmenter::default()).contains("extended"));
    }
}
