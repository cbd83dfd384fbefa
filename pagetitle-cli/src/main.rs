//! pagetitle — bot plugin that replies with the title of a linked page
//!
//! The bot host runs the plugin once per matched link, passing its context
//! as `--flag=value` arguments, and reads `:r` replies and `:log*` commands
//! from stdout.
//!
//! Debug modes read HTML from stdin instead:
//! - `pagetitle --fragment < snippet.html`  # render a fragment to IRC text
//! - `pagetitle --tokens < page.html`       # show the scanner's lexemes

mod dump;
mod protocol;

use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser};
use pagetitle_common::logging::init_logging;
use pagetitle_common::net::{DEFAULT_MAX_BYTES, check_scheme};
use pagetitle_common::text::decode_utf8_ignoring_errors;
use pagetitle_common::{FetchError, FetchOptions, fetch_page};
use pagetitle_html::truncate::{limit_from_signed, truncate};
use pagetitle_html::{TitleTokenizer, parse_title, render_fragment};
use tracing::{debug, info_span};

use protocol::{HostOutput, LogLevel, error_reply, title_reply};

/// Reply length cap used when `--limit` is not given.
const DEFAULT_LIMIT: i64 = 350;

/// Component name used in host log lines.
const COMPONENT: &str = "pagetitle";

/// pagetitle — reply with the title of a linked page
#[derive(Parser, Debug)]
#[command(name = "pagetitle")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # As invoked by the bot host
    pagetitle --reply='#rust' --nick=ferris --match=https://www.rust-lang.org/

    # Unlimited title length
    pagetitle --match=https://example.com --limit=-1

    # Render an HTML fragment to IRC-formatted text
    echo '<b>bold</b> &amp; <i>italic</i>' | pagetitle --fragment

    # Show how a document is tokenized
    curl -s https://example.com | pagetitle --tokens
")]
struct Cli {
    #[command(flatten)]
    host: HostArgs,

    /// Maximum title length in characters; -1 for unlimited
    #[arg(long, env = "PAGETITLE_LIMIT", allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Maximum number of document bytes read
    #[arg(long, env = "PAGETITLE_MAX_BYTES", default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: usize,

    /// Request timeout in seconds
    #[arg(long, env = "PAGETITLE_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    /// Read an HTML fragment from stdin and print it as IRC-formatted text
    #[arg(long, conflicts_with_all = ["url", "tokens"])]
    fragment: bool,

    /// Read HTML from stdin and print its tokens
    #[arg(long, conflicts_with = "url")]
    tokens: bool,

    /// Print tokens as JSON
    #[arg(long, requires = "tokens")]
    json: bool,

    /// Default diagnostic filter for stderr (RUST_LOG overrides)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Context the bot host passes to every plugin.
#[derive(Args, Debug)]
struct HostArgs {
    /// The link matched in the channel
    #[arg(long = "match", id = "url", value_name = "URL")]
    url: Option<String>,

    /// Where replies are sent
    #[arg(long, hide = true)]
    reply: Option<String>,

    /// Nick of the sender
    #[arg(long, hide = true)]
    nick: Option<String>,

    /// User of the sender
    #[arg(long, hide = true)]
    user: Option<String>,

    /// Host of the sender
    #[arg(long, hide = true)]
    host: Option<String>,

    /// Channel mode of the sender
    #[arg(long, hide = true)]
    cmode: Option<String>,

    /// Full message text
    #[arg(long, hide = true)]
    message: Option<String>,

    /// Command that triggered the plugin, if any
    #[arg(long, hide = true)]
    command: Option<String>,

    /// Pattern that triggered the plugin, if any
    #[arg(long, hide = true)]
    regexp: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _ = init_logging(&cli.log_level);

    let host = &cli.host;
    let span = info_span!(
        "plugin",
        reply = host.reply.as_deref(),
        nick = host.nick.as_deref(),
        user = host.user.as_deref(),
        host = host.host.as_deref(),
        cmode = host.cmode.as_deref(),
        command = host.command.as_deref(),
        regexp = host.regexp.as_deref(),
    );
    let _entered = span.enter();
    debug!(text = host.message.as_deref(), "invoked");

    let mut stdout = io::stdout().lock();
    if cli.tokens {
        run_tokens(&cli, &mut stdout)
    } else if cli.fragment {
        run_fragment(&cli, &mut stdout)
    } else {
        run_title(&cli, &mut HostOutput::new(&mut stdout, COMPONENT))
    }
}

/// Fetch the matched URL and reply with its title.
fn run_title<W: Write>(cli: &Cli, out: &mut HostOutput<W>) -> anyhow::Result<ExitCode> {
    let Some(url) = cli.host.url.as_deref() else {
        anyhow::bail!("--match is required unless --fragment or --tokens is given");
    };

    if check_scheme(url).is_err() {
        out.log(
            LogLevel::Error,
            &format!("Matched text - {url} - is not an http url."),
        )?;
        return Ok(ExitCode::FAILURE);
    }

    let options = FetchOptions {
        timeout: Duration::from_secs(cli.timeout),
        max_bytes: cli.max_bytes,
    };
    match fetch_page(url, &options) {
        Ok(page) => {
            if page.final_url != url {
                out.log(
                    LogLevel::Info,
                    &format!("{url} redirected to {}", page.final_url),
                )?;
            }
            let limit = limit_from_signed(cli.limit.unwrap_or(DEFAULT_LIMIT));
            let title = parse_title(&page.body, limit);
            if title.trim().is_empty() {
                out.log(
                    LogLevel::Warning,
                    &format!("no title in the first {} bytes of {url}", cli.max_bytes),
                )?;
            }
            out.reply(&title_reply(&title, &page.final_url))?;
        }
        // Only HTML pages get a reply.
        Err(FetchError::NotHtml(content_type)) => {
            out.log(
                LogLevel::Debug,
                &format!("no title for non-HTML content ({content_type}): {url}"),
            )?;
            return Ok(ExitCode::FAILURE);
        }
        Err(error) => out.reply(&error_reply(&error, url))?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Render stdin as an HTML fragment.
fn run_fragment(cli: &Cli, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let html = read_stdin()?;
    let text = render_fragment(&html);
    let limit = cli.limit.and_then(limit_from_signed);
    writeln!(out, "{}", truncate(&text, limit))?;
    Ok(ExitCode::SUCCESS)
}

/// Print the lexemes of stdin.
fn run_tokens(cli: &Cli, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let html = read_stdin()?;
    let lexemes = TitleTokenizer::new(&html).into_lexemes();
    if cli.json {
        writeln!(out, "{}", dump::render_json(&lexemes)?)?;
    } else {
        let color = io::stdout().is_terminal();
        write!(out, "{}", dump::render_listing(&lexemes, color))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Read all of stdin, dropping invalid UTF-8.
fn read_stdin() -> io::Result<String> {
    let mut bytes = Vec::new();
    let _ = io::stdin().read_to_end(&mut bytes)?;
    Ok(decode_utf8_ignoring_errors(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pagetitle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn host_arguments_use_equals_form() {
        let cli = parse(&[
            "--reply=#rust",
            "--nick=ferris",
            "--user=~ferris",
            "--host=example.org",
            "--cmode=@",
            "--message=look https://example.com",
            "--regexp=https?://",
            "--match=https://example.com",
        ]);
        assert_eq!(cli.host.url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.host.reply.as_deref(), Some("#rust"));
        assert!(!cli.fragment);
    }

    #[test]
    fn limit_accepts_the_unlimited_sentinel() {
        let cli = parse(&["--match=https://example.com", "--limit=-1"]);
        assert_eq!(cli.limit.and_then(limit_from_signed), None);

        let cli = parse(&["--match=https://example.com", "--limit", "20"]);
        assert_eq!(cli.limit.and_then(limit_from_signed), Some(20));
    }

    #[test]
    fn fragment_conflicts_with_match() {
        assert!(
            Cli::try_parse_from(["pagetitle", "--fragment", "--match=https://example.com"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["pagetitle", "--json"]).is_err());
    }

    #[test]
    fn non_http_matches_are_logged_not_fetched() {
        let cli = parse(&["--match=ftp://example.com/file"]);
        let mut out = HostOutput::new(Vec::new(), COMPONENT);
        let code = run_title(&cli, &mut out).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            ":loge pagetitle: Matched text - ftp://example.com/file - is not an http url.\n"
        );
    }

    /// Serve one canned HTML response and return its URL.
    fn serve_html(body: &'static str) -> String {
        use std::io::{BufRead, BufReader};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let _server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
                line.clear();
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        url
    }

    #[test]
    fn replies_with_the_page_title() {
        let url = serve_html("<html><title>Hello &amp; <b>World</b></title>");
        let cli = parse(&[format!("--match={url}").as_str(), "--limit=-1"]);
        let mut out = HostOutput::new(Vec::new(), COMPONENT);
        assert_eq!(run_title(&cli, &mut out).unwrap(), ExitCode::SUCCESS);
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            ":r ↑ Title :: Hello & \x02World\x02\n"
        );
    }

    #[test]
    fn untitled_pages_are_announced_by_url() {
        let url = serve_html("<html><body>no head</body></html>");
        let cli = parse(&[format!("--match={url}").as_str()]);
        let mut out = HostOutput::new(Vec::new(), COMPONENT);
        assert_eq!(run_title(&cli, &mut out).unwrap(), ExitCode::SUCCESS);
        let written = String::from_utf8(out.into_inner()).unwrap();
        assert!(written.starts_with(":logw pagetitle: no title"));
        assert!(written.ends_with(&format!(":r ↑ Title :: Untitled - {url}\n")));
    }

    #[test]
    fn missing_match_is_an_error() {
        let cli = parse(&[]);
        let mut out = HostOutput::new(Vec::new(), COMPONENT);
        assert!(run_title(&cli, &mut out).is_err());
    }
}
