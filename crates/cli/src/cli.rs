use std::net::IpAddr;
use std::net::Ipv4Addr;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Increase the logging verbosity; repeat for more detail.
    ///
    /// Warnings are always logged; `-v` adds every served request,
    /// `-vv` adds dropped points and grid lines, `-vvv` everything else.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Cli {
    pub(crate) fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a single style box and print it to the standard output.
    Render(RenderArgs),
    /// Serve style boxes over HTTP.
    Serve(ServeArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// The request path describing the style box.
    ///
    /// Accepted forms are `/<x>/<y>` and `/<x>/<x_lo>/<x_hi>/<y>/<y_lo>/<y_hi>`
    /// for SVG output, optionally prefixed with a format segment: `svg`,
    /// `html` or `ascii`. For example, `/ascii/0.5/0/1/0.5/0/1`.
    #[arg(allow_hyphen_values = true)]
    pub(crate) path: String,
}

#[derive(Args)]
pub(crate) struct ServeArgs {
    /// The address to listen on.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub(crate) host: IpAddr,

    /// The port to listen on.
    #[arg(short, long, default_value_t = 5000)]
    pub(crate) port: u16,

    /// Seconds to wait on a silent client before dropping its connection.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_selects_the_log_level() {
        let cli = Cli::parse_from(["stylebox", "render", "/0.5/0.5"]);
        assert_eq!(cli.log_level(), Level::WARN);

        let cli = Cli::parse_from(["stylebox", "-vv", "render", "/0.5/0.5"]);
        assert_eq!(cli.log_level(), Level::DEBUG);

        let cli = Cli::parse_from(["stylebox", "serve", "-vvvv"]);
        assert_eq!(cli.log_level(), Level::TRACE);
    }

    #[test]
    fn serve_defaults_to_localhost() {
        let cli = Cli::parse_from(["stylebox", "serve"]);

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
                assert_eq!(args.port, 5000);
                assert_eq!(args.timeout, 5);
            }
            Commands::Render(_) => panic!("expected the serve command"),
        }
    }

    #[test]
    fn serve_rejects_a_zero_timeout() {
        assert!(Cli::try_parse_from(["stylebox", "serve", "--timeout", "0"]).is_err());

        let cli = Cli::parse_from(["stylebox", "serve", "--timeout", "30"]);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.timeout, 30),
            Commands::Render(_) => panic!("expected the serve command"),
        }
    }

    #[test]
    fn render_accepts_negative_coordinates() {
        let cli = Cli::parse_from(["stylebox", "render", "-0.5/-1/0/0.5/0/1"]);

        match cli.command {
            Commands::Render(args) => assert_eq!(args.path, "-0.5/-1/0/0.5/0/1"),
            Commands::Serve(_) => panic!("expected the render command"),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
