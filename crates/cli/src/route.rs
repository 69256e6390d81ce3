use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use stylebox::StyleBoxError;
use stylebox::builder::HtmlStyleBoxBuilder;
use stylebox::builder::PngStyleBoxBuilder;
use stylebox::builder::StyleBoxBuilder;
use stylebox::builder::SvgStyleBoxBuilder;
use stylebox::builder::TextStyleBoxBuilder;
use stylebox::domain::Interval;
use tracing::debug;

const SIZE: u32 = 50;
const COLOR: &str = "#000000";
const GRID: i32 = 2;
const TEXT_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Svg,
    Html,
    Ascii,
    Png,
}

impl Format {
    fn content_type(self) -> &'static str {
        match self {
            Format::Svg => "image/svg+xml",
            Format::Html => "text/html; charset=utf-8",
            Format::Ascii => "text/plain; charset=utf-8",
            Format::Png => "image/png",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct UnsupportedFormat(String);

impl Display for UnsupportedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported format: `{}`", self.0)
    }
}

impl FromStr for Format {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Format::Svg),
            "html" => Ok(Format::Html),
            "ascii" => Ok(Format::Ascii),
            "png" => Ok(Format::Png),
            _ => Err(UnsupportedFormat(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    NotImplemented,
}

impl Status {
    pub(crate) fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::NotImplemented => 501,
        }
    }

    pub(crate) fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::NotImplemented => "Not Implemented",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

#[derive(Debug)]
pub(crate) struct Response {
    pub(crate) status: Status,
    pub(crate) content_type: &'static str,
    pub(crate) body: String,
}

impl Response {
    fn document(format: Format, body: String) -> Response {
        Self {
            status: Status::Ok,
            content_type: format.content_type(),
            body,
        }
    }

    pub(crate) fn empty(status: Status) -> Response {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: String::new(),
        }
    }

    fn error(status: Status, error: &StyleBoxError) -> Response {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: error.to_string(),
        }
    }
}

/// A style box described by a request path.
#[derive(Debug, PartialEq)]
struct BoxRequest {
    format: Format,
    x: f64,
    y: f64,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
}

const UNIT: (f64, f64) = (0.0, 1.0);

enum Match {
    Found(BoxRequest),
    BadFormat(UnsupportedFormat),
    Missing,
}

/// Maps a request path onto a rendered style box.
///
/// Routes:
///
/// - `/<x>/<y>`
/// - `/<x>/<x_lo>/<x_hi>/<y>/<y_lo>/<y_hi>`
/// - `/<format>/<x>/<y>`
/// - `/<format>/<x>/<x_lo>/<x_hi>/<y>/<y_lo>/<y_hi>`
///
/// Routes without a format segment render SVG, the others select `svg`,
/// `html`, `ascii` or `png` regardless of case.
pub(crate) fn route(path: &str) -> Response {
    let path = match path.split_once('?') {
        Some((path, _query)) => path,
        None => path,
    };

    match parse(path) {
        Match::Found(request) => respond(&request),
        Match::BadFormat(error) => {
            debug!(path, %error, "request rejected");
            Response::empty(Status::BadRequest)
        }
        Match::Missing => Response::empty(Status::NotFound),
    }
}

fn parse(path: &str) -> Match {
    let Some(path) = path.strip_prefix('/') else {
        return Match::Missing;
    };

    let segments: Vec<&str> = path.split('/').collect();

    let (format, numbers) = match segments.as_slice() {
        [_, _] | [_, _, _, _, _, _] => (None, segments.as_slice()),
        [format, rest @ ..] if rest.len() == 2 || rest.len() == 6 => (Some(*format), rest),
        _ => return Match::Missing,
    };

    let Some(numbers) = numbers
        .iter()
        .map(|segment| parse_number(segment))
        .collect::<Option<Vec<f64>>>()
    else {
        return Match::Missing;
    };

    let format = match format.map(Format::from_str) {
        None => Format::Svg,
        Some(Ok(format)) => format,
        Some(Err(error)) => return Match::BadFormat(error),
    };

    let request = match *numbers.as_slice() {
        [x, y] => BoxRequest {
            format,
            x,
            y,
            x_domain: UNIT,
            y_domain: UNIT,
        },
        [x, x_lo, x_hi, y, y_lo, y_hi] => BoxRequest {
            format,
            x,
            y,
            x_domain: (x_lo, x_hi),
            y_domain: (y_lo, y_hi),
        },
        _ => return Match::Missing,
    };

    Match::Found(request)
}

fn respond(request: &BoxRequest) -> Response {
    match render(request) {
        Ok(body) => Response::document(request.format, body),
        Err(error @ StyleBoxError::NotImplemented(_)) => {
            Response::error(Status::NotImplemented, &error)
        }
        Err(error) => {
            debug!(?request, %error, "style box could not be rendered");
            Response::error(Status::BadRequest, &error)
        }
    }
}

fn render(request: &BoxRequest) -> stylebox::Result<String> {
    let x_domain = Interval::try_from(request.x_domain)?;
    let y_domain = Interval::try_from(request.y_domain)?;

    match request.format {
        Format::Svg => draw(
            SvgStyleBoxBuilder::new(x_domain, y_domain, SIZE, COLOR)?,
            request,
        ),
        Format::Html => draw(HtmlStyleBoxBuilder::new(x_domain, y_domain, SIZE)?, request),
        Format::Ascii => draw(
            TextStyleBoxBuilder::new(x_domain, y_domain, TEXT_SIZE)?,
            request,
        ),
        Format::Png => draw(PngStyleBoxBuilder::new(x_domain, y_domain)?, request),
    }
}

fn draw<B: StyleBoxBuilder>(mut builder: B, request: &BoxRequest) -> stylebox::Result<String> {
    builder.grid(GRID, GRID)?.point(request.x, request.y);
    builder.build()
}

static NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$").ok());

/// Parses a path segment matching `[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?`.
fn parse_number(segment: &str) -> Option<f64> {
    let number = NUMBER.as_ref()?;

    if !number.is_match(segment) {
        return None;
    }

    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_and_exponent_numbers() {
        assert_eq!(parse_number("0.5"), Some(0.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number("+3.25"), Some(3.25));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("-1.5E-1"), Some(-0.15));
    }

    #[test]
    fn rejects_malformed_numbers() {
        for segment in ["", "-", "5.", ".", "1e", "1e+", "inf", "NaN", "0x10", "1.2.3", " 1", "1_000"] {
            assert_eq!(parse_number(segment), None, "{segment:?}");
        }
    }

    #[test]
    fn formats_are_case_insensitive() {
        assert_eq!("SVG".parse::<Format>(), Ok(Format::Svg));
        assert_eq!("Html".parse::<Format>(), Ok(Format::Html));
        assert_eq!("ascii".parse::<Format>(), Ok(Format::Ascii));
        assert_eq!("PNG".parse::<Format>(), Ok(Format::Png));
        assert_eq!(
            "gif".parse::<Format>(),
            Err(UnsupportedFormat(String::from("gif")))
        );
    }

    #[test]
    fn unit_square_shorthand_renders_svg() {
        let response = route("/0.5/0.5");

        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "image/svg+xml");
        assert!(response.body.contains(r#"height="50" width="50""#));
        assert!(response.body.contains(r#"cx="150.000" cy="150.000""#));
        assert_eq!(response.body.matches("gridline-").count(), 4);
    }

    #[test]
    fn shorthand_matches_the_explicit_unit_domain() {
        assert_eq!(route("/0.25/0.75").body, route("/0.25/0/1/0.75/0/1").body);
        assert_eq!(route("/0.25/0.75").body, route("/svg/0.25/0.75").body);
    }

    #[test]
    fn explicit_domain_is_rescaled() {
        let response = route("/5/0/10/-1/-2/0");

        assert_eq!(response.status, Status::Ok);
        assert!(response.body.contains(r#"cx="150.000" cy="150.000""#));
    }

    #[test]
    fn ascii_route_uses_a_seven_cell_canvas() {
        let response = route("/ASCII/0.5/0/1/0.5/0/1");

        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "text/plain; charset=utf-8");
        assert_eq!(
            response.body,
            "┌─┬─┬─┐\n│ │ │ │\n├─┼─┼─┤\n│ │●│ │\n├─┼─┼─┤\n│ │ │ │\n└─┴─┴─┘"
        );
    }

    #[test]
    fn html_route_renders_the_marker() {
        let response = route("/html/0.5/0.25");

        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "text/html; charset=utf-8");
        assert!(response.body.contains("left: 50.000%; top: 25.000%;"));
    }

    #[test]
    fn unsupported_format_is_a_client_error_without_body() {
        let response = route("/gif/0.5/0.5");

        assert_eq!(response.status, Status::BadRequest);
        assert!(response.body.is_empty());
    }

    #[test]
    fn png_is_not_implemented() {
        let response = route("/png/0.5/0.5");

        assert_eq!(response.status, Status::NotImplemented);
    }

    #[test]
    fn malformed_paths_are_not_found() {
        for path in ["", "/", "0.5/0.5", "/0.5", "/0.5/abc", "/0.5/0.5/", "/1/2/3/4", "/svg/a/b"] {
            assert_eq!(route(path).status, Status::NotFound, "{path:?}");
        }
    }

    #[test]
    fn invalid_domains_are_client_errors() {
        let reversed = route("/0.5/1/0/0.5/0/1");
        assert_eq!(reversed.status, Status::BadRequest);
        assert!(reversed.body.contains("invalid domain"));

        let degenerate = route("/0.5/0/1/0.5/2/2");
        assert_eq!(degenerate.status, Status::BadRequest);
        assert!(degenerate.body.contains("y domain is too narrow"));
    }

    #[test]
    fn domains_without_a_finite_width_are_client_errors() {
        let response = route("/0/-1e308/1e308/0.5/0/1");
        assert_eq!(response.status, Status::BadRequest);
        assert!(response.body.contains("x domain has no finite width"));

        let response = route("/ascii/0/-1e308/1e308/0.5/0/1");
        assert_eq!(response.status, Status::BadRequest);
    }

    #[test]
    fn subnormal_domains_are_client_errors() {
        let response = route("/0/0/5e-324/0.5/0/1");

        assert_eq!(response.status, Status::BadRequest);
        assert!(response.body.contains("x domain is too narrow"));
    }

    #[test]
    fn out_of_range_points_are_dropped() {
        let response = route("/2/2");

        assert_eq!(response.status, Status::Ok);
        assert!(!response.body.contains("<circle"));
    }

    #[test]
    fn query_string_is_ignored() {
        assert_eq!(route("/0.5/0.5?color=red").body, route("/0.5/0.5").body);
    }
}
