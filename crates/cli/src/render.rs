use crate::cli::RenderArgs;
use crate::error::CliError;
use crate::route::Status;
use crate::route::route;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let body = render_path(&args.path)?;
    println!("{body}");

    Ok(())
}

fn render_path(path: &str) -> Result<String, CliError> {
    let path = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };

    let response = route(&path);

    match response.status {
        Status::Ok => Ok(response.body),
        status => Err(CliError::Render {
            status,
            message: response.body,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_slash_is_optional() -> Result<(), CliError> {
        assert_eq!(render_path("ascii/0.5/0.5")?, render_path("/ascii/0.5/0.5")?);
        Ok(())
    }

    #[test]
    fn failed_routes_carry_the_status() {
        match render_path("/gif/0.5/0.5") {
            Err(CliError::Render { status, message }) => {
                assert_eq!(status, Status::BadRequest);
                assert!(message.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }

        match render_path("/0.5/0/1/0.5/3/3") {
            Err(error @ CliError::Render { .. }) => {
                assert_eq!(
                    error.to_string(),
                    "CLI error: 400 Bad Request: stylebox error: the y domain is too narrow to be rescaled"
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
