pub(crate) mod error;
mod http;

use std::io::BufReader;
use std::io::BufWriter;
use std::net::SocketAddr;
use std::net::TcpListener;
use std::net::TcpStream;
use std::net::ToSocketAddrs;
use std::time::Duration;

use tracing::info;
use tracing::warn;

use crate::cli::ServeArgs;
use crate::route::Response;
use crate::route::Status;
use crate::route::route;
use crate::serve::error::Result;
use crate::serve::error::ServeError;

pub(crate) fn serve(args: ServeArgs) -> Result<()> {
    let timeout = Duration::from_secs(args.timeout);
    let server = Server::bind((args.host, args.port), timeout)?;

    println!(
        "stylebox serves style boxes on: `http://{}`",
        server.local_addr()?
    );

    server.run()
}

/// A blocking HTTP server answering one request per connection.
///
/// Connections are served one at a time, so reads and writes on each of
/// them give up after `timeout`.
pub(crate) struct Server {
    listener: TcpListener,
    timeout: Duration,
}

impl Server {
    pub(crate) fn bind<A: ToSocketAddrs>(addr: A, timeout: Duration) -> Result<Server> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self { listener, timeout })
    }

    pub(crate) fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub(crate) fn run(&self) -> ! {
        loop {
            if let Err(error) = self.accept() {
                warn!(%error, "connection failed");
            }
        }
    }

    /// Accepts and answers a single connection.
    pub(crate) fn accept(&self) -> Result<()> {
        let (stream, peer) = self.listener.accept()?;
        stream.set_read_timeout(Some(self.timeout))?;
        stream.set_write_timeout(Some(self.timeout))?;

        handle(&stream, peer)
    }
}

fn handle(stream: &TcpStream, peer: SocketAddr) -> Result<()> {
    let mut reader = BufReader::new(stream);

    let (method, target, response) = match http::read_request(&mut reader) {
        Ok(request) => {
            let response = if request.method == "GET" {
                route(&request.target)
            } else {
                Response::empty(Status::MethodNotAllowed)
            };
            (request.method, request.target, response)
        }
        Err(ServeError::MalformedRequest(line)) => {
            (String::new(), line, Response::empty(Status::BadRequest))
        }
        Err(error) => return Err(error),
    };

    info!(
        %peer,
        method = %method,
        path = %target,
        status = response.status.code(),
        "request served"
    );

    let mut writer = BufWriter::new(stream);
    http::write_response(&mut writer, &response)
}
