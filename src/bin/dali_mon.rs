use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use log::{debug, error, info, warn};
use tokio::io::AsyncBufRead;
use tokio_stream::StreamExt;
use tracing_subscriber::filter::LevelFilter;

use dali::decode::Decoder;
use dali::error::DynResult;
use dali::monitor::printer::{PrintOptions, Printer};
use dali::monitor::session::MonitorSession;
use dali::monitor::source;
use dali_monitor as dali;

#[derive(Parser, Debug)]
#[command(version, about = "Print DALI bus traffic")]
struct CmdArgs {
    /// Serial port connected to the bus interface, stdin if not given
    #[arg(short = 'd', long)]
    device: Option<String>,
    #[arg(long, default_value_t = 19200)]
    baud: u32,
    /// Log parsing and decoding details
    #[arg(long)]
    debug: bool,
    /// Print each input line before it's decoded
    #[arg(long)]
    echo: bool,
    /// Prefix lines with local wall clock time
    #[arg(long)]
    absolute: bool,
    /// One JSON object per line
    #[arg(long)]
    json: bool,
    #[arg(long)]
    no_color: bool,
}

async fn monitor<R>(reader: R, args: &CmdArgs) -> DynResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let printer = Printer::new(PrintOptions {
        color: !(args.no_color || args.json),
        json: args.json,
    });
    let mut session = MonitorSession::new(Decoder::default());
    let lines = source::read_frames(reader);
    tokio::pin!(lines);
    while let Some(line) = lines.next().await {
        let line = line?;
        if args.echo {
            println!("{}", line.line);
        }
        let frame = match line.frame {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Ignoring line '{}': {}", line.line, e);
                continue;
            }
        };
        let entry = session.process(&frame);
        let local_time = args
            .absolute
            .then(|| Local::now().format("%H:%M:%S").to_string());
        println!("{}", printer.line(&entry, local_time.as_deref()));
    }
    debug!("End of input");
    Ok(())
}

#[cfg(feature = "serial")]
async fn run(args: &CmdArgs) -> DynResult<()> {
    match &args.device {
        Some(port) => {
            info!("Reading from {} at {} baud", port, args.baud);
            let reader = source::open_serial(port, args.baud)?;
            monitor(reader, args).await
        }
        None => monitor(source::stdin(), args).await,
    }
}

#[cfg(not(feature = "serial"))]
async fn run(args: &CmdArgs) -> DynResult<()> {
    if let Some(port) = &args.device {
        return Err(format!("Can't open {}, built without serial port support", port).into());
    }
    monitor(source::stdin(), args).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CmdArgs::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args).await {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
