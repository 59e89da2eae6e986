//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Converts SGR styled command output into HTML.
//!
//! ## Usage
//!
//! ```bash
//! ls --color=always | ansimark > listing.html
//! ansimark --stream build.log
//! ansimark --plain --trim output.txt
//! ```

use ansimark_markup::consts::{DEFAULT_LINE_BREAK, DEFAULT_TAB_WIDTH};
use ansimark_markup::{
    HtmlRenderer, MarkupCodec, MarkupError, MarkupResult, OutputDecoder, RenderConfig, strip_sgr,
};
use clap::{ArgAction, Parser};
use futures::StreamExt;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{Decoder, FramedRead};
use tracing::{Level, debug, info};

#[derive(Debug, Parser)]
#[command(name = "ansimark", version, about = "Render SGR styled terminal output as HTML")]
struct Args {
    /// Input file; standard input when omitted
    file: Option<PathBuf>,

    /// Render line by line as input arrives instead of all at once
    #[arg(long)]
    stream: bool,

    /// Write the text with SGR sequences removed instead of HTML
    #[arg(long)]
    plain: bool,

    /// Spaces per tab
    #[arg(long, default_value_t = DEFAULT_TAB_WIDTH)]
    tab_width: usize,

    /// Markup written for each line break
    #[arg(long, default_value = DEFAULT_LINE_BREAK)]
    line_break: String,

    /// Drop trailing line endings before rendering
    #[arg(long)]
    trim: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_tab_width(self.tab_width)
            .with_line_break(self.line_break.clone())
            .with_trim_trailing_newlines(self.trim)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = args.render_config();
    config.validate()?;

    let mut stdout = tokio::io::stdout();
    match &args.file {
        Some(path) => {
            info!(path = %path.display(), "converting file");
            let file = tokio::fs::File::open(path).await?;
            run(file, &mut stdout, &args, config).await?;
        }
        None => {
            info!("converting standard input");
            run(tokio::io::stdin(), &mut stdout, &args, config).await?;
        }
    }
    stdout.flush().await?;

    Ok(())
}

async fn run<R, W>(
    mut reader: R,
    writer: &mut W,
    args: &Args,
    config: RenderConfig,
) -> MarkupResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if args.stream {
        return if args.plain {
            let trim = config.trim_trailing_newlines;
            write_frames(reader, OutputDecoder::default(), writer, |text| {
                plain_text(&text, trim)
            })
            .await
        } else {
            write_frames(reader, MarkupCodec::new(config), writer, |html| html).await
        };
    }

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    let text = String::from_utf8_lossy(&bytes);
    debug!(bytes = bytes.len(), "read complete input");

    let output = if args.plain {
        plain_text(&text, config.trim_trailing_newlines)
    } else {
        HtmlRenderer::new(config).render(&text)
    };
    writer.write_all(output.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}

async fn write_frames<R, D, W, F>(
    reader: R,
    decoder: D,
    writer: &mut W,
    map: F,
) -> MarkupResult<()>
where
    R: AsyncRead + Unpin,
    D: Decoder<Item = String, Error = MarkupError>,
    W: AsyncWrite + Unpin,
    F: Fn(String) -> String,
{
    let mut frames = FramedRead::new(reader, decoder);
    let mut count = 0usize;
    while let Some(frame) = frames.next().await {
        let output = map(frame?);
        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        count += 1;
    }
    debug!(frames = count, "stream finished");
    Ok(())
}

fn plain_text(text: &str, trim: bool) -> String {
    let text = if trim {
        text.trim_end_matches(['\r', '\n'])
    } else {
        text
    };
    strip_sgr(text).into_owned()
}
