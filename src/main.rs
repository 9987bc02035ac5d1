//! CLI entry point for the Wang tile grid generator

use clap::Parser;
use wangtiles::io::cli::{Cli, Session};

fn main() -> wangtiles::Result<()> {
    let cli = Cli::parse();
    let session = Session::new(cli);
    session.run()
}
