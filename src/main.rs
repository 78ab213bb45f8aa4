use anyhow::Result;
use is_terminal::IsTerminal;
use piecalc::args::Mode;
use piecalc::input::Scanner;
use piecalc::report::Reporter;
use piecalc::session::Session;
use std::io;

fn main() -> Result<()> {
    let args = piecalc::args::parsed();
    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    let sheet = args.color.sheet();

    let input = Scanner::new(io::stdin().lock());
    if io::stdout().is_terminal() {
        let out = Reporter::new(io::stdout().lock(), sheet, args.detail);
        run(args.mode, Session::new(input, out, args.separator))
    } else {
        let out = Reporter::new(io::BufWriter::new(io::stdout().lock()), sheet, args.detail);
        run(args.mode, Session::new(input, out, args.separator))
    }
}

fn run<R: io::BufRead, W: io::Write>(mode: Mode, mut session: Session<R, W>) -> Result<()> {
    match mode {
        Mode::Menu => session.run()?,
        Mode::Library => session.library_example()?,
    }
    session.into_reporter().into_inner().flush()?;
    Ok(())
}
