use std::io;

fn main() -> anyhow::Result<()> {
    let code = parse_ocsp_request::run(std::env::args_os(), &mut io::stdout())?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
