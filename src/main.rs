use proctree::commands::{tree, Cli};
use proctree::config::{TreeConfig, BINARY_NAME};
use proctree::error::ProcTreeError;
use proctree::source::open_source;
use proctree::utils::logger::init_logger;
use proctree::utils::version::BuildInfo;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // 版本信息直接输出，不构建进程树
    if cli.version {
        return match BuildInfo::get().write_banner(&mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{BINARY_NAME}: {err}");
                ExitCode::FAILURE
            }
        };
    }

    if let Err(err) = init_logger(cli.log_level.as_deref()) {
        eprintln!("{BINARY_NAME}: invalid log level: {err}");
        return ExitCode::FAILURE;
    }

    match main_impl(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(category = err.category().display_name(), "run aborted");
            eprintln!("{BINARY_NAME}: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn main_impl(cli: &Cli) -> Result<(), ProcTreeError> {
    let config = TreeConfig::from_cli(cli)?;
    let mut source = open_source(&config);
    let mut out = BufWriter::new(io::stdout().lock());
    tree::run(&config, source.as_mut(), &mut out)
}
