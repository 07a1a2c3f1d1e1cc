use std::env;
use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm};

use payslip_core::cli::{forms, output, summary};
use payslip_core::errors::PayslipError;
use payslip_core::export;
use payslip_core::payslip::Payslip;

const USAGE: &str = "\
payslip_cli - generate payslips from the terminal

USAGE:
    payslip_cli [form]                    interactive form, summary, optional PDF export
    payslip_cli render <payslip.json>     print the summary for a saved payslip
    payslip_cli export <payslip.json> [out_dir]
                                          write the payslip PDF (defaults to the current directory)
";

fn main() {
    payslip_core::init();
    if let Err(err) = run() {
        output::error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PayslipError> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("form") => run_interactive(),
        Some("render") => {
            let payslip = load(args.get(1))?;
            summary::print_summary(&payslip);
            Ok(())
        }
        Some("export") => {
            let payslip = load(args.get(1))?;
            let out_dir = match args.get(2) {
                Some(dir) => PathBuf::from(dir),
                None => env::current_dir()?,
            };
            let path = export::export_pdf(&payslip, &out_dir)?;
            output::success(format!("Wrote {}", path.display()));
            Ok(())
        }
        Some("help") | Some("--help") | Some("-h") => {
            print!("{USAGE}");
            Ok(())
        }
        Some(other) => Err(PayslipError::InvalidInput(format!(
            "unknown command \"{other}\"; try payslip_cli help"
        ))),
    }
}

fn load(arg: Option<&String>) -> Result<Payslip, PayslipError> {
    let path = arg.ok_or_else(|| {
        PayslipError::InvalidInput("expected a path to a payslip JSON file".to_string())
    })?;
    Payslip::from_file(path)
}

fn run_interactive() -> Result<(), PayslipError> {
    let payslip = forms::run_form()?;
    summary::print_summary(&payslip);

    let theme = ColorfulTheme::default();
    let export_now = Confirm::with_theme(&theme)
        .with_prompt("Download as PDF?")
        .default(true)
        .interact()?;
    if export_now {
        let path = export::export_pdf(&payslip, &env::current_dir()?)?;
        output::success(format!("Wrote {}", path.display()));
    }
    Ok(())
}
