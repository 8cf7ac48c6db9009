use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{RenderLogic, SheetHeader};
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let sheet_header = SheetHeader {
        city: cli.city.clone(),
        child_name: cli.child_name.clone(),
        teacher_name: cli.teacher_name.clone(),
    };
    RenderLogic::run(cfg, &sheet_header)?;
    Ok(())
}
